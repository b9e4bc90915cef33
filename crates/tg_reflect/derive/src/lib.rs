//! See following macros:
//!
//! - [`Tagged`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static TAG_ATTRIBUTE_NAME: &str = "tag";
static TAGGED_ATTRIBUTE_NAME: &str = "tagged";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Tagged Structure Derivation
///
/// `#[derive(Tagged)]` implements the following traits:
///
/// - `Typed`: the static field-metadata table (`Schema`).
/// - `Tagged`: index based field access through `Value`.
/// - `FieldValue`: so the structure can be nested in other tagged structures.
///
/// The structure must have named fields (unit and empty structures have
/// no fields) and must implement `Clone` and `Default`.
/// Generic types, tuple structures, enums and unions are rejected.
///
/// Every field type must implement `FieldValue`.
///
/// ## Field Annotations
///
/// A field is annotated with one or more `#[tag(...)]` attributes, each
/// entry being `name = "text"` or a bare `name` (empty text):
///
/// ```rust, ignore
/// #[derive(Clone, Default, Tagged)]
/// struct User {
///     #[tag(my_json = "username", my_logger = "key:name")]
///     name: String,
///     #[tag(marker)]
///     flag: bool,
///     id: u64,
/// }
/// ```
///
/// The text is kept verbatim. A field without `#[tag]` has an empty
/// annotation, it can be handled through an empty-field tag.
/// The same name may not appear twice on one field.
///
/// ## Auto Register
///
/// With the `auto_register` feature, `#[tagged(auto_register)]` submits the
/// schema to `SchemaRegistry::with_auto_registered`.
///
/// ```rust, ignore
/// #[derive(Clone, Default, Tagged)]
/// #[tagged(auto_register)]
/// struct Foo { /* ... */ }
/// ```
#[proc_macro_derive(Tagged, attributes(tag, tagged))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::TaggedStruct::from_ast(&ast) {
        Ok(tagged) => impls::impl_tagged_struct(&tagged).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
