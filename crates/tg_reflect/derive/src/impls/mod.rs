//! Code generation for `#[derive(Tagged)]`.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_field_value;
mod trait_tagged;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TaggedStruct;

/// `::core::concat!(::core::module_path!(), "::", "Name")`
pub(crate) fn type_path_expr(tagged: &TaggedStruct) -> TokenStream {
    let name = tagged.type_name();
    quote! {
        ::core::concat!(::core::module_path!(), "::", #name)
    }
}

pub(crate) fn impl_tagged_struct(tagged: &TaggedStruct) -> TokenStream {
    let typed_impl = trait_typed::impl_trait_typed(tagged);
    let tagged_impl = trait_tagged::impl_trait_tagged(tagged);
    let field_value_impl = trait_field_value::impl_trait_field_value(tagged);
    let auto_register_impl = auto_register::get_auto_register_impl(tagged);

    quote! {
        #typed_impl

        #tagged_impl

        #field_value_impl

        #auto_register_impl
    }
}
