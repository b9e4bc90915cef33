//! Static descriptions of tagged structures.
//!
//! - [`Type`]: the declared type of a field.
//! - [`Annotation`]: the raw annotation attached to a field.
//! - [`FieldInfo`]: one field of a structure.
//! - [`Schema`]: the ordered field table of a structure.
//! - [`Typed`]: static access to a type's [`Schema`].

// -----------------------------------------------------------------------------
// Modules

mod annotation;
mod field_info;
mod schema;
mod ty;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use annotation::Annotation;
pub use field_info::FieldInfo;
pub use schema::Schema;
pub use ty::Type;
pub use typed::Typed;
