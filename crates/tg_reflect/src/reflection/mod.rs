// -----------------------------------------------------------------------------
// Modules

mod field_value;
mod tagged;

// -----------------------------------------------------------------------------
// Exports

pub use field_value::FieldValue;
pub use tagged::Tagged;
