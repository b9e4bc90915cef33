use crate::info::Schema;

/// Static access to the [`Schema`] of a tagged structure.
///
/// Implemented by `#[derive(Tagged)]`, the schema lives in a `static`
/// so repeated calls return the same reference.
pub trait Typed: 'static {
    /// Returns the field-metadata table of `Self`.
    fn schema() -> &'static Schema;
}
