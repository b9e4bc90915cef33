use core::any::Any;

use crate::info::Type;
use crate::{Tagged, Value};

// -----------------------------------------------------------------------------
// FieldValue

/// Conversion between a concrete field type and [`Value`].
///
/// Every field of a `#[derive(Tagged)]` structure must implement this
/// trait. It's implemented for the primitives listed in [`Type`],
/// `String`, `Vec<u8>`, `Option<T>`, `Box<T>` and for every derived
/// structure.
///
/// [`Default`] is the zero value a pointer field is materialized with.
///
/// # Examples
///
/// ```
/// use tg_reflect::{FieldValue, Value, info::Type};
///
/// let value = Some(String::from("foo")).into_value();
/// assert_eq!(value.ty(), <Option<String> as FieldValue>::TYPE);
///
/// assert_eq!(<Option<String>>::from_value(value), Ok(Some(String::from("foo"))));
/// assert_eq!(u8::from_value(Value::U16(1)), Err(Value::U16(1)));
/// ```
pub trait FieldValue: Default + Any {
    /// The declared type.
    const TYPE: Type;

    /// Converts a copy of `self` into a [`Value`].
    fn to_value(&self) -> Value;

    /// Converts `self` into a [`Value`].
    #[inline]
    fn into_value(self) -> Value {
        self.to_value()
    }

    /// Converts a [`Value`] back, handing it back if the types differ.
    fn from_value(value: Value) -> Result<Self, Value>;

    /// Returns the nested structure, if `Self` holds one.
    #[inline]
    fn as_tagged(&self) -> Option<&dyn Tagged> {
        None
    }

    /// Mutable version of [`FieldValue::as_tagged`].
    #[inline]
    fn as_tagged_mut(&mut self) -> Option<&mut dyn Tagged> {
        None
    }

    /// Returns the structure reached by following every pointer.
    ///
    /// Unlike [`FieldValue::as_tagged`] this also sees through
    /// `Option<Option<T>>` chains. `None` if a pointer on the way is null.
    #[inline]
    fn resolve_tagged(&self) -> Option<&dyn Tagged> {
        self.as_tagged()
    }

    /// Mutable version of [`FieldValue::resolve_tagged`].
    #[inline]
    fn resolve_tagged_mut(&mut self) -> Option<&mut dyn Tagged> {
        self.as_tagged_mut()
    }

    /// Replaces a pointer to a structure with a fresh default instance.
    ///
    /// Returns `false` for every other type.
    #[inline]
    fn materialize(&mut self) -> bool {
        false
    }
}
