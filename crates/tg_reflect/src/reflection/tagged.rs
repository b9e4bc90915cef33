use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::Value;
use crate::info::Schema;

// -----------------------------------------------------------------------------
// Tagged

/// Field access for a tagged structure through its [`Schema`].
///
/// This is the object-safe capability every traversal works with:
/// fields are addressed by their declaration index and read or written
/// as [`Value`]s. It's implemented by `#[derive(Tagged)]`, which also
/// implements [`Typed`](crate::Typed) and [`FieldValue`](crate::FieldValue).
///
/// Indices outside of the schema are ignored: getters return `None`,
/// setters hand the value back.
///
/// # Examples
///
/// ```
/// use tg_reflect::{Tagged, Value};
///
/// #[derive(Clone, Default, Tagged)]
/// struct Profile {
///     email: Option<String>,
/// }
///
/// #[derive(Clone, Default, Tagged)]
/// struct User {
///     id: u64,
///     profile: Option<Box<Profile>>,
/// }
///
/// let mut user = User::default();
/// let user: &mut dyn Tagged = &mut user;
///
/// assert_eq!(user.reflect_get(0), Some(Value::U64(0)));
/// assert!(user.reflect_set(0, Value::from_field(5_u64)).is_ok());
/// assert!(user.reflect_set(0, Value::from_field(5_u32)).is_err());
///
/// assert!(user.reflect_nested(1).is_none());
/// assert!(user.reflect_materialize(1));
/// let profile = user.reflect_nested_mut(1).unwrap();
/// profile.reflect_set(0, Value::from_field(Some(String::from("a@b.c")))).unwrap();
///
/// let user = user.downcast_ref::<User>().unwrap();
/// assert_eq!(user.profile.as_ref().unwrap().email.as_deref(), Some("a@b.c"));
/// ```
pub trait Tagged: Any {
    /// Returns the [`Schema`] of the underlying type.
    fn reflect_schema(&self) -> &'static Schema;

    /// Returns the current value of the field at `index`.
    fn reflect_get(&self, index: usize) -> Option<Value>;

    /// Replaces the field at `index`.
    ///
    /// The value is handed back if its type is not exactly the declared
    /// type of the field.
    fn reflect_set(&mut self, index: usize, value: Value) -> Result<(), Value>;

    /// Returns the nested structure held by the field at `index`.
    ///
    /// `None` for non-structure fields and for null pointers.
    fn reflect_nested(&self, index: usize) -> Option<&dyn Tagged>;

    /// Mutable version of [`Tagged::reflect_nested`].
    fn reflect_nested_mut(&mut self, index: usize) -> Option<&mut dyn Tagged>;

    /// Attaches a fresh default instance to a pointer-to-structure field.
    ///
    /// Returns `false` and does nothing for any other field.
    fn reflect_materialize(&mut self, index: usize) -> bool;

    /// Clones the structure into a new box.
    fn reflect_clone(&self) -> Box<dyn Tagged>;

    /// Casts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Casts to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Casts to `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Tagged + '_ {
    /// Returns `true` if the underlying type is `T`.
    #[inline]
    pub fn is<T: Tagged>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts to the concrete type.
    #[inline]
    pub fn downcast_ref<T: Tagged>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts to the concrete type.
    #[inline]
    pub fn downcast_mut<T: Tagged>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Returns `true` if both structures have the same type and
    /// all fields compare equal.
    pub fn reflect_eq(&self, other: &dyn Tagged) -> bool {
        let schema = self.reflect_schema();
        if schema.path() != other.reflect_schema().path() {
            return false;
        }
        schema
            .fields()
            .iter()
            .all(|field| self.reflect_get(field.index()) == other.reflect_get(field.index()))
    }
}

impl dyn Tagged {
    /// Downcasts the box to the concrete type, handing it back on failure.
    pub fn downcast<T: Tagged>(self: Box<Self>) -> Result<Box<T>, Box<dyn Tagged>> {
        if self.is::<T>() {
            match self.into_any().downcast::<T>() {
                Ok(value) => Ok(value),
                Err(_) => unreachable!("type id checked above"),
            }
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for dyn Tagged + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schema = self.reflect_schema();
        let mut debug = f.debug_struct(schema.name());
        for field in schema.fields() {
            match self.reflect_get(field.index()) {
                Some(value) => debug.field(field.name(), &value),
                None => debug.field(field.name(), &format_args!("<missing>")),
            };
        }
        debug.finish()
    }
}
