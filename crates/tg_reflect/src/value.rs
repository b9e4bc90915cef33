use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::info::Type;
use crate::{FieldValue, Tagged};

// -----------------------------------------------------------------------------
// Value

/// A field value crossing the generic traversal boundary.
///
/// There is one variant per [`Type`] variant, so [`Value::ty`] is always
/// exact: a `u32` field only accepts [`Value::U32`].
///
/// Handlers usually build values with [`Value::from_field`] and read
/// them with the `as_*` helpers.
///
/// # Examples
///
/// ```
/// use tg_reflect::{Value, info::Type};
///
/// let value = Value::from_field(Some(String::from("foo")));
/// assert_eq!(value.ty(), Type::Ptr(&Type::String));
/// assert_eq!(value.pointee().and_then(Value::as_str), Some("foo"));
///
/// assert_eq!(Value::U8(3).as_u64(), Some(3));
/// assert_eq!(Value::I8(-3).as_u64(), None);
/// ```
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    /// A pointer of the given pointer type, `None` is the null pointer.
    Ptr(Type, Option<Box<Value>>),
    /// A tagged structure.
    Struct(Box<dyn Tagged>),
}

impl Value {
    /// Converts a concrete field value, see [`FieldValue::into_value`].
    #[inline]
    pub fn from_field<T: FieldValue>(value: T) -> Self {
        value.into_value()
    }

    /// Converts back to a concrete field type, see [`FieldValue::from_value`].
    #[inline]
    pub fn take<T: FieldValue>(self) -> Result<T, Self> {
        T::from_value(self)
    }

    /// Returns the dynamic type of the value.
    pub fn ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::Char(_) => Type::Char,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::I128(_) => Type::I128,
            Self::Isize(_) => Type::Isize,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::U128(_) => Type::U128,
            Self::Usize(_) => Type::Usize,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Ptr(ty, _) => *ty,
            Self::Struct(value) => Type::Struct(value.reflect_schema().path()),
        }
    }

    /// Returns `true` for the null pointer.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Ptr(_, None))
    }

    /// Returns the pointed-to value of a non-null pointer.
    #[inline]
    pub fn pointee(&self) -> Option<&Value> {
        match self {
            Self::Ptr(_, Some(inner)) => Some(inner),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Returns any integer that fits into `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::I128(v) => v.try_into().ok(),
            Self::Isize(v) => v.try_into().ok(),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => v.try_into().ok(),
            Self::U128(v) => v.try_into().ok(),
            Self::Usize(v) => v.try_into().ok(),
            _ => None,
        }
    }

    /// Returns any integer that fits into `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::I8(v) => v.try_into().ok(),
            Self::I16(v) => v.try_into().ok(),
            Self::I32(v) => v.try_into().ok(),
            Self::I64(v) => v.try_into().ok(),
            Self::I128(v) => v.try_into().ok(),
            Self::Isize(v) => v.try_into().ok(),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v),
            Self::U128(v) => v.try_into().ok(),
            Self::Usize(v) => v.try_into().ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the nested structure.
    #[inline]
    pub fn as_tagged(&self) -> Option<&dyn Tagged> {
        match self {
            Self::Struct(v) => Some(&**v),
            _ => None,
        }
    }

    /// Downcasts a structure value to its concrete type.
    #[inline]
    pub fn downcast_struct<T: Tagged>(&self) -> Option<&T> {
        self.as_tagged()?.downcast_ref::<T>()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Self::Bool(v) => Self::Bool(*v),
            Self::Char(v) => Self::Char(*v),
            Self::I8(v) => Self::I8(*v),
            Self::I16(v) => Self::I16(*v),
            Self::I32(v) => Self::I32(*v),
            Self::I64(v) => Self::I64(*v),
            Self::I128(v) => Self::I128(*v),
            Self::Isize(v) => Self::Isize(*v),
            Self::U8(v) => Self::U8(*v),
            Self::U16(v) => Self::U16(*v),
            Self::U32(v) => Self::U32(*v),
            Self::U64(v) => Self::U64(*v),
            Self::U128(v) => Self::U128(*v),
            Self::Usize(v) => Self::Usize(*v),
            Self::F32(v) => Self::F32(*v),
            Self::F64(v) => Self::F64(*v),
            Self::String(v) => Self::String(v.clone()),
            Self::Bytes(v) => Self::Bytes(v.clone()),
            Self::Ptr(ty, v) => Self::Ptr(*ty, v.clone()),
            Self::Struct(v) => Self::Struct(v.reflect_clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::I128(a), Self::I128(b)) => a == b,
            (Self::Isize(a), Self::Isize(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::U128(a), Self::U128(b)) => a == b,
            (Self::Usize(a), Self::Usize(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Ptr(ta, a), Self::Ptr(tb, b)) => ta == tb && a == b,
            (Self::Struct(a), Self::Struct(b)) => a.reflect_eq(&**b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Debug::fmt(v, f),
            Self::Char(v) => fmt::Debug::fmt(v, f),
            Self::I8(v) => fmt::Debug::fmt(v, f),
            Self::I16(v) => fmt::Debug::fmt(v, f),
            Self::I32(v) => fmt::Debug::fmt(v, f),
            Self::I64(v) => fmt::Debug::fmt(v, f),
            Self::I128(v) => fmt::Debug::fmt(v, f),
            Self::Isize(v) => fmt::Debug::fmt(v, f),
            Self::U8(v) => fmt::Debug::fmt(v, f),
            Self::U16(v) => fmt::Debug::fmt(v, f),
            Self::U32(v) => fmt::Debug::fmt(v, f),
            Self::U64(v) => fmt::Debug::fmt(v, f),
            Self::U128(v) => fmt::Debug::fmt(v, f),
            Self::Usize(v) => fmt::Debug::fmt(v, f),
            Self::F32(v) => fmt::Debug::fmt(v, f),
            Self::F64(v) => fmt::Debug::fmt(v, f),
            Self::String(v) => fmt::Debug::fmt(v, f),
            Self::Bytes(v) => fmt::Debug::fmt(v, f),
            Self::Ptr(_, None) => f.write_str("null"),
            Self::Ptr(_, Some(v)) => write!(f, "&{v:?}"),
            Self::Struct(v) => fmt::Debug::fmt(&**v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::info::Type;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn integer_widening() {
        assert_eq!(Value::I32(-4).as_i64(), Some(-4));
        assert_eq!(Value::U64(u64::MAX).as_i64(), None);
        assert_eq!(Value::U128(9).as_u64(), Some(9));
        assert_eq!(Value::String(String::new()).as_i64(), None);
        assert_eq!(Value::F32(0.5).as_f64(), Some(0.5));
    }

    #[test]
    fn pointer_values() {
        let null = Value::from_field(None::<u8>);
        assert!(null.is_null());
        assert_eq!(null.ty(), Type::Ptr(&Type::U8));
        assert_eq!(null.pointee(), None);

        let some = Value::from_field(Some(vec![1_u8, 2]));
        assert!(!some.is_null());
        assert_eq!(some.pointee().and_then(Value::as_bytes), Some(&[1_u8, 2][..]));
        assert_ne!(some, null);
    }

    #[test]
    fn equality_is_type_exact() {
        assert_ne!(Value::U8(1), Value::U16(1));
        assert_eq!(Value::Bytes(vec![1]).clone(), Value::Bytes(vec![1]));
        assert_ne!(Value::from_field(None::<u8>), Value::from_field(None::<i8>));
    }
}
