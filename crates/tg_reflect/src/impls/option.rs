use alloc::boxed::Box;

use crate::info::Type;
use crate::{FieldValue, Tagged, Value};

/// `Option<T>` is a pointer to `T`.
///
/// Only a pointer to a structure is dereferenced for nested access;
/// `Option<Option<Profile>>` is treated as an opaque value.
impl<T: FieldValue> FieldValue for Option<T> {
    const TYPE: Type = Type::Ptr(&T::TYPE);

    fn to_value(&self) -> Value {
        Value::Ptr(Self::TYPE, self.as_ref().map(|v| Box::new(v.to_value())))
    }

    fn into_value(self) -> Value {
        Value::Ptr(Self::TYPE, self.map(|v| Box::new(v.into_value())))
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Ptr(ty, None) if ty == Self::TYPE => Ok(None),
            Value::Ptr(ty, Some(inner)) if ty == Self::TYPE => match T::from_value(*inner) {
                Ok(v) => Ok(Some(v)),
                Err(inner) => Err(Value::Ptr(ty, Some(Box::new(inner)))),
            },
            other => Err(other),
        }
    }

    #[inline]
    fn as_tagged(&self) -> Option<&dyn Tagged> {
        match self {
            Some(v) if matches!(T::TYPE, Type::Struct(_)) => v.as_tagged(),
            _ => None,
        }
    }

    #[inline]
    fn as_tagged_mut(&mut self) -> Option<&mut dyn Tagged> {
        match self {
            Some(v) if matches!(T::TYPE, Type::Struct(_)) => v.as_tagged_mut(),
            _ => None,
        }
    }

    #[inline]
    fn resolve_tagged(&self) -> Option<&dyn Tagged> {
        self.as_ref()?.resolve_tagged()
    }

    #[inline]
    fn resolve_tagged_mut(&mut self) -> Option<&mut dyn Tagged> {
        self.as_mut()?.resolve_tagged_mut()
    }

    /// Always attaches a fresh instance, the previous one is dropped.
    fn materialize(&mut self) -> bool {
        if matches!(T::TYPE, Type::Struct(_)) {
            *self = Some(T::default());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::info::Type;
    use crate::{FieldValue, Value};
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn pointer_type() {
        assert_eq!(<Option<u8> as FieldValue>::TYPE, Type::Ptr(&Type::U8));
        assert_eq!(<Option<Box<u8>> as FieldValue>::TYPE, Type::Ptr(&Type::U8));
        assert_eq!(
            <Option<Option<String>> as FieldValue>::TYPE,
            Type::Ptr(&Type::Ptr(&Type::String))
        );
    }

    #[test]
    fn pointer_values() {
        let value = Some(Box::new(5_u8)).into_value();
        assert_eq!(value, Value::Ptr(Type::Ptr(&Type::U8), Some(Box::new(Value::U8(5)))));
        assert_eq!(<Option<u8>>::from_value(value.clone()), Ok(Some(5)));
        assert_eq!(<Option<Box<u8>>>::from_value(value), Ok(Some(Box::new(5))));

        let wrong = Value::Ptr(Type::Ptr(&Type::U8), Some(Box::new(Value::U8(5))));
        assert_eq!(<Option<i8>>::from_value(wrong.clone()), Err(wrong));
    }

    #[test]
    fn resolve_through_chains() {
        let mut value: Option<Option<u8>> = Some(Some(1));
        assert!(value.resolve_tagged().is_none());
        assert!(value.resolve_tagged_mut().is_none());
    }

    #[test]
    fn non_struct_pointers_stay_null() {
        let mut value: Option<String> = None;
        assert!(!value.materialize());
        assert!(value.is_none());
    }
}
