use alloc::boxed::Box;

use crate::info::Type;
use crate::{FieldValue, Tagged, Value};

impl<T: FieldValue> FieldValue for Box<T> {
    const TYPE: Type = T::TYPE;

    #[inline]
    fn to_value(&self) -> Value {
        T::to_value(self)
    }

    #[inline]
    fn into_value(self) -> Value {
        T::into_value(*self)
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        T::from_value(value).map(Box::new)
    }

    #[inline]
    fn as_tagged(&self) -> Option<&dyn Tagged> {
        T::as_tagged(self)
    }

    #[inline]
    fn as_tagged_mut(&mut self) -> Option<&mut dyn Tagged> {
        T::as_tagged_mut(self)
    }

    #[inline]
    fn resolve_tagged(&self) -> Option<&dyn Tagged> {
        T::resolve_tagged(self)
    }

    #[inline]
    fn resolve_tagged_mut(&mut self) -> Option<&mut dyn Tagged> {
        T::resolve_tagged_mut(self)
    }

    #[inline]
    fn materialize(&mut self) -> bool {
        T::materialize(self)
    }
}
