use alloc::string::String;
use alloc::vec::Vec;

use crate::info::Type;
use crate::{FieldValue, Value};

macro_rules! impl_native_field_value {
    ($($ty:ty => $kind:ident,)*) => {$(
        impl FieldValue for $ty {
            const TYPE: Type = Type::$kind;

            #[inline]
            fn to_value(&self) -> Value {
                Value::$kind(Clone::clone(self))
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            #[inline]
            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$kind(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    )*};
}

impl_native_field_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
}

#[cfg(test)]
mod tests {
    use crate::info::Type;
    use crate::{FieldValue, Value};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn exact_types() {
        assert_eq!(<i16 as FieldValue>::TYPE, Type::I16);
        assert_eq!(<Vec<u8> as FieldValue>::TYPE, Type::Bytes);
        assert_eq!(7_u32.to_value(), Value::U32(7));
        assert_eq!(String::from_value(Value::String("a".into())), Ok(String::from("a")));
        assert_eq!(u32::from_value(Value::U64(7)), Err(Value::U64(7)));
        assert_eq!(vec![1_u8].into_value().ty(), Type::Bytes);
    }

    #[test]
    fn natives_hold_no_structure() {
        let mut value = 3_u8;
        assert!(value.as_tagged().is_none());
        assert!(!value.materialize());
        assert_eq!(value, 3);
    }
}
