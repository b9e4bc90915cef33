use core::fmt;

// -----------------------------------------------------------------------------
// Type

/// The declared type of a tagged field.
///
/// This is a closed set: every field of a `#[derive(Tagged)]` structure
/// must have one of these shapes.
///
/// - `Option<T>` is a pointer to `T`, `None` is the null pointer.
/// - `Box<T>` is transparent, `Option<Box<T>>` has the same type as `Option<T>`.
/// - `Vec<u8>` is [`Type::Bytes`].
/// - Other structures deriving `Tagged` are [`Type::Struct`], identified by
///   their full type path.
///
/// # Examples
///
/// ```
/// use tg_reflect::{FieldValue, info::Type};
///
/// assert_eq!(<Option<String> as FieldValue>::TYPE, Type::Ptr(&Type::String));
/// assert_eq!(<Option<Box<u8>> as FieldValue>::TYPE.to_string(), "Option<u8>");
/// assert!(<Option<String> as FieldValue>::TYPE.is_pointer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
    Bytes,
    /// A pointer to the contained type.
    Ptr(&'static Type),
    /// A tagged structure, identified by its type path.
    Struct(&'static str),
}

impl Type {
    /// Returns `true` if the declared type is a pointer.
    #[inline]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    /// Returns the pointed-to type, `None` if this is not a pointer.
    #[inline]
    pub const fn pointee(&self) -> Option<&'static Type> {
        match self {
            Self::Ptr(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Returns `true` if the type is a structure after following
    /// at most one pointer indirection.
    ///
    /// `Option<Profile>` is a structure, `Option<Option<Profile>>` is not.
    #[inline]
    pub const fn is_struct(&self) -> bool {
        match self {
            Self::Struct(_) => true,
            Self::Ptr(inner) => matches!(inner, Self::Struct(_)),
            _ => false,
        }
    }

    /// Returns `true` if the type is a structure after following
    /// every pointer indirection.
    pub const fn resolves_to_struct(&self) -> bool {
        let mut ty = self;
        loop {
            match ty {
                Self::Struct(_) => return true,
                Self::Ptr(inner) => ty = *inner,
                _ => return false,
            }
        }
    }

    /// Returns the type path of the structure this type resolves to.
    pub const fn struct_path(&self) -> Option<&'static str> {
        let mut ty = *self;
        loop {
            match ty {
                Self::Struct(path) => return Some(path),
                Self::Ptr(inner) => ty = *inner,
                _ => return None,
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::Char => f.pad("char"),
            Self::I8 => f.pad("i8"),
            Self::I16 => f.pad("i16"),
            Self::I32 => f.pad("i32"),
            Self::I64 => f.pad("i64"),
            Self::I128 => f.pad("i128"),
            Self::Isize => f.pad("isize"),
            Self::U8 => f.pad("u8"),
            Self::U16 => f.pad("u16"),
            Self::U32 => f.pad("u32"),
            Self::U64 => f.pad("u64"),
            Self::U128 => f.pad("u128"),
            Self::Usize => f.pad("usize"),
            Self::F32 => f.pad("f32"),
            Self::F64 => f.pad("f64"),
            Self::String => f.pad("String"),
            Self::Bytes => f.pad("Vec<u8>"),
            Self::Ptr(inner) => write!(f, "Option<{inner}>"),
            Self::Struct(path) => f.pad(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Type;
    use alloc::string::ToString;

    const PROFILE: Type = Type::Struct("app::Profile");

    #[test]
    fn struct_resolution() {
        assert!(PROFILE.is_struct());
        assert!(Type::Ptr(&PROFILE).is_struct());
        assert!(!Type::Ptr(&Type::Ptr(&PROFILE)).is_struct());
        assert!(Type::Ptr(&Type::Ptr(&PROFILE)).resolves_to_struct());
        assert!(!Type::Ptr(&Type::String).resolves_to_struct());
        assert_eq!(Type::Ptr(&PROFILE).struct_path(), Some("app::Profile"));
        assert_eq!(Type::U8.struct_path(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Type::Ptr(&Type::Ptr(&Type::String)).to_string(), "Option<Option<String>>");
        assert_eq!(Type::Bytes.to_string(), "Vec<u8>");
        assert_eq!(PROFILE.to_string(), "app::Profile");
    }

    #[test]
    fn pointer_equality_follows_pointee() {
        static A: Type = Type::U32;
        static B: Type = Type::U32;
        assert_eq!(Type::Ptr(&A), Type::Ptr(&B));
        assert_ne!(Type::Ptr(&A), Type::Ptr(&Type::I32));
        assert_eq!(Type::Ptr(&A).pointee(), Some(&Type::U32));
    }
}
