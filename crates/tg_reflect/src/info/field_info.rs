use crate::info::{Annotation, Type};

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for one named field of a tagged structure.
///
/// # Examples
///
/// ```
/// use tg_reflect::{Typed, derive::Tagged, info::Type};
///
/// #[derive(Clone, Default, Tagged)]
/// struct Foo {
///     #[tag(my_json = "a")]
///     field_a: f32,
///     field_b: Option<String>,
/// }
///
/// let field = Foo::schema().field_at(0).unwrap();
/// assert_eq!(field.name(), "field_a");
/// assert_eq!(field.ty(), Type::F32);
/// assert_eq!(field.annotation().raw(), r#"my_json:"a""#);
///
/// let field = Foo::schema().field("field_b").unwrap();
/// assert_eq!(field.index(), 1);
/// assert!(field.is_pointer());
/// assert!(field.annotation().is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    ty: Type,
    annotation: Annotation,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] without annotation.
    #[inline]
    pub const fn new(name: &'static str, index: usize, ty: Type) -> Self {
        Self {
            name,
            index,
            ty,
            annotation: Annotation::EMPTY,
        }
    }

    /// Attaches the raw annotation of the field.
    #[inline]
    pub const fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = annotation;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaration index of the field.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the declared type of the field.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the raw annotation of the field.
    #[inline]
    pub const fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// See [`Type::is_pointer`].
    #[inline]
    pub const fn is_pointer(&self) -> bool {
        self.ty.is_pointer()
    }

    /// See [`Type::is_struct`].
    #[inline]
    pub const fn is_struct(&self) -> bool {
        self.ty.is_struct()
    }
}
