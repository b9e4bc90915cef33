use core::fmt;

// -----------------------------------------------------------------------------
// Annotation

/// The raw annotation attached to one field.
///
/// An annotation is a list of `(tag name, text)` entries, written on a
/// field as `#[tag(my_json = "email", my_logger = "key:data")]`.
/// The text is kept verbatim; its grammar belongs to the tag handler
/// that reads it.
///
/// [`raw`](Annotation::raw) renders the entries in struct-tag syntax:
/// `my_json:"email" my_logger:"key:data"`.
///
/// # Examples
///
/// ```
/// use tg_reflect::info::Annotation;
///
/// const ANNOTATION: Annotation = Annotation::new(
///     r#"my_json:"email" marker:"""#,
///     &[("my_json", "email"), ("marker", "")],
/// );
///
/// assert_eq!(ANNOTATION.lookup("my_json"), Some("email"));
/// assert!(ANNOTATION.contains("marker"));
/// assert!(!ANNOTATION.contains("my_logger"));
/// assert!(Annotation::EMPTY.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Annotation {
    raw: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Annotation {
    /// The annotation of a field without `#[tag(...)]`.
    pub const EMPTY: Self = Self::new("", &[]);

    /// Creates an annotation from its raw rendering and its entries.
    ///
    /// Usually generated by `#[derive(Tagged)]`.
    #[inline]
    pub const fn new(raw: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { raw, entries }
    }

    /// Returns the raw rendering of the annotation.
    #[inline]
    pub const fn raw(&self) -> &'static str {
        self.raw
    }

    /// Returns `true` if the field carries no annotation at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the text written for the tag `name`.
    ///
    /// The first entry wins if the name is repeated.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| *text)
    }

    /// Returns `true` if the tag `name` appears in the annotation.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the `(tag name, text)` entries in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.entries.iter().copied()
    }

    /// Returns the number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Annotation").field(&self.raw).finish()
    }
}

impl fmt::Display for Annotation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.raw)
    }
}
