use tg_reflect::info::{Annotation, FieldInfo, Schema, Type};
use tg_reflect::{FieldValue, Tagged, Value};

use crate::{ParsedTag, TagError, TagSymbols};

// -----------------------------------------------------------------------------
// FieldTag

/// The annotation of a field, bound to the tag currently handling it.
///
/// Before each handler call the text written under that handler's tag
/// name is parsed with the handler's [`TagSymbols`], so a handler never
/// sees another tag's grammar.
#[derive(Debug, Clone)]
pub struct FieldTag {
    annotation: Annotation,
    raw: &'static str,
    symbols: TagSymbols,
    parsed: ParsedTag,
}

impl FieldTag {
    /// Creates an unbound tag, its text is empty.
    #[inline]
    pub fn new(annotation: Annotation) -> Self {
        Self {
            annotation,
            raw: "",
            symbols: TagSymbols::default(),
            parsed: ParsedTag::default(),
        }
    }

    /// Binds the text under `name` and re-parses it with `symbols`.
    ///
    /// The text is empty if the annotation has no entry for `name`.
    pub fn bind(&mut self, name: &str, symbols: TagSymbols) {
        self.raw = self.annotation.lookup(name).unwrap_or("");
        self.symbols = symbols;
        self.parsed = symbols.parse(self.raw);
    }

    /// The full annotation of the field.
    #[inline]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// The bound text.
    #[inline]
    pub fn raw(&self) -> &'static str {
        self.raw
    }

    /// The grammar the text was parsed with.
    #[inline]
    pub fn symbols(&self) -> TagSymbols {
        self.symbols
    }

    /// The parsed pairs of the bound text.
    #[inline]
    pub fn parsed(&self) -> &ParsedTag {
        &self.parsed
    }

    /// Returns `true` if the field carries no annotation at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.annotation.is_empty()
    }

    /// The bound text split by the keys separator, verbatim.
    ///
    /// `"foo | bar | baz"` with separator `" | "` gives three values.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.symbols.values(self.raw)
    }

    /// See [`ParsedTag::exists`].
    #[inline]
    pub fn exists(&self, key: &str) -> bool {
        self.parsed.exists(key)
    }

    /// See [`ParsedTag::find_index_by_key`].
    #[inline]
    pub fn find_index_by_key(&self, key: &str) -> Option<usize> {
        self.parsed.find_index_by_key(key)
    }

    /// See [`ParsedTag::find_by_key`].
    #[inline]
    pub fn find_by_key(&self, key: &str) -> Option<&str> {
        self.parsed.find_by_key(key)
    }
}

// -----------------------------------------------------------------------------
// Parent

/// Link from a nested structure to the field that contains it.
///
/// Links form a chain up to the root structure. They are passed down the
/// recursion and never own the structures.
///
/// During Out a link also borrows the enclosing structure, see
/// [`Parent::owner`]. During In that structure is mutably borrowed by
/// the nested traversal and is not reachable from the link.
pub struct Parent<'a> {
    schema: &'static Schema,
    field: &'static FieldInfo,
    tag: FieldTag,
    owner: Option<&'a dyn Tagged>,
    parent: Option<&'a Parent<'a>>,
}

impl<'a> Parent<'a> {
    pub(crate) fn new(
        schema: &'static Schema,
        field: &'static FieldInfo,
        tag: FieldTag,
        owner: Option<&'a dyn Tagged>,
        parent: Option<&'a Parent<'a>>,
    ) -> Self {
        Self {
            schema,
            field,
            tag,
            owner,
            parent,
        }
    }

    /// The schema of the enclosing structure.
    #[inline]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The field holding the nested structure.
    #[inline]
    pub fn field(&self) -> &'static FieldInfo {
        self.field
    }

    /// The tag of [`Parent::field`], as bound by the last handler that ran on it.
    #[inline]
    pub fn tag(&self) -> &FieldTag {
        &self.tag
    }

    /// The enclosing structure, `None` during In.
    #[inline]
    pub fn owner(&self) -> Option<&'a dyn Tagged> {
        self.owner
    }

    /// The link of the enclosing structure, `None` at the root.
    #[inline]
    pub fn parent(&self) -> Option<&'a Parent<'a>> {
        self.parent
    }

    /// Number of structures above this link, `0` for a field of the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut link = self.parent;
        while let Some(parent) = link {
            depth += 1;
            link = parent.parent;
        }
        depth
    }
}

impl core::fmt::Debug for Parent<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Parent")
            .field("schema", &self.schema.path())
            .field("field", &self.field.name())
            .field("tag", &self.tag)
            .field("owner", &self.owner)
            .field("parent", &self.parent)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Field

enum Owner<'a> {
    Ref(&'a dyn Tagged),
    Mut(&'a mut dyn Tagged),
}

/// One field of a structure, handed to tag handlers.
///
/// In handlers get a writable field, Out handlers a read-only one:
/// [`Field::set`] fails with [`TagError::Unsettable`] during Out.
pub struct Field<'a> {
    owner: Owner<'a>,
    info: &'static FieldInfo,
    tag: FieldTag,
    parent: Option<&'a Parent<'a>>,
}

impl<'a> Field<'a> {
    pub(crate) fn new_ref(
        owner: &'a dyn Tagged,
        info: &'static FieldInfo,
        parent: Option<&'a Parent<'a>>,
    ) -> Self {
        Self {
            owner: Owner::Ref(owner),
            info,
            tag: FieldTag::new(*info.annotation()),
            parent,
        }
    }

    pub(crate) fn new_mut(
        owner: &'a mut dyn Tagged,
        info: &'static FieldInfo,
        parent: Option<&'a Parent<'a>>,
    ) -> Self {
        Self {
            owner: Owner::Mut(owner),
            info,
            tag: FieldTag::new(*info.annotation()),
            parent,
        }
    }

    pub(crate) fn into_tag(self) -> FieldTag {
        self.tag
    }

    /// The static metadata of the field.
    #[inline]
    pub fn info(&self) -> &'static FieldInfo {
        self.info
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Declaration index in the owning structure.
    #[inline]
    pub fn index(&self) -> usize {
        self.info.index()
    }

    /// The declared type.
    #[inline]
    pub fn ty(&self) -> Type {
        self.info.ty()
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.info.is_pointer()
    }

    /// `true` for a structure or a pointer to a structure.
    #[inline]
    pub fn is_struct(&self) -> bool {
        self.info.is_struct()
    }

    /// `true` during In.
    #[inline]
    pub fn is_settable(&self) -> bool {
        matches!(self.owner, Owner::Mut(_))
    }

    /// The structure owning the field.
    #[inline]
    pub fn owner(&self) -> &dyn Tagged {
        match &self.owner {
            Owner::Ref(owner) => *owner,
            Owner::Mut(owner) => &**owner,
        }
    }

    /// The link to the containing field, `None` for fields of the root.
    #[inline]
    pub fn parent(&self) -> Option<&'a Parent<'a>> {
        self.parent
    }

    #[inline]
    pub fn tag(&self) -> &FieldTag {
        &self.tag
    }

    #[inline]
    pub fn tag_mut(&mut self) -> &mut FieldTag {
        &mut self.tag
    }

    /// Returns the current value.
    pub fn get(&self) -> Value {
        match self.owner().reflect_get(self.index()) {
            Some(value) => value,
            None => unreachable!("field `{}` is outside of its schema", self.name()),
        }
    }

    /// Returns the pointed-to value.
    ///
    /// `None` if the field is not a pointer or the pointer is null.
    pub fn get_from_pointer(&self) -> Option<Value> {
        match self.get() {
            Value::Ptr(_, Some(inner)) => Some(*inner),
            _ => None,
        }
    }

    /// Writes `value`, see [`Field::set_value`].
    #[inline]
    pub fn set<T: FieldValue>(&mut self, value: T) -> Result<(), TagError> {
        self.set_value(value.into_value())
    }

    /// Writes `value` into the field.
    ///
    /// # Errors
    ///
    /// - [`TagError::Unsettable`] during Out.
    /// - [`TagError::TypeMismatch`] if the type of `value` is not exactly
    ///   the declared type.
    pub fn set_value(&mut self, value: Value) -> Result<(), TagError> {
        let info = self.info;
        let Owner::Mut(owner) = &mut self.owner else {
            return Err(TagError::Unsettable { field: info.name() });
        };

        let mismatch = |given: Type| TagError::TypeMismatch {
            field: info.name(),
            given,
            expected: info.ty(),
        };

        let given = value.ty();
        if given != info.ty() {
            return Err(mismatch(given));
        }
        owner
            .reflect_set(info.index(), value)
            .map_err(|value| mismatch(value.ty()))
    }
}

impl core::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name())
            .field("ty", &self.ty())
            .field("settable", &self.is_settable())
            .field("tag", &self.tag)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldTag, Parent};
    use crate::{ErrorKind, TagError, TagSymbols};
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use tg_reflect::info::Annotation;
    use tg_reflect::{Tagged, Typed, Value};

    #[derive(Clone, Default, Tagged)]
    struct Request {
        #[tag(my_logger = "key:summary | to:string", my_json = "body")]
        body: Vec<u8>,
        #[tag(my_json = "status")]
        status: Option<u16>,
        count: u32,
    }

    #[test]
    fn bind_switches_grammar() {
        let info = Request::schema().field_at(0).unwrap();
        let mut tag = FieldTag::new(*info.annotation());
        assert_eq!(tag.raw(), "");
        assert!(tag.parsed().is_empty());

        tag.bind("my_logger", TagSymbols::new(":", " | "));
        assert_eq!(tag.find_by_key("key"), Some("summary"));
        assert_eq!(tag.find_by_key("to"), Some("string"));
        assert_eq!(tag.values().collect::<Vec<_>>(), ["key:summary", "to:string"]);

        tag.bind("my_json", TagSymbols::new(";", ","));
        assert_eq!(tag.raw(), "body");
        assert!(!tag.exists("key"));
        assert_eq!(tag.find_index_by_key("body"), Some(0));

        tag.bind("other", TagSymbols::default());
        assert!(tag.parsed().is_empty());
        assert!(!tag.is_empty());
    }

    #[test]
    fn set_checks_exact_type() {
        let mut request = Request::default();
        let info = Request::schema().field_at(1).unwrap();
        let mut field = Field::new_mut(&mut request, info, None);

        let err = field.set(7_u16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.to_string(),
            "Incorrect type for field: status. Your: u16. Actual: Option<u16>"
        );

        field.set(Some(7_u16)).unwrap();
        assert_eq!(field.get_from_pointer(), Some(Value::U16(7)));
        assert_eq!(request.status, Some(7));
    }

    #[test]
    fn read_only_field() {
        let request = Request {
            body: b"hello".to_vec(),
            ..Request::default()
        };
        let info = Request::schema().field_at(0).unwrap();
        let mut field = Field::new_ref(&request, info, None);

        assert!(!field.is_settable());
        assert_eq!(field.get().as_bytes(), Some(&b"hello"[..]));
        assert_eq!(field.get_from_pointer(), None);
        assert!(matches!(
            field.set(Vec::<u8>::new()),
            Err(TagError::Unsettable { field: "body" })
        ));
    }

    #[test]
    fn parent_chain() {
        let schema = Request::schema();
        let request = Request::default();
        let tag = || FieldTag::new(Annotation::EMPTY);
        let root = Parent::new(schema, schema.field_at(0).unwrap(), tag(), Some(&request), None);
        let nested = Parent::new(schema, schema.field_at(1).unwrap(), tag(), None, Some(&root));

        assert_eq!(root.depth(), 0);
        assert_eq!(nested.depth(), 1);
        assert_eq!(nested.parent().map(|p| p.field().name()), Some("body"));
        assert!(root.owner().is_some_and(|owner| owner.is::<Request>()));
        assert!(nested.owner().is_none());

        let mut request = Request::default();
        let field = Field::new_mut(&mut request, schema.field_at(2).unwrap(), Some(&nested));
        assert_eq!(field.parent().unwrap().field().name(), "status");
        assert!(field.tag().is_empty());
    }
}
