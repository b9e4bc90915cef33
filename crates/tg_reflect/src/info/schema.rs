use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// Schema

/// The field-metadata table of a tagged structure.
///
/// Fields are kept in declaration order, `field_at(i).index() == i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    path: &'static str,
    name: &'static str,
    fields: &'static [FieldInfo],
}

impl Schema {
    /// Creates a schema, usually generated by `#[derive(Tagged)]`.
    #[inline]
    pub const fn new(path: &'static str, name: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self { path, name, fields }
    }

    /// Returns the full type path, e.g. `app::model::User`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type name without module path, e.g. `User`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns all fields in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Returns the field at `index`.
    #[inline]
    pub const fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        if index < self.fields.len() {
            Some(&self.fields[index])
        } else {
            None
        }
    }

    /// Returns the field named `name`.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }
}
