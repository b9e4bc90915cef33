//! A registry of tagged structure schemas.
//!
//! Schemas are usually reached statically through [`Typed::schema`];
//! the registry is for consumers that only know a type by its path or
//! name at runtime.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, structures annotated with
//! `#[tagged(auto_register)]` are collected at startup through the
//! [`inventory`] crate, see [`SchemaRegistry::with_auto_registered`].
//!
//! [`inventory`]: https://docs.rs/inventory

use alloc::vec::Vec;

use tg_utils::hash::{HashMap, HashSet};

use crate::info::{Schema, Typed};

// -----------------------------------------------------------------------------
// SchemaRegistry

/// A registry of [`Schema`]s, keyed by full type path and by short name.
///
/// A short name shared by two registered types is ambiguous and can only
/// be resolved through the full path.
///
/// # Examples
///
/// ```
/// use tg_reflect::{Tagged, registry::SchemaRegistry};
///
/// #[derive(Clone, Default, Tagged)]
/// struct User {
///     #[tag(my_json = "user_id")]
///     id: u64,
/// }
///
/// let mut registry = SchemaRegistry::new();
/// assert!(registry.register::<User>());
/// assert!(!registry.register::<User>());
///
/// let schema = registry.get_with_name("User").unwrap();
/// assert_eq!(schema.field_at(0).unwrap().name(), "id");
/// assert!(registry.contains(schema.path()));
/// ```
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: Vec<&'static Schema>,
    path_to_index: HashMap<&'static str, usize>,
    name_to_index: HashMap<&'static str, usize>,
    ambiguous_names: HashSet<&'static str>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every structure derived with
    /// `#[tagged(auto_register)]`.
    ///
    /// On platforms `inventory` does not support the registry stays empty.
    #[cfg(feature = "auto_register")]
    pub fn with_auto_registered() -> Self {
        let mut registry = Self::new();
        for schema in crate::__macro_exports::auto_register::__schemas() {
            registry.register_schema(schema);
        }
        registry
    }

    /// Registers the schema of `T`.
    ///
    /// Returns `false` if a schema with the same path already exists.
    #[inline]
    pub fn register<T: Typed>(&mut self) -> bool {
        self.register_schema(T::schema())
    }

    /// Registers a schema.
    ///
    /// Returns `false` if a schema with the same path already exists.
    pub fn register_schema(&mut self, schema: &'static Schema) -> bool {
        if self.path_to_index.contains_key(schema.path()) {
            return false;
        }
        let index = self.schemas.len();
        self.schemas.push(schema);
        self.path_to_index.insert(schema.path(), index);

        let name = schema.name();
        if !self.ambiguous_names.contains(name) {
            if self.name_to_index.remove(name).is_some() {
                self.ambiguous_names.insert(name);
            } else {
                self.name_to_index.insert(name, index);
            }
        }
        true
    }

    /// Returns the schema with the full type path `path`.
    #[inline]
    pub fn get(&self, path: &str) -> Option<&'static Schema> {
        self.path_to_index.get(path).map(|&index| self.schemas[index])
    }

    /// Returns the schema with the short type name `name`.
    ///
    /// `None` if no or more than one registered type has that name.
    #[inline]
    pub fn get_with_name(&self, name: &str) -> Option<&'static Schema> {
        self.name_to_index.get(name).map(|&index| self.schemas[index])
    }

    /// Returns `true` if `name` is shared by several registered types.
    #[inline]
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.ambiguous_names.contains(name)
    }

    /// Returns `true` if a schema with the full type path `path` exists.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.path_to_index.contains_key(path)
    }

    /// Returns the number of registered schemas.
    #[inline]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterates the schemas in registration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static Schema> + '_ {
        self.schemas.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaRegistry;
    use crate::Typed;

    mod a {
        #[derive(Clone, Default, crate::Tagged)]
        #[tagged(auto_register)]
        pub struct Item {
            #[tag(my_json = "id")]
            pub id: u32,
        }
    }

    mod b {
        #[derive(Clone, Default, crate::Tagged)]
        pub struct Item {
            pub name: Option<alloc::string::String>,
        }
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = SchemaRegistry::new();
        registry.register::<a::Item>();
        assert_eq!(registry.get_with_name("Item"), Some(a::Item::schema()));

        registry.register::<b::Item>();
        assert_eq!(registry.len(), 2);
        assert!(registry.is_ambiguous("Item"));
        assert_eq!(registry.get_with_name("Item"), None);
        assert_eq!(registry.get(b::Item::schema().path()), Some(b::Item::schema()));
    }

    #[test]
    fn iteration_follows_registration() {
        let mut registry = SchemaRegistry::new();
        registry.register::<b::Item>();
        registry.register::<a::Item>();
        let paths: alloc::vec::Vec<_> = registry.iter().map(|schema| schema.path()).collect();
        assert_eq!(paths, [b::Item::schema().path(), a::Item::schema().path()]);
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_registered() {
        let registry = SchemaRegistry::with_auto_registered();
        assert!(registry.contains(a::Item::schema().path()));
        assert!(!registry.contains(b::Item::schema().path()));
    }
}
