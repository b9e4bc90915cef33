use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use tg_reflect::{FieldValue, Tagged};
use tg_utils::hash::HashMap;

use crate::engine::Dispatch;
use crate::{Tag, TagError};

// -----------------------------------------------------------------------------
// Tagger

/// The registry of [`Tag`]s and the entry point of both traversals.
///
/// Tags are kept in registration order, which is also the order their
/// handlers run in when several tags match one field. Registering a name
/// again replaces the previous tag in place.
///
/// # Examples
///
/// ```
/// use tg_reflect::Tagged;
/// use tg_tagger::{Tag, Tagger};
///
/// #[derive(Clone, Default, Tagged)]
/// struct User {
///     #[tag(my_logger = "key:id")]
///     id: u64,
///     secret: String,
/// }
///
/// let tagger = Tagger::<(), Vec<String>>::new().add(
///     Tag::new("my_logger")
///         .out_function(|mut acc: Vec<String>, field| {
///             let key = field.tag().find_by_key("key").unwrap_or(field.name());
///             acc.push(format!("{key}={:?}", field.get()));
///             Ok(acc)
///         }),
/// );
///
/// let user = User { id: 3, secret: "hunter2".into() };
/// let lines = tagger.process_out(Vec::new(), &user, None, &[]).unwrap();
/// assert_eq!(lines, ["id=3"]);
/// ```
pub struct Tagger<D: ?Sized, A = ()> {
    tags: Vec<Tag<D, A>>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl<D: ?Sized, A> Default for Tagger<D, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized, A> Tagger<D, A> {
    /// Creates an empty tagger.
    #[inline]
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            indices: HashMap::default(),
        }
    }

    /// Registers `tag`, see [`Tagger::insert`].
    #[inline]
    pub fn add(mut self, tag: Tag<D, A>) -> Self {
        self.insert(tag);
        self
    }

    /// Registers `tag`, returning the tag previously registered under
    /// the same name.
    ///
    /// A replaced tag keeps its position in the dispatch order.
    pub fn insert(&mut self, tag: Tag<D, A>) -> Option<Tag<D, A>> {
        if let Some(&index) = self.indices.get(tag.name()) {
            log::debug!("tag `{}` registered again, replacing it", tag.name());
            return Some(mem::replace(&mut self.tags[index], tag));
        }
        self.indices.insert(tag.name_cow().clone(), self.tags.len());
        self.tags.push(tag);
        None
    }

    /// Returns the tag registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Tag<D, A>> {
        self.indices.get(name).map(|&index| &self.tags[index])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Number of registered tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag names in registration order.
    #[inline]
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.tags.iter().map(Tag::name)
    }

    /// Tags in registration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Tag<D, A>> {
        self.tags.iter()
    }

    /// Populates `target` from `data`.
    ///
    /// - `target` is a tagged structure, or `Option`/`Box` around one.
    /// - `empty_tag` names the tag applied to fields without annotation.
    /// - `tags` restricts the traversal to these tags, all tags if empty.
    ///
    /// # Errors
    ///
    /// Checked in this order, before any field is touched:
    /// [`TagError::NoTags`], [`TagError::UnknownTag`], the target
    /// ([`TagError::NotStruct`], [`TagError::NullTarget`],
    /// [`TagError::NoFields`]) and [`TagError::UnknownEmptyFieldTag`].
    /// Then the first handler failure aborts the traversal.
    pub fn process_in<T: FieldValue>(
        &self,
        data: &D,
        target: &mut T,
        empty_tag: Option<&str>,
        tags: &[&str],
    ) -> Result<(), TagError> {
        let dispatch = Dispatch::new(self, tags)?;
        let target = resolve_target::<T, _>(target.resolve_tagged_mut())?;
        dispatch.prepare(target.reflect_schema(), empty_tag)?.walk_in(data, target, None)
    }

    /// [`Tagger::process_in`] on a type-erased structure.
    pub fn process_in_dyn(
        &self,
        data: &D,
        target: &mut dyn Tagged,
        empty_tag: Option<&str>,
        tags: &[&str],
    ) -> Result<(), TagError> {
        let dispatch = Dispatch::new(self, tags)?;
        dispatch.prepare(target.reflect_schema(), empty_tag)?.walk_in(data, target, None)
    }

    /// Projects `source` into the accumulator `seed`.
    ///
    /// Arguments and errors are the same as for [`Tagger::process_in`];
    /// the final accumulator is returned.
    pub fn process_out<T: FieldValue>(
        &self,
        seed: A,
        source: &T,
        empty_tag: Option<&str>,
        tags: &[&str],
    ) -> Result<A, TagError> {
        let dispatch = Dispatch::new(self, tags)?;
        let source = resolve_target::<T, _>(source.resolve_tagged())?;
        dispatch.prepare(source.reflect_schema(), empty_tag)?.walk_out(seed, source, None)
    }

    /// [`Tagger::process_out`] on a type-erased structure.
    pub fn process_out_dyn(
        &self,
        seed: A,
        source: &dyn Tagged,
        empty_tag: Option<&str>,
        tags: &[&str],
    ) -> Result<A, TagError> {
        let dispatch = Dispatch::new(self, tags)?;
        dispatch.prepare(source.reflect_schema(), empty_tag)?.walk_out(seed, source, None)
    }
}

/// Checks the declared type of a generic target, then its pointers.
fn resolve_target<T: FieldValue, R>(resolved: Option<R>) -> Result<R, TagError> {
    if !T::TYPE.resolves_to_struct() {
        return Err(TagError::NotStruct(T::TYPE));
    }
    resolved.ok_or(TagError::NullTarget)
}

impl<D: ?Sized, A> fmt::Debug for Tagger<D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tags.iter()).finish()
    }
}
