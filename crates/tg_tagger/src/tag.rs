use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use crate::{Field, TagError, TagSymbols};

// -----------------------------------------------------------------------------
// Handlers

/// Handles one field during In.
///
/// Implemented for every `Fn(&D, &mut Field) -> Result<(), TagError>`,
/// stateful handlers implement it on their own type. Handlers are
/// `Send + Sync`, a [`Tagger`](crate::Tagger) can serve several threads.
///
/// # Examples
///
/// ```
/// use tg_tagger::{Field, InHandler, Tag, TagError};
///
/// struct Constant(u32);
///
/// impl InHandler<str> for Constant {
///     fn handle(&self, _data: &str, field: &mut Field<'_>) -> Result<(), TagError> {
///         field.set(self.0)
///     }
/// }
///
/// let tag: Tag<str> = Tag::new("constant").in_handler(Constant(7));
/// assert!(tag.has_in_handler());
/// ```
pub trait InHandler<D: ?Sized>: Send + Sync {
    fn handle(&self, data: &D, field: &mut Field<'_>) -> Result<(), TagError>;
}

impl<D, F> InHandler<D> for F
where
    D: ?Sized,
    F: Fn(&D, &mut Field<'_>) -> Result<(), TagError> + Send + Sync,
{
    #[inline]
    fn handle(&self, data: &D, field: &mut Field<'_>) -> Result<(), TagError> {
        self(data, field)
    }
}

/// Handles one field during Out, threading the accumulator.
pub trait OutHandler<A>: Send + Sync {
    fn handle(&self, acc: A, field: &mut Field<'_>) -> Result<A, TagError>;
}

impl<A, F> OutHandler<A> for F
where
    F: Fn(A, &mut Field<'_>) -> Result<A, TagError> + Send + Sync,
{
    #[inline]
    fn handle(&self, acc: A, field: &mut Field<'_>) -> Result<A, TagError> {
        self(acc, field)
    }
}

// -----------------------------------------------------------------------------
// Tag

/// A named tag: its grammar and its handlers.
///
/// `D` is the data read by In handlers, `A` the accumulator threaded by
/// Out handlers. A tag without handler for a direction fails with
/// [`TagError::MissingHandler`] when a field resolves to it.
pub struct Tag<D: ?Sized, A = ()> {
    name: Cow<'static, str>,
    symbols: TagSymbols,
    in_handler: Option<Box<dyn InHandler<D>>>,
    out_handler: Option<Box<dyn OutHandler<A>>>,
}

impl<D: ?Sized, A> Tag<D, A> {
    /// Creates a tag without handlers and with the default symbols.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            symbols: TagSymbols::default(),
            in_handler: None,
            out_handler: None,
        }
    }

    /// Sets the In handler from a closure.
    #[inline]
    pub fn in_function<F>(self, handler: F) -> Self
    where
        F: Fn(&D, &mut Field<'_>) -> Result<(), TagError> + Send + Sync + 'static,
    {
        self.in_handler(handler)
    }

    /// Sets the In handler.
    #[inline]
    pub fn in_handler(mut self, handler: impl InHandler<D> + 'static) -> Self {
        self.in_handler = Some(Box::new(handler));
        self
    }

    /// Sets the Out handler from a closure.
    #[inline]
    pub fn out_function<F>(self, handler: F) -> Self
    where
        F: Fn(A, &mut Field<'_>) -> Result<A, TagError> + Send + Sync + 'static,
    {
        self.out_handler(handler)
    }

    /// Sets the Out handler.
    #[inline]
    pub fn out_handler(mut self, handler: impl OutHandler<A> + 'static) -> Self {
        self.out_handler = Some(Box::new(handler));
        self
    }

    /// Sets the grammar of the annotation text.
    ///
    /// ```
    /// # use tg_tagger::Tag;
    /// // my_logger:"key:summary | to:string"
    /// let tag: Tag<()> = Tag::new("my_logger").symbols(":", " | ");
    /// assert_eq!(tag.tag_symbols().keys_separator(), " | ");
    /// ```
    #[inline]
    pub fn symbols(mut self, key_value: &'static str, keys_separator: &'static str) -> Self {
        self.symbols = TagSymbols::new(key_value, keys_separator);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn tag_symbols(&self) -> TagSymbols {
        self.symbols
    }

    #[inline]
    pub fn has_in_handler(&self) -> bool {
        self.in_handler.is_some()
    }

    #[inline]
    pub fn has_out_handler(&self) -> bool {
        self.out_handler.is_some()
    }

    #[inline]
    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    #[inline]
    pub(crate) fn get_in_handler(&self) -> Option<&dyn InHandler<D>> {
        self.in_handler.as_deref()
    }

    #[inline]
    pub(crate) fn get_out_handler(&self) -> Option<&dyn OutHandler<A>> {
        self.out_handler.as_deref()
    }
}

impl<D: ?Sized, A> fmt::Debug for Tag<D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("symbols", &self.symbols)
            .field("in_handler", &self.has_in_handler())
            .field("out_handler", &self.has_out_handler())
            .finish()
    }
}
