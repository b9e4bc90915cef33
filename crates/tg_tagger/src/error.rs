use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

use tg_reflect::info::Type;

/// A boxed error returned by a user handler.
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

// -----------------------------------------------------------------------------
// Direction

/// The traversal direction a handler belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => f.pad("In"),
            Self::Out => f.pad("Out"),
        }
    }
}

// -----------------------------------------------------------------------------
// ErrorKind

/// Coarse classification of a [`TagError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No tag is registered.
    Configuration,
    /// A requested tag name is not registered.
    UnknownTag,
    /// The target is null, not a structure, or has no fields.
    InvalidTarget,
    /// A field write was rejected.
    TypeMismatch,
    /// A resolved tag has no handler for the running direction.
    HandlerMisconfigured,
    /// Returned by a user handler.
    Handler,
}

// -----------------------------------------------------------------------------
// TagError

/// Every failure aborts the running traversal.
///
/// Field writes done before the failure are kept.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TagError {
    #[error("you must register at least one tag")]
    NoTags,

    #[error("{0} tag doesn't exist")]
    UnknownTag(String),

    #[error("{0} doesn't exist (empty field tag)")]
    UnknownEmptyFieldTag(String),

    #[error("target cannot be null")]
    NullTarget,

    #[error("target must be a structure, found {0}")]
    NotStruct(Type),

    #[error("{0} requires at least one field")]
    NoFields(&'static str),

    #[error("Can't set value for field: {field}")]
    Unsettable { field: &'static str },

    #[error("Incorrect type for field: {field}. Your: {given}. Actual: {expected}")]
    TypeMismatch {
        field: &'static str,
        given: Type,
        expected: Type,
    },

    #[error("{tag} has no {direction} handler")]
    MissingHandler { tag: String, direction: Direction },

    #[error(transparent)]
    Handler(BoxError),
}

impl TagError {
    /// Wraps an error returned by a handler.
    #[inline]
    pub fn handler(err: impl Into<BoxError>) -> Self {
        Self::Handler(err.into())
    }

    /// Creates a handler error from a message.
    #[inline]
    pub fn custom(msg: impl fmt::Display) -> Self {
        Self::Handler(msg.to_string().into())
    }

    /// Returns the classification of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoTags => ErrorKind::Configuration,
            Self::UnknownTag(_) | Self::UnknownEmptyFieldTag(_) => ErrorKind::UnknownTag,
            Self::NullTarget | Self::NotStruct(_) | Self::NoFields(_) => ErrorKind::InvalidTarget,
            Self::Unsettable { .. } | Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::MissingHandler { .. } => ErrorKind::HandlerMisconfigured,
            Self::Handler(_) => ErrorKind::Handler,
        }
    }

    /// Returns the handler error, if this is one.
    #[inline]
    pub fn as_handler(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Handler(err) => Some(&**err),
            _ => None,
        }
    }
}
