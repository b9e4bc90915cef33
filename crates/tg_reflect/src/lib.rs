//! Field metadata for tag-driven traversal.
//!
//! A structure deriving [`Tagged`](derive::Tagged) gets a static
//! [`Schema`](info::Schema): its ordered fields, their [`Type`](info::Type)
//! and their raw [`Annotation`](info::Annotation). Field values cross the
//! generic boundary as the closed [`Value`] sum type.
//!
//! ```
//! use tg_reflect::{Tagged, Typed, Value};
//!
//! #[derive(Clone, Default, Tagged)]
//! struct User {
//!     #[tag(my_json = "user_id")]
//!     id: u32,
//!     #[tag(my_json = "username")]
//!     name: Option<String>,
//! }
//!
//! let schema = User::schema();
//! assert_eq!(schema.field_len(), 2);
//! assert_eq!(schema.field_at(0).unwrap().annotation().lookup("my_json"), Some("user_id"));
//!
//! let mut user = User::default();
//! user.reflect_set(0, Value::U32(7)).unwrap();
//! assert_eq!(user.id, 7);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `::tg_reflect`, the alias makes it resolve inside
// this crate (unit tests, doc tests) as well.
extern crate self as tg_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;
mod value;

pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{FieldValue, Tagged};
pub use info::Typed;
pub use value::Value;
pub use tg_reflect_derive as derive;

// Trait and derive macro share the name, as `serde::Serialize` does.
pub use tg_reflect_derive::Tagged;
