//! Tag-driven traversal of tagged structures.
//!
//! A [`Tagger`] holds named [`Tag`]s. Each tag has a symbol grammar and
//! up to one handler per direction:
//!
//! - **In** ([`Tagger::process_in`]) populates a structure from external data.
//! - **Out** ([`Tagger::process_out`]) projects a structure into an
//!   accumulator threaded through every handler.
//!
//! Fields are visited in declaration order. A field is handed to every
//! active tag whose name appears in its annotation, in registration order,
//! and the annotation text is re-parsed under each tag's grammar before
//! its handler runs. Nested structures are walked after their own field
//! handlers, with a [`Parent`] link to the containing field.
//!
//! ```
//! use tg_reflect::Tagged;
//! use tg_tagger::{Tag, TagError, Tagger};
//!
//! #[derive(Clone, Default, Tagged)]
//! struct Config {
//!     #[tag(env = "name")]
//!     name: String,
//!     #[tag(env = "port")]
//!     port: Option<u16>,
//! }
//!
//! type Vars = [(&'static str, &'static str)];
//!
//! let tagger = Tagger::<Vars>::new().add(
//!     Tag::new("env").in_function(|vars: &Vars, field| {
//!         let key = field.tag().raw();
//!         let Some((_, text)) = vars.iter().find(|(name, _)| *name == key) else {
//!             return Ok(());
//!         };
//!         if field.is_pointer() {
//!             field.set(text.parse::<u16>().ok())
//!         } else {
//!             field.set(String::from(*text))
//!         }
//!     }),
//! );
//!
//! let mut config = Config::default();
//! let vars = [("name", "api"), ("port", "8080")];
//! tagger.process_in(&vars[..], &mut config, None, &[])?;
//!
//! assert_eq!(config.name, "api");
//! assert_eq!(config.port, Some(8080));
//! # Ok::<(), TagError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod engine;
mod error;
mod field;
mod symbols;
mod tag;
mod tagger;

#[cfg(test)]
mod samples;

// -----------------------------------------------------------------------------
// Exports

pub use error::{BoxError, Direction, ErrorKind, TagError};
pub use field::{Field, FieldTag, Parent};
pub use symbols::{ParsedTag, TagSymbols};
pub use tag::{InHandler, OutHandler, Tag};
pub use tagger::Tagger;
