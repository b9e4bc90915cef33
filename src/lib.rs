#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use tg_reflect as reflect;
pub use tg_utils as utils;

pub use tg_reflect::{FieldValue, Tagged, Typed, Value};
pub use tg_tagger::{Direction, ErrorKind, Field, FieldTag, Parent, ParsedTag};
pub use tg_tagger::{InHandler, OutHandler, Tag, TagError, TagSymbols, Tagger};
