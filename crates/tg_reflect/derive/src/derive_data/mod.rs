//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod field_annotation;
mod tagged_struct;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_annotation::FieldAnnotation;
pub(crate) use tagged_struct::{TaggedField, TaggedStruct};
pub(crate) use type_attributes::TypeAttributes;
