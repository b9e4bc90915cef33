//! [`FieldValue`](crate::FieldValue) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `bool`, `char`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - alloc:
//!     - `String`, `Vec<u8>`
//!     - `Box<T>` (transparent)
//! - core:
//!     - `Option<T>` (pointer to `T`)

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod native;
mod option;
