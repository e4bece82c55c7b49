//! Core types for lockhold.
//!
//! This crate contains the error taxonomy and the attribute surface tables
//! shared by every locked container. No IO, no collections of its own.

#![deny(missing_docs)]
// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod error;
mod surface;

pub use error::{
    AttributeError, ElementNotFound, Error, IndexOutOfRange, KeyNotFound, Result, Shape,
    ShapeMismatch,
};
pub use surface::Surface;
