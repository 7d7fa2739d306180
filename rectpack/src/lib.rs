//! Core model of the rectangle packing problem and its Sequence-Pair representation.

/// Rectangles, problem instances, floorplans and solutions
pub mod entities;

/// Sequence-Pair encoding and decoding
pub mod seq_pair;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Errors raised by this library
pub mod error;

#[doc(inline)]
pub use error::{RPError, Result};
