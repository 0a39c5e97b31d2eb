//! # Deskplan Core
//!
//! Foundation types for the Deskplan office floor-plan editor:
//! geometry primitives, editor-wide constants, and error types.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{EditorError, Result};
pub use geometry::{Bounds, Point};
