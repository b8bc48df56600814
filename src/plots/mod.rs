//! High-level plot types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod bar3d;

pub use bar3d::{Bar3d, BarPalette};
