//! # hist3d
//!
//! Software-rendered 3D histogram visualization for synthetic statistical
//! data. Generates normally distributed samples, bins them into a 2D
//! histogram, and renders the grid as a 3D bar chart with zero GUI or
//! GPU dependencies.
//!
//! ## Pipeline
//!
//! - **Sample**: seedable normal sample generation
//! - **Aggregate**: joint 2D binning with automatic or fixed bin counts
//! - **Render**: orthographic projection onto a software framebuffer
//! - **Output**: PNG, vector SVG, and terminal (ASCII/Unicode/ANSI)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hist3d::prelude::*;
//!
//! let mut sampler = NormalSampler::seeded(42);
//! let x = sampler.sample_vec(1000);
//! let y = sampler.sample_vec(1000);
//!
//! let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(30))?;
//! let plot = Bar3d::new().histogram(hist).title("3D Histogram").build()?;
//!
//! plot.to_framebuffer()?; // raster
//! plot.to_svg()?;         // vector with labels
//! ```
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Scott, D. W. (1979). "On optimal and data-based histograms."
//! - Freedman, D., & Diaconis, P. (1981). "On the histogram as a density estimator."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for plot rendering.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles, projected quads).
pub mod geometry;

/// Orthographic 3D-to-2D view projection.
pub mod projection;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Pipeline Modules
// ============================================================================

/// Synthetic normal sample generation.
pub mod sample;

/// Joint 2D histogram binning.
pub mod histogram;

/// High-level plot types (3D bar chart).
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG, SVG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for hist3d operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use hist3d::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Point3, Quad, Rect};
    pub use crate::histogram::{BinStrategy, Histogram2d};
    pub use crate::output::{PngEncoder, SvgEncoder, TerminalEncoder, TerminalMode};
    pub use crate::plots::{Bar3d, BarPalette};
    pub use crate::projection::Projection;
    pub use crate::sample::{NormalSampler, SampleStats};
    pub use crate::scale::{ColorScale, LinearScale, Scale};
}

// ============================================================================
// Tests
// ============================================================================
