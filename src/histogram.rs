//! Joint 2D histogram binning.
//!
//! Bins two sample vectors of equal length into a rectangular grid of
//! counts. Supports automatic per-axis binning with Sturges, Scott, and
//! Freedman-Diaconis rules as well as a fixed bin count.

use crate::error::{Error, Result};

/// Binning strategy, applied independently per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinStrategy {
    /// Sturges' rule: ceil(log2(n) + 1)
    #[default]
    Sturges,
    /// Scott's rule: 3.5 * std / n^(1/3)
    Scott,
    /// Freedman-Diaconis rule: 2 * IQR / n^(1/3)
    FreedmanDiaconis,
    /// Fixed number of bins
    Fixed(usize),
}

impl BinStrategy {
    /// Number of bins this strategy selects for the given axis data.
    ///
    /// Always at least 1.
    #[must_use]
    pub fn bin_count(&self, data: &[f32]) -> usize {
        let n = data.len();
        if n == 0 {
            return 1;
        }

        match self {
            Self::Sturges => sturges(n),
            Self::Scott => {
                let std = std_dev(data);
                let width = 3.5 * std / (n as f32).powf(1.0 / 3.0);
                let range = data_range(data);
                if width > 0.0 {
                    (range / width).ceil() as usize
                } else {
                    sturges(n)
                }
            }
            Self::FreedmanDiaconis => {
                let iqr = iqr(data);
                let width = 2.0 * iqr / (n as f32).powf(1.0 / 3.0);
                let range = data_range(data);
                if width > 0.0 {
                    (range / width).ceil() as usize
                } else {
                    sturges(n)
                }
            }
            Self::Fixed(bins) => *bins,
        }
        .max(1)
    }
}

fn sturges(n: usize) -> usize {
    ((n as f32).log2().ceil() + 1.0) as usize
}

fn data_range(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    let min = data.iter().copied().fold(f32::INFINITY, f32::min);
    let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    max - min
}

fn std_dev(data: &[f32]) -> f32 {
    if data.len() < 2 {
        return 0.0;
    }
    let mean = data.iter().sum::<f32>() / data.len() as f32;
    let variance =
        data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (data.len() - 1) as f32;
    variance.sqrt()
}

fn iqr(data: &[f32]) -> f32 {
    if data.len() < 4 {
        return data_range(data);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q1_idx = sorted.len() / 4;
    let q3_idx = 3 * sorted.len() / 4;
    sorted[q3_idx] - sorted[q1_idx]
}

/// A 2D grid of counts over jointly binned (x, y) pairs.
///
/// Counts are stored x-major: the count for x-bin `ix` and y-bin `iy`
/// sits at `ix * y_bins + iy`. Edge arrays have one more entry than the
/// bin count on their axis and span the data extent (widened when the
/// extent is too narrow to resolve into distinct edges).
///
/// Invariant: the counts sum to the number of binned pairs.
///
/// # Example
///
/// ```
/// use hist3d::histogram::{BinStrategy, Histogram2d};
///
/// let x = vec![0.0, 1.0, 1.0, 2.0];
/// let y = vec![0.0, 1.0, 1.0, 2.0];
/// let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(2)).unwrap();
/// assert_eq!(hist.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram2d {
    counts: Vec<u32>,
    x_edges: Vec<f32>,
    y_edges: Vec<f32>,
    x_bins: usize,
    y_bins: usize,
    total: u64,
}

impl Histogram2d {
    /// Bin paired samples into a 2D grid.
    ///
    /// Pairs with a non-finite coordinate are excluded (a float-to-index
    /// cast would otherwise silently bin them at zero). Values equal to
    /// the maximum edge count toward the last bin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the vectors differ in
    /// length and [`Error::EmptyData`] if no finite pair remains.
    pub fn from_data(x: &[f32], y: &[f32], strategy: BinStrategy) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::DataLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let pairs: Vec<(f32, f32)> = x
            .iter()
            .zip(y.iter())
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .map(|(a, b)| (*a, *b))
            .collect();

        if pairs.is_empty() {
            return Err(Error::EmptyData);
        }

        let xs: Vec<f32> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f32> = pairs.iter().map(|p| p.1).collect();

        let x_bins = strategy.bin_count(&xs);
        let y_bins = strategy.bin_count(&ys);

        let (x_min, x_max) = axis_extent(&xs, x_bins);
        let (y_min, y_max) = axis_extent(&ys, y_bins);

        let x_edges = edges(x_min, x_max, x_bins);
        let y_edges = edges(y_min, y_max, y_bins);

        let mut counts = vec![0u32; x_bins * y_bins];
        for &(px, py) in &pairs {
            let ix = bin_index(px, x_min, x_max, x_bins);
            let iy = bin_index(py, y_min, y_max, y_bins);
            counts[ix * y_bins + iy] += 1;
        }

        Ok(Self {
            counts,
            x_edges,
            y_edges,
            x_bins,
            y_bins,
            total: pairs.len() as u64,
        })
    }

    /// The count grid, x-major.
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Count in the cell for x-bin `ix` and y-bin `iy`.
    #[must_use]
    pub fn count_at(&self, ix: usize, iy: usize) -> u32 {
        self.counts[ix * self.y_bins + iy]
    }

    /// Bin edges along x (length `x_bins() + 1`, strictly increasing).
    #[must_use]
    pub fn x_edges(&self) -> &[f32] {
        &self.x_edges
    }

    /// Bin edges along y (length `y_bins() + 1`, strictly increasing).
    #[must_use]
    pub fn y_edges(&self) -> &[f32] {
        &self.y_edges
    }

    /// Number of bins along x.
    #[must_use]
    pub const fn x_bins(&self) -> usize {
        self.x_bins
    }

    /// Number of bins along y.
    #[must_use]
    pub const fn y_bins(&self) -> usize {
        self.y_bins
    }

    /// Total number of binned pairs.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Largest single-cell count.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Data extent for one axis, widened when the span cannot resolve into
/// `bins` distinct f32 edges (constant data being the common case).
fn axis_extent(data: &[f32], bins: usize) -> (f32, f32) {
    let min = data.iter().copied().fold(f32::INFINITY, f32::min);
    let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let magnitude = min.abs().max(max.abs()).max(1.0);
    let min_span = magnitude * f32::EPSILON * 2.0 * bins as f32;

    if max - min >= min_span {
        (min, max)
    } else {
        let pad = (min_span / 2.0).max(0.5);
        (min - pad, max + pad)
    }
}

/// Evenly spaced bin edges with exact endpoints.
fn edges(min: f32, max: f32, bins: usize) -> Vec<f32> {
    (0..=bins)
        .map(|i| {
            let t = i as f32 / bins as f32;
            min + (max - min) * t
        })
        .collect()
}

/// Bin index for a value, clamping the maximum edge into the last bin.
fn bin_index(value: f32, min: f32, max: f32, bins: usize) -> usize {
    let width = (max - min) / bins as f32;
    let idx = ((value - min) / width).floor() as usize;
    idx.min(bins - 1)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Invariant: counts sum to the number of finite input pairs.
        #[test]
        fn prop_counts_sum_to_total(
            data in prop::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 1..500),
            bins in 1usize..64
        ) {
            let x: Vec<f32> = data.iter().map(|p| p.0).collect();
            let y: Vec<f32> = data.iter().map(|p| p.1).collect();

            let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(bins))
                .expect("finite non-empty data must bin");

            let sum: u64 = hist.counts().iter().map(|&c| u64::from(c)).sum();
            prop_assert_eq!(sum, data.len() as u64);
            prop_assert_eq!(hist.total(), data.len() as u64);
        }

        /// Invariant: edge arrays are strictly increasing with bins + 1 entries.
        #[test]
        fn prop_edges_well_formed(
            data in prop::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 2..200),
            bins in 1usize..32
        ) {
            let x: Vec<f32> = data.iter().map(|p| p.0).collect();
            let y: Vec<f32> = data.iter().map(|p| p.1).collect();

            let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(bins))
                .expect("finite non-empty data must bin");

            prop_assert_eq!(hist.x_edges().len(), hist.x_bins() + 1);
            prop_assert_eq!(hist.y_edges().len(), hist.y_bins() + 1);
            for w in hist.x_edges().windows(2) {
                prop_assert!(w[1] > w[0], "x edges not increasing: {} -> {}", w[0], w[1]);
            }
            for w in hist.y_edges().windows(2) {
                prop_assert!(w[1] > w[0], "y edges not increasing: {} -> {}", w[0], w[1]);
            }
        }
    }
}
