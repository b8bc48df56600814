//! Pixel Verification Tests - full pipeline checks
//!
//! Exercises the whole sample -> bin -> render -> encode pipeline and
//! verifies the observable properties of the output: totals, grid
//! shape, determinism, and that rendering actually puts ink on canvas.

#![allow(clippy::unwrap_used)]

use hist3d::prelude::*;

const SAMPLES: usize = 1000;
const BINS: usize = 30;

fn demo_histogram(seed: u64) -> Histogram2d {
    let mut sampler = NormalSampler::seeded(seed);
    let x = sampler.sample_vec(SAMPLES);
    let y = sampler.sample_vec(SAMPLES);
    Histogram2d::from_data(&x, &y, BinStrategy::Fixed(BINS)).expect("demo data must bin")
}

// ============================================================================
// PIXEL VERIFICATION: AGGREGATION
// Every input pair MUST be counted exactly once.
// ============================================================================

#[test]
fn pixel_histogram_total_equals_sample_count() {
    let hist = demo_histogram(42);

    assert_eq!(
        hist.total(),
        SAMPLES as u64,
        "PIXEL FAIL: histogram total {} != sample count {}",
        hist.total(),
        SAMPLES
    );

    let sum: u64 = hist.counts().iter().map(|&c| u64::from(c)).sum();
    assert_eq!(
        sum, SAMPLES as u64,
        "PIXEL FAIL: cell counts sum {sum} != sample count {SAMPLES}"
    );
}

#[test]
fn pixel_histogram_grid_is_bins_squared() {
    let hist = demo_histogram(42);

    assert_eq!(hist.x_bins(), BINS);
    assert_eq!(hist.y_bins(), BINS);
    assert_eq!(
        hist.counts().len(),
        BINS * BINS,
        "PIXEL FAIL: grid has {} cells, expected {}",
        hist.counts().len(),
        BINS * BINS
    );
    assert_eq!(hist.x_edges().len(), BINS + 1);
    assert_eq!(hist.y_edges().len(), BINS + 1);
}

#[test]
fn pixel_normal_samples_cluster_in_center() {
    // Standard normal data must pile up near the middle of the grid:
    // the densest cell should hold more than one sample.
    let hist = demo_histogram(7);
    assert!(
        hist.max_count() > 1,
        "PIXEL FAIL: max cell count {} suggests no clustering",
        hist.max_count()
    );
}

// ============================================================================
// PIXEL VERIFICATION: RENDERING
// One bar per cell; rendering must change pixels; same inputs must
// produce identical bytes.
// ============================================================================

#[test]
fn pixel_bar_count_is_grid_size() {
    let plot = Bar3d::new().histogram(demo_histogram(42)).build().unwrap();
    assert_eq!(
        plot.bar_count(),
        BINS * BINS,
        "PIXEL FAIL: {} bars rendered, expected {}",
        plot.bar_count(),
        BINS * BINS
    );
}

#[test]
fn pixel_render_puts_ink_on_canvas() {
    let plot = Bar3d::new()
        .histogram(demo_histogram(42))
        .dimensions(400, 300)
        .build()
        .unwrap();

    let fb = plot.to_framebuffer().unwrap();
    let (min, max, mean) = fb.luminance_stats();

    assert!(min < 240.0, "PIXEL FAIL: canvas is blank (min luminance {min})");
    assert!(max > 250.0, "PIXEL FAIL: white background missing (max luminance {max})");
    assert!(
        mean > 100.0,
        "PIXEL FAIL: canvas mostly dark (mean luminance {mean}), background lost"
    );
}

#[test]
fn pixel_fixed_seed_is_deterministic_end_to_end() {
    let render = |seed: u64| {
        let plot = Bar3d::new()
            .histogram(demo_histogram(seed))
            .dimensions(320, 240)
            .build()
            .unwrap();
        PngEncoder::to_bytes(&plot.to_framebuffer().unwrap()).unwrap()
    };

    let first = render(123);
    let second = render(123);
    assert_eq!(first, second, "PIXEL FAIL: same seed produced different PNG bytes");

    let other = render(124);
    assert_ne!(other, first, "PIXEL FAIL: different seeds produced identical PNG bytes");
}

#[test]
fn pixel_histograms_replay_with_seed() {
    assert_eq!(
        demo_histogram(99),
        demo_histogram(99),
        "PIXEL FAIL: same seed produced different histogram grids"
    );
}

// ============================================================================
// PIXEL VERIFICATION: OUTPUT ENCODERS
// ============================================================================

#[test]
fn pixel_png_artifact_written_to_disk() {
    let plot = Bar3d::new()
        .histogram(demo_histogram(42))
        .dimensions(160, 120)
        .build()
        .unwrap();
    let fb = plot.to_framebuffer().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hist3d.png");
    PngEncoder::write_to_file(&fb, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(
        &bytes[0..8],
        &[137, 80, 78, 71, 13, 10, 26, 10],
        "PIXEL FAIL: artifact is not a PNG"
    );
}

#[test]
fn pixel_svg_artifact_carries_labels_and_bars() {
    let plot = Bar3d::new()
        .histogram(demo_histogram(42))
        .dimensions(160, 120)
        .title("3D Histogram")
        .x_label("X Axis")
        .y_label("Y Axis")
        .z_label("Z Axis")
        .build()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hist3d.svg");
    plot.to_svg().unwrap().write_to_file(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("3D Histogram"));
    assert!(svg.contains("X Axis"));
    assert!(svg.contains("Y Axis"));
    assert!(svg.contains("Z Axis"));
    assert!(
        svg.matches("<polygon").count() >= BINS * BINS,
        "PIXEL FAIL: SVG has fewer face polygons than bars"
    );
}

#[test]
fn pixel_terminal_render_shows_structure() {
    let plot = Bar3d::new()
        .histogram(demo_histogram(42))
        .dimensions(320, 240)
        .build()
        .unwrap();
    let fb = plot.to_framebuffer().unwrap();

    let text = TerminalEncoder::new()
        .mode(TerminalMode::Ascii)
        .width(60)
        .render(&fb);

    // Background and bars must map to different ramp characters.
    let unique: std::collections::HashSet<char> =
        text.chars().filter(|c| *c != '\n').collect();
    assert!(
        unique.len() >= 2,
        "PIXEL FAIL: terminal output is uniform ({unique:?})"
    );
}
