//! hist3d-demo - end-to-end 3D histogram demonstration.
//!
//! Draws three standard-normal sample vectors, bins x against y into a
//! 30x30 grid, renders the grid as a 3D bar chart, writes PNG and SVG
//! artifacts, and shows the chart inline in the terminal.

use std::error::Error;

use hist3d::histogram::{BinStrategy, Histogram2d};
use hist3d::output::{PngEncoder, TerminalEncoder};
use hist3d::plots::Bar3d;
use hist3d::sample::{NormalSampler, SampleStats};
use log::info;
use tracing_subscriber::{fmt, prelude::*};

/// Samples per vector.
const SAMPLES: usize = 1000;

/// Bins per histogram axis.
const BINS: usize = 30;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry().with(fmt::layer()).init();

    // Generate random data
    let mut sampler = NormalSampler::from_os_entropy();
    let x = sampler.sample_vec(SAMPLES);
    let y = sampler.sample_vec(SAMPLES);
    let z = sampler.sample_vec(SAMPLES);

    for (name, data) in [("x", &x), ("y", &y), ("z", &z)] {
        if let Some(stats) = SampleStats::from_slice(data) {
            info!("{name}: {stats}");
        }
    }

    // Bin x against y
    let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(BINS))?;
    info!(
        "binned {} pairs into a {}x{} grid (max cell count {})",
        hist.total(),
        hist.x_bins(),
        hist.y_bins(),
        hist.max_count()
    );

    // Render the 3D bar chart
    let plot = Bar3d::new()
        .histogram(hist)
        .title("3D Histogram")
        .x_label("X Axis")
        .y_label("Y Axis")
        .z_label("Z Axis")
        .build()?;

    let fb = plot.to_framebuffer()?;
    PngEncoder::write_to_file(&fb, "hist3d.png")?;
    plot.to_svg()?.write_to_file("hist3d.svg")?;
    info!("wrote hist3d.png and hist3d.svg");

    // Show the plot
    TerminalEncoder::new().print(&fb);

    Ok(())
}
