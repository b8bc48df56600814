//! 3D bar chart over a 2D histogram grid.
//!
//! Renders one height-encoded bar per histogram cell through an
//! orthographic azimuth/elevation projection. Bars are drawn
//! back-to-front by center depth (painter's algorithm) with per-face
//! shading for depth cueing.

use std::cmp::Ordering;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Point3, Quad, Rect};
use crate::histogram::Histogram2d;
use crate::output::{SvgElement, SvgEncoder, TextAnchor};
use crate::projection::Projection;
use crate::render::{draw_line_aa, draw_quad_outline, fill_quad};
use crate::scale::{ColorScale, LinearScale, Scale};

/// Height of the tallest bar relative to the unit floor extent.
const Z_SCALE: f32 = 0.75;

/// Shading factor for side faces whose outward normal points along x.
const SHADE_X: f32 = 0.18;

/// Shading factor for side faces whose outward normal points along y.
const SHADE_Y: f32 = 0.32;

/// Shading factor for face edge outlines.
const SHADE_EDGE: f32 = 0.55;

/// Height-mapped color palette for bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPalette {
    /// Viridis (perceptually uniform, colorblind-safe).
    #[default]
    Viridis,
    /// Sequential blues.
    Blues,
    /// Heat (black-red-yellow-white).
    Heat,
    /// Greyscale.
    Greyscale,
}

impl BarPalette {
    fn color_scale(self, max_count: u32) -> Option<ColorScale> {
        let domain = (0.0, max_count.max(1) as f32);
        match self {
            Self::Viridis => ColorScale::viridis(domain),
            Self::Blues => ColorScale::blues(domain),
            Self::Heat => ColorScale::heat(domain),
            Self::Greyscale => ColorScale::greyscale(domain),
        }
    }
}

/// One projected bar, ready to draw.
struct SceneBar {
    depth: f32,
    /// Visible faces in draw order, with fill colors.
    faces: Vec<(Quad, Rgba)>,
    edge_color: Rgba,
}

/// Projected scene: frame lines plus depth-sorted bars.
struct Scene {
    frame: Vec<(Point, Point)>,
    bars: Vec<SceneBar>,
}

/// Builder for creating 3D bar charts.
///
/// # Example
///
/// ```
/// use hist3d::histogram::{BinStrategy, Histogram2d};
/// use hist3d::plots::Bar3d;
///
/// let x = vec![0.0, 1.0, 1.0, 2.0];
/// let y = vec![0.0, 1.0, 1.0, 2.0];
/// let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(4)).unwrap();
///
/// let plot = Bar3d::new().histogram(hist).build().unwrap();
/// let fb = plot.to_framebuffer().unwrap();
/// assert_eq!(fb.width(), 800);
/// ```
#[derive(Debug, Clone)]
pub struct Bar3d {
    histogram: Option<Histogram2d>,
    color: Rgba,
    palette: Option<BarPalette>,
    projection: Projection,
    width: u32,
    height: u32,
    margin: u32,
    footprint: f32,
    show_axes: bool,
    title: String,
    x_label: String,
    y_label: String,
    z_label: String,
}

impl Default for Bar3d {
    fn default() -> Self {
        Self::new()
    }
}

impl Bar3d {
    /// Create a new 3D bar chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            histogram: None,
            color: Rgba::STEEL_BLUE,
            palette: None,
            projection: Projection::default(),
            width: 800,
            height: 600,
            margin: 40,
            footprint: 0.5,
            show_axes: true,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            z_label: String::new(),
        }
    }

    /// Set the histogram to render.
    #[must_use]
    pub fn histogram(mut self, hist: Histogram2d) -> Self {
        self.histogram = Some(hist);
        self
    }

    /// Set a single bar color (clears any palette).
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self.palette = None;
        self
    }

    /// Color bars by height with the given palette.
    #[must_use]
    pub fn palette(mut self, palette: BarPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Set the view projection.
    #[must_use]
    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the plot area.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the bar footprint as a fraction of the bin width.
    ///
    /// Bars are centered in their cell. The value is clamped to
    /// (0.05, 1.0]; the default of 0.5 leaves half the cell as gutter.
    #[must_use]
    pub fn footprint(mut self, fraction: f32) -> Self {
        self.footprint = fraction.clamp(0.05, 1.0);
        self
    }

    /// Show or hide the floor and axis frame.
    #[must_use]
    pub fn axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }

    /// Set the chart title (vector output).
    #[must_use]
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set the x-axis label (vector output).
    #[must_use]
    pub fn x_label<S: Into<String>>(mut self, label: S) -> Self {
        self.x_label = label.into();
        self
    }

    /// Set the y-axis label (vector output).
    #[must_use]
    pub fn y_label<S: Into<String>>(mut self, label: S) -> Self {
        self.y_label = label.into();
        self
    }

    /// Set the z-axis label (vector output).
    #[must_use]
    pub fn z_label<S: Into<String>>(mut self, label: S) -> Self {
        self.z_label = label.into();
        self
    }

    /// Build and validate the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if no histogram was supplied or the dimensions
    /// leave no plot area inside the margins.
    pub fn build(self) -> Result<Self> {
        if self.histogram.is_none() {
            return Err(Error::EmptyData);
        }

        if self.width == 0
            || self.height == 0
            || self.width <= 2 * self.margin
            || self.height <= 2 * self.margin
        {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        Ok(self)
    }

    /// Number of bars this chart renders: x_bins * y_bins.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.histogram
            .as_ref()
            .map_or(0, |h| h.x_bins() * h.y_bins())
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be created or the
    /// projected scene degenerates to a point.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let scene = self.project_scene()?;

        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(Rgba::WHITE);

        let frame_color = Rgba::rgb(180, 180, 180);
        for (a, b) in &scene.frame {
            draw_line_aa(&mut fb, a.x, a.y, b.x, b.y, frame_color);
        }

        for bar in &scene.bars {
            for (quad, fill) in &bar.faces {
                fill_quad(&mut fb, quad, *fill);
                draw_quad_outline(&mut fb, quad, bar.edge_color);
            }
        }

        log::debug!(
            "rendered {} bars onto {}x{} framebuffer",
            scene.bars.len(),
            self.width,
            self.height
        );

        Ok(fb)
    }

    /// Render to a vector SVG document with labels and title.
    ///
    /// # Errors
    ///
    /// Returns an error if the projected scene degenerates to a point.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        let scene = self.project_scene()?;

        let mut svg = SvgEncoder::new(self.width, self.height).background(Some(Rgba::WHITE));

        let frame_color = Rgba::rgb(180, 180, 180);
        for (a, b) in &scene.frame {
            svg.add_element(SvgElement::Line {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
                stroke: frame_color,
                stroke_width: 1.0,
            });
        }

        for bar in &scene.bars {
            for (quad, fill) in &bar.faces {
                svg.add_element(SvgElement::Polygon {
                    points: quad.points.iter().map(|p| (p.x, p.y)).collect(),
                    fill: *fill,
                    stroke: Some(bar.edge_color),
                    stroke_width: 0.5,
                });
            }
        }

        let w = self.width as f32;
        let h = self.height as f32;
        let m = self.margin as f32;

        if !self.title.is_empty() {
            svg.add_element(SvgElement::Text {
                x: w / 2.0,
                y: m * 0.6,
                text: self.title.clone(),
                font_size: 16.0,
                fill: Rgba::BLACK,
                anchor: TextAnchor::Middle,
            });
        }
        if !self.x_label.is_empty() {
            svg.add_element(SvgElement::Text {
                x: w * 0.25,
                y: h - m * 0.25,
                text: self.x_label.clone(),
                font_size: 12.0,
                fill: Rgba::BLACK,
                anchor: TextAnchor::Middle,
            });
        }
        if !self.y_label.is_empty() {
            svg.add_element(SvgElement::Text {
                x: w * 0.75,
                y: h - m * 0.25,
                text: self.y_label.clone(),
                font_size: 12.0,
                fill: Rgba::BLACK,
                anchor: TextAnchor::Middle,
            });
        }
        if !self.z_label.is_empty() {
            svg.add_element(SvgElement::Text {
                x: m * 0.5,
                y: h / 2.0,
                text: self.z_label.clone(),
                font_size: 12.0,
                fill: Rgba::BLACK,
                anchor: TextAnchor::Middle,
            });
        }

        Ok(svg)
    }

    /// Project the histogram into depth-sorted screen-space bars.
    fn project_scene(&self) -> Result<Scene> {
        let hist = self.histogram.as_ref().ok_or(Error::EmptyData)?;

        let x_edges = hist.x_edges();
        let y_edges = hist.y_edges();
        let max_count = hist.max_count().max(1);

        let color_scale = self.palette.and_then(|p| p.color_scale(hist.max_count()));

        // Normalize data coordinates into the unit box so the view
        // transform is independent of the data's units.
        let x_span = x_edges[x_edges.len() - 1] - x_edges[0];
        let y_span = y_edges[y_edges.len() - 1] - y_edges[0];
        let unit_x = |e: f32| (e - x_edges[0]) / x_span;
        let unit_y = |e: f32| (e - y_edges[0]) / y_span;

        // Map the projected bounding box of the world onto the plot area.
        let area = Rect::new(
            self.margin as f32,
            self.margin as f32,
            (self.width - 2 * self.margin) as f32,
            (self.height - 2 * self.margin) as f32,
        );

        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, Z_SCALE),
            Point3::new(1.0, 0.0, Z_SCALE),
            Point3::new(1.0, 1.0, Z_SCALE),
            Point3::new(0.0, 1.0, Z_SCALE),
        ];

        let mut sx_min = f32::INFINITY;
        let mut sx_max = f32::NEG_INFINITY;
        let mut sy_min = f32::INFINITY;
        let mut sy_max = f32::NEG_INFINITY;
        for corner in corners {
            let (p, _) = self.projection.project(corner);
            sx_min = sx_min.min(p.x);
            sx_max = sx_max.max(p.x);
            sy_min = sy_min.min(p.y);
            sy_max = sy_max.max(p.y);
        }

        let to_px_x = LinearScale::new((sx_min, sx_max), (area.x, area.x + area.width))?;
        // Screen y grows upward, raster y grows downward.
        let to_px_y = LinearScale::new((sy_min, sy_max), (area.y + area.height, area.y))?;

        let to_pixel = |p: Point3| -> (Point, f32) {
            let (s, depth) = self.projection.project(p);
            (Point::new(to_px_x.scale(s.x), to_px_y.scale(s.y)), depth)
        };

        let view = self.projection.view_direction();

        let mut bars = Vec::with_capacity(hist.x_bins() * hist.y_bins());
        for ix in 0..hist.x_bins() {
            for iy in 0..hist.y_bins() {
                let count = hist.count_at(ix, iy);

                let cell_x0 = unit_x(x_edges[ix]);
                let cell_x1 = unit_x(x_edges[ix + 1]);
                let cell_y0 = unit_y(y_edges[iy]);
                let cell_y1 = unit_y(y_edges[iy + 1]);

                // Centered footprint inside the cell.
                let inset_x = (cell_x1 - cell_x0) * (1.0 - self.footprint) / 2.0;
                let inset_y = (cell_y1 - cell_y0) * (1.0 - self.footprint) / 2.0;
                let x0 = cell_x0 + inset_x;
                let x1 = cell_x1 - inset_x;
                let y0 = cell_y0 + inset_y;
                let y1 = cell_y1 - inset_y;

                let z = count as f32 / max_count as f32 * Z_SCALE;

                let base = color_scale
                    .as_ref()
                    .map_or(self.color, |scale| scale.scale(count as f32));

                let center = Point3::new((x0 + x1) / 2.0, (y0 + y1) / 2.0, z / 2.0);
                let depth = self.projection.depth(center);

                let faces = bar_faces(x0, x1, y0, y1, z, base, view, &to_pixel);

                bars.push(SceneBar {
                    depth,
                    faces,
                    edge_color: base.darken(SHADE_EDGE),
                });
            }
        }

        // Painter's algorithm: far bars first (depth grows toward the
        // camera), keyed on the bar center like the original's average
        // z-sorting.
        bars.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));

        let mut frame = Vec::new();
        if self.show_axes {
            let floor = [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ];
            for i in 0..4 {
                let (a, _) = to_pixel(floor[i]);
                let (b, _) = to_pixel(floor[(i + 1) % 4]);
                frame.push((a, b));
            }
            let (z0, _) = to_pixel(Point3::new(0.0, 0.0, 0.0));
            let (z1, _) = to_pixel(Point3::new(0.0, 0.0, Z_SCALE));
            frame.push((z0, z1));
        }

        Ok(Scene { frame, bars })
    }
}

/// Visible faces of one bar, in draw order, with shaded fill colors.
#[allow(clippy::too_many_arguments)]
fn bar_faces(
    x0: f32,
    x1: f32,
    y0: f32,
    y1: f32,
    z: f32,
    base: Rgba,
    view: Point3,
    to_pixel: &dyn Fn(Point3) -> (Point, f32),
) -> Vec<(Quad, Rgba)> {
    let px = |p: Point3| to_pixel(p).0;

    let b00 = Point3::new(x0, y0, 0.0);
    let b10 = Point3::new(x1, y0, 0.0);
    let b11 = Point3::new(x1, y1, 0.0);
    let b01 = Point3::new(x0, y1, 0.0);
    let t00 = Point3::new(x0, y0, z);
    let t10 = Point3::new(x1, y0, z);
    let t11 = Point3::new(x1, y1, z);
    let t01 = Point3::new(x0, y1, z);

    let mut faces = Vec::with_capacity(3);

    if z > 0.0 {
        // Side faces: (bottom edge, top edge) per wall, culled against
        // the view direction via the wall's outward normal.
        let sides = [
            // (normal, corners)
            (Point3::new(0.0, -1.0, 0.0), [b00, b10, t10, t00], SHADE_Y),
            (Point3::new(1.0, 0.0, 0.0), [b10, b11, t11, t10], SHADE_X),
            (Point3::new(0.0, 1.0, 0.0), [b11, b01, t01, t11], SHADE_Y),
            (Point3::new(-1.0, 0.0, 0.0), [b01, b00, t00, t01], SHADE_X),
        ];

        for (normal, corners, shade) in sides {
            let facing = normal.x * view.x + normal.y * view.y + normal.z * view.z;
            if facing > 0.0 {
                let quad = Quad::new([px(corners[0]), px(corners[1]), px(corners[2]), px(corners[3])]);
                faces.push((quad, base.darken(shade)));
            }
        }
    }

    // Top face last; for zero-height bars it is the whole footprint.
    if view.z > 0.0 {
        let quad = Quad::new([px(t00), px(t10), px(t11), px(t01)]);
        faces.push((quad, base));
    }

    faces
}

impl batuta_common::display::WithDimensions for Bar3d {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
