//! SVG output encoder.
//!
//! Provides both raster (embedded PNG) and vector SVG output. Vector
//! output carries the projected bar faces as polygons plus text labels,
//! preserving scalability for print and web.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for framebuffer and vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Filled polygon (projected bar faces)
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
    /// Embedded raster image (base64 PNG)
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: String,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Create from a framebuffer (embeds as raster image).
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        let mut encoder = Self::new(fb.width(), fb.height());
        encoder.background = None; // Image provides background

        // Encode framebuffer as PNG and embed
        let png_bytes = super::PngEncoder::to_bytes(fb)?;
        let base64_data = STANDARD.encode(&png_bytes);
        let data_uri = format!("data:image/png;base64,{base64_data}");

        encoder.elements.push(SvgElement::Image {
            x: 0.0,
            y: 0.0,
            width: fb.width() as f32,
            height: fb.height() as f32,
            data: data_uri,
        });

        Ok(encoder)
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add a filled polygon.
    #[must_use]
    pub fn polygon(
        mut self,
        points: &[(f32, f32)],
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add text with anchor.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        // SVG header
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        // Background
        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(&bg)
            );
        }

        // Elements
        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        // Close SVG
        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: &Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0
        )
    }
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                rgba_to_css(stroke)
            )
        }
        SvgElement::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
        } => {
            let points_str: String = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            let stroke_attr = stroke
                .map(|s| {
                    format!(
                        r#" stroke="{}" stroke-width="{}""#,
                        rgba_to_css(&s),
                        stroke_width
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<polygon points="{points_str}" fill="{}"{stroke_attr}/>"#,
                rgba_to_css(fill)
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            // Escape XML special characters
            let escaped_text = text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="sans-serif">{escaped_text}</text>"#,
                rgba_to_css(fill)
            )
        }
        SvgElement::Image {
            x,
            y,
            width,
            height,
            data,
        } => {
            format!(
                r#"<image x="{x}" y="{y}" width="{width}" height="{height}" xlink:href="{data}"/>"#
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_encoder_new() {
        let encoder = SvgEncoder::new(800, 600);
        let svg = encoder.render();

        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_svg_background() {
        let svg = SvgEncoder::new(100, 100).render();
        assert!(svg.contains("rgb(255,255,255)"));

        let transparent = SvgEncoder::new(100, 100).background(None).render();
        assert!(!transparent.contains("rgb(255,255,255)"));
    }

    #[test]
    fn test_svg_line() {
        let svg = SvgEncoder::new(100, 100)
            .line(0.0, 0.0, 50.0, 50.0, Rgba::BLACK, 2.0)
            .render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_svg_polygon() {
        let svg = SvgEncoder::new(100, 100)
            .polygon(
                &[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)],
                Rgba::BLUE,
                Some(Rgba::BLACK),
                1.0,
            )
            .render();
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("rgb(0,0,255)"));
        assert!(svg.contains("stroke="));
    }

    #[test]
    fn test_svg_polygon_no_stroke() {
        let svg = SvgEncoder::new(100, 100)
            .polygon(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)], Rgba::RED, None, 1.0)
            .render();
        assert!(svg.contains("<polygon"));
        assert!(!svg.contains("stroke="));
    }

    #[test]
    fn test_svg_text_escaping() {
        let svg = SvgEncoder::new(100, 100)
            .text_anchored(10.0, 10.0, "a < b & c", 12.0, Rgba::BLACK, TextAnchor::Middle)
            .render();
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_svg_from_framebuffer() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::GREEN);

        let svg = SvgEncoder::from_framebuffer(&fb)
            .expect("embedding should succeed")
            .render();
        assert!(svg.contains("<image"));
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_svg_write_to_file() {
        let dir = tempfile::tempdir().expect("tempdir creation should succeed");
        let path = dir.path().join("out.svg");

        SvgEncoder::new(50, 50)
            .line(0.0, 0.0, 50.0, 50.0, Rgba::BLACK, 1.0)
            .write_to_file(&path)
            .expect("write should succeed");

        let content = std::fs::read_to_string(&path).expect("file should exist");
        assert!(content.starts_with("<svg"));
        assert!(content.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_rgba_to_css_alpha() {
        let css = rgba_to_css(&Rgba::new(255, 0, 0, 128));
        assert!(css.starts_with("rgba(255,0,0,"));
    }
}
