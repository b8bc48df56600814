//! Color types for plot rendering.
//!
//! Provides an 8-bit RGBA color representation with the interpolation and
//! shading operations the bar renderer needs for depth cueing.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Steel blue, the default bar color.
    pub const STEEL_BLUE: Self = Self::new(70, 130, 180, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Darken toward black by `amount` (0.0 = unchanged, 1.0 = black).
    ///
    /// Alpha is preserved. Used to shade the side faces of 3D bars.
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        let a = self.a;
        self.lerp(Self::BLACK, amount).with_alpha(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::STEEL_BLUE, Rgba::rgb(70, 130, 180));
    }

    #[test]
    fn test_rgba_lerp() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        let mid = black.lerp(white, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_lerp_boundaries() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        // t=0 should give black
        assert_eq!(black.lerp(white, 0.0), black);
        // t=1 should give white
        assert_eq!(black.lerp(white, 1.0), white);
        // t clamped to [0, 1]
        assert_eq!(black.lerp(white, -0.5), black);
        assert_eq!(black.lerp(white, 1.5), white);
    }

    #[test]
    fn test_rgba_with_alpha() {
        let red = Rgba::RED;
        let semi_red = red.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        let restored = Rgba::from_array(arr);
        assert_eq!(restored, color);
    }

    #[test]
    fn test_darken() {
        let full = Rgba::rgb(200, 100, 50);
        let darker = full.darken(0.5);
        assert_eq!(darker.r, 100);
        assert_eq!(darker.g, 50);
        assert_eq!(darker.b, 25);
        // Alpha unaffected
        assert_eq!(darker.a, 255);
    }

    #[test]
    fn test_darken_preserves_alpha() {
        let semi = Rgba::new(200, 200, 200, 90);
        assert_eq!(semi.darken(0.25).a, 90);
    }

    #[test]
    fn test_darken_boundaries() {
        let c = Rgba::rgb(80, 90, 100);
        assert_eq!(c.darken(0.0), c);
        assert_eq!(c.darken(1.0), Rgba::BLACK);
    }

    #[test]
    fn test_rgba_default() {
        let color = Rgba::default();
        assert_eq!(color, Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_rgba_transparent() {
        assert_eq!(Rgba::TRANSPARENT, Rgba::new(0, 0, 0, 0));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }
}
