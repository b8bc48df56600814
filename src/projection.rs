//! Orthographic 3D-to-2D view projection.
//!
//! Maps world-space points to screen-space coordinates plus a scalar
//! depth used for painter's-algorithm ordering. The view is described by
//! an azimuth rotation around the vertical axis and an elevation angle
//! above the ground plane, the conventional parameterization for 3D
//! statistical plots.

use crate::geometry::{Point, Point3};

/// Orthographic camera defined by azimuth and elevation angles.
///
/// Screen x increases to the right, screen y increases upward (callers
/// mapping to raster coordinates must flip y). Depth increases toward
/// the camera, so surfaces should be drawn in ascending depth order.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    azimuth: f32,
    elevation: f32,
    sin_az: f32,
    cos_az: f32,
    sin_el: f32,
    cos_el: f32,
}

impl Projection {
    /// Default azimuth in degrees.
    pub const DEFAULT_AZIMUTH: f32 = -60.0;
    /// Default elevation in degrees.
    pub const DEFAULT_ELEVATION: f32 = 30.0;

    /// Create a projection from view angles in degrees.
    #[must_use]
    pub fn new(azimuth_deg: f32, elevation_deg: f32) -> Self {
        let az = azimuth_deg.to_radians();
        let el = elevation_deg.to_radians();
        Self {
            azimuth: azimuth_deg,
            elevation: elevation_deg,
            sin_az: az.sin(),
            cos_az: az.cos(),
            sin_el: el.sin(),
            cos_el: el.cos(),
        }
    }

    /// Azimuth angle in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation angle in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Unit vector pointing from the scene toward the camera.
    #[must_use]
    pub fn view_direction(&self) -> Point3 {
        Point3::new(
            self.cos_el * self.cos_az,
            self.cos_el * self.sin_az,
            self.sin_el,
        )
    }

    /// Project a world-space point.
    ///
    /// Returns the screen-space point (y up) and the depth along the
    /// view direction. Larger depth means closer to the camera.
    #[must_use]
    pub fn project(&self, p: Point3) -> (Point, f32) {
        let screen_x = -p.x * self.sin_az + p.y * self.cos_az;
        let screen_y =
            -p.x * self.sin_el * self.cos_az - p.y * self.sin_el * self.sin_az + p.z * self.cos_el;
        let depth =
            p.x * self.cos_el * self.cos_az + p.y * self.cos_el * self.sin_az + p.z * self.sin_el;
        (Point::new(screen_x, screen_y), depth)
    }

    /// Depth of a world-space point without the screen coordinates.
    #[must_use]
    pub fn depth(&self, p: Point3) -> f32 {
        self.project(p).1
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AZIMUTH, Self::DEFAULT_ELEVATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_angles() {
        let proj = Projection::default();
        assert!((proj.azimuth() - Projection::DEFAULT_AZIMUTH).abs() < f32::EPSILON);
        assert!((proj.elevation() - Projection::DEFAULT_ELEVATION).abs() < f32::EPSILON);
    }

    #[test]
    fn test_origin_projects_to_origin() {
        let proj = Projection::default();
        let (p, depth) = proj.project(Point3::ORIGIN);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!(depth.abs() < 1e-6);
    }

    #[test]
    fn test_higher_points_project_higher() {
        // With positive elevation, raising z raises the screen y.
        let proj = Projection::default();
        let (low, _) = proj.project(Point3::new(0.3, 0.4, 0.0));
        let (high, _) = proj.project(Point3::new(0.3, 0.4, 1.0));
        assert!(high.y > low.y);
    }

    #[test]
    fn test_depth_increases_toward_camera() {
        // With positive elevation, higher points are nearer the camera.
        let proj = Projection::default();
        let d0 = proj.depth(Point3::new(0.0, 0.0, 0.0));
        let d1 = proj.depth(Point3::new(0.0, 0.0, 1.0));
        assert!(d1 > d0);
    }

    #[test]
    fn test_projection_is_linear() {
        let proj = Projection::new(-45.0, 20.0);
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-2.0, 0.5, 1.0);
        let sum = Point3::new(a.x + b.x, a.y + b.y, a.z + b.z);

        let (pa, da) = proj.project(a);
        let (pb, db) = proj.project(b);
        let (ps, ds) = proj.project(sum);

        assert!((ps.x - (pa.x + pb.x)).abs() < 1e-5);
        assert!((ps.y - (pa.y + pb.y)).abs() < 1e-5);
        assert!((ds - (da + db)).abs() < 1e-5);
    }

    #[test]
    fn test_top_view() {
        // Looking straight down, x/y map to the screen plane and z is
        // pure depth.
        let proj = Projection::new(0.0, 90.0);
        let (p, depth) = proj.project(Point3::new(0.0, 0.0, 2.0));
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-5);
        assert!((depth - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_view_direction_is_unit() {
        let proj = Projection::new(-60.0, 30.0);
        let v = proj.view_direction();
        let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }
}
