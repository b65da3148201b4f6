use crate::error::SceneError;
use crate::math::{Ray, Vec3};
use crate::random::Sampler;

use tracing::debug;

/// Below this, the look direction is treated as parallel to world up.
const DEGENERATE_BASIS_TOLERANCE: f64 = 1e-9;

/// Pinhole camera. The virtual screen sits at a distance from the eye where one world unit
/// spans one pixel, so pixel coordinates map directly onto the screen plane.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub direction: Vec3,
    pub angle: f64,
    /// Direction of increasing pixel columns.
    pub x: Vec3,
    /// Direction of increasing pixel rows, i.e. down the image.
    pub y: Vec3,
    /// Points from the screen back towards the eye.
    pub z: Vec3,
    pub screen_origin: Vec3,
    pub width: usize,
    pub height: usize,
}

impl Camera {
    /// `look_at` is a direction, not a target point. `angle` is in degrees.
    pub fn new(
        eye: Vec3,
        look_at: Vec3,
        angle: f64,
        width: usize,
        height: usize,
    ) -> Result<Camera, SceneError> {
        if !(angle.is_finite() && angle > 0.0 && angle < 90.0) {
            return Err(SceneError::InvalidFieldOfView(angle));
        }
        // a single row halves to zero, which puts the screen plane through the eye
        if width == 0 || height < 2 {
            return Err(SceneError::InvalidResolution { width, height });
        }
        if !look_at.is_finite() || look_at.norm_squared() == 0.0 {
            return Err(SceneError::ZeroLengthDirection);
        }
        let direction = look_at.normalized();
        // pixel resolution is halved on integers, matching the screen layout of whole pixels
        let half_width = (width / 2) as f64;
        let half_height = (height / 2) as f64;

        let depth = half_height / angle.to_radians().tan();
        let screen_center = eye + direction * depth;

        let z = -direction;
        let side = Vec3::Y.cross(z);
        if side.norm() < DEGENERATE_BASIS_TOLERANCE {
            return Err(SceneError::DegenerateCameraBasis);
        }
        let x = -side.normalized();
        let y = z.cross(x).normalized();

        let screen_origin = screen_center - y * half_height - x * half_width;
        debug!(?x, ?y, ?z, depth, ?screen_origin, "camera basis");

        Ok(Camera {
            eye,
            direction,
            angle,
            x,
            y,
            z,
            screen_origin,
            width,
            height,
        })
    }

    /// Ray from the eye through pixel (i, j), jittered uniformly within the pixel.
    pub fn get_screen_ray<S: Sampler + ?Sized>(&self, i: usize, j: usize, sampler: &mut S) -> Ray {
        let (offset_x, offset_y) = sampler.draw_2d().centered();
        self.get_ray_through(i as f64 + offset_x, j as f64 + offset_y)
    }

    /// Ray through a continuous screen coordinate, in pixel units.
    pub fn get_ray_through(&self, u: f64, v: f64) -> Ray {
        let ray_pos = self.screen_origin + self.x * u + self.y * v;
        Ray::new(self.eye, (ray_pos - self.eye).normalized())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::{RandomSampler, SeededSampler};

    const TOLERANCE: f64 = 1e-9;

    fn default_camera() -> Camera {
        Camera::new(Vec3::ORIGIN, Vec3::Z, 45.0, 400, 300).unwrap()
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.3, -0.2, 1.0),
            30.0,
            640,
            480,
        )
        .unwrap();
        for v in [camera.x, camera.y, camera.z] {
            assert!((v.norm() - 1.0).abs() < TOLERANCE, "{:?}", v);
        }
        assert!((camera.x * camera.y).abs() < TOLERANCE);
        assert!((camera.y * camera.z).abs() < TOLERANCE);
        assert!((camera.z * camera.x).abs() < TOLERANCE);
        assert!((camera.z + camera.direction).norm() < TOLERANCE);
    }

    #[test]
    fn test_default_orientation() {
        let camera = default_camera();
        // looking down +Z, rows go down the image
        assert!((camera.y - (-Vec3::Y)).norm() < TOLERANCE, "{:?}", camera.y);
        assert!((camera.x - Vec3::X).norm() < TOLERANCE, "{:?}", camera.x);
        let depth = 150.0 / 45f64.to_radians().tan();
        assert!((camera.screen_origin - Vec3::new(-200.0, 150.0, depth)).norm() < 1e-6);
    }

    #[test]
    fn test_center_ray_follows_look_direction() {
        let camera = default_camera();
        let ray = camera.get_ray_through(200.0, 150.0);
        assert_eq!(ray.origin, Vec3::ORIGIN);
        assert!((ray.direction - Vec3::Z).norm() < TOLERANCE, "{:?}", ray.direction);
    }

    #[test]
    fn test_top_row_points_up() {
        let camera = default_camera();
        let ray = camera.get_ray_through(200.0, 0.0);
        assert!(ray.direction.y() > 0.0);
        let angle = ray.direction.y().atan2(ray.direction.z()).to_degrees();
        assert!((angle - 45.0).abs() < 1e-6, "{}", angle);
    }

    #[test]
    fn test_jittered_rays_stay_within_pixel() {
        let camera = default_camera();
        let mut sampler = RandomSampler::new();
        let depth = camera.screen_origin.z();
        for _ in 0..100 {
            let ray = camera.get_screen_ray(10, 20, &mut sampler);
            assert!((ray.direction.norm() - 1.0).abs() < TOLERANCE);
            // back onto the screen plane, in pixel units
            let on_screen = ray.direction * (depth / ray.direction.z()) - camera.screen_origin;
            let (u, v) = (on_screen * camera.x, on_screen * camera.y);
            assert!((9.5..10.5).contains(&u), "{}", u);
            assert!((19.5..20.5).contains(&v), "{}", v);
        }
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let camera = default_camera();
        let mut sampler = SeededSampler::new(1);
        let a = camera.get_screen_ray(5, 5, &mut sampler);
        let b = camera.get_screen_ray(5, 5, &mut sampler);
        assert_ne!(a.direction, b.direction);
    }

    #[test]
    fn test_invalid_configurations() {
        assert_eq!(
            Camera::new(Vec3::ORIGIN, Vec3::Y, 45.0, 4, 3).unwrap_err(),
            SceneError::DegenerateCameraBasis
        );
        assert_eq!(
            Camera::new(Vec3::ORIGIN, -Vec3::Y * 2.0, 45.0, 4, 3).unwrap_err(),
            SceneError::DegenerateCameraBasis
        );
        assert_eq!(
            Camera::new(Vec3::ORIGIN, Vec3::ZERO, 45.0, 4, 3).unwrap_err(),
            SceneError::ZeroLengthDirection
        );
        assert_eq!(
            Camera::new(Vec3::ORIGIN, Vec3::Z, 90.0, 4, 3).unwrap_err(),
            SceneError::InvalidFieldOfView(90.0)
        );
        assert!(Camera::new(Vec3::ORIGIN, Vec3::Z, 0.0, 4, 3).is_err());
    }

    #[test]
    fn test_single_row_is_rejected() {
        assert_eq!(
            Camera::new(Vec3::ORIGIN, Vec3::Z, 45.0, 4, 1).unwrap_err(),
            SceneError::InvalidResolution { width: 4, height: 1 }
        );
        assert_eq!(
            Camera::new(Vec3::ORIGIN, Vec3::Z, 45.0, 0, 3).unwrap_err(),
            SceneError::InvalidResolution { width: 0, height: 3 }
        );
        let camera = Camera::new(Vec3::ORIGIN, Vec3::Z, 45.0, 4, 2).unwrap();
        assert_eq!((camera.width, camera.height), (4, 2));
        let ray = camera.get_ray_through(2.0, 1.0);
        assert!((ray.direction - Vec3::Z).norm() < TOLERANCE, "{:?}", ray.direction);
    }
}
