use ordered_float::OrderedFloat;
use tracing::warn;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::geometry::{HitRecord, Primitive, Sphere};
use crate::math::{Color, Ray};
use crate::shading::Shading;

/// Immutable for the duration of a render, so it can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub spheres: Vec<Sphere>,
    pub shading: Shading,
}

impl Scene {
    pub fn new(camera: Camera, spheres: Vec<Sphere>, shading: Shading) -> Result<Scene, SceneError> {
        for (index, sphere) in spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidCenter { index });
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if sphere.contains(camera.eye) {
                warn!(index, "camera eye is inside sphere, it will not be visible");
            }
        }
        Ok(Scene {
            camera,
            spheres,
            shading,
        })
    }

    /// Closest sphere along the ray. On equal distances the earlier sphere in the list wins.
    pub fn nearest_hit(&self, ray: Ray) -> Option<(&Sphere, HitRecord)> {
        self.spheres
            .iter()
            .filter_map(|sphere| sphere.intersect(ray).map(|hit| (sphere, hit)))
            .min_by_key(|(_, hit)| OrderedFloat(hit.time))
    }

    pub fn resolve_color(&self, ray: Ray) -> Color {
        self.shading.shade(ray, self.nearest_hit(ray))
    }
}
