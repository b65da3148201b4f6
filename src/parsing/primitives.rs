use serde::{Deserialize, Serialize};

use crate::{geometry::Sphere, math::Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereData {
    pub center: [f64; 3],
    pub radius: f64,
}

impl SphereData {
    pub const fn new(center: [f64; 3], radius: f64) -> Self {
        SphereData { center, radius }
    }
}

impl From<SphereData> for Sphere {
    fn from(data: SphereData) -> Self {
        Sphere::new(Vec3::from(data.center), data.radius)
    }
}

/// Three unit spheres in a row, resting on a very large sphere that stands in for the ground.
pub fn default_spheres() -> Vec<SphereData> {
    vec![
        SphereData::new([-2.0, 0.0, 3.0], 1.0),
        SphereData::new([0.0, 0.0, 3.0], 1.0),
        SphereData::new([2.0, 0.0, 3.0], 1.0),
        SphereData::new([0.0, -1001.0, 0.0], 1000.0),
    ]
}
