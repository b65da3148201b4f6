use crate::math::{Ray, Vec3};

mod sphere;

pub use sphere::Sphere;

/// Intersections closer than this to the ray origin are discarded.
pub const HIT_EPSILON: f64 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f64,
    pub point: Vec3,
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(time: f64, point: Vec3, normal: Vec3) -> Self {
        HitRecord {
            time,
            point,
            normal,
        }
    }
}

pub trait Primitive {
    fn intersect(&self, r: Ray) -> Option<HitRecord>;

    fn is_hit(&self, r: Ray) -> bool {
        self.intersect(r).is_some()
    }
}
