use crate::geometry::{HitRecord, Primitive, HIT_EPSILON};
use crate::math::{Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f64) -> Sphere {
        Sphere { center, radius }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).norm_squared() < self.radius * self.radius
    }
}

impl Primitive for Sphere {
    // only the near root is tested. a ray starting inside the sphere, whose near root lies
    // behind the origin, reports no hit even though the far root is ahead of it.
    fn intersect(&self, r: Ray) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let time = (-b - discriminant.sqrt()) / a;
        if time > HIT_EPSILON {
            let point = r.point_at_parameter(time);
            let normal = (point - self.center).normalized();
            Some(HitRecord::new(time, point, normal))
        } else {
            None
        }
    }
}
