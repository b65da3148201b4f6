pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod math;
pub mod output;
pub mod parsing;
pub mod random;
pub mod renderer;
pub mod scene;
pub mod shading;

pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::error::SceneError;
    pub use crate::film::Film;
    pub use crate::geometry::{HitRecord, Primitive, Sphere};
    pub use crate::math::{Color, Ray, Vec3};
    pub use crate::random::{RandomSampler, Sampler, SeededSampler};
    pub use crate::renderer::{render, render_pixel, RenderSettings};
    pub use crate::scene::Scene;
    pub use crate::shading::Shading;
}
