use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::error::SceneError;
use crate::film::Film;
use crate::math::Color;
use crate::random::{pixel_sampler, Sampler};
use crate::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples: usize,
    /// When set, every pixel gets its own generator seeded from this and its coordinates.
    pub seed: Option<u64>,
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height < 2 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples == 0 {
            return Err(SceneError::ZeroSamples);
        }
        Ok(())
    }
}

/// Averages `samples` jittered rays through pixel (x, y). Channels are summed as integers
/// and divided with truncation.
pub fn render_pixel<S: Sampler + ?Sized>(
    scene: &Scene,
    x: usize,
    y: usize,
    samples: usize,
    sampler: &mut S,
) -> Color {
    let (mut r, mut g, mut b) = (0usize, 0usize, 0usize);
    for _ in 0..samples {
        let ray = scene.camera.get_screen_ray(x, y, sampler);
        let c = scene.resolve_color(ray);
        r += c.r as usize;
        g += c.g as usize;
        b += c.b as usize;
    }
    Color::new((r / samples) as u8, (g / samples) as u8, (b / samples) as u8)
}

/// Renders every pixel in parallel. The film's buffer order, not completion order,
/// determines output order.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Result<Film<Color>, SceneError> {
    settings.validate()?;
    let (width, height) = (settings.width, settings.height);
    if (scene.camera.width, scene.camera.height) != (width, height) {
        return Err(SceneError::ResolutionMismatch {
            camera: (scene.camera.width, scene.camera.height),
            render: (width, height),
        });
    }
    info!(
        width,
        height,
        samples = settings.samples,
        spheres = scene.spheres.len(),
        shading = %scene.shading,
        "starting render"
    );
    let now = Instant::now();

    let mut film = Film::new(width, height, Color::BLACK);
    film.buffer.par_iter_mut().enumerate().for_each(|(i, e)| {
        let x = i % width;
        let y = i / width;
        let mut sampler = pixel_sampler(settings.seed, x, y);
        *e = render_pixel(scene, x, y, settings.samples, sampler.as_mut());
    });

    let elapsed = now.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        rays = film.total_pixels() * settings.samples,
        "render finished"
    );
    Ok(film)
}
