use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{HitRecord, Sphere};
use crate::math::{Color, Ray};

/// Base of the exponential falloff used by depth shading.
pub const DEPTH_FALLOFF: f64 = 3.0 / 5.0;

/// How a resolved hit (or miss) becomes a color. Exactly one is active per render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Brightness falls off exponentially with hit distance. Misses are black.
    #[default]
    Depth,
    /// Surface normal mapped to a color. Misses show the ray direction instead.
    Normal,
    /// White where the surface grazes the view direction, black elsewhere.
    Silhouette,
}

impl Shading {
    pub fn shade(&self, ray: Ray, hit: Option<(&Sphere, HitRecord)>) -> Color {
        match self {
            Shading::Depth => shade_depth(hit.map(|(_, h)| h.time)),
            Shading::Normal => match hit {
                Some((_, h)) => Color::from_direction(h.normal),
                None => Color::from_direction(ray.direction),
            },
            Shading::Silhouette => match hit {
                Some((sphere, h)) => shade_silhouette(ray, sphere, h),
                None => Color::BLACK,
            },
        }
    }
}

pub fn shade_depth(time: Option<f64>) -> Color {
    match time {
        Some(t) => Color::splat((255.0 * DEPTH_FALLOFF.powf(t)).round() as u8),
        None => Color::BLACK,
    }
}

fn shade_silhouette(ray: Ray, sphere: &Sphere, hit: HitRecord) -> Color {
    let incoming = (-ray.direction).normalized();
    // larger spheres need a more grazing angle before they are outlined
    let threshold = 0.2 / sphere.radius.sqrt().sqrt();
    if incoming * hit.normal < threshold {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shading::Depth => "depth",
            Shading::Normal => "normal",
            Shading::Silhouette => "silhouette",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Shading {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "depth" => Ok(Shading::Depth),
            "normal" => Ok(Shading::Normal),
            "silhouette" => Ok(Shading::Silhouette),
            other => Err(format!(
                "unknown shading {:?}, expected one of depth, normal, silhouette",
                other
            )),
        }
    }
}
