mod primitives;

use std::{error::Error, fs::File, io::Read, path::Path, path::PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::*;

use crate::{
    camera::Camera, error::SceneError, math::Vec3, renderer::RenderSettings, scene::Scene,
    shading::Shading,
};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 400,
            height: 300,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    pub eye: [f64; 3],
    /// A view direction, not a target point.
    pub look_at: [f64; 3],
    /// Degrees.
    pub fov: f64,
}

impl Default for CameraData {
    fn default() -> Self {
        CameraData {
            eye: [0.0, 0.0, 0.0],
            look_at: [0.0, 0.0, 1.0],
            fov: 45.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub camera: CameraData,
    #[serde(default = "default_spheres")]
    pub spheres: Vec<SphereData>,
    #[serde(default)]
    pub shading: Shading,
}

impl Default for SceneData {
    fn default() -> Self {
        SceneData {
            camera: CameraData::default(),
            spheres: default_spheres(),
            shading: Shading::default(),
        }
    }
}

impl SceneData {
    pub fn build(&self, resolution: Resolution) -> Result<Scene, SceneError> {
        let camera = Camera::new(
            Vec3::from(self.camera.eye),
            Vec3::from(self.camera.look_at),
            self.camera.fov,
            resolution.width,
            resolution.height,
        )?;
        Scene::new(
            camera,
            self.spheres.iter().copied().map(Into::into).collect(),
            self.shading,
        )
    }
}

fn default_samples() -> usize {
    5
}

fn default_filename() -> PathBuf {
    PathBuf::from("output/render.ppm")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSettingsData {
    #[serde(default = "default_filename")]
    pub filename: PathBuf,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default = "default_samples")]
    pub samples: usize,
    pub seed: Option<u64>,
    /// Defaults to the number of logical cpus.
    pub threads: Option<usize>,
}

impl Default for RenderSettingsData {
    fn default() -> Self {
        RenderSettingsData {
            filename: default_filename(),
            resolution: Resolution::default(),
            samples: default_samples(),
            seed: None,
            threads: None,
        }
    }
}

impl From<&RenderSettingsData> for RenderSettings {
    fn from(data: &RenderSettingsData) -> Self {
        RenderSettings {
            width: data.resolution.width,
            height: data.resolution.height,
            samples: data.samples,
            seed: data.seed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render_settings: RenderSettingsData,
    #[serde(default)]
    pub scene: SceneData,
}

impl Config {
    /// Validates everything and produces a scene whose camera matches the render resolution.
    pub fn build(&self) -> Result<(Scene, RenderSettings), SceneError> {
        let settings = RenderSettings::from(&self.render_settings);
        settings.validate()?;
        let scene = self.scene.build(self.render_settings.resolution)?;
        Ok((scene, settings))
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut input = String::new();
    File::open(path.as_ref()).and_then(|mut f| f.read_to_string(&mut input))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
