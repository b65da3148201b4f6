use std::fmt;

/// Rejected scene or render configuration. Always reported before any ray is traced.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The view direction is parallel to world up, so no camera basis exists.
    DegenerateCameraBasis,
    ZeroLengthDirection,
    InvalidFieldOfView(f64),
    InvalidRadius { index: usize, radius: f64 },
    InvalidCenter { index: usize },
    InvalidResolution { width: usize, height: usize },
    /// The camera was built for a different image size than the one being rendered.
    ResolutionMismatch {
        camera: (usize, usize),
        render: (usize, usize),
    },
    ZeroSamples,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::DegenerateCameraBasis => {
                write!(f, "camera look direction is parallel to the world up vector")
            }
            SceneError::ZeroLengthDirection => {
                write!(f, "camera look direction has zero length")
            }
            SceneError::InvalidFieldOfView(angle) => write!(
                f,
                "field of view must be within (0, 90) degrees, got {}",
                angle
            ),
            SceneError::InvalidRadius { index, radius } => write!(
                f,
                "sphere {} has invalid radius {}, must be finite and positive",
                index, radius
            ),
            SceneError::InvalidCenter { index } => {
                write!(f, "sphere {} has a non-finite center", index)
            }
            SceneError::InvalidResolution { width, height } => {
                write!(f, "invalid resolution {}x{}, needs at least 1x2", width, height)
            }
            SceneError::ResolutionMismatch { camera, render } => write!(
                f,
                "camera was built for {}x{} but the render is {}x{}",
                camera.0, camera.1, render.0, render.1
            ),
            SceneError::ZeroSamples => write!(f, "samples per pixel must be at least 1"),
        }
    }
}

impl std::error::Error for SceneError {}
