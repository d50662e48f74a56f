//! JSON scene loading and saving.
//!
//! Scene files hold a single object with a `primitives` array:
//!
//! ```json
//! {
//!   "primitives": [
//!     { "kind": "sphere", "center": [0, 0, -20], "radius": 4,
//!       "surface_color": [1.0, 0.32, 0.36], "reflection": 1, "transparency": 0.5 },
//!     { "kind": "box", "min": [-1, -1, -1], "max": [1, 1, 1],
//!       "surface_color": [0.2, 0.2, 0.2], "emission_color": [3, 3, 3] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDesc;

/// Errors that can occur while loading or saving a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid primitive {index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneDesc {
    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(source: &str) -> SceneResult<Self> {
        let scene: SceneDesc = serde_json::from_str(source)?;
        scene.validate()?;

        log::debug!(
            "Parsed scene with {} primitives ({} lights)",
            scene.len(),
            scene.light_count()
        );
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene from {}", path.display());

        let source = fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SceneResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
