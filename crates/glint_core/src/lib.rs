//! Glint Core - Scene description types for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDesc`, `PrimitiveDesc`, `Geometry`, `Material`
//! - **JSON support**: loading, saving and validating scene files
//! - **Reference scenes**: the built-in sphere and box scenes
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDesc;
//!
//! let scene = SceneDesc::load("scene.json")?;
//! println!("Loaded {} primitives ({} lights)",
//!     scene.len(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use loader::{SceneError, SceneResult};
pub use material::{Color, Material};
pub use scene::{Geometry, PrimitiveDesc, SceneDesc};
