//! Core shared types: load errors and small math helpers (renderer-agnostic).

pub use glam::{Vec3, vec3};

pub mod bounds;
pub mod error;

pub use error::{LoadError, LoadResult};
