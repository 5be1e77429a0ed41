//! Quaternion Julia set iso-surface extraction.
//!
//! This crate samples the smoothed escape-time field of a 3D slice
//! through a 4D quaternion Julia set and triangulates an iso-surface
//! of it with marching cubes, producing a watertight-looking triangle
//! soup ready for rendering.
//!
//! # Pipeline
//!
//! - **Field**: iterate `q <- q^2 + c` per sample point, smoothed
//!   escape time mapped into `[0, 1]`
//! - **Grid**: a uniform voxel grid over a configurable extent
//! - **Triangulation**: table-driven marching cubes, voxel by voxel
//! - **Accumulation**: triangles collected in sweep order into one
//!   [`TriangleMesh`](fractal_types::TriangleMesh)
//!
//! # Quick Start
//!
//! ```
//! use fractal_surface::{generate_surface, SurfaceParams};
//!
//! // A coarse preview of the default Julia set
//! let params = SurfaceParams::preview();
//! let result = generate_surface(&params).unwrap();
//! println!("Generated {} triangles", result.triangle_count());
//! ```
//!
//! # Choosing a constant
//!
//! The constant `c` picks the Julia set. Well-behaved presets are
//! provided:
//!
//! ```
//! use fractal_surface::{JuliaParams, SurfaceParams};
//!
//! // The basilica set, c = -1, always has a solid interior
//! let params = SurfaceParams::basilica().with_resolution(32);
//!
//! // Or configure the field by hand
//! let julia = JuliaParams::rabbit().with_max_iterations(24);
//! let params = SurfaceParams::new().with_julia(julia);
//! ```
//!
//! # Architecture
//!
//! This is a Layer 0 crate with no rendering dependencies. The output
//! mesh converts to a flat `f32` position buffer via
//! [`TriangleMesh::position_buffer`](fractal_types::TriangleMesh::position_buffer)
//! for upload to a GPU pipeline.

mod error;
mod generate;
mod grid;
mod julia;
mod marching_cubes;
mod params;
mod progress;
mod types;

pub use error::SurfaceError;
pub use generate::generate_surface;
pub use grid::{SamplingGrid, MAX_RESOLUTION};
pub use julia::JuliaParams;
pub use params::SurfaceParams;
pub use types::SurfaceResult;

/// Re-export single-voxel triangulation for advanced usage.
pub mod marching_cubes_algorithm {
    pub use crate::marching_cubes::{triangulate_voxel, Sample};
}
