//! Icosphere generation.
//!
//! Two layouts are supported and picked by whether UVs are wanted:
//! - [`Mode::Shared`]: indexed mesh, one vertex per point on the sphere.
//! - [`Mode::Duplicated`]: triangle soup, three private vertices per face, so
//!   each face can carry its own seam-corrected UVs.
//!
//! Both start from the icosahedron and run `subdivision - 1` four-way splits.
//! Only the current level is kept alive between passes.

pub mod base;
pub mod duplicated;
pub mod midpoint;
pub mod shared;
pub mod uv;

use glam::Vec3;
use serde::Serialize;

use crate::error::{check_params, Result};
use crate::mesh::MeshBuffers;

pub use duplicated::DuplicatedLevel;
pub use midpoint::MidpointCache;
pub use shared::SharedLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Shared,
    Duplicated,
}

impl Mode {
    pub fn for_uv(emit_uv: bool) -> Self {
        if emit_uv { Mode::Duplicated } else { Mode::Shared }
    }
}

/// One subdivision level in either layout.
#[derive(Debug, Clone)]
pub enum Level {
    Shared(SharedLevel),
    Duplicated(DuplicatedLevel),
}

impl Level {
    pub fn seed(mode: Mode) -> Self {
        match mode {
            Mode::Shared => Level::Shared(SharedLevel::seed()),
            Mode::Duplicated => Level::Duplicated(DuplicatedLevel::seed()),
        }
    }

    /// Next level. Consumes `self`; the parent buffers are dropped here.
    pub fn subdivide(self) -> Self {
        match self {
            Level::Shared(l) => Level::Shared(l.subdivide()),
            Level::Duplicated(l) => Level::Duplicated(l.subdivide()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Level::Shared(_) => Mode::Shared,
            Level::Duplicated(_) => Mode::Duplicated,
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Level::Shared(l) => l.vertex_count(),
            Level::Duplicated(l) => l.vertex_count(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        match self {
            Level::Shared(l) => l.triangle_count(),
            Level::Duplicated(l) => l.triangle_count(),
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        match self {
            Level::Shared(l) => l.vertices(),
            Level::Duplicated(l) => l.vertices(),
        }
    }

    pub fn indices(&self) -> Vec<u32> {
        match self {
            Level::Shared(l) => l.indices(),
            Level::Duplicated(l) => l.indices(),
        }
    }
}

/// Run the seed plus `subdivision - 1` passes. `subdivision` must be >= 1.
pub fn build_level(mode: Mode, subdivision: u32) -> Level {
    let mut level = Level::seed(mode);
    for pass in 1..subdivision {
        level = level.subdivide();
        log::debug!(
            "{:?} pass {}: {} vertices, {} triangles",
            mode,
            pass,
            level.vertex_count(),
            level.triangle_count()
        );
    }
    level
}

/// Build a sphere of `radius` at the given subdivision level.
///
/// `subdivision = 1` is the plain icosahedron. With `emit_uv` the mesh is a
/// triangle soup carrying seam-corrected UVs; otherwise vertices are shared.
/// Positions are scaled by `radius`, normals stay unit length.
pub fn generate(radius: f32, subdivision: u32, emit_uv: bool) -> Result<MeshBuffers> {
    check_params(radius, subdivision)?;

    let mode = Mode::for_uv(emit_uv);
    log::debug!("generating icosphere: radius={} subdivision={} mode={:?}", radius, subdivision, mode);

    let level = build_level(mode, subdivision);
    let indices = level.indices();
    let normals = level.vertices().to_vec();
    let positions = normals.iter().map(|&n| n * radius).collect();
    let uvs = emit_uv.then(|| uv::unwrap(&normals));

    Ok(MeshBuffers { positions, normals, indices, uvs })
}
