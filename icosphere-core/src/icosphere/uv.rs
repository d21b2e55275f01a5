//! Equirectangular UVs for triangle soups, with per-face seam correction.
//!
//! `v` runs from 0 at -Y to 1 at +Y (texture bottom to top); `u` wraps once
//! around the Y axis. A face whose corners land on both sides of the
//! `u = 0/1` seam would otherwise interpolate across almost the whole texture,
//! so corners 1 and 2 are shifted by whole texture widths to sit within half
//! a unit of corner 0.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

/// Spherical coordinates of a unit normal, both clamped to `[0, 1]`.
pub fn normal_to_uv(n: Vec3) -> Vec2 {
    // acos is NaN just outside [-1, 1]
    let v = (-n.y).clamp(-1.0, 1.0).acos() / PI;
    let phi = (-n.x).atan2(n.z);
    let u = (phi + PI) / TAU;
    Vec2::new(u.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
}

/// Shift `uv` by whole units until each component is within 0.5 of `reference`.
pub fn fix_uv(reference: Vec2, uv: Vec2) -> Vec2 {
    Vec2::new(unwrap_towards(reference.x, uv.x), unwrap_towards(reference.y, uv.y))
}

fn unwrap_towards(reference: f32, mut value: f32) -> f32 {
    while value - reference > 0.5 {
        value -= 1.0;
    }
    while value - reference < -0.5 {
        value += 1.0;
    }
    value
}

/// UVs for one face. Corner 0 is the reference for both corrections.
pub fn triangle_uvs(n0: Vec3, n1: Vec3, n2: Vec3) -> [Vec2; 3] {
    let uv0 = normal_to_uv(n0);
    let raw1 = normal_to_uv(n1);
    let raw2 = normal_to_uv(n2);

    let uv1 = fix_uv(uv0, raw1);
    let uv2 = fix_uv(uv0, raw2);
    if uv1 != raw1 || uv2 != raw2 {
        log::trace!("seam fix: {:?} {:?} -> {:?} {:?} (ref {:?})", raw1, raw2, uv1, uv2, uv0);
    }
    [uv0, uv1, uv2]
}

/// UVs for a triangle soup, three normals per face. Trailing normals that do
/// not fill a whole face are ignored.
pub fn unwrap(normals: &[Vec3]) -> Vec<Vec2> {
    let mut uvs = Vec::with_capacity(normals.len());
    for tri in normals.chunks_exact(3) {
        uvs.extend_from_slice(&triangle_uvs(tri[0], tri[1], tri[2]));
    }
    uvs
}
