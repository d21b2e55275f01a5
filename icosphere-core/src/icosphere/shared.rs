//! Indexed icosphere: each point on the sphere is stored once.

use glam::Vec3;

use super::base::{base_vertices, BASE_TRIANGLES};
use super::midpoint::MidpointCache;

#[derive(Debug, Clone)]
pub struct SharedLevel {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl SharedLevel {
    /// Level 0: the bare icosahedron.
    pub fn seed() -> Self {
        Self {
            vertices: base_vertices().to_vec(),
            triangles: BASE_TRIANGLES.to_vec(),
        }
    }

    /// Split every face into four. Existing vertices keep their indices and
    /// midpoints are appended after them.
    pub fn subdivide(&self) -> Self {
        // Closed triangle mesh: E = 3F / 2
        let edge_count = self.triangles.len() * 3 / 2;
        let mut vertices = self.vertices.clone();
        let mut triangles = Vec::with_capacity(self.triangles.len() * 4);

        let mut midpoints = MidpointCache::with_capacity(&mut vertices, edge_count);
        for &[a, b, c] in &self.triangles {
            let ab = midpoints.get_midpoint(a, b);
            let bc = midpoints.get_midpoint(b, c);
            let ca = midpoints.get_midpoint(c, a);

            triangles.push([a, ab, ca]);
            triangles.push([ab, b, bc]);
            triangles.push([ca, bc, c]);
            triangles.push([ab, bc, ca]);
        }
        debug_assert_eq!(midpoints.edge_count(), edge_count);

        Self { vertices, triangles }
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn triangle_count(&self) -> usize { self.triangles.len() }
    pub fn vertices(&self) -> &[Vec3] { &self.vertices }
    pub fn triangles(&self) -> &[[u32; 3]] { &self.triangles }

    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u32) -> SharedLevel {
        (0..n).fold(SharedLevel::seed(), |lvl, _| lvl.subdivide())
    }

    #[test]
    fn counts_follow_closed_form() {
        for l in 0..5u32 {
            let lvl = level(l);
            let pow = 4usize.pow(l);
            assert_eq!(lvl.triangle_count(), 20 * pow, "level {l}");
            assert_eq!(lvl.vertex_count(), 10 * pow + 2, "level {l}");
        }
    }

    #[test]
    fn parent_vertices_keep_their_indices() {
        let seed = SharedLevel::seed();
        let next = seed.subdivide();
        assert_eq!(&next.vertices()[..12], seed.vertices());
    }

    #[test]
    fn indices_are_in_range() {
        let lvl = level(3);
        let indices = lvl.indices();
        assert_eq!(indices.len(), 3 * lvl.triangle_count());
        assert!(indices.iter().all(|&i| (i as usize) < lvl.vertex_count()));
    }

    #[test]
    fn all_vertices_on_unit_sphere() {
        for v in level(3).vertices() {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn children_follow_parent_layout() {
        let seed = SharedLevel::seed();
        let next = seed.subdivide();
        // first parent (0, 11, 5) is split first: midpoints 12, 13, 14
        let t = next.triangles();
        assert_eq!(t[0], [0, 12, 14]);
        assert_eq!(t[1], [12, 11, 13]);
        assert_eq!(t[2], [14, 13, 5]);
        assert_eq!(t[3], [12, 13, 14]);
    }

    #[test]
    fn winding_stays_outward() {
        let lvl = level(2);
        let v = lvl.vertices();
        for &[a, b, c] in lvl.triangles() {
            let (a, b, c) = (v[a as usize], v[b as usize], v[c as usize]);
            assert!((b - a).cross(c - a).dot(a + b + c) > 0.0);
        }
    }
}
