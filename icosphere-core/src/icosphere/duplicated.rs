//! Triangle-soup icosphere: every face owns its three vertices, so UVs can
//! jump between neighbouring faces.

use glam::Vec3;

use super::base::base_triangle_soup;

#[derive(Debug, Clone)]
pub struct DuplicatedLevel {
    vertices: Vec<Vec3>,
}

impl DuplicatedLevel {
    /// Level 0: the icosahedron expanded to 60 vertex records.
    pub fn seed() -> Self {
        Self { vertices: base_triangle_soup() }
    }

    /// Split every face into four. Midpoints are recomputed per face; nothing
    /// is shared, so there is no cache to consult.
    pub fn subdivide(&self) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() * 4);
        for tri in self.vertices.chunks_exact(3) {
            let (t1, t2, t3) = (tri[0], tri[1], tri[2]);
            let m1 = midpoint(t1, t2);
            let m2 = midpoint(t2, t3);
            let m3 = midpoint(t3, t1);

            vertices.extend_from_slice(&[t1, m1, m3]);
            vertices.extend_from_slice(&[m1, t2, m2]);
            vertices.extend_from_slice(&[m3, m2, t3]);
            vertices.extend_from_slice(&[m1, m2, m3]);
        }
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn triangle_count(&self) -> usize { self.vertices.len() / 3 }
    pub fn vertices(&self) -> &[Vec3] { &self.vertices }

    /// Identity index list, one entry per vertex record.
    pub fn indices(&self) -> Vec<u32> {
        (0..self.vertices.len() as u32).collect()
    }
}

fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    let m = ((a + b) / 2.0).normalize();
    debug_assert!((m.length() - 1.0).abs() < 1e-4, "midpoint left the unit sphere");
    m
}
