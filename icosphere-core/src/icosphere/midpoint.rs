use std::collections::HashMap;

use glam::Vec3;

/// Edge-midpoint table for one subdivision pass.
///
/// Borrows the vertex list being built: a miss appends the normalized midpoint
/// to it and remembers its index, a hit returns the stored index without
/// touching the list. Keys are unordered, so `(a, b)` and `(b, a)` name the
/// same edge no matter which neighbouring face reaches it first.
pub struct MidpointCache<'a> {
    vertices: &'a mut Vec<Vec3>,
    table: HashMap<(u32, u32), u32>,
}

impl<'a> MidpointCache<'a> {
    #[cfg(test)]
    fn new(vertices: &'a mut Vec<Vec3>) -> Self {
        Self { vertices, table: HashMap::new() }
    }

    /// Reserve room for `edges` new midpoints.
    pub fn with_capacity(vertices: &'a mut Vec<Vec3>, edges: usize) -> Self {
        vertices.reserve(edges);
        Self { vertices, table: HashMap::with_capacity(edges) }
    }

    pub fn get_midpoint(&mut self, i1: u32, i2: u32) -> u32 {
        let key = edge_key(i1, i2);
        if let Some(&index) = self.table.get(&key) {
            return index;
        }

        let mid = (self.vertices[i1 as usize] + self.vertices[i2 as usize]) / 2.0;
        let mid = mid.normalize();
        debug_assert!((mid.length() - 1.0).abs() < 1e-4, "midpoint left the unit sphere");

        let index = self.vertices.len() as u32;
        self.vertices.push(mid);
        self.table.insert(key, index);
        index
    }

    /// Number of distinct edges split so far.
    pub fn edge_count(&self) -> usize { self.table.len() }
}

fn edge_key(i1: u32, i2: u32) -> (u32, u32) {
    if i1 < i2 { (i1, i2) } else { (i2, i1) }
}
