use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::icosphere::Mode;

/// Largest vertex count addressable with 16-bit indices.
pub const U16_INDEX_LIMIT: usize = u16::MAX as usize;

/// Generated geometry, index-aligned: `positions[i]`, `normals[i]` and
/// `uvs[i]` describe the same vertex; `indices` holds three entries per face.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Option<Vec<Vec2>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    pub fn for_vertex_count(count: usize) -> Self {
        if count > U16_INDEX_LIMIT { IndexFormat::U32 } else { IndexFormat::U16 }
    }
}

/// Interleaved vertex for hand-off to a renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize { self.positions.len() }
    pub fn triangle_count(&self) -> usize { self.indices.len() / 3 }

    /// Narrowest index type that can address every vertex.
    pub fn index_format(&self) -> IndexFormat {
        IndexFormat::for_vertex_count(self.vertex_count())
    }

    /// Indices narrowed to `u16`, or `None` if the mesh needs 32-bit indices.
    pub fn indices_u16(&self) -> Option<Vec<u16>> {
        match self.index_format() {
            IndexFormat::U16 => Some(self.indices.iter().map(|&i| i as u16).collect()),
            IndexFormat::U32 => None,
        }
    }

    /// One vertex per position. Stops at the shortest of the buffers if they
    /// disagree in length; missing UVs are zero-filled.
    pub fn interleaved(&self) -> Vec<Vertex> {
        let uvs = self.uvs.as_deref().unwrap_or(&[]);
        self.positions
            .iter()
            .zip(&self.normals)
            .enumerate()
            .filter_map(|(i, (p, n))| {
                let uv = match self.uvs {
                    Some(_) => uvs.get(i)?.to_array(),
                    None => [0.0; 2],
                };
                Some(Vertex { position: p.to_array(), normal: n.to_array(), uv })
            })
            .collect()
    }

    pub fn interleaved_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved()).to_vec()
    }

    /// Largest deviation of any position from the requested radius.
    pub fn max_radial_error(&self, radius: f32) -> f32 {
        self.positions
            .iter()
            .map(|p| (p.length() - radius).abs())
            .fold(0.0, f32::max)
    }

    pub fn summary(&self, radius: f32, subdivision: u32) -> MeshSummary {
        MeshSummary {
            mode: Mode::for_uv(self.uvs.is_some()),
            radius,
            subdivision,
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            index_count: self.indices.len(),
            index_format: self.index_format(),
            has_uv: self.uvs.is_some(),
            vertex_buffer_bytes: self.vertex_count() * std::mem::size_of::<Vertex>(),
            max_radial_error: self.max_radial_error(radius),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MeshSummary {
    pub mode: Mode,
    pub radius: f32,
    pub subdivision: u32,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub index_count: usize,
    pub index_format: IndexFormat,
    pub has_uv: bool,
    pub vertex_buffer_bytes: usize,
    pub max_radial_error: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosphere::generate;

    #[test]
    fn index_format_switches_above_u16_range() {
        assert_eq!(IndexFormat::for_vertex_count(12), IndexFormat::U16);
        assert_eq!(IndexFormat::for_vertex_count(65_535), IndexFormat::U16);
        assert_eq!(IndexFormat::for_vertex_count(65_536), IndexFormat::U32);
    }

    #[test]
    fn small_mesh_narrows_indices() {
        let mesh = generate(1.0, 2, false).unwrap();
        let narrow = mesh.indices_u16().unwrap();
        assert_eq!(narrow.len(), mesh.indices.len());
        assert!(narrow.iter().zip(&mesh.indices).all(|(&a, &b)| a as u32 == b));
    }

    #[test]
    fn large_soup_requires_wide_indices() {
        // 20 * 4^5 * 3 = 61_440 records at level 6, 245_760 at level 7
        let mesh = generate(1.0, 7, true).unwrap();
        assert_eq!(mesh.vertex_count(), 245_760);
        assert_eq!(mesh.index_format(), IndexFormat::U32);
        assert!(mesh.indices_u16().is_none());
    }

    #[test]
    fn interleaved_layout() {
        let mesh = generate(2.0, 1, true).unwrap();
        let verts = mesh.interleaved();
        assert_eq!(verts.len(), 60);
        assert_eq!(verts[5].position, mesh.positions[5].to_array());
        assert_eq!(verts[5].uv, mesh.uvs.as_ref().unwrap()[5].to_array());
        assert_eq!(mesh.interleaved_bytes().len(), 60 * 32);
    }

    #[test]
    fn interleaved_without_uvs_zero_fills() {
        let mesh = generate(1.0, 1, false).unwrap();
        assert!(mesh.interleaved().iter().all(|v| v.uv == [0.0, 0.0]));
    }

    #[test]
    fn interleaved_tolerates_mismatched_buffers() {
        let mut mesh = generate(1.0, 1, true).unwrap();
        mesh.normals.truncate(10);
        assert_eq!(mesh.interleaved().len(), 10);
        mesh.uvs.as_mut().unwrap().truncate(4);
        assert_eq!(mesh.interleaved().len(), 4);
    }

    #[test]
    fn summary_reports_counts() {
        let mesh = generate(2.0, 2, false).unwrap();
        let s = mesh.summary(2.0, 2);
        assert_eq!(s.mode, Mode::Shared);
        assert_eq!(s.vertex_count, 42);
        assert_eq!(s.triangle_count, 80);
        assert_eq!(s.index_count, 240);
        assert_eq!(s.index_format, IndexFormat::U16);
        assert!(!s.has_uv);
        assert!(s.max_radial_error < 1e-5);

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["mode"], "shared");
        assert_eq!(json["index_format"], "u16");
    }
}
