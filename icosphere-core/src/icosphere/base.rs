//! The 12-vertex, 20-face icosahedron every icosphere starts from.

use glam::Vec3;

pub const BASE_VERTEX_COUNT: usize = 12;
pub const BASE_TRIANGLE_COUNT: usize = 20;

/// Face table. Winding is counter-clockwise seen from outside; keep the order
/// as-is, subdivided faces inherit it.
#[rustfmt::skip]
pub const BASE_TRIANGLES: [[u32; 3]; BASE_TRIANGLE_COUNT] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

/// The twelve corners built from the golden ratio, projected onto the unit sphere.
pub fn base_vertices() -> [Vec3; BASE_VERTEX_COUNT] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    #[rustfmt::skip]
    let raw = [
        Vec3::new(-1.0,  t,  0.0), Vec3::new( 1.0,  t,  0.0),
        Vec3::new(-1.0, -t,  0.0), Vec3::new( 1.0, -t,  0.0),
        Vec3::new( 0.0, -1.0,  t), Vec3::new( 0.0,  1.0,  t),
        Vec3::new( 0.0, -1.0, -t), Vec3::new( 0.0,  1.0, -t),
        Vec3::new(  t, 0.0, -1.0), Vec3::new(  t, 0.0,  1.0),
        Vec3::new( -t, 0.0, -1.0), Vec3::new( -t, 0.0,  1.0),
    ];
    raw.map(Vec3::normalize)
}

/// Same solid as a triangle soup: 60 vertex records, three per face, in
/// `BASE_TRIANGLES` order.
pub fn base_triangle_soup() -> Vec<Vec3> {
    let vertices = base_vertices();
    BASE_TRIANGLES
        .iter()
        .flat_map(|tri| tri.map(|i| vertices[i as usize]))
        .collect()
}
