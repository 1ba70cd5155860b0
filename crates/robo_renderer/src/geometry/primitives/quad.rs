/// Unit floor quad in the XZ plane, `[-0.5, 0.5]²` at `y = 0`, facing +Y.
/// Texture coordinates span `[0, 1]²`; tiling comes from the draw item's
/// `uv_scale`.
use crate::geometry::{Mesh, Vertex};

pub fn floor_quad_data() -> ([Vertex; 4], [u16; 6]) {
    let v = Vertex::new;
    let vertices = [
        v([-0.5, 0.0, 0.5], [0.0, 1.0], 1.0),
        v([0.5, 0.0, 0.5], [1.0, 1.0], 1.0),
        v([0.5, 0.0, -0.5], [1.0, 0.0], 1.0),
        v([-0.5, 0.0, -0.5], [0.0, 0.0], 1.0),
    ];
    (vertices, [0, 1, 2, 2, 3, 0])
}

pub fn floor_quad(device: &wgpu::Device) -> Mesh {
    let (vertices, indices) = floor_quad_data();
    Mesh::upload(device, "Floor", &vertices, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn faces_up() {
        let (vertices, indices) = floor_quad_data();
        for tri in indices.chunks(3) {
            let p = |i: u16| Vec3::from(vertices[i as usize].position);
            let normal = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
            assert!(normal.normalize().abs_diff_eq(Vec3::Y, 1e-6));
        }
    }

    #[test]
    fn uv_covers_unit_square() {
        let (vertices, _) = floor_quad_data();
        let (min, max) = vertices.iter().fold(([1.0f32; 2], [0.0f32; 2]), |(lo, hi), v| {
            (
                [lo[0].min(v.uv[0]), lo[1].min(v.uv[1])],
                [hi[0].max(v.uv[0]), hi[1].max(v.uv[1])],
            )
        });
        assert_eq!((min, max), ([0.0, 0.0], [1.0, 1.0]));
    }
}
