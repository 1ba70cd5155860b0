/// Unit cube centred at the origin, spanning `[-0.5, 0.5]³`.
///
/// 24 vertices (4 per face, so every face gets its own texture coordinates
/// and shade) and 36 `u16` indices, counter-clockwise seen from outside.
use crate::geometry::{Mesh, Vertex};

// per-face brightness; the light comes from above and slightly in front
const TOP: f32 = 1.0;
const FRONT: f32 = 0.85;
const SIDE: f32 = 0.7;
const BACK: f32 = 0.6;
const BOTTOM: f32 = 0.45;

pub fn cube_data() -> (Vec<Vertex>, Vec<u16>) {
    let v = Vertex::new;
    const H: f32 = 0.5;

    #[rustfmt::skip]
    let vertices = vec![
        // front  (z+)
        v([-H, -H,  H], [0.0, 1.0], FRONT),  v([ H, -H,  H], [1.0, 1.0], FRONT),
        v([ H,  H,  H], [1.0, 0.0], FRONT),  v([-H,  H,  H], [0.0, 0.0], FRONT),
        // back   (z-)
        v([ H, -H, -H], [0.0, 1.0], BACK),   v([-H, -H, -H], [1.0, 1.0], BACK),
        v([-H,  H, -H], [1.0, 0.0], BACK),   v([ H,  H, -H], [0.0, 0.0], BACK),
        // left   (x-)
        v([-H, -H, -H], [0.0, 1.0], SIDE),   v([-H, -H,  H], [1.0, 1.0], SIDE),
        v([-H,  H,  H], [1.0, 0.0], SIDE),   v([-H,  H, -H], [0.0, 0.0], SIDE),
        // right  (x+)
        v([ H, -H,  H], [0.0, 1.0], SIDE),   v([ H, -H, -H], [1.0, 1.0], SIDE),
        v([ H,  H, -H], [1.0, 0.0], SIDE),   v([ H,  H,  H], [0.0, 0.0], SIDE),
        // top    (y+)
        v([-H,  H,  H], [0.0, 1.0], TOP),    v([ H,  H,  H], [1.0, 1.0], TOP),
        v([ H,  H, -H], [1.0, 0.0], TOP),    v([-H,  H, -H], [0.0, 0.0], TOP),
        // bottom (y-)
        v([-H, -H, -H], [0.0, 1.0], BOTTOM), v([ H, -H, -H], [1.0, 1.0], BOTTOM),
        v([ H, -H,  H], [1.0, 0.0], BOTTOM), v([-H, -H,  H], [0.0, 0.0], BOTTOM),
    ];

    // every face is laid out the same way, so the index pattern repeats
    let indices = (0..6u16)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b + 2, b + 3, b]
        })
        .collect();

    (vertices, indices)
}

pub fn cube(device: &wgpu::Device) -> Mesh {
    let (vertices, indices) = cube_data();
    Mesh::upload(device, "Cube", &vertices, &indices)
}
