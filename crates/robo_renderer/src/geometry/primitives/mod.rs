pub mod cube;
pub mod quad;

pub use cube::{cube, cube_data};
pub use quad::{floor_quad, floor_quad_data};
