pub mod mesh;
pub mod primitives;
pub mod vertex;

pub use mesh::{Mesh, MeshLibrary};
pub use vertex::Vertex;
