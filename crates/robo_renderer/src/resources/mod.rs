pub mod material;
pub mod model_buffer;

pub use material::Material;
pub use model_buffer::{ModelBuffer, ModelUniform};
