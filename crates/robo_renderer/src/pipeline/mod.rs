pub mod layout;
pub mod world;

pub use layout::PipelineLayouts;
pub use world::WorldPipeline;
