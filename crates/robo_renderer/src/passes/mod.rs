pub mod world_pass;

pub use world_pass::WorldPass;
