pub mod builder;
pub mod config;
pub mod encoder;
pub mod runner;
pub mod transform;

pub use builder::TransformBuilder;
pub use config::TransformConfig;
pub use runner::Transformer;
