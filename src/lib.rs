pub mod font;
pub mod generate;
pub mod label;
pub mod manifest;
pub mod scene;
pub mod texture;

// Curated re-exports
pub use generate::{run, GenOptions, RunSummary};
pub use scene::{Material, SphereRecord};
