pub mod cs;
pub mod math;

pub use cs::error::{Error, Result};
pub use cs::{approx, combinatorial, graph};
pub use math::{ApproximationExperiment, ExperimentConfig, SizeResult};
