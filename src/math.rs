pub mod monte_carlo;

pub use monte_carlo::approximation_ratio::{
    approximation_ratio, run_trial, ApproximationExperiment, ExperimentConfig, RatioAccumulator,
    SizeResult,
};
