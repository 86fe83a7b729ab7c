pub mod approximation_ratio;
