pub mod approx;
pub mod combinatorial;
pub mod error;
pub mod graph;

// Re-export all modules
pub use self::approx::*;
pub use combinatorial::*;
pub use graph::*;
