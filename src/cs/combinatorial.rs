pub mod johnson_trotter;

pub use johnson_trotter::{johnson_trotter, JohnsonTrotter};
