/// Implemented RL algorithms
pub mod algo;

/// Environment and legal-action abstractions
pub mod env;

/// Configuration errors
pub mod error;

/// Exploration policies
pub mod exploration;

mod util;
