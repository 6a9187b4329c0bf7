pub mod tabular;

pub use tabular::{ExpectedSarsaAgent, QLearningAgent, SarsaAgent, TdAgent};
