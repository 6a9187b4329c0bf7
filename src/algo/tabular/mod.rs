mod agent;
mod backup;
mod policy;
mod q_table;

pub use agent::{
    AgentConfig, Episode, ExpectedSarsaAgent, Mode, QLearningAgent, SarsaAgent, TdAgent,
};
pub use backup::{Backup, ExpectedSarsa, Followup, QLearning, Sarsa};
pub use policy::TabularPolicy;
pub use q_table::QTable;

/// A trait for state and action types that can be used as keys in a [`HashMap`](std::collections::HashMap)
///
/// Table lookups clone the state and the action to build the `(state, action)`
/// key, so every read of an owned key such as `String` allocates. Prefer `Copy`
/// keys (ids, small enums, `&'static str`) on hot paths.
pub trait Hashable: Clone + Eq + std::hash::Hash {}

impl<T> Hashable for T where T: Clone + Eq + std::hash::Hash {}
