use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    env::{Environment, LegalActions},
    error::ConfigError,
    exploration::EpsilonGreedy,
    util::check_interval,
};

use super::{
    Backup, ExpectedSarsa, Followup, Hashable, QLearning, QTable, Sarsa, TabularPolicy,
};

/// Configuration for a [`TdAgent`]
///
/// All three values are required and are validated when the agent is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// The learning rate - must be in `[0,1]`
    pub alpha: f32,
    /// The exploration probability - must be in `[0,1]`
    pub epsilon: f32,
    /// The discount factor - must be in `[0,1)`
    pub gamma: f32,
}

impl AgentConfig {
    /// **Errors** if any value lies outside its interval or is NaN
    pub fn validate(&self) -> Result<(), ConfigError> {
        let config = self;
        check_interval!(config.alpha, 0.0, 1.0);
        check_interval!(config.epsilon, 0.0, 1.0);
        check_interval!(config.gamma, 0.0, 1.0, open);
        Ok(())
    }
}

/// Learning lifecycle of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Updates move Q-values and action selection explores with the configured epsilon
    #[default]
    Learning,
    /// Behaves as if alpha and epsilon were both zero: updates leave the table
    /// untouched and action selection is purely greedy
    Frozen,
}

/// Summary of one episode played by [`TdAgent::go`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Episode {
    /// Undiscounted sum of rewards
    pub reward: f32,
    /// Number of actions executed
    pub steps: usize,
}

/// A one-step temporal-difference control agent over a [`QTable`]
///
/// ### Generics
/// - `S`, `A` - State and action types, used as table keys
/// - `L` - The [`LegalActions`] oracle; an empty action list marks a terminal state
/// - `B` - The [`Backup`] rule: [`QLearning`], [`Sarsa`] or [`ExpectedSarsa`]
/// - `R` - The random source for tie-breaking and exploration
///
/// The agent performs no internal synchronization; share it across threads only behind a lock.
pub struct TdAgent<S, A, L, B, R = StdRng> {
    policy: TabularPolicy<S, A, L, R>,
    backup: B,
    config: AgentConfig,
    mode: Mode,
}

/// Off-policy agent bootstrapping from the greedy next value
pub type QLearningAgent<S, A, L, R = StdRng> = TdAgent<S, A, L, QLearning, R>;

/// On-policy agent whose [`update`](TdAgent::update) returns the next action to execute
pub type SarsaAgent<S, A, L, R = StdRng> = TdAgent<S, A, L, Sarsa, R>;

/// On-policy agent bootstrapping from the expected next value under epsilon-greedy
pub type ExpectedSarsaAgent<S, A, L, R = StdRng> = TdAgent<S, A, L, ExpectedSarsa, R>;

impl<S, A, L, B> TdAgent<S, A, L, B, StdRng>
where
    S: Hashable,
    A: Hashable,
    L: LegalActions<S, A>,
    B: Backup<S, A> + Default,
{
    /// Initialize a new agent with an empty table and an entropy-seeded random source
    ///
    /// **Errors** if the configuration is invalid
    pub fn new(config: AgentConfig, legal_actions: L) -> Result<Self, ConfigError> {
        Self::with_rng(config, legal_actions, StdRng::from_entropy())
    }
}

impl<S, A, L, B, R> TdAgent<S, A, L, B, R>
where
    S: Hashable,
    A: Hashable,
    L: LegalActions<S, A>,
    B: Backup<S, A> + Default,
    R: Rng,
{
    /// Initialize a new agent drawing all of its randomness from `rng`
    ///
    /// **Errors** if the configuration is invalid
    pub fn with_rng(config: AgentConfig, legal_actions: L, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "td agent: alpha={} epsilon={} gamma={}",
            config.alpha, config.epsilon, config.gamma
        );
        Ok(Self {
            policy: TabularPolicy::new(legal_actions, rng),
            backup: B::default(),
            config,
            mode: Mode::Learning,
        })
    }
}

impl<S, A, L, B, R> TdAgent<S, A, L, B, R>
where
    S: Hashable,
    A: Hashable,
    L: LegalActions<S, A>,
    B: Backup<S, A>,
    R: Rng,
{
    /// Q(state, action), `0.0` if never written
    pub fn q_value(&self, state: &S, action: &A) -> f32 {
        self.policy.table().get(state, action)
    }

    pub fn set_q_value(&mut self, state: S, action: A, value: f32) {
        self.policy.table_mut().set(state, action, value);
    }

    /// V(state), `0.0` for a terminal state
    pub fn value(&self, state: &S) -> f32 {
        self.policy.value(state)
    }

    /// Greedy action with uniform tie-breaking, `None` for a terminal state
    pub fn best_action(&mut self, state: &S) -> Option<A> {
        self.policy.best_action(state)
    }

    /// Epsilon-greedy action, `None` for a terminal state
    pub fn action(&mut self, state: &S) -> Option<A> {
        let exploration = self.exploration();
        self.policy.action(state, exploration)
    }

    /// Commit one backup of Q(state, action) toward `reward + gamma * target(next_state)`
    ///
    /// **Returns** the output of the backup rule: the sampled next action for
    /// [`Sarsa`], `()` otherwise. In [`Mode::Frozen`] the table is left untouched
    /// but the output is still produced.
    pub fn update(&mut self, state: S, action: A, reward: f32, next_state: &S) -> B::Output {
        let exploration = self.exploration();
        let (target, output) = self
            .backup
            .bootstrap(&mut self.policy, exploration, next_state);

        if self.mode == Mode::Learning {
            let alpha = self.config.alpha;
            let old = self.policy.table().get(&state, &action);
            let new = (1.0 - alpha) * old + alpha * (reward + self.config.gamma * target);
            trace!("backup: {old} -> {new} (reward {reward}, target {target})");
            self.policy.table_mut().set(state, action, new);
        }

        output
    }

    /// Freeze the agent: updates become no-ops and action selection becomes greedy
    pub fn disable_learning(&mut self) {
        if self.mode != Mode::Frozen {
            info!("learning disabled");
        }
        self.mode = Mode::Frozen;
    }

    /// Return to [`Mode::Learning`] with the configured alpha and epsilon
    pub fn enable_learning(&mut self) {
        if self.mode != Mode::Learning {
            info!("learning enabled");
        }
        self.mode = Mode::Learning;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The configured hyperparameters, unaffected by the learning mode
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn q_table(&self) -> &QTable<S, A> {
        self.policy.table()
    }

    /// Play one episode in `env`, learning from every transition
    ///
    /// The episode ends when the current state has no legal actions or after `t_max` steps.
    pub fn go<E>(&mut self, env: &mut E, t_max: usize) -> Episode
    where
        E: Environment<State = S, Action = A>,
    {
        let mut episode = Episode::default();
        let mut state = env.reset();
        let mut next_action = self.action(&state);

        while let Some(action) = next_action {
            if episode.steps >= t_max {
                break;
            }

            let (next_state, reward) = env.step(action.clone());
            let output = self.update(state, action, reward, &next_state);
            next_action = match B::followup(output) {
                Followup::Select => self.action(&next_state),
                Followup::Execute(committed) => committed,
            };

            episode.reward += reward;
            episode.steps += 1;
            state = next_state;
        }

        episode
    }

    fn exploration(&self) -> EpsilonGreedy {
        match self.mode {
            Mode::Learning => EpsilonGreedy::new(self.config.epsilon),
            Mode::Frozen => EpsilonGreedy::greedy(),
        }
    }
}
