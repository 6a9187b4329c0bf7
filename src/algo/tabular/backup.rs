use rand::Rng;

use crate::{env::LegalActions, exploration::EpsilonGreedy};

use super::{Hashable, TabularPolicy};

/// The bootstrap step of a one-step temporal-difference update
///
/// Every variant shares the update
///
/// Q(s,a) ← (1 - α) Q(s,a) + α (r + γ · target(s'))
///
/// and differs only in how `target(s')` estimates the value of the next state.
pub trait Backup<S, A> {
    /// What the agent's update hands back to the caller
    type Output;

    /// Estimate the value of `next_state`
    ///
    /// `exploration` is the behaviour policy currently in effect. A terminal
    /// `next_state` always yields a target of `0.0`.
    fn bootstrap<L, R>(
        &self,
        policy: &mut TabularPolicy<S, A, L, R>,
        exploration: EpsilonGreedy,
        next_state: &S,
    ) -> (f32, Self::Output)
    where
        S: Hashable,
        A: Hashable,
        L: LegalActions<S, A>,
        R: Rng;

    /// How the next action is obtained once `output` has been produced
    ///
    /// Only on-policy variants that sample the next action themselves override this.
    fn followup(_output: Self::Output) -> Followup<A> {
        Followup::Select
    }
}

/// Where the action for the next step comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup<A> {
    /// Select afresh from the behaviour policy
    Select,
    /// Execute the action already sampled during the update (`None` if terminal)
    Execute(Option<A>),
}

/// Off-policy control: bootstrap from max<sub>a'</sub> Q(s', a')
#[derive(Debug, Clone, Copy, Default)]
pub struct QLearning;

impl<S, A> Backup<S, A> for QLearning {
    type Output = ();

    fn bootstrap<L, R>(
        &self,
        policy: &mut TabularPolicy<S, A, L, R>,
        _exploration: EpsilonGreedy,
        next_state: &S,
    ) -> (f32, ())
    where
        S: Hashable,
        A: Hashable,
        L: LegalActions<S, A>,
        R: Rng,
    {
        (policy.value(next_state), ())
    }
}

/// On-policy control: bootstrap from Q(s', a') where a' is sampled from the behaviour policy
///
/// The sampled a' is returned so the caller executes exactly the action that was learned from.
/// It is `None` when `next_state` is terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sarsa;

impl<S, A> Backup<S, A> for Sarsa {
    type Output = Option<A>;

    fn bootstrap<L, R>(
        &self,
        policy: &mut TabularPolicy<S, A, L, R>,
        exploration: EpsilonGreedy,
        next_state: &S,
    ) -> (f32, Option<A>)
    where
        S: Hashable,
        A: Hashable,
        L: LegalActions<S, A>,
        R: Rng,
    {
        let next_action = policy.action(next_state, exploration);
        let target = next_action
            .as_ref()
            .map_or(0.0, |a| policy.table().get(next_state, a));
        (target, next_action)
    }

    fn followup(next_action: Option<A>) -> Followup<A> {
        Followup::Execute(next_action)
    }
}

/// On-policy control: bootstrap from the expectation of Q(s', ·) under the behaviour policy
///
/// With `m` tied best actions out of `k` legal ones, each best action is weighted
/// `(1 - ε) / m` and every other action `ε / (k - m)`. When all actions tie there
/// is no other mass and each gets `1 / m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedSarsa;

impl<S, A> Backup<S, A> for ExpectedSarsa {
    type Output = ();

    fn bootstrap<L, R>(
        &self,
        policy: &mut TabularPolicy<S, A, L, R>,
        exploration: EpsilonGreedy,
        next_state: &S,
    ) -> (f32, ())
    where
        S: Hashable,
        A: Hashable,
        L: LegalActions<S, A>,
        R: Rng,
    {
        let actions = policy.legal_actions(next_state);
        let best = policy.best_among(next_state, &actions);
        let (k, m) = (actions.len(), best.len());
        if k == 0 {
            return (0.0, ());
        }

        let epsilon = exploration.epsilon();
        let (p_best, p_other) = if k == m {
            (1.0 / m as f32, 0.0)
        } else {
            ((1.0 - epsilon) / m as f32, epsilon / (k - m) as f32)
        };

        let table = policy.table();
        let expectation: f32 = actions
            .iter()
            .map(|a| {
                let p = if best.contains(a) { p_best } else { p_other };
                p * table.get(next_state, a)
            })
            .sum();
        (expectation, ())
    }
}
