use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    env::LegalActions,
    exploration::{Choice, EpsilonGreedy},
};

use super::{Hashable, QTable};

/// Value estimation and action selection over a [`QTable`]
///
/// Owns the table, the legal-actions oracle and the random source used for
/// tie-breaking and exploration. Every query is `O(k)` in the number of legal
/// actions of the state in question.
pub struct TabularPolicy<S, A, L, R> {
    table: QTable<S, A>,
    legal_actions: L,
    rng: R,
}

impl<S, A, L, R> TabularPolicy<S, A, L, R>
where
    S: Hashable,
    A: Hashable,
    L: LegalActions<S, A>,
    R: Rng,
{
    /// Initialize a policy over an empty table
    pub fn new(legal_actions: L, rng: R) -> Self {
        Self {
            table: QTable::new(),
            legal_actions,
            rng,
        }
    }

    pub fn table(&self) -> &QTable<S, A> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut QTable<S, A> {
        &mut self.table
    }

    /// Legal actions of `state` as reported by the oracle, in oracle order
    pub fn legal_actions(&self, state: &S) -> Vec<A> {
        self.legal_actions.legal_actions(state)
    }

    /// V(state) = max<sub>a</sub> Q(state, a) over legal actions, or `0.0` for a terminal state
    pub fn value(&self, state: &S) -> f32 {
        let actions = self.legal_actions(state);
        let mut values = actions.iter().map(|a| self.table.get(state, a));
        // Fold from the first action's value so all-negative states stay negative.
        match values.next() {
            Some(first) => values.fold(first, f32::max),
            None => 0.0,
        }
    }

    /// Every legal action attaining the maximal Q-value, in oracle order
    ///
    /// Empty for a terminal state.
    pub fn best_actions(&self, state: &S) -> Vec<A> {
        self.best_among(state, &self.legal_actions(state))
    }

    /// The greedy action, with ties broken uniformly at random
    ///
    /// **Returns** `None` if the state is terminal
    pub fn best_action(&mut self, state: &S) -> Option<A> {
        let best = self.best_actions(state);
        best.choose(&mut self.rng).cloned()
    }

    /// Select an action under `exploration`
    ///
    /// Explores uniformly over all legal actions, independently of their values,
    /// otherwise defers to [`best_action`](Self::best_action).
    ///
    /// **Returns** `None` if the state is terminal
    pub fn action(&mut self, state: &S, exploration: EpsilonGreedy) -> Option<A> {
        let actions = self.legal_actions(state);
        if actions.is_empty() {
            return None;
        }

        match exploration.choose(&mut self.rng) {
            Choice::Explore => {
                trace!("exploring among {} actions", actions.len());
                actions.choose(&mut self.rng).cloned()
            }
            Choice::Exploit => {
                let best = self.best_among(state, &actions);
                trace!("exploiting, {} tied best actions", best.len());
                best.choose(&mut self.rng).cloned()
            }
        }
    }

    /// The members of `actions` attaining the maximal Q-value in `state`, in the given order
    pub(crate) fn best_among(&self, state: &S, actions: &[A]) -> Vec<A> {
        let mut actions = actions.iter();
        let Some(first) = actions.next() else {
            return Vec::new();
        };

        let mut best_value = self.table.get(state, first);
        let mut best = vec![first.clone()];
        for action in actions {
            let value = self.table.get(state, action);
            if value > best_value {
                best_value = value;
                best.clear();
                best.push(action.clone());
            } else if value == best_value {
                best.push(action.clone());
            }
        }
        best
    }
}
