/// Represents an episodic decision process in which an agent can operate.
///
/// The environment only produces transitions. Whether a state is terminal is
/// decided by the agent's [`LegalActions`] oracle: a state with no legal actions
/// ends the episode.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Update the environment in response to an action taken by an agent, producing a new state and associated reward
    ///
    /// **Returns** `(next_state, reward)`
    fn step(&mut self, action: Self::Action) -> (Self::State, f32);

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;
}

/// An oracle listing the legal actions of a state
///
/// Must be deterministic for a given state over the lifetime of an agent. An
/// empty list marks a terminal state.
///
/// Implemented for every `Fn(&S) -> Vec<A>`, so a closure is usually all that is needed.
pub trait LegalActions<S, A> {
    fn legal_actions(&self, state: &S) -> Vec<A>;
}

impl<S, A, F> LegalActions<S, A> for F
where
    F: Fn(&S) -> Vec<A>,
{
    fn legal_actions(&self, state: &S) -> Vec<A> {
        self(state)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two-state chain used across the crate's unit tests
    ///
    /// `"s0"` offers `left` and `right`, `"s1"` is terminal.
    pub fn chain_actions(state: &&'static str) -> Vec<&'static str> {
        match *state {
            "s0" => vec!["left", "right"],
            _ => vec![],
        }
    }

    #[test]
    fn closures_are_legal_action_oracles() {
        let oracle = chain_actions;
        assert_eq!(oracle.legal_actions(&"s0"), ["left", "right"]);
        assert!(oracle.legal_actions(&"s1").is_empty(), "Terminal state has no actions");
    }
}
