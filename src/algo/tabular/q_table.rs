use std::collections::HashMap;

use super::Hashable;

/// Action-value estimates keyed by `(state, action)`
///
/// Absent entries read as `0.0`. Reads never insert; an entry only exists once
/// it has been written, and entries are never evicted.
#[derive(Debug, Clone)]
pub struct QTable<S, A> {
    values: HashMap<(S, A), f32>,
}

impl<S: Hashable, A: Hashable> QTable<S, A> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Q(state, action), or `0.0` if never written
    pub fn get(&self, state: &S, action: &A) -> f32 {
        // Tuple keys can't be borrowed piecewise, so the lookup clones the pair.
        self.values
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Create or overwrite Q(state, action)
    pub fn set(&mut self, state: S, action: A, value: f32) {
        self.values.insert((state, action), value);
    }

    /// Number of pairs that have been written at least once
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over every written `((state, action), value)` entry in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&(S, A), &f32)> {
        self.values.iter()
    }
}

impl<S: Hashable, A: Hashable> Default for QTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
