use rand::Rng;

use super::Choice;

/// Epsilon greedy exploration policy with a constant epsilon threshold
///
/// The random source is supplied by the caller on every draw, so an agent that
/// owns a seeded RNG gets reproducible decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f32,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy with exploration probability `epsilon`
    ///
    /// `epsilon` is expected to lie in `[0,1]`; range checks belong to the agent configuration.
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// A policy that always exploits
    pub fn greedy() -> Self {
        Self::new(0.0)
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Draw one uniform sample in `[0,1)` and explore if it falls below epsilon
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f32>() < self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn extremes_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(EpsilonGreedy::greedy().choose(&mut rng), Choice::Exploit);
            assert_eq!(EpsilonGreedy::new(1.0).choose(&mut rng), Choice::Explore);
        }
    }

    #[test]
    fn explores_at_roughly_epsilon() {
        let mut rng = StdRng::seed_from_u64(42);
        let policy = EpsilonGreedy::new(0.25);
        let trials = 20_000;
        let explored = (0..trials)
            .filter(|_| policy.choose(&mut rng) == Choice::Explore)
            .count();
        let rate = explored as f32 / trials as f32;
        assert!((rate - 0.25).abs() < 0.02, "Exploration rate {rate} near 0.25");
    }
}
