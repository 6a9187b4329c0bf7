use rand::{rngs::StdRng, SeedableRng};
use strum::VariantArray;
use tabular_td::{
    algo::tabular::{AgentConfig, Backup, ExpectedSarsa, QLearning, Sarsa, TdAgent},
    env::Environment,
};

const GOAL: u8 = 5;

#[derive(VariantArray, Clone, Copy, Debug, Hash, PartialEq, Eq)]
enum Move {
    Left,
    Right,
}

/// A walk from cell 0 to cell [`GOAL`], costing 1 per step
#[derive(Default)]
struct Corridor {
    pos: u8,
}

impl Environment for Corridor {
    type State = u8;
    type Action = Move;

    fn step(&mut self, action: Move) -> (u8, f32) {
        self.pos = match action {
            Move::Left => self.pos.saturating_sub(1),
            Move::Right => (self.pos + 1).min(GOAL),
        };
        (self.pos, -1.0)
    }

    fn reset(&mut self) -> u8 {
        self.pos = 0;
        self.pos
    }
}

type Oracle = fn(&u8) -> Vec<Move>;

fn legal_actions(state: &u8) -> Vec<Move> {
    if *state == GOAL {
        vec![]
    } else {
        Move::VARIANTS.to_vec()
    }
}

fn agent<B: Backup<u8, Move> + Default>(seed: u64) -> TdAgent<u8, Move, Oracle, B, StdRng> {
    let config = AgentConfig {
        alpha: 0.1,
        epsilon: 0.1,
        gamma: 0.9,
    };
    TdAgent::with_rng(config, legal_actions as Oracle, StdRng::seed_from_u64(seed)).unwrap()
}

fn learns_to_walk_right<B: Backup<u8, Move> + Default>() {
    let mut env = Corridor::default();
    let mut agent = agent::<B>(5);

    for _ in 0..1000 {
        let episode = agent.go(&mut env, 1000);
        assert!(episode.steps >= GOAL as usize, "Goal is at least {GOAL} steps away");
    }

    agent.disable_learning();
    for state in 0..GOAL {
        assert_eq!(agent.best_action(&state), Some(Move::Right), "Greedy at {state}");
    }

    let episode = agent.go(&mut env, 100);
    assert_eq!(episode.steps, GOAL as usize);
    assert_eq!(episode.reward, -(GOAL as f32));
    assert_eq!(agent.value(&GOAL), 0.0, "Goal is terminal");
}

#[test]
fn q_learning_walks_right() {
    learns_to_walk_right::<QLearning>();
}

#[test]
fn sarsa_walks_right() {
    learns_to_walk_right::<Sarsa>();
}

#[test]
fn expected_sarsa_walks_right() {
    learns_to_walk_right::<ExpectedSarsa>();
}

#[test]
fn episodes_are_capped() {
    let mut env = Corridor::default();
    let mut agent = agent::<Sarsa>(1);
    for state in 0..GOAL {
        agent.set_q_value(state, Move::Left, 1.0);
    }
    agent.disable_learning();

    let episode = agent.go(&mut env, 7);
    assert_eq!(episode.steps, 7, "Greedy agent walks into the wall until capped");
    assert_eq!(agent.q_value(&0, &Move::Left), 1.0, "Frozen agent left the table alone");
}
