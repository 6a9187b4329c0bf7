//! Cliff walking (Sutton & Barto, example 6.6): on-policy SARSA learns the safe
//! path while off-policy Q-learning hugs the cliff edge.
//!
//! Run with `RUST_LOG=info cargo run --example cliff_walking`.

use log::info;
use strum::VariantArray;
use tabular_td::{
    algo::tabular::{AgentConfig, Backup, ExpectedSarsa, QLearning, Sarsa, TdAgent},
    env::Environment,
};

const WIDTH: i32 = 12;
const HEIGHT: i32 = 4;
const START: Pos = (0, HEIGHT - 1);
const GOAL: Pos = (WIDTH - 1, HEIGHT - 1);
const NUM_EPISODES: usize = 500;

type Pos = (i32, i32);

#[derive(VariantArray, Clone, Copy, Debug, Hash, PartialEq, Eq)]
enum Action {
    Up,
    Down,
    Left,
    Right,
}

struct CliffWalking {
    pos: Pos,
}

impl Environment for CliffWalking {
    type State = Pos;
    type Action = Action;

    fn step(&mut self, action: Action) -> (Pos, f32) {
        let (dx, dy) = match action {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        };
        self.pos = (
            (self.pos.0 + dx).clamp(0, WIDTH - 1),
            (self.pos.1 + dy).clamp(0, HEIGHT - 1),
        );

        let on_cliff = self.pos.1 == HEIGHT - 1 && self.pos.0 > 0 && self.pos.0 < WIDTH - 1;
        if on_cliff {
            self.pos = START;
            (self.pos, -100.0)
        } else {
            (self.pos, -1.0)
        }
    }

    fn reset(&mut self) -> Pos {
        self.pos = START;
        self.pos
    }
}

fn legal_actions(pos: &Pos) -> Vec<Action> {
    if *pos == GOAL {
        vec![]
    } else {
        Action::VARIANTS.to_vec()
    }
}

fn train<B: Backup<Pos, Action> + Default>(name: &str) {
    let config = AgentConfig {
        alpha: 0.5,
        epsilon: 0.1,
        gamma: 0.99,
    };
    let mut agent: TdAgent<Pos, Action, fn(&Pos) -> Vec<Action>, B> =
        TdAgent::new(config, legal_actions as fn(&Pos) -> Vec<Action>).expect("Config is valid");
    let mut env = CliffWalking { pos: START };

    let mut recent = Vec::with_capacity(100);
    for i in 0..NUM_EPISODES {
        let episode = agent.go(&mut env, 10_000);
        if i >= NUM_EPISODES - 100 {
            recent.push(episode.reward);
        }
    }
    let mean = recent.iter().sum::<f32>() / recent.len() as f32;

    agent.disable_learning();
    let greedy = agent.go(&mut env, 1000);

    info!(
        "{name}: mean reward over last 100 episodes {mean:.1}, greedy path {} steps, {} table entries",
        greedy.steps,
        agent.q_table().len()
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    train::<QLearning>("Q-learning");
    train::<Sarsa>("SARSA");
    train::<ExpectedSarsa>("Expected SARSA");
}
