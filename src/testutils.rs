use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::nlu_engine::SnipsNluPlayground;

pub fn epsilon_eq(a: f32, b: f32, epsilon: f32) -> bool {
    let diff = a - b;
    diff < epsilon && diff > -epsilon
}

/// Checks that `value` lies in `[min, max]`, up to float rounding.
pub fn assert_in_range(value: f32, min: f32, max: f32) {
    let epsilon = 1e-6;
    assert!(
        value >= min - epsilon && value <= max + epsilon,
        "{} is not in [{}, {}]",
        value,
        min,
        max
    );
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn engine_without_delays() -> SnipsNluPlayground {
    SnipsNluPlayground::default().without_delays()
}
