use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Counter-clockwise, positive angular velocity.
    Left,
    /// Clockwise, negative angular velocity.
    Right,
}

impl TurnDirection {
    pub fn signum(self) -> f64 {
        match self {
            TurnDirection::Left => 1.0,
            TurnDirection::Right => -1.0,
        }
    }
}

/// Yields one direction per obstacle.
pub trait TurnSource {
    fn next_direction(&mut self) -> TurnDirection;
}

impl<F> TurnSource for F
where
    F: FnMut() -> TurnDirection,
{
    fn next_direction(&mut self) -> TurnDirection {
        self()
    }
}

/// Fair coin flip over [`TurnDirection`], seeded once and never reseeded.
#[derive(Debug, Clone)]
pub struct RandomTurnSource {
    rng: StdRng,
}

impl RandomTurnSource {
    /// Seeds from the wall clock, in whole seconds since the epoch.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        tracing::debug!(seed, "seeded turn source from clock");
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TurnSource for RandomTurnSource {
    fn next_direction(&mut self) -> TurnDirection {
        if self.rng.gen_bool(0.5) {
            TurnDirection::Left
        } else {
            TurnDirection::Right
        }
    }
}
