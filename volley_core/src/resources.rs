use crate::components::{Dir, Side};
use crate::config::ConfigError;

/// Screen bounds read by all entities for clamping and bouncing.
///
/// Mutable over a session (window resizes), but never degenerate: both
/// dimensions stay strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::BadBounds { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Ball in play
    Playing,
    /// Ball left the court; waiting for a reset command
    Ended,
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Production wiring: seed from system entropy.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub paddle_hit: bool,
    pub wall_hit: bool,
    pub ball_exited: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A named input action produced by the client's key map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Directional impulse for one paddle
    Paddle { side: Side, dir: Dir },
    /// Restart the match; only honored while the match is ended
    Reset,
    /// Leave the game; handled by the client, ignored by the simulation
    Quit,
}

/// Input actions queued for the next tick
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    actions: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Drain all queued actions in arrival order.
    pub fn take(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
