//! Deterministic two-player Pong simulation.
//!
//! All gameplay state lives in a `hecs` world (two paddles, one ball) plus
//! plain resource structs. Systems are free functions; `Match` wraps them
//! into a single-threaded controller ticked once per frame by the client.
//! Rendering, windowing, and timing are the client's problem.

pub mod components;
pub mod config;
pub mod geometry;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use resources::*;

use hecs::{Entity, World};
use systems::*;

/// Advance the simulation by one tick.
pub fn step(
    world: &mut World,
    bounds: &Bounds,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
    actions: &[Action],
) {
    // 1. Queued inputs become paddle impulses
    apply_impulses(world, actions);

    // 2. Paddles move, damp, and clamp
    move_paddles(world, bounds, config);

    // 3. Ball moves, bouncing off paddles and walls
    move_ball(world, bounds, config, rng, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32, config: &Config) -> Entity {
    world.spawn((Paddle::new(side, x, config),))
}

/// Helper to create the ball entity, served into play immediately
pub fn create_ball(
    world: &mut World,
    bounds: &Bounds,
    config: &Config,
    rng: &mut GameRng,
) -> Entity {
    let mut ball = Ball::new(config);
    ball.reset(bounds, config, rng);
    world.spawn((ball,))
}

/// Owns the court, both paddles, and the ball, and runs the match
/// state machine over them.
pub struct Match {
    world: World,
    config: Config,
    bounds: Bounds,
    state: MatchState,
    events: Events,
    actions: ActionQueue,
    rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Match {
    /// Build a match, failing fast on invalid configuration or bounds.
    ///
    /// The left paddle sits against the left edge; the right paddle is
    /// right-aligned and follows the right edge across resizes.
    pub fn new(config: Config, width: f32, height: f32, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = Bounds::new(width, height)?;

        let mut world = World::new();
        let mut rng = rng;
        let left = create_paddle(&mut world, Side::Left, 0.0, &config);
        let right = create_paddle(&mut world, Side::Right, width - config.paddle_width, &config);
        let ball = create_ball(&mut world, &bounds, &config, &mut rng);

        Ok(Self {
            world,
            config,
            bounds,
            state: MatchState::Playing,
            events: Events::new(),
            actions: ActionQueue::new(),
            rng,
            left,
            right,
            ball,
        })
    }

    /// Queue an input action for the next tick.
    pub fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Advance the match by one tick.
    ///
    /// While ended, physics is frozen and only a reset command is honored.
    /// While playing, reset is a silent no-op; the ball leaving the court
    /// ends the match.
    pub fn tick(&mut self) {
        self.events.clear();
        let actions = self.actions.take();

        match self.state {
            MatchState::Ended => {
                if actions.contains(&Action::Reset) {
                    self.reset();
                }
            }
            MatchState::Playing => {
                step(
                    &mut self.world,
                    &self.bounds,
                    &self.config,
                    &mut self.events,
                    &mut self.rng,
                    &actions,
                );
                if self.events.ball_exited {
                    self.state = MatchState::Ended;
                }
            }
        }
    }

    /// Serve a fresh ball, stop both paddles, and resume play.
    pub fn reset(&mut self) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.reset();
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.bounds, &self.config, &mut self.rng);
        }
        self.state = MatchState::Playing;
    }

    /// Apply a window resize. Degenerate dimensions are ignored; otherwise
    /// the bounds update and the right paddle is re-aligned to the new
    /// right edge. No other entity state is touched.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = match Bounds::new(width, height) {
            Ok(bounds) => bounds,
            Err(_) => return,
        };
        self.bounds = bounds;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Right {
                paddle.rect.x = width - paddle.rect.w;
            }
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the most recent tick.
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn ball(&self) -> Ball {
        *self.world.get::<&Ball>(self.ball).unwrap()
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        *self.world.get::<&Paddle>(entity).unwrap()
    }
}
