use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::geometry::Rect;
use crate::resources::{Bounds, GameRng};

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Direction of a paddle impulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
}

/// Paddle component - a player's paddle with damped velocity
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub velocity: f32,
    /// Velocity impulse added per directional input.
    pub boost: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, config: &Config) -> Self {
        Self {
            side,
            rect: Rect::new(x, 0.0, config.paddle_width, config.paddle_height),
            velocity: 0.0,
            boost: config.paddle_boost,
        }
    }

    /// Add an impulse; bounds are enforced later by `update`.
    pub fn apply_impulse(&mut self, dir: Dir) {
        match dir {
            Dir::Up => self.velocity += self.boost,
            Dir::Down => self.velocity -= self.boost,
        }
    }

    /// Advance one tick: move by velocity, damp toward zero, clamp to court.
    ///
    /// Damping is applied after the move. A velocity smaller than `decel`
    /// snaps to zero so the paddle never oscillates around rest. Hitting a
    /// wall clamps position and kills velocity outright.
    pub fn update(&mut self, bounds: &Bounds, decel: f32) {
        self.rect.y += self.velocity;

        if self.velocity.abs() < decel {
            self.velocity = 0.0;
        } else if self.velocity > 0.0 {
            self.velocity -= decel;
        } else {
            self.velocity += decel;
        }

        let max_y = bounds.height - self.rect.h;
        if self.rect.y > max_y {
            self.rect.y = max_y;
            self.velocity = 0.0;
        }
        if self.rect.y < 0.0 {
            self.rect.y = 0.0;
            self.velocity = 0.0;
        }
    }

    /// Stop the paddle; position is left untouched.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }
}

/// Ball component - position plus polar velocity (speed and angle)
///
/// The angle is measured from the vertical axis, so the per-tick
/// displacement is `(speed·sin θ, speed·cos θ)`. Reflections are plain
/// angle negations/complements, which keeps trajectories exactly
/// reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub angle: f32,
    /// Paddle hits since the last serve.
    pub returns: u32,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(config.ball_width, config.ball_height),
            speed: config.ball_speed,
            angle: 0.0,
            returns: 0,
        }
    }

    /// Serve: recenter horizontally and randomize the vertical position and
    /// launch angle within the middle band of the court.
    pub fn reset(&mut self, bounds: &Bounds, config: &Config, rng: &mut GameRng) {
        self.pos.x = bounds.width / 2.0;
        self.pos.y = rng
            .0
            .gen_range(bounds.height / 4.0..bounds.height * 3.0 / 4.0);
        self.speed = config.ball_speed;
        self.angle = rng.0.gen_range(FRAC_PI_4..3.0 * FRAC_PI_4);
        self.returns = 0;
    }

    /// Per-tick displacement implied by the current speed and angle.
    pub fn displacement(&self) -> Vec2 {
        Vec2::new(self.speed * self.angle.sin(), self.speed * self.angle.cos())
    }

    /// Bounding rectangle for rendering.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
