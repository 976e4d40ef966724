use std::f32::consts::PI;

use thiserror::Error;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_BOOST: f32 = 3.0; // velocity impulse per key press
    pub const PADDLE_DECEL: f32 = 0.1; // damping toward zero per tick

    // Ball
    pub const BALL_WIDTH: f32 = 8.0;
    pub const BALL_HEIGHT: f32 = 8.0;
    pub const BALL_SPEED: f32 = 3.0;
    pub const SPEED_RAMP: f32 = 1.1; // multiplier on every second return
    pub const BOUNCE_JITTER: f32 = PI / 16.0;
}

/// Invalid configuration rejected at construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen bounds must be positive, got {width}x{height}")]
    BadBounds { width: f32, height: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("speed_ramp must be at least 1.0, got {0}")]
    RampTooSmall(f32),
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Velocity impulse applied per directional input.
    pub paddle_boost: f32,
    /// Per-tick damping magnitude; velocities below this snap to zero.
    pub paddle_decel: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub ball_speed: f32,
    /// Speed multiplier applied on every second return.
    pub speed_ramp: f32,
    /// Maximum post-bounce angle jitter in radians; 0 disables jitter.
    pub bounce_jitter: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::classic()
    }
}

impl Config {
    /// Light paddle feel: small impulses with gentle damping, no jitter.
    pub fn classic() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_boost: Params::PADDLE_BOOST,
            paddle_decel: Params::PADDLE_DECEL,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            speed_ramp: Params::SPEED_RAMP,
            bounce_jitter: 0.0,
        }
    }

    /// Heavy paddle feel: stronger impulses damped harder, with a small
    /// random deflection added on every paddle bounce.
    pub fn arcade() -> Self {
        Self {
            paddle_boost: 4.0,
            paddle_decel: 0.5,
            bounce_jitter: Params::BOUNCE_JITTER,
            ..Self::classic()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_boost", self.paddle_boost),
            ("paddle_decel", self.paddle_decel),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.speed_ramp < 1.0 {
            return Err(ConfigError::RampTooSmall(self.speed_ramp));
        }
        if self.bounce_jitter < 0.0 {
            return Err(ConfigError::Negative {
                field: "bounce_jitter",
                value: self.bounce_jitter,
            });
        }
        Ok(())
    }
}
