use std::f32::consts::PI;

use hecs::World;
use rand::Rng;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::geometry::{crosses_face, Rect};
use crate::resources::{Bounds, Events, GameRng};

/// Advance the ball by one tick, resolving paddle and wall collisions.
///
/// On a paddle hit the ball reflects horizontally (angle negation, plus
/// optional jitter) and stays where it is for this tick; every second
/// return multiplies the speed by the configured ramp. Otherwise the ball
/// advances, and leaving the court horizontally flags `ball_exited` for the
/// match controller. Top/bottom walls clamp and reflect on either branch.
pub fn move_ball(
    world: &mut World,
    bounds: &Bounds,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Collect paddle rects first so the ball query can borrow mutably.
    let paddle_rects: Vec<Rect> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| p.rect)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let target = ball.pos + ball.displacement();

        let hit = paddle_rects
            .iter()
            .any(|rect| crosses_face(rect, ball.pos, target));

        if hit {
            ball.angle = -ball.angle;
            if config.bounce_jitter > 0.0 {
                ball.angle += rng.0.gen_range(-config.bounce_jitter..config.bounce_jitter);
            }
            ball.returns += 1;
            if ball.returns % 2 == 0 {
                ball.speed *= config.speed_ramp;
            }
            events.paddle_hit = true;
        } else {
            ball.pos = target;
            if ball.pos.x < 0.0 || ball.pos.x > bounds.width {
                events.ball_exited = true;
            }
        }

        // Top/bottom bounce applies on both branches.
        if ball.pos.y < 0.0 {
            ball.pos.y = 0.0;
            ball.angle = PI - ball.angle;
            events.wall_hit = true;
        }
        if ball.pos.y > bounds.height {
            ball.pos.y = bounds.height;
            ball.angle = PI - ball.angle;
            events.wall_hit = true;
        }
    }
}
