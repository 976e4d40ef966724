use hecs::World;

use crate::components::Paddle;
use crate::config::Config;
use crate::resources::Bounds;

/// Advance both paddles by one tick.
pub fn move_paddles(world: &mut World, bounds: &Bounds, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(bounds, config.paddle_decel);
    }
}
