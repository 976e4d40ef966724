use hecs::World;

use crate::components::Paddle;
use crate::resources::Action;

/// Turn queued paddle actions into velocity impulses.
///
/// Reset and Quit are not paddle input and are ignored here; the match
/// controller decides what (if anything) to do with them.
pub fn apply_impulses(world: &mut World, actions: &[Action]) {
    for action in actions {
        if let Action::Paddle { side, dir } = action {
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                if paddle.side == *side {
                    paddle.apply_impulse(*dir);
                }
            }
        }
    }
}
