use crate::{Ball, Paddle};
use hecs::World;

/// Move ball by its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

/// Apply paddle movement based on the direction copied from its controller
pub fn move_paddles(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance();
    }
}
