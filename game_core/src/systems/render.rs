use hecs::World;

use crate::{Ball, DrawTarget, Entities, Paddle, Surface};

/// Redraw the whole frame: court, ball, left paddle, right paddle
pub fn draw_world<T: DrawTarget>(world: &World, entities: &Entities, surface: &mut Surface<T>) {
    surface.clear();
    if let Ok(ball) = world.get::<&Ball>(entities.ball) {
        ball.render(surface.target_mut());
    }
    for entity in [entities.left, entities.right] {
        if let Ok(paddle) = world.get::<&Paddle>(entity) {
            paddle.render(surface.target_mut());
        }
    }
}
