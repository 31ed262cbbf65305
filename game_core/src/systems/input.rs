use hecs::{Entity, World};

use crate::controllers::{Controller, Observation};
use crate::{Ball, Paddle};

/// A controller and the paddle it steers
pub struct Seat {
    pub paddle: Entity,
    pub controller: Box<dyn Controller>,
}

impl Seat {
    pub fn new(paddle: Entity, controller: Box<dyn Controller>) -> Self {
        Self { paddle, controller }
    }
}

/// Pull pending input into every controller, let idle ones decay, then copy
/// each controller's direction onto its paddle
pub fn apply_controllers(world: &mut World, ball: Entity, seats: &mut [Seat], now: u64) {
    let ball = match world.get::<&Ball>(ball) {
        Ok(ball) => *ball,
        Err(_) => return,
    };

    for seat in seats.iter_mut() {
        let paddle = match world.get::<&Paddle>(seat.paddle) {
            Ok(paddle) => *paddle,
            Err(_) => continue,
        };
        seat.controller.poll(&Observation {
            ball: &ball,
            paddle: &paddle,
            now,
        });
        seat.controller.decay(now);
    }

    for seat in seats.iter() {
        if let Ok(mut paddle) = world.get::<&mut Paddle>(seat.paddle) {
            paddle.direction = seat.controller.direction();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::{KeyBindings, KeyboardController, ScriptedController};
    use crate::{Direction, Side};
    use glam::Vec2;

    #[test]
    fn test_directions_copied_to_paddles() {
        let mut world = World::new();
        let ball = world.spawn((Ball::new(Vec2::new(400.0, 500.0), Vec2::ZERO, 10.0),));
        let left = world.spawn((Paddle::new(Side::Left, 10.0, 225.0, 4.0, 600.0),));
        let right = world.spawn((Paddle::new(Side::Right, 780.0, 225.0, 4.0, 600.0),));

        let (keyboard, keys) = KeyboardController::new(KeyBindings::arrows(), 20, 0);
        let mut seats = vec![
            Seat::new(left, Box::new(ScriptedController::new(25.0, 20, 0))),
            Seat::new(right, Box::new(keyboard)),
        ];
        keys.press("ArrowUp", 95);

        apply_controllers(&mut world, ball, &mut seats, 100);

        assert_eq!(world.get::<&Paddle>(left).unwrap().direction, Direction::Down);
        assert_eq!(world.get::<&Paddle>(right).unwrap().direction, Direction::Up);

        // No more presses: the keyboard decays, the AI keeps chasing
        apply_controllers(&mut world, ball, &mut seats, 140);
        assert_eq!(world.get::<&Paddle>(left).unwrap().direction, Direction::Down);
        assert_eq!(world.get::<&Paddle>(right).unwrap().direction, Direction::Idle);
    }
}
