use crate::components::Direction;
use crate::controllers::{Controller, ControllerState, Observation};

/// Computer player: chase the ball's height, holding still inside a dead zone
#[derive(Debug)]
pub struct ScriptedController {
    state: ControllerState,
    period: u64, // ms
    dead_zone: f32,
    last_run: Option<u64>,
}

impl ScriptedController {
    pub fn new(dead_zone: f32, period: u64, now: u64) -> Self {
        Self {
            // Same period for sampling and for the decision timer
            state: ControllerState::new(period, now),
            period,
            dead_zone,
            last_run: None,
        }
    }

    fn is_due(&self, now: u64) -> bool {
        match self.last_run {
            Some(last) => now.saturating_sub(last) >= self.period,
            None => true,
        }
    }

    /// Checks run down, up, then neutral; a later match overwrites an
    /// earlier one. `None` only when no check matched.
    pub fn decide(&self, paddle_center: f32, ball_y: f32) -> Option<Direction> {
        let top = paddle_center - self.dead_zone;
        let bottom = paddle_center + self.dead_zone;
        let mut direction = None;

        if top < ball_y {
            direction = Some(Direction::Down);
        }
        if bottom > ball_y {
            direction = Some(Direction::Up);
        }
        if top < ball_y && ball_y < bottom {
            direction = Some(Direction::Idle);
        }
        direction
    }
}

impl Controller for ScriptedController {
    fn kind(&self) -> &'static str {
        "ai"
    }

    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    fn poll(&mut self, obs: &Observation<'_>) {
        if !self.is_due(obs.now) {
            return;
        }
        self.last_run = Some(obs.now);
        if let Some(direction) = self.decide(obs.paddle.center_y(), obs.ball.pos.y) {
            self.state.set(direction, obs.now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Ball, Paddle, Side};
    use glam::Vec2;

    fn observe(controller: &mut ScriptedController, ball_y: f32, paddle_y: f32, now: u64) {
        let ball = Ball::new(Vec2::new(400.0, ball_y), Vec2::ZERO, 10.0);
        let paddle = Paddle::new(Side::Left, 10.0, paddle_y, 4.0, 600.0);
        controller.poll(&Observation {
            ball: &ball,
            paddle: &paddle,
            now,
        });
    }

    #[test]
    fn test_dead_zone() {
        // Paddle top 225 -> centre 300
        let mut ai = ScriptedController::new(25.0, 20, 0);
        observe(&mut ai, 300.0, 225.0, 0);
        assert_eq!(ai.direction(), Direction::Idle);

        let mut ai = ScriptedController::new(25.0, 20, 0);
        observe(&mut ai, 270.0, 225.0, 0);
        assert_eq!(ai.direction(), Direction::Up);

        let mut ai = ScriptedController::new(25.0, 20, 0);
        observe(&mut ai, 330.0, 225.0, 0);
        assert_eq!(ai.direction(), Direction::Down);
    }

    #[test]
    fn test_zone_edges_are_outside() {
        let ai = ScriptedController::new(25.0, 20, 0);
        // On the top edge only the up-check matches
        assert_eq!(ai.decide(300.0, 275.0), Some(Direction::Up));
        // On the bottom edge only the down-check matches
        assert_eq!(ai.decide(300.0, 325.0), Some(Direction::Down));
    }

    #[test]
    fn test_zero_dead_zone_on_center_keeps_direction() {
        let ai = ScriptedController::new(0.0, 20, 0);
        assert_eq!(ai.decide(300.0, 300.0), None);
    }

    #[test]
    fn test_runs_on_its_own_period() {
        let mut ai = ScriptedController::new(25.0, 20, 0);
        observe(&mut ai, 400.0, 225.0, 100);
        assert_eq!(ai.direction(), Direction::Down);

        // Not due yet: the ball moved but the decision stands
        observe(&mut ai, 100.0, 225.0, 110);
        assert_eq!(ai.direction(), Direction::Down);
        assert_eq!(ai.state().last_input(), 100);

        observe(&mut ai, 100.0, 225.0, 120);
        assert_eq!(ai.direction(), Direction::Up);
        assert_eq!(ai.state().last_input(), 120);
    }
}
