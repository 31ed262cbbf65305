use crate::components::Direction;
use crate::controllers::{Controller, ControllerState, InputSlot, Observation};

/// Key names (as reported by `KeyboardEvent.key`) for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl KeyBindings {
    pub fn new(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }

    /// `w` / `s`
    pub fn wasd() -> Self {
        Self::new("w", "s")
    }

    pub fn arrows() -> Self {
        Self::new("ArrowUp", "ArrowDown")
    }

    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        if key.eq_ignore_ascii_case(&self.up) {
            Some(Direction::Up)
        } else if key.eq_ignore_ascii_case(&self.down) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Paddle driven by two keys. Only presses count: releasing a key leaves
/// the direction to decay on its own.
#[derive(Debug)]
pub struct KeyboardController {
    state: ControllerState,
    slot: InputSlot,
}

/// Writer side handed to the key event listener
#[derive(Debug, Clone)]
pub struct KeyboardHandle {
    bindings: KeyBindings,
    slot: InputSlot,
}

impl KeyboardController {
    pub fn new(bindings: KeyBindings, sampling_window: u64, now: u64) -> (Self, KeyboardHandle) {
        let slot = InputSlot::new();
        let controller = Self {
            state: ControllerState::new(sampling_window, now),
            slot: slot.clone(),
        };
        (controller, KeyboardHandle { bindings, slot })
    }
}

impl KeyboardHandle {
    /// Record a key press. Returns false for keys this player doesn't use.
    pub fn press(&self, key: &str, now: u64) -> bool {
        match self.bindings.direction_for(key) {
            Some(direction) => {
                self.slot.put(direction, now);
                true
            }
            None => false,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl Controller for KeyboardController {
    fn kind(&self) -> &'static str {
        "keyboard"
    }

    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    fn poll(&mut self, _obs: &Observation<'_>) {
        self.slot.drain_into(&mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Ball, Paddle, Side};
    use glam::Vec2;

    fn poll_at(controller: &mut KeyboardController, now: u64) {
        let ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0);
        let paddle = Paddle::new(Side::Left, 10.0, 0.0, 4.0, 600.0);
        controller.poll(&Observation {
            ball: &ball,
            paddle: &paddle,
            now,
        });
    }

    #[test]
    fn test_bindings_case_insensitive() {
        let bindings = KeyBindings::wasd();
        assert_eq!(bindings.direction_for("w"), Some(Direction::Up));
        assert_eq!(bindings.direction_for("W"), Some(Direction::Up));
        assert_eq!(bindings.direction_for("S"), Some(Direction::Down));
        assert_eq!(bindings.direction_for("x"), None);
        assert_eq!(
            KeyBindings::arrows().direction_for("ArrowDown"),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_press_sets_direction_and_timestamp() {
        let (mut controller, handle) = KeyboardController::new(KeyBindings::wasd(), 20, 0);
        assert!(handle.press("s", 100));
        poll_at(&mut controller, 105);
        assert_eq!(controller.direction(), Direction::Down);
        assert_eq!(controller.state().last_input(), 100);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let (mut controller, handle) = KeyboardController::new(KeyBindings::wasd(), 20, 0);
        assert!(!handle.press("q", 100));
        poll_at(&mut controller, 105);
        assert_eq!(controller.direction(), Direction::Idle);
        assert_eq!(controller.state().last_input(), 0);
    }

    #[test]
    fn test_opposite_keys_last_press_wins() {
        let (mut controller, handle) = KeyboardController::new(KeyBindings::wasd(), 20, 0);
        handle.press("w", 100);
        handle.press("s", 101);
        poll_at(&mut controller, 105);
        assert_eq!(controller.direction(), Direction::Down);
    }

    #[test]
    fn test_direction_decays_without_presses() {
        let (mut controller, handle) = KeyboardController::new(KeyBindings::wasd(), 20, 0);
        handle.press("w", 100);
        poll_at(&mut controller, 110);
        controller.decay(110);
        assert_eq!(controller.direction(), Direction::Up);
        poll_at(&mut controller, 130);
        controller.decay(130);
        assert_eq!(controller.direction(), Direction::Idle);
    }
}
