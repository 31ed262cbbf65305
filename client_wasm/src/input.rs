//! Controller selection and keyboard input handling

use game_core::{KeyBindings, Side};

/// Which kind of controller drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    Keyboard,
    Motion,
    Ai,
}

impl ControllerKind {
    /// Parse a controller name passed from JS
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "keyboard" | "keys" => Some(ControllerKind::Keyboard),
            "motion" | "leap" | "hand" => Some(ControllerKind::Motion),
            "ai" | "cpu" => Some(ControllerKind::Ai),
            _ => None,
        }
    }
}

/// Default keys: `w`/`s` on the left, arrow keys on the right
pub fn default_bindings(side: Side) -> KeyBindings {
    match side {
        Side::Left => KeyBindings::wasd(),
        Side::Right => KeyBindings::arrows(),
    }
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Direction;

    #[test]
    fn test_parse_controller_kind() {
        assert_eq!(ControllerKind::parse("keyboard"), Some(ControllerKind::Keyboard));
        assert_eq!(ControllerKind::parse("Leap"), Some(ControllerKind::Motion));
        assert_eq!(ControllerKind::parse("AI"), Some(ControllerKind::Ai));
        assert_eq!(ControllerKind::parse("joystick"), None);
    }

    #[test]
    fn test_default_bindings() {
        let left = default_bindings(Side::Left);
        let right = default_bindings(Side::Right);
        assert_eq!(left.direction_for("W"), Some(Direction::Up));
        assert_eq!(left.direction_for("ArrowUp"), None);
        assert_eq!(right.direction_for("ArrowDown"), Some(Direction::Down));
        assert_eq!(right.direction_for("s"), None);
    }
}
