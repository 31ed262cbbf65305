use hecs::Entity;

/// Host services: a millisecond clock and a log sink
pub trait Environment {
    fn now(&self) -> u64; // ms
    fn log(&self, msg: String);
}

/// Handles to the entities the game spawned
#[derive(Debug, Clone, Copy)]
pub struct Entities {
    pub ball: Entity,
    pub left: Entity,
    pub right: Entity,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub left_exit: bool,  // ball left through the left wall, right player scores
    pub right_exit: bool, // ball left through the right wall, left player scores
    pub wall_bounce: bool,
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
}

impl TickEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = TickEvents::new();
        events.left_exit = true;
        events.wall_bounce = true;
        events.right_paddle_hit = true;
        assert!(events.any());

        events.clear();

        assert!(!events.left_exit);
        assert!(!events.wall_bounce);
        assert!(!events.right_paddle_hit);
        assert!(!events.any());
    }
}
