//! Paddle controllers: where a paddle's direction comes from

pub mod keyboard;
pub mod motion;
pub mod scripted;

pub use keyboard::*;
pub use motion::*;
pub use scripted::*;

use std::cell::Cell;
use std::rc::Rc;

use crate::components::{Ball, Direction, Paddle};

/// Direction plus the time of the input that produced it
#[derive(Debug, Clone, Copy)]
pub struct ControllerState {
    direction: Direction,
    last_input: u64,      // ms
    sampling_window: u64, // ms
}

impl ControllerState {
    pub fn new(sampling_window: u64, now: u64) -> Self {
        Self {
            direction: Direction::Idle,
            last_input: now,
            sampling_window,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_input(&self) -> u64 {
        self.last_input
    }

    pub fn sampling_window(&self) -> u64 {
        self.sampling_window
    }

    pub fn set(&mut self, direction: Direction, at: u64) {
        self.direction = direction;
        self.last_input = at;
    }

    /// Fall back to idle when no input arrived within the sampling window
    pub fn decay(&mut self, now: u64) {
        if now.saturating_sub(self.last_input) > self.sampling_window {
            self.direction = Direction::Idle;
        }
    }
}

/// What a controller may look at when it is polled. Borrowed for the
/// duration of the poll only; controllers never keep entities.
#[derive(Debug, Clone, Copy)]
pub struct Observation<'a> {
    pub ball: &'a Ball,
    pub paddle: &'a Paddle,
    pub now: u64,
}

/// Source of a paddle's direction
pub trait Controller {
    /// Short name for logs
    fn kind(&self) -> &'static str;

    fn state(&self) -> &ControllerState;

    fn state_mut(&mut self) -> &mut ControllerState;

    /// Absorb input that arrived since the previous tick
    fn poll(&mut self, _obs: &Observation<'_>) {}

    fn decay(&mut self, now: u64) {
        self.state_mut().decay(now);
    }

    fn direction(&self) -> Direction {
        self.state().direction()
    }
}

/// A single sample written by an input source between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub direction: Direction,
    pub at: u64,
}

/// Single-slot cell shared between an input source and its controller.
/// The source only writes, the controller only takes; the latest write wins.
#[derive(Debug, Clone, Default)]
pub struct InputSlot(Rc<Cell<Option<Sample>>>);

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, direction: Direction, at: u64) {
        self.0.set(Some(Sample { direction, at }));
    }

    pub fn take(&self) -> Option<Sample> {
        self.0.take()
    }

    /// Move a pending sample, if any, into the controller state
    fn drain_into(&self, state: &mut ControllerState) {
        if let Some(sample) = self.take() {
            state.set(sample.direction, sample.at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_after_window() {
        let mut state = ControllerState::new(20, 0);
        state.set(Direction::Down, 1000);
        state.decay(1000 + 20 + 1);
        assert_eq!(state.direction(), Direction::Idle);
    }

    #[test]
    fn test_no_decay_within_window() {
        let mut state = ControllerState::new(20, 0);
        state.set(Direction::Up, 1000);
        state.decay(1000 + 20 - 1);
        assert_eq!(state.direction(), Direction::Up);
        // Exactly at the window edge is still "within"
        state.decay(1020);
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn test_decay_ignores_clock_going_backwards() {
        let mut state = ControllerState::new(20, 0);
        state.set(Direction::Up, 1000);
        state.decay(500);
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn test_input_slot_last_write_wins() {
        let slot = InputSlot::new();
        let writer = slot.clone();
        writer.put(Direction::Up, 10);
        writer.put(Direction::Down, 12);
        assert_eq!(
            slot.take(),
            Some(Sample {
                direction: Direction::Down,
                at: 12
            })
        );
        assert_eq!(slot.take(), None);
    }
}
