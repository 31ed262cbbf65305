//! Hand-tracking input. Frames are pushed by the device SDK's own loop.

use glam::Vec3;

use crate::components::Direction;
use crate::controllers::{Controller, ControllerState, InputSlot, Observation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Decode the device's numeric finger tag
    pub fn from_type(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Finger::Thumb),
            1 => Some(Finger::Index),
            2 => Some(Finger::Middle),
            3 => Some(Finger::Ring),
            4 => Some(Finger::Pinky),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointable {
    pub finger: Finger,
    pub direction: Vec3, // unit vector, y is up
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    pub index_extended: bool,
    pub pointables: Vec<Pointable>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandFrame {
    pub hands: Vec<Hand>,
}

/// Direction signalled by one hand: index finger extended and pointing
/// clearly up or down. Device "up" is screen "up".
pub fn read_hand(hand: &Hand, threshold: f32) -> Option<Direction> {
    if !hand.index_extended {
        return None;
    }
    let pointer = hand
        .pointables
        .iter()
        .rev()
        .find(|p| p.finger == Finger::Index)?;
    let dy = pointer.direction.y;
    if dy > threshold {
        Some(Direction::Up)
    } else if dy < -threshold {
        Some(Direction::Down)
    } else {
        None
    }
}

/// Every qualifying hand is applied in order, so the last one wins
pub fn read_frame(frame: &HandFrame, threshold: f32) -> Option<Direction> {
    frame
        .hands
        .iter()
        .filter_map(|hand| read_hand(hand, threshold))
        .last()
}

/// Paddle steered by pointing a finger up or down
#[derive(Debug)]
pub struct MotionController {
    state: ControllerState,
    slot: InputSlot,
}

/// Writer side handed to the device frame callback
#[derive(Debug, Clone)]
pub struct MotionHandle {
    threshold: f32,
    slot: InputSlot,
}

impl MotionController {
    pub fn new(threshold: f32, sampling_window: u64, now: u64) -> (Self, MotionHandle) {
        let slot = InputSlot::new();
        let controller = Self {
            state: ControllerState::new(sampling_window, now),
            slot: slot.clone(),
        };
        (controller, MotionHandle { threshold, slot })
    }
}

impl MotionHandle {
    /// Interpret one frame. Frames without a clear signal leave the
    /// previous sample in place.
    pub fn push_frame(&self, frame: &HandFrame, now: u64) -> Option<Direction> {
        let direction = read_frame(frame, self.threshold)?;
        self.slot.put(direction, now);
        Some(direction)
    }
}

impl Controller for MotionController {
    fn kind(&self) -> &'static str {
        "motion"
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
