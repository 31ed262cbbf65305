use glam::Vec2;

use crate::surface::{DrawTarget, Rgba};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Vertical motion requested by a controller or applied to a paddle.
/// Screen coordinates: up is towards y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Idle,
    Down,
}

impl Direction {
    /// -1 = up, 0 = idle, 1 = down
    pub fn signum(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Idle => 0,
            Direction::Down => 1,
        }
    }

    pub fn as_f32(self) -> f32 {
        self.signum() as f32
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            color: Rgba::BLACK,
        }
    }

    /// Move by one step of velocity. Walls are the game's business.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Put the ball back on the centre spot with a fresh velocity
    pub fn serve(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }

    pub fn render<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.fill_circle(self.pos, self.radius, self.color);
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // top edge
    pub length: f32,
    pub width: f32,
    pub speed: f32,
    pub direction: Direction,
    pub total_height: f32,
    pub color: Rgba,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, speed: f32, total_height: f32) -> Self {
        Self {
            side,
            x,
            y,
            length: crate::params::Params::PADDLE_LENGTH,
            width: crate::params::Params::PADDLE_WIDTH,
            speed,
            direction: Direction::Idle,
            total_height,
            color: Rgba::BLACK,
        }
    }

    pub fn max_y(&self) -> f32 {
        self.total_height - self.length
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.length / 2.0
    }

    /// Move one step in the current direction. A step that would carry the
    /// paddle past a court edge is dropped, so the paddle can rest short of
    /// the edge but never beyond it.
    pub fn advance(&mut self) {
        let next = self.y + self.direction.as_f32() * self.speed;
        let can_move = match self.direction {
            Direction::Up => self.y > 0.0 && next >= 0.0,
            Direction::Down => self.y < self.max_y() && next <= self.max_y(),
            Direction::Idle => false,
        };
        if can_move {
            self.y = next;
        }
    }

    /// True when the ball centre lies strictly between the paddle's ends
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.length
    }

    pub fn render<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.fill_rect(self.x, self.y, self.width, self.length, self.color);
    }
}
