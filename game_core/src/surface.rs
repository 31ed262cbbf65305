//! Immediate-mode drawing: the backend abstraction and the court surface

use glam::Vec2;
use std::fmt;

/// Border and centre line stroke width
pub const LINE_WIDTH: f32 = 2.0;

/// RGBA colour, alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// CSS colour string, e.g. `rgba(0,0,0,1)`
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// 2D raster backend the game draws into
pub trait DrawTarget {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    /// Filled circle with no outline
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, line_width: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, line_width: f32);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
        line_width: f32,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        line_width: f32,
    },
}

/// Headless target that keeps every draw call
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for RecordingTarget {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            w,
            h,
            color,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, line_width: f32) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            line_width,
        });
    }
}

/// Court dimensions and colours, fixed once measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
    pub background: Rgba,
    pub foreground: Rgba,
}

impl Court {
    pub fn new(width: f32, height: f32, background: Rgba, foreground: Rgba) -> Self {
        Self {
            width,
            height,
            background,
            foreground,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The drawing target together with the court it shows
pub struct Surface<T: DrawTarget> {
    court: Court,
    target: T,
}

impl<T: DrawTarget> Surface<T> {
    pub fn new(court: Court, target: T) -> Self {
        Self { court, target }
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Paint the background, border and centre line. Entities are drawn on top.
    pub fn clear(&mut self) {
        let Court {
            width,
            height,
            background,
            foreground,
        } = self.court;
        self.target.fill_rect(0.0, 0.0, width, height, background);
        self.target
            .stroke_rect(0.0, 0.0, width, height, foreground, LINE_WIDTH);
        self.target.stroke_line(
            Vec2::new(width / 2.0, 0.0),
            Vec2::new(width / 2.0, height),
            foreground,
            LINE_WIDTH,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::BLACK.to_string(), "rgba(0,0,0,1)");
        assert_eq!(Rgba::WHITE.to_string(), "rgba(255,255,255,1)");
        assert_eq!(Rgba::new(10, 20, 30, 0.5).to_string(), "rgba(10,20,30,0.5)");
    }

    #[test]
    fn test_surface_clear_draws_court() {
        let court = Court::new(800.0, 600.0, Rgba::WHITE, Rgba::BLACK);
        let mut surface = Surface::new(court, RecordingTarget::new());
        surface.clear();

        let commands = &surface.target().commands;
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 600.0,
                color: Rgba::WHITE,
            }
        );
        assert!(matches!(
            commands[1],
            DrawCommand::StrokeRect { w, h, .. } if w == 800.0 && h == 600.0
        ));
        assert_eq!(
            commands[2],
            DrawCommand::StrokeLine {
                from: Vec2::new(400.0, 0.0),
                to: Vec2::new(400.0, 600.0),
                color: Rgba::BLACK,
                line_width: LINE_WIDTH,
            }
        );
    }

    #[test]
    fn test_court_center() {
        let court = Court::new(800.0, 600.0, Rgba::WHITE, Rgba::BLACK);
        assert_eq!(court.center(), Vec2::new(400.0, 300.0));
    }
}
