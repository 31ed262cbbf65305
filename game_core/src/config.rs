use glam::Vec2;

use crate::components::Side;
use crate::params::Params;
use crate::surface::Rgba;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub framerate_ms: u64,
    pub sampling_window_ms: u64,
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub paddle_length: f32,
    pub paddle_width: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub paddle_start_offset: f32,
    pub deflection_limit: f32,
    pub ai_dead_zone: f32,
    pub motion_threshold: f32,
    pub background: Rgba,
    pub foreground: Rgba,
    pub ball_color: Rgba,
    pub paddle_color: Rgba,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framerate_ms: Params::FRAMERATE_MS,
            // Controllers are sampled at the frame rate
            sampling_window_ms: Params::FRAMERATE_MS,
            ball_radius: Params::BALL_RADIUS,
            serve_speed: Params::SERVE_SPEED,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            paddle_start_offset: Params::PADDLE_START_OFFSET,
            deflection_limit: Params::DEFLECTION_LIMIT,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            motion_threshold: Params::MOTION_THRESHOLD,
            background: Rgba::WHITE,
            foreground: Rgba::BLACK,
            ball_color: Rgba::BLACK,
            paddle_color: Rgba::BLACK,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side, court_width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => court_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Initial paddle Y, kept inside the legal paddle range
    pub fn paddle_start_y(&self, court_height: f32) -> f32 {
        let max_y = (court_height - self.paddle_length).max(0.0);
        (court_height / 2.0 - self.paddle_start_offset).clamp(0.0, max_y)
    }

    /// Ball velocity after a serve towards the given side
    pub fn serve_velocity(&self, towards: Side) -> Vec2 {
        match towards {
            Side::Left => Vec2::new(-self.serve_speed, 0.0),
            Side::Right => Vec2::new(self.serve_speed, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left, 800.0), 10.0, "Left paddle X");
        assert_eq!(config.paddle_x(Side::Right, 800.0), 780.0, "Right paddle X");
    }

    #[test]
    fn test_config_paddle_start_y() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(600.0), 250.0);
        // Court shorter than the paddle offset: clamp to the top
        assert_eq!(config.paddle_start_y(80.0), 0.0);
    }

    #[test]
    fn test_config_serve_velocity() {
        let config = Config::new();
        assert_eq!(config.serve_velocity(Side::Right), Vec2::new(5.0, 0.0));
        assert_eq!(config.serve_velocity(Side::Left), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_sampling_window_matches_framerate() {
        let config = Config::new();
        assert_eq!(config.sampling_window_ms, config.framerate_ms);
    }
}
