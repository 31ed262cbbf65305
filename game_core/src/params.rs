/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Timing (milliseconds)
    pub const FRAMERATE_MS: u64 = 20;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 5.0;

    // Paddle
    pub const PADDLE_LENGTH: f32 = 150.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    pub const PADDLE_INSET: f32 = 10.0; // gap between side wall and paddle
    pub const PADDLE_START_OFFSET: f32 = 50.0; // above vertical centre

    // Collision
    pub const DEFLECTION_LIMIT: f32 = 2.0; // max y-velocity added per paddle hit

    // Controllers
    pub const AI_DEAD_ZONE: f32 = 25.0;
    pub const MOTION_THRESHOLD: f32 = 0.3;
}
