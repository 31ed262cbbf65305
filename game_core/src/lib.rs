pub mod components;
pub mod config;
pub mod controllers;
pub mod game;
pub mod params;
pub mod resources;
pub mod session;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controllers::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use surface::*;

use hecs::World;
use systems::*;

/// Run one physics step of the Pong simulation
pub fn step(world: &mut World, court: &Court, config: &Config, events: &mut TickEvents) {
    // 1. Move ball, then paddles
    move_ball(world);
    move_paddles(world);

    // 2. Side walls (serve) and top/bottom walls (bounce)
    check_walls(world, court, config, events);

    // 3. Paddles
    check_paddles(world, config, events);
}

/// Helper to create a paddle entity for the given side of the court
pub fn create_paddle(
    world: &mut World,
    side: Side,
    court: &Court,
    config: &Config,
) -> hecs::Entity {
    let paddle = Paddle {
        length: config.paddle_length,
        width: config.paddle_width,
        color: config.paddle_color,
        ..Paddle::new(
            side,
            config.paddle_x(side, court.width),
            config.paddle_start_y(court.height),
            config.paddle_speed,
            court.height,
        )
    };
    world.spawn((paddle,))
}

/// Helper to create the ball entity on the centre spot, served to the right
pub fn create_ball(world: &mut World, court: &Court, config: &Config) -> hecs::Entity {
    let ball = Ball {
        color: config.ball_color,
        ..Ball::new(
            court.center(),
            config.serve_velocity(Side::Right),
            config.ball_radius,
        )
    };
    world.spawn((ball,))
}
