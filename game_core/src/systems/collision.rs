use crate::{Ball, Config, Court, Paddle, Side, TickEvents};
use hecs::World;

/// Side walls serve a fresh ball, top and bottom walls mirror it.
/// No position correction: a fast ball may sit slightly inside a wall
/// until the next tick carries it back out.
pub fn check_walls(world: &mut World, court: &Court, config: &Config, events: &mut TickEvents) {
    let center = court.center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < ball.radius {
            ball.serve(center, config.serve_velocity(Side::Right));
            events.left_exit = true;
        }
        if ball.pos.x > court.width - ball.radius {
            ball.serve(center, config.serve_velocity(Side::Left));
            events.right_exit = true;
        }
        if ball.pos.y < ball.radius {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
        if ball.pos.y > court.height - ball.radius {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Check ball against both paddles, left first.
///
/// There is no "already bounced" guard and no check that the ball is
/// approaching: a ball that stays inside the contact band is reflected on
/// every tick it spends there.
pub fn check_paddles(world: &mut World, config: &Config, events: &mut TickEvents) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !in_contact(ball, paddle) {
                continue;
            }
            deflect(ball, paddle, config.deflection_limit);
            match paddle.side {
                Side::Left => events.left_paddle_hit = true,
                Side::Right => events.right_paddle_hit = true,
            }
        }
    }
}

/// Ball centre within one radius of the paddle's court-facing edge (or
/// behind it) and strictly between the paddle's ends
pub fn in_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let reached = match paddle.side {
        Side::Left => ball.pos.x < paddle.x + paddle.width + ball.radius,
        Side::Right => ball.pos.x > paddle.x - ball.radius,
    };
    reached && paddle.spans(ball.pos.y)
}

/// Flip horizontal velocity and bend the vertical one by where the ball
/// struck, relative to the paddle centre, limited to +/- `limit`
pub fn deflect(ball: &mut Ball, paddle: &Paddle, limit: f32) {
    ball.vel.x = -ball.vel.x;
    let offset = (ball.pos.y - paddle.center_y()).clamp(-limit, limit);
    ball.vel.y += offset;
}
