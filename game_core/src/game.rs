//! The Pong orchestrator: owns the world, the controllers and the surface

use hecs::World;

use crate::controllers::Controller;
use crate::session::{Session, SessionAction, SessionState, Transition};
use crate::systems::{apply_controllers, draw_world, Seat};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Direction, DrawTarget, Entities, Environment,
    Paddle, Side, Surface, TickEvents,
};

pub struct Pong<T: DrawTarget> {
    env: Box<dyn Environment>,
    world: World,
    entities: Entities,
    seats: [Seat; 2], // left, right
    surface: Surface<T>,
    config: Config,
    session: Session,
    events: TickEvents,
    ticks: u64,
}

impl<T: DrawTarget> Pong<T> {
    pub fn new(
        env: Box<dyn Environment>,
        config: Config,
        surface: Surface<T>,
        left: Box<dyn Controller>,
        right: Box<dyn Controller>,
    ) -> Self {
        let court = *surface.court();
        let mut world = World::new();
        let ball = create_ball(&mut world, &court, &config);
        let left_paddle = create_paddle(&mut world, Side::Left, &court, &config);
        let right_paddle = create_paddle(&mut world, Side::Right, &court, &config);

        env.log(format!(
            "Pong: {}x{} court, {} (left) vs {} (right)",
            court.width,
            court.height,
            left.kind(),
            right.kind()
        ));

        Self {
            env,
            world,
            entities: Entities {
                ball,
                left: left_paddle,
                right: right_paddle,
            },
            seats: [Seat::new(left_paddle, left), Seat::new(right_paddle, right)],
            surface,
            config,
            session: Session::new(),
            events: TickEvents::new(),
            ticks: 0,
        }
    }

    /// Advance the game by one frame. Returns `None` without touching
    /// anything unless the session is playing.
    pub fn tick(&mut self) -> Option<TickEvents> {
        if !self.session.is_playing() {
            return None;
        }
        let now = self.env.now();
        let court = *self.surface.court();
        self.events.clear();

        apply_controllers(&mut self.world, self.entities.ball, &mut self.seats, now);
        step(&mut self.world, &court, &self.config, &mut self.events);

        if self.events.left_exit {
            self.env.log("Pong: ball out on the left, right player scores".to_string());
        }
        if self.events.right_exit {
            self.env.log("Pong: ball out on the right, left player scores".to_string());
        }

        draw_world(&self.world, &self.entities, &mut self.surface);
        self.ticks += 1;
        Some(self.events)
    }

    pub fn start(&mut self) -> Transition {
        self.apply(SessionAction::Start)
    }

    pub fn pause(&mut self) -> Transition {
        self.apply(SessionAction::Pause)
    }

    pub fn resume(&mut self) -> Transition {
        self.apply(SessionAction::Resume)
    }

    pub fn stop(&mut self) -> Transition {
        self.apply(SessionAction::Stop)
    }

    pub fn apply(&mut self, action: SessionAction) -> Transition {
        let result = self.session.transition(action);
        if result.success {
            self.env.log(format!(
                "Pong: {:?} -> {:?} after {} ticks",
                result.from_state, result.to_state, self.ticks
            ));
        } else {
            self.env.log(format!(
                "Pong: ignoring {:?} while {:?}",
                action, result.from_state
            ));
        }
        result
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn frame_period_ms(&self) -> u64 {
        self.config.framerate_ms
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn surface(&self) -> &Surface<T> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<T> {
        &mut self.surface
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.entities.ball).ok().map(|b| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.entities.left,
            Side::Right => self.entities.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    pub fn controller_direction(&self, side: Side) -> Direction {
        let index = match side {
            Side::Left => 0,
            Side::Right => 1,
        };
        self.seats[index].controller.direction()
    }
}
