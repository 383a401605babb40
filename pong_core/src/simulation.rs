//! The match simulation: one ball, two paddles, a pause toggle and the
//! per-tick pipeline that ties them together.

use glam::Vec2;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Command, CommandQueue, Config, Events, MatchPhase, Paddle,
    PauseState, Playfield, Side, SimError, Time,
};

/// Flat, render-ready view of the match after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub score_left: u32,
    pub score_right: u32,
    pub pause: PauseState,
    pub phase: MatchPhase,
    pub events: Events,
}

pub struct MatchSimulation {
    world: World,
    ball: Entity,
    left: Entity,
    right: Entity,
    field: Playfield,
    config: Config,
    pause: PauseState,
    phase: MatchPhase,
    events: Events,
    time: Time,
    queue: CommandQueue,
}

impl MatchSimulation {
    /// Default tuning on a `width` x `height` playfield
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        Self::with_config(Config::with_field(width, height))
    }

    pub fn with_config(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        let field = Playfield::new(config.field_width, config.field_height)?;

        let mut world = World::new();
        let left = create_paddle(
            &mut world,
            Side::Left,
            field.paddle_spawn(Side::Left, config.paddle_width),
            &config,
        );
        let right = create_paddle(
            &mut world,
            Side::Right,
            field.paddle_spawn(Side::Right, config.paddle_width),
            &config,
        );
        // Ball waits at centre until the host serves
        let ball = create_ball(&mut world, field.center(), Vec2::ZERO, config.ball_size);

        Ok(Self {
            world,
            ball,
            left,
            right,
            field,
            config,
            pause: PauseState::Running,
            phase: MatchPhase::Serving,
            events: Events::new(),
            time: Time::new(),
            queue: CommandQueue::new(),
        })
    }

    /// Put the ball at the centre of the field with the given velocity.
    ///
    /// Valid at any time, including mid-rally.
    pub fn serve(&mut self, velocity: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.serve(self.field.center(), velocity);
        }
        self.phase = MatchPhase::Serving;
        tracing::debug!(?velocity, "Serve");
    }

    /// Serve at the configured base speed toward the right
    pub fn serve_default(&mut self) {
        self.serve(Vec2::new(self.config.base_speed, 0.0));
    }

    /// Run one tick.
    ///
    /// `dt` is recorded but motion is per tick: velocities are in distance
    /// per tick at the nominal 60 Hz cadence.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();
        self.time.advance(dt);

        // 0. Apply queued input before anything reads positions
        let pending: Vec<Command> = self.queue.drain().collect();
        for command in pending {
            self.apply(command);
        }

        // 1. Move ball (gated by pause)
        if move_ball(&mut self.world, self.pause) {
            self.phase = MatchPhase::Rallying;
        }

        // 2. Paddle bounces (run even while paused)
        check_paddle_bounces(&mut self.world, &self.config, &mut self.events);

        // 3. Top and bottom walls
        check_wall_bounce(&mut self.world, &self.field, &mut self.events);

        // 4. Side exits
        let scorers = check_scoring(&mut self.world, &self.field, &self.config, &mut self.events);
        if !scorers.is_empty() {
            // Ball is already back at centre with its serve velocity
            self.phase = MatchPhase::Scored;
        }
    }

    /// Queue a command for the start of the next tick
    pub fn enqueue(&mut self, command: Command) {
        self.queue.push(command);
    }

    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Apply a command immediately
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveUp(side) => self.move_up(side),
            Command::MoveDown(side) => self.move_down(side),
            Command::TogglePause => self.toggle_pause(),
            Command::DragPaddle { side, y } => self.drag_paddle(side, y),
            Command::PointerMove { x, y } => self.pointer_move(x, y),
            Command::PointerDown { x, y } => {
                self.tap_toggle(x, y);
            }
            Command::Serve { vx, vy } => self.serve(Vec2::new(vx, vy)),
            Command::Reset => self.reset(),
        }
    }

    pub fn move_up(&mut self, side: Side) {
        let step = self.config.paddle_step;
        shift_paddle(&mut self.world, side, step, &self.field, &self.config);
    }

    pub fn move_down(&mut self, side: Side) {
        let step = self.config.paddle_step;
        shift_paddle(&mut self.world, side, -step, &self.field, &self.config);
    }

    pub fn toggle_pause(&mut self) {
        self.pause.toggle();
        tracing::debug!(pause = ?self.pause, "Pause toggled");
    }

    /// Set a paddle's centre y directly
    pub fn drag_paddle(&mut self, side: Side, y: f32) {
        set_paddle_y(&mut self.world, side, y, &self.field, &self.config);
    }

    /// Pointer drag: moves whichever paddle owns the outer third under `x`
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let sides: Vec<Side> = self.field.drag_zones(x).collect();
        for side in sides {
            self.drag_paddle(side, y);
        }
    }

    /// Toggle pause if the tap lands in the central cell. Returns whether it did.
    pub fn tap_toggle(&mut self, x: f32, y: f32) -> bool {
        if self.field.in_center_cell(x, y) {
            self.toggle_pause();
            true
        } else {
            false
        }
    }

    /// Start a new match: zero scores, recentre paddles, unpause, serve right.
    pub fn reset(&mut self) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.score = 0;
            paddle.pos = self.field.paddle_spawn(paddle.side, paddle.width);
        }
        self.queue.clear();
        self.pause = PauseState::Running;
        self.events.clear();
        tracing::debug!("Match reset");
        self.serve_default();
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).map_or(0, |p| p.score)
    }

    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn playfield(&self) -> Playfield {
        self.field
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        let paddle_pos = |side: Side| self.paddle(side).map_or(Vec2::ZERO, |p| p.pos);
        Snapshot {
            tick: self.time.tick,
            ball_pos: ball.map_or(Vec2::ZERO, |b| b.pos),
            ball_vel: ball.map_or(Vec2::ZERO, |b| b.vel),
            left_paddle: paddle_pos(Side::Left),
            right_paddle: paddle_pos(Side::Right),
            score_left: self.score(Side::Left),
            score_right: self.score(Side::Right),
            pause: self.pause,
            phase: self.phase,
            events: self.events,
        }
    }
}
