use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Side, SimError};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f32,   // Delta time reported by the host for the last tick
    pub now: f32,  // Total elapsed time
    pub tick: u64, // Number of update calls
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
        self.tick += 1;
    }
}

/// Whether the ball's motion is currently advancing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
}

impl PauseState {
    pub fn toggle(&mut self) {
        *self = match self {
            PauseState::Running => PauseState::Paused,
            PauseState::Paused => PauseState::Running,
        };
    }

    pub fn is_paused(&self) -> bool {
        *self == PauseState::Paused
    }
}

/// Match-level lifecycle, orthogonal to pause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball placed at centre with a fresh velocity, not yet moved
    #[default]
    Serving,
    /// Ball in play
    Rallying,
    /// A point was awarded on the last tick. The ball is already back at
    /// centre with its serve velocity, so this state doubles as the re-serve:
    /// the next moving tick goes straight to `Rallying` without `Serving`.
    Scored,
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

/// Semantic input commands a host forwards into the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    MoveUp(Side),
    MoveDown(Side),
    TogglePause,
    /// Set a paddle's centre y directly
    DragPaddle { side: Side, y: f32 },
    /// Pointer drag anywhere; routed to the paddle whose third contains x
    PointerMove { x: f32, y: f32 },
    /// Pointer press; toggles pause inside the central cell
    PointerDown { x: f32, y: f32 },
    Serve { vx: f32, vy: f32 },
    Reset,
}

impl Command {
    /// Build a paddle step from a raw player id and direction (`1` = up, `-1` = down).
    ///
    /// A zero direction yields `None`.
    pub fn paddle_step(player_id: u8, dir: i8) -> Result<Option<Command>, SimError> {
        let side = Side::try_from(player_id)?;
        Ok(match dir.signum() {
            1 => Some(Command::MoveUp(side)),
            -1 => Some(Command::MoveDown(side)),
            _ => None,
        })
    }

    pub fn drag(player_id: u8, y: f32) -> Result<Command, SimError> {
        Ok(Command::DragPaddle {
            side: Side::try_from(player_id)?,
            y,
        })
    }
}

/// FIFO of commands waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Take every pending command in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}
