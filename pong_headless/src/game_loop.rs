use std::time::Duration;

use pong_core::{MatchSimulation, Params, Side};
use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::input::HostInput;

/// Why the tick loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    TickLimit,
    InputClosed,
}

/// Drive the simulation at the fixed tick rate.
///
/// Input arrives on `input_rx` from another thread; it is drained into the
/// simulation's queue at the top of each tick so nothing mutates state while
/// `update` runs.
pub async fn run_tick_loop(
    sim: &mut MatchSimulation,
    mut input_rx: mpsc::UnboundedReceiver<HostInput>,
    max_ticks: Option<u64>,
    report_every: u64,
) -> LoopExit {
    let dt = Params::FIXED_DT;
    let mut interval = tokio::time::interval(Duration::from_secs_f32(dt));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        loop {
            match input_rx.try_recv() {
                Ok(HostInput::Command(command)) => sim.enqueue(command),
                Ok(HostInput::Quit) => return LoopExit::Quit,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if max_ticks.is_none() {
                        return LoopExit::InputClosed;
                    }
                    break;
                }
            }
        }

        sim.update(dt);

        let events = sim.events();
        if events.left_scored || events.right_scored {
            tracing::info!(
                left = sim.score(Side::Left),
                right = sim.score(Side::Right),
                "Score"
            );
        }

        let tick = sim.time().tick;
        if report_every > 0 && tick % report_every == 0 {
            let snap = sim.snapshot();
            tracing::info!(
                tick,
                ball_x = snap.ball_pos.x,
                ball_y = snap.ball_pos.y,
                left_y = snap.left_paddle.y,
                right_y = snap.right_paddle.y,
                pause = ?snap.pause,
                phase = ?snap.phase,
                "State"
            );
        }

        if max_ticks.is_some_and(|max| tick >= max) {
            return LoopExit::TickLimit;
        }
    }
}
