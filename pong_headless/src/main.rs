mod config;
mod game_loop;
mod input;

use std::io::BufRead;
use std::process::ExitCode;

use pong_core::{KeyBindings, MatchSimulation, Side};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use config::{HostConfig, DEFAULT_CONFIG_PATH};
use input::{parse_line, HostInput};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let host = HostConfig::load(&path);

    let mut sim = match MatchSimulation::with_config(host.game.clone()) {
        Ok(sim) => sim,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start match");
            return ExitCode::FAILURE;
        }
    };
    sim.serve_default();
    let field = sim.playfield();
    tracing::info!(width = field.width, height = field.height, "Match started");

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(input_tx, sim.config().keys.clone());

    let exit = game_loop::run_tick_loop(&mut sim, input_rx, host.max_ticks, host.report_every).await;

    tracing::info!(
        ?exit,
        left = sim.score(Side::Left),
        right = sim.score(Side::Right),
        "Match finished"
    );
    ExitCode::SUCCESS
}

/// Read stdin on its own thread; lines become commands for the tick loop.
fn spawn_stdin_reader(tx: mpsc::UnboundedSender<HostInput>, keys: KeyBindings) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line, &keys) {
                Some(input) => {
                    if tx.send(input).is_err() {
                        break;
                    }
                }
                None => tracing::debug!(line = %line, "Ignored input"),
            }
        }
    });
}
