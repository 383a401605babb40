use std::io::ErrorKind;

use pong_core::Config;

pub const DEFAULT_CONFIG_PATH: &str = "pong.toml";

/// Host-side settings layered on top of the core [`Config`]
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub game: Config,
    /// Stop after this many ticks; `None` runs until `quit`
    pub max_ticks: Option<u64>,
    /// Log a state line every this many ticks (0 disables)
    pub report_every: u64,
}

impl HostConfig {
    /// Load the core config from `path` if it exists, then apply `PONG_*` overrides.
    pub fn load(path: &str) -> Self {
        Self::load_with_env(path, |var| std::env::var(var).ok())
    }

    /// Same as [`HostConfig::load`] with an explicit variable lookup.
    pub fn load_with_env(path: &str, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut game = match std::fs::read_to_string(path) {
            Ok(content) => match Config::from_toml_str(&content) {
                Ok(cfg) => {
                    tracing::info!(path, "Loaded configuration");
                    cfg
                }
                Err(e) => {
                    tracing::warn!(path, error = %e, "Bad configuration, using defaults");
                    Config::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path, "No configuration file found, using defaults");
                Config::default()
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "Cannot read configuration, using defaults");
                Config::default()
            }
        };

        override_f32(&env, "PONG_FIELD_WIDTH", &mut game.field_width);
        override_f32(&env, "PONG_FIELD_HEIGHT", &mut game.field_height);
        override_f32(&env, "PONG_BASE_SPEED", &mut game.base_speed);
        override_f32(&env, "PONG_PADDLE_STEP", &mut game.paddle_step);
        override_f32(&env, "PONG_SPEED_UP", &mut game.speed_up);
        if let Some(val) = env("PONG_CLAMP_PADDLES") {
            game.clamp_paddles = matches!(val.as_str(), "1" | "true" | "yes");
        }

        let max_ticks = env("PONG_MAX_TICKS").and_then(|v| v.parse::<u64>().ok());
        let report_every = env("PONG_REPORT_EVERY")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        Self {
            game,
            max_ticks,
            report_every,
        }
    }
}

fn override_f32(env: &impl Fn(&str) -> Option<String>, var: &str, slot: &mut f32) {
    if let Some(val) = env(var) {
        match val.parse::<f32>() {
            Ok(n) => *slot = n,
            Err(_) => tracing::warn!(var, value = %val, "Ignoring non-numeric override"),
        }
    }
}
