use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::resources::Command;
use crate::{Side, SimError};

/// Game configuration
///
/// Every field has a documented default from [`Params`]; a host may override
/// any subset, e.g. from a TOML file via [`Config::from_toml_str`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    /// Serve speed in units per tick
    pub base_speed: f32,
    /// Distance a paddle moves per up/down command
    pub paddle_step: f32,
    /// Velocity multiplier applied on every paddle bounce
    pub speed_up: f32,
    /// Keep paddle centres inside the field after moves and drags
    pub clamp_paddles: bool,
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            base_speed: Params::BASE_SPEED,
            paddle_step: Params::PADDLE_STEP,
            speed_up: Params::SPEED_UP,
            clamp_paddles: false,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with a host-supplied playfield size
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SimError> {
        let config: Config =
            toml::from_str(text).map_err(|e| SimError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("speed_up", self.speed_up),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                tracing::warn!(field = name, value, "Rejected configuration");
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} must be > 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("base_speed", self.base_speed),
            ("paddle_step", self.paddle_step),
        ] {
            if !value.is_finite() {
                tracing::warn!(field = name, value, "Rejected configuration");
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        // A ball wider than the field sits past both side exits at once
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
        ] {
            if value <= self.ball_size {
                tracing::warn!(field = name, value, ball_size = self.ball_size, "Rejected configuration");
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} must exceed ball_size ({}), got {value}",
                    self.ball_size
                )));
            }
        }
        Ok(())
    }
}

/// Keyboard bindings, by key name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".to_string(),
            left_down: "s".to_string(),
            right_up: "up".to_string(),
            right_down: "down".to_string(),
            pause: "p".to_string(),
        }
    }
}

impl KeyBindings {
    /// Translate a key name into a command. Case-insensitive; browser-style
    /// `ArrowUp`/`ArrowDown` are accepted as `up`/`down`.
    pub fn command_for_key(&self, key: &str) -> Option<Command> {
        let key = normalize_key(key);
        let bound = |binding: &str| normalize_key(binding) == key;

        if bound(&self.left_up) {
            Some(Command::MoveUp(Side::Left))
        } else if bound(&self.left_down) {
            Some(Command::MoveDown(Side::Left))
        } else if bound(&self.right_up) {
            Some(Command::MoveUp(Side::Right))
        } else if bound(&self.right_down) {
            Some(Command::MoveDown(Side::Right))
        } else if bound(&self.pause) {
            Some(Command::TogglePause)
        } else {
            None
        }
    }
}

fn normalize_key(key: &str) -> String {
    let key = key.trim().to_ascii_lowercase();
    match key.strip_prefix("arrow") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => key,
    }
}
