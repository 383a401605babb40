//! Line-based input: each stdin line is one key press or pointer event

use pong_core::{Command, KeyBindings};

/// What a single input line asks the host to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostInput {
    Command(Command),
    Quit,
}

/// Parse one line.
///
/// Accepted forms: a bound key name (`w`, `up`, `p`, ...), `tap X Y`,
/// `drag X Y`, `serve VX VY`, `reset`, `quit`. Anything else is `None`.
pub fn parse_line(line: &str, keys: &KeyBindings) -> Option<HostInput> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    match head {
        "quit" | "q" => Some(HostInput::Quit),
        "reset" => Some(HostInput::Command(Command::Reset)),
        "tap" | "drag" | "serve" => {
            let a = parts.next()?.parse::<f32>().ok()?;
            let b = parts.next()?.parse::<f32>().ok()?;
            let command = match head {
                "tap" => Command::PointerDown { x: a, y: b },
                "drag" => Command::PointerMove { x: a, y: b },
                _ => Command::Serve { vx: a, vy: b },
            };
            Some(HostInput::Command(command))
        }
        key => keys.command_for_key(key).map(HostInput::Command),
    }
}
