//! Editing commands and their textual form.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_8;
use std::str::FromStr;

use crate::error::{EditError, EditResult};

/// Rotation applied by `rot+` / `rot-` when no other step is configured.
pub const DEFAULT_ROTATION_STEP: f64 = FRAC_PI_8;

/// A step direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
    /// Towards wire 0.
    Up,
    /// Towards the last wire.
    Down,
}

/// One edit command issued by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move the cursor one column left.
    NavigateLeft,
    /// Move the cursor one column right.
    NavigateRight,
    /// Move the cursor one wire up.
    NavigateUp,
    /// Move the cursor one wire down.
    NavigateDown,
    /// Place a Pauli-X gate.
    PlaceX,
    /// Place a Pauli-Y gate.
    PlaceY,
    /// Place a Pauli-Z gate.
    PlaceZ,
    /// Place a Hadamard gate.
    PlaceH,
    /// Delete the gate or control link under the cursor.
    Delete,
    /// Add or remove the control of the gate under the cursor.
    ToggleControl,
    /// Move the control of the gate under the cursor one wire up.
    MoveControlUp,
    /// Move the control of the gate under the cursor one wire down.
    MoveControlDown,
    /// Rotate the Pauli gate under the cursor by the given radians.
    RotateBy(f64),
}

impl Command {
    /// The cursor direction, for navigation commands.
    pub fn navigation(self) -> Option<Direction> {
        match self {
            Command::NavigateLeft => Some(Direction::Left),
            Command::NavigateRight => Some(Direction::Right),
            Command::NavigateUp => Some(Direction::Up),
            Command::NavigateDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Turns command tokens into [`Command`]s.
///
/// Tokens follow the game's key bindings: `a`/`d`/`w`/`s` move the cursor,
/// `x`/`y`/`z`/`h` place gates, `space` deletes, `c` toggles a control, and
/// `ctrl-up`/`ctrl-down` and `rot+`/`rot-` stand for the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandParser {
    rotation_step: f64,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_STEP)
    }
}

impl CommandParser {
    /// Create a parser whose `rot+` / `rot-` rotate by `rotation_step` radians.
    pub fn new(rotation_step: f64) -> Self {
        Self { rotation_step }
    }

    /// The configured rotation step.
    pub fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    /// Parse one token.
    pub fn parse(&self, token: &str) -> EditResult<Command> {
        let token = token.trim().to_ascii_lowercase();
        let command = match token.as_str() {
            "left" | "a" => Command::NavigateLeft,
            "right" | "d" => Command::NavigateRight,
            "up" | "w" => Command::NavigateUp,
            "down" | "s" => Command::NavigateDown,
            "x" => Command::PlaceX,
            "y" => Command::PlaceY,
            "z" => Command::PlaceZ,
            "h" => Command::PlaceH,
            "delete" | "del" | "space" => Command::Delete,
            "ctrl" | "c" => Command::ToggleControl,
            "ctrl-up" => Command::MoveControlUp,
            "ctrl-down" => Command::MoveControlDown,
            "rot+" => Command::RotateBy(self.rotation_step),
            "rot-" => Command::RotateBy(-self.rotation_step),
            other => {
                let angle = other
                    .strip_prefix("rotate:")
                    .and_then(|a| a.parse::<f64>().ok())
                    .filter(|a| a.is_finite())
                    .ok_or_else(|| EditError::UnknownCommand(other.to_string()))?;
                Command::RotateBy(angle)
            }
        };
        Ok(command)
    }

    /// Parse a script of tokens separated by whitespace or commas.
    ///
    /// Lines starting with `#` are comments.
    pub fn parse_script(&self, script: &str) -> EditResult<Vec<Command>> {
        script
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
            .filter(|token| !token.is_empty())
            .map(|token| self.parse(token))
            .collect()
    }
}

impl FromStr for Command {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandParser::default().parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_bindings() {
        assert_eq!("a".parse::<Command>().unwrap(), Command::NavigateLeft);
        assert_eq!("W".parse::<Command>().unwrap(), Command::NavigateUp);
        assert_eq!("h".parse::<Command>().unwrap(), Command::PlaceH);
        assert_eq!("space".parse::<Command>().unwrap(), Command::Delete);
        assert_eq!("c".parse::<Command>().unwrap(), Command::ToggleControl);
        assert_eq!(
            "ctrl-down".parse::<Command>().unwrap(),
            Command::MoveControlDown
        );
    }

    #[test]
    fn test_parse_rotation() {
        let parser = CommandParser::new(0.25);
        assert_eq!(parser.parse("rot+").unwrap(), Command::RotateBy(0.25));
        assert_eq!(parser.parse("rot-").unwrap(), Command::RotateBy(-0.25));
        assert_eq!(parser.parse("rotate:1.5").unwrap(), Command::RotateBy(1.5));
        assert_eq!(
            "rot+".parse::<Command>().unwrap(),
            Command::RotateBy(DEFAULT_ROTATION_STEP)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(EditError::UnknownCommand("jump".into()))
        );
        assert!("rotate:abc".parse::<Command>().is_err());
        assert!("rotate:inf".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_script() {
        let script = "# build a bell pair\nh s, x c\n\n";
        let commands = CommandParser::default().parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::PlaceH,
                Command::NavigateDown,
                Command::PlaceX,
                Command::ToggleControl,
            ]
        );
    }

    #[test]
    fn test_navigation_direction() {
        assert_eq!(Command::NavigateRight.navigation(), Some(Direction::Right));
        assert_eq!(Command::PlaceX.navigation(), None);
    }
}
