use std::error::Error;
use std::fmt;
use std::io::BufRead;

use crate::controllers::explore::ExploreCommand;
use crate::core::data::image_point::ImagePoint;
use crate::core::viewport::controller::ZoomDirection;

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Syntax { line: usize, message: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read script: {}", err),
            Self::Syntax { line, message } => write!(f, "script line {}: {}", line, message),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Syntax { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parses one command per line:
///
/// ```text
/// zoom in|out [X Y]
/// press [X Y]
/// move [X Y]
/// release
/// reset
/// ```
///
/// Omitting the coordinates means the pointer is off the surface. Blank
/// lines and lines starting with `#` are skipped.
pub fn parse_script(reader: impl BufRead) -> Result<Vec<ExploreCommand>, ScriptError> {
    let mut commands = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = parse_line(trimmed).map_err(|message| ScriptError::Syntax {
            line: index + 1,
            message,
        })?;
        commands.push(command);
    }

    Ok(commands)
}

fn parse_line(line: &str) -> Result<ExploreCommand, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["zoom", direction, rest @ ..] => {
            let direction = match *direction {
                "in" => ZoomDirection::In,
                "out" => ZoomDirection::Out,
                other => return Err(format!("unknown zoom direction '{}'", other)),
            };

            Ok(ExploreCommand::Zoom {
                direction,
                focal: parse_point(rest)?,
            })
        }
        ["press", rest @ ..] => Ok(ExploreCommand::Press(parse_point(rest)?)),
        ["move", rest @ ..] => Ok(ExploreCommand::Move(parse_point(rest)?)),
        ["release"] => Ok(ExploreCommand::Release),
        ["reset"] => Ok(ExploreCommand::Reset),
        [other, ..] => Err(format!("unknown command '{}'", other)),
        [] => Err("empty command".to_string()),
    }
}

fn parse_point(words: &[&str]) -> Result<Option<ImagePoint>, String> {
    match words {
        [] => Ok(None),
        [x, y] => {
            let x = x
                .parse::<f64>()
                .map_err(|_| format!("bad x coordinate '{}'", x))?;
            let y = y
                .parse::<f64>()
                .map_err(|_| format!("bad y coordinate '{}'", y))?;

            Ok(Some(ImagePoint::new(x, y)))
        }
        _ => Err(format!("expected 'X Y' but got '{}'", words.join(" "))),
    }
}
