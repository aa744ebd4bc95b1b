pub mod heading;
pub mod help;
pub mod locate;
pub mod refresh;
pub mod show;
pub mod simulate;

use crate::controller::Transition;
use crate::error::{Error, Result};
use crate::narrator::describe;
use crate::session::Session;
use std::path::Path;

#[derive(Debug)]
pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    None,
}

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput>;
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(CommandOutput::None);
    }
    let cmd_name = parts[0].to_uppercase();
    let args = &parts[1..];
    match cmd_name.as_str() {
        "HEADING" => heading::Heading.execute(session, args),
        "HELP" => help::Help.execute(session, args),
        "LOCATE" => locate::Locate.execute(session, args),
        "QUIT" => Ok(CommandOutput::Text("Use Ctrl-D to exit".to_string())),
        "REFRESH" => refresh::Refresh.execute(session, args),
        "SHOW" => show::Show.execute(session, args),
        "SIMULATE" => simulate::Simulate.execute(session, args),
        _ => Err(Error::Parse(format!("unknown command: {}", parts[0]))),
    }
}

/// Runs a file of commands, one per line. Blank lines and `#` comments are skipped.
pub fn run_script(session: &mut Session, path: &Path) -> Result<Vec<CommandOutput>> {
    let text = std::fs::read_to_string(path)?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| dispatch(session, line))
        .collect()
}

pub(crate) fn parse_degrees(arg: &str, what: &str) -> Result<f64> {
    arg.parse::<f64>()
        .map_err(|_| Error::Parse(format!("invalid {}: {}", what, arg)))
}

pub fn format_transition(transition: &Transition) -> String {
    match transition {
        Transition::Located {
            position,
            visibility,
            rotation,
        } => {
            let mut lines = vec![
                format!("Moon: {}", position),
                describe(visibility).to_string(),
            ];
            match rotation {
                Some(r) => lines.push(format!("Rotate pointer {}", r)),
                None => lines.push("Waiting for a heading".to_string()),
            }
            lines.join("\n")
        }
        Transition::LocationLost(failure) => format!("Location lost: {}", failure),
        Transition::Rotated(r) => format!("Rotate pointer {}", r),
        Transition::VisibilityRefreshed(w) => describe(w).to_string(),
        Transition::Idle(missing) => format!("Idle: {}", missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::DateTime;

    fn session() -> Session {
        let at = DateTime::parse_from_rfc3339("2024-03-20T14:00:00-04:00").unwrap();
        Session::with_clock(FixedClock::new(at))
    }

    fn text(output: CommandOutput) -> String {
        match output {
            CommandOutput::Text(s) => s,
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn dispatch_locate_then_heading_rotates() {
        let mut session = session();
        let out = text(dispatch(&mut session, "LOCATE 38.9 -77.0").unwrap());
        assert!(out.contains("Waiting for a heading"), "{}", out);
        let out = text(dispatch(&mut session, "HEADING 90").unwrap());
        assert!(out.starts_with("Rotate pointer"), "{}", out);
        assert!(session.controller.rotation().is_some());
    }

    #[test]
    fn dispatch_unknown_command_errors() {
        let mut session = session();
        assert!(matches!(
            dispatch(&mut session, "ZZZNOTACMD"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn dispatch_empty_input_returns_none() {
        let mut session = session();
        let result = dispatch(&mut session, "   ").unwrap();
        assert!(matches!(result, CommandOutput::None));
    }

    #[test]
    fn dispatch_case_insensitive() {
        let mut session = session();
        assert!(dispatch(&mut session, "locate 38.9 -77").is_ok());
        assert!(session.controller.state().coordinate.is_some());
    }

    #[test]
    fn dispatch_bad_coordinate_is_compass_error() {
        let mut session = session();
        let err = dispatch(&mut session, "LOCATE 95 0").unwrap_err();
        assert!(matches!(err, Error::Compass(_)), "{:?}", err);
    }

    #[test]
    fn command_output_debug_shows_variant() {
        let mut session = session();
        let out = dispatch(&mut session, "QUIT").unwrap();
        assert_eq!(format!("{:?}", out), "Text(\"Use Ctrl-D to exit\")");
        assert_eq!(format!("{:?}", CommandOutput::None), "None");
    }

    #[test]
    fn run_script_missing_file_is_io_error() {
        let mut session = session();
        let err = run_script(&mut session, Path::new("/nonexistent/moonpoint.script")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
