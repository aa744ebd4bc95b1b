use super::{format_transition, parse_degrees, Command, CommandOutput};
use crate::error::Result;
use crate::heading::{HeadingSample, HeadingSource};
use crate::session::Session;

pub struct Heading;

impl Command for Heading {
    fn name(&self) -> &str {
        "HEADING"
    }
    fn description(&self) -> &str {
        "Deliver a sensor heading or show the current one"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let Some(arg) = args.first() else {
            return Ok(CommandOutput::Text(show_heading(session)));
        };
        let sample = HeadingSample::new(parse_degrees(arg, "heading")?)?;
        match session.sensor_heading(sample)? {
            Some(transition) => Ok(CommandOutput::Text(format_transition(&transition))),
            None => Ok(CommandOutput::Text(format!(
                "Sensor heading {} recorded; manual override active",
                sample
            ))),
        }
    }
}

fn show_heading(session: &Session) -> String {
    match session.heading.current() {
        Some(sample) => format!("Heading = {} ({})", sample, session.heading.kind()),
        None => "No heading yet".to_string(),
    }
}
