use super::{format_transition, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::heading::ManualHeading;
use crate::session::Session;

pub struct Simulate;

impl Command for Simulate {
    fn name(&self) -> &str {
        "SIMULATE"
    }
    fn description(&self) -> &str {
        "Override the sensor with a manual heading"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let Some(arg) = args.first() else {
            return Ok(CommandOutput::Text(match session.heading.manual() {
                Some(m) => format!("Manual override at {}°", m.degrees()),
                None => "Manual override off".to_string(),
            }));
        };

        let transition = if arg.eq_ignore_ascii_case("OFF") {
            session.stop_simulation()?
        } else {
            let degrees = arg
                .parse::<u16>()
                .map_err(|_| Error::Parse(format!("invalid manual heading: {}", arg)))?;
            session.simulate(ManualHeading::new(degrees)?)?
        };

        Ok(CommandOutput::Text(match transition {
            Some(t) => format_transition(&t),
            None => "Manual override off; no sensor heading yet".to_string(),
        }))
    }
}
