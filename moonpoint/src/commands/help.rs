use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "HELP"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(cmd) = args.first() {
            Ok(CommandOutput::Text(command_help(cmd)))
        } else {
            Ok(CommandOutput::Text(general_help()))
        }
    }
}

fn command_help(cmd: &str) -> String {
    match cmd.to_uppercase().as_str() {
        "LOCATE" => "LOCATE <lat> <lon> | LOCATE FAIL <kind> [message]\n  Deliver a location fix (degrees, east/north positive)\n  kind = DENIED, UNAVAILABLE, TIMEOUT or free text".into(),
        "HEADING" => "HEADING [deg]\n  Deliver a compass sensor reading, or show the current heading".into(),
        "SIMULATE" => "SIMULATE [deg | OFF]\n  Override the sensor with a manual heading (0-359)\n  OFF returns to the sensor".into(),
        "REFRESH" => "REFRESH\n  Recompute today's rise and set for the current location".into(),
        "SHOW" => "SHOW\n  Display pipeline state".into(),
        "HELP" => "HELP [command]\n  Show help for a command".into(),
        "QUIT" => "QUIT\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}

fn general_help() -> String {
    "\
Commands:
  LOCATE <lat> <lon>   Deliver a location fix
  LOCATE FAIL <kind>   Report a location failure

  HEADING [deg]        Sensor heading sample
  SIMULATE <deg>|OFF   Manual heading override

  REFRESH              Recompute today's rise/set
  SHOW                 Display pipeline state
  HELP [cmd]           Show help
  QUIT                 Exit

Type HELP <command> for details."
        .to_string()
}
