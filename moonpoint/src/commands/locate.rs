use super::{format_transition, parse_degrees, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::location::{LocationFailure, LocationUpdate};
use crate::session::Session;

pub struct Locate;

impl Command for Locate {
    fn name(&self) -> &str {
        "LOCATE"
    }
    fn description(&self) -> &str {
        "Deliver a location fix or failure"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let update = parse_locate_args(args)?;
        let transition = session.locate(update)?;
        Ok(CommandOutput::Text(format_transition(&transition)))
    }
}

fn parse_locate_args(args: &[&str]) -> Result<LocationUpdate> {
    match args {
        [first, rest @ ..] if first.eq_ignore_ascii_case("FAIL") => {
            let Some((kind, message)) = rest.split_first() else {
                return Err(Error::Parse(
                    "LOCATE FAIL requires DENIED, UNAVAILABLE, TIMEOUT or a message".to_string(),
                ));
            };
            let message = (!message.is_empty()).then(|| message.join(" "));
            Ok(LocationUpdate::Unavailable(LocationFailure::from_keyword(
                kind,
                message.as_deref(),
            )))
        }
        [lat, lon] => {
            let lat = parse_degrees(lat, "latitude")?;
            let lon = parse_degrees(lon, "longitude")?;
            Ok(LocationUpdate::fix(lat, lon)?)
        }
        _ => Err(Error::Parse(
            "LOCATE requires <lat> <lon> or FAIL <kind>".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fix() {
        let update = parse_locate_args(&["38.9", "-77.0"]).unwrap();
        let c = update.coordinate().unwrap();
        assert_eq!(c.latitude(), 38.9);
        assert_eq!(c.longitude(), -77.0);
    }

    #[test]
    fn parse_failures() {
        assert_eq!(
            parse_locate_args(&["FAIL", "timeout"]).unwrap(),
            LocationUpdate::Unavailable(LocationFailure::Timeout)
        );
        assert_eq!(
            parse_locate_args(&["fail", "satellite", "lost", "lock"]).unwrap(),
            LocationUpdate::Unavailable(LocationFailure::Other("satellite lost lock".to_string()))
        );
        assert!(parse_locate_args(&["FAIL"]).is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_locate_args(&["north", "0"]), Err(Error::Parse(_))));
        assert!(parse_locate_args(&["38.9"]).is_err());
        assert!(parse_locate_args(&[]).is_err());
    }
}
