use super::{format_transition, Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Refresh;

impl Command for Refresh {
    fn name(&self) -> &str {
        "REFRESH"
    }
    fn description(&self) -> &str {
        "Recompute today's rise and set"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let transition = session.refresh()?;
        Ok(CommandOutput::Text(format_transition(&transition)))
    }
}
