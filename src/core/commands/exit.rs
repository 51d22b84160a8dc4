use super::{Command, CommandError, Flow};
use crate::core::state::Session;

pub const FAREWELL: &str = "Bye!";

#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        session.say(FAREWELL)?;
        Ok(Flow::Exit)
    }
}
