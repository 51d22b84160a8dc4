use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use crate::input::history::CommandStatus;

/// A `$`-marked first token: `NAME=VALUE` when it stands alone.
#[derive(Clone, Debug, Default)]
pub struct AssignCommand;

impl Command for AssignCommand {
    fn execute(&self, argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        if argv.len() != 1 {
            return Err(CommandError::MisplacedAssignment(argv.join(" ")));
        }

        session.vars.assign(&argv[0])?;
        Ok(Flow::Continue(CommandStatus::Valid))
    }
}
