use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use crate::input::history::CommandStatus;

/// `log`: print every recorded command as a timestamp line and a name/status line.
#[derive(Clone, Debug, Default)]
pub struct LogCommand;

impl Command for LogCommand {
    fn execute(&self, _argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        let lines: Vec<String> = session
            .history
            .list()
            .flat_map(|entry| [entry.timestamp_line(), entry.summary_line()])
            .collect();

        for line in &lines {
            session.say(line)?;
        }
        Ok(Flow::Continue(CommandStatus::Valid))
    }
}
