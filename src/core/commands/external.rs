use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use crate::input::history::CommandStatus;
use crate::process::ProcessExecutor;

/// Anything that is not a built-in: run it as a child process and print what it wrote.
#[derive(Clone, Debug, Default)]
pub struct ExternalCommand {
    process_executor: ProcessExecutor,
}

impl ExternalCommand {
    pub fn new() -> Self {
        Self {
            process_executor: ProcessExecutor::new(),
        }
    }
}

impl Command for ExternalCommand {
    fn execute(&self, argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        session.flush()?;
        let captured = self.process_executor.run(argv)?;

        if captured.launch_failed {
            return Err(CommandError::LaunchFailure {
                command: argv.first().cloned().unwrap_or_default(),
                reason: captured.launch_error.unwrap_or_default(),
            });
        }

        session.write_captured(&captured.output)?;
        Ok(Flow::Continue(CommandStatus::from_success(captured.success())))
    }
}
