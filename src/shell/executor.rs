use crate::core::commands::Flow;
use crate::core::parser::{parse_line, strip_line_ending};
use crate::error::ShellError;
use crate::input::history::CommandStatus;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let argv = parse_line(strip_line_ending(line));

        // Blank lines never reach the dispatcher and leave no history.
        if argv.is_empty() {
            return Ok(Flow::Continue(CommandStatus::Valid));
        }

        self.dispatcher.dispatch(&argv)
    }
}
