use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use crate::input::history::CommandStatus;

/// `print <token>...`: echo the arguments, substituting `$`-marked tokens that name
/// a variable. Each token is followed by a single space.
#[derive(Clone, Debug, Default)]
pub struct PrintCommand;

impl PrintCommand {
    fn render(argv: &[String], session: &Session) -> String {
        argv.iter().skip(1).fold(String::new(), |mut line, token| {
            line.push_str(session.vars.resolve(token).unwrap_or(token));
            line.push(' ');
            line
        })
    }
}

impl Command for PrintCommand {
    fn execute(&self, argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        let line = Self::render(argv, session);
        session.say(&line)?;
        Ok(Flow::Continue(CommandStatus::Valid))
    }
}
