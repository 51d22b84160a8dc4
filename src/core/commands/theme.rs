use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use crate::core::theme::Theme;
use crate::input::history::CommandStatus;

/// `theme <red|green|blue>`. Only routed here with exactly one argument.
#[derive(Clone, Debug, Default)]
pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn execute(&self, argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        let name = argv.get(1).map(String::as_str).unwrap_or_default();
        let theme =
            Theme::from_name(name).ok_or_else(|| CommandError::UnsupportedTheme(name.to_string()))?;

        session.set_theme(theme);
        Ok(Flow::Continue(CommandStatus::Valid))
    }
}
