mod command;

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

pub use command::CommandCompleter;

use crate::core::theme::Theme;
use crate::highlight::SyntaxHighlighter;

/// rustyline helper for the interactive prompt.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    highlighter: SyntaxHighlighter,
    theme: Theme,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
            theme: Theme::None,
        }
    }

    /// Theme used to paint the prompt on the next read.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        match self.theme {
            Theme::None => Cow::Borrowed(prompt),
            theme => Cow::Owned(theme.paint(prompt)),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = line.get(..pos).unwrap_or(line);
        let word_start = before_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());

        // Only the command name is completed; arguments are free-form.
        if !before_cursor[..word_start].trim().is_empty() {
            return Ok((pos, Vec::new()));
        }

        let word = &before_cursor[word_start..];
        Ok((word_start, self.command_completer.complete_command(word)))
    }
}
