use inksac::prelude::*;

use crate::core::commands::BUILTIN_COMMANDS;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn without_color() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colour a line as it is typed: built-in names cyan, `$` tokens yellow.
    ///
    /// Whitespace is kept as typed so the cursor stays where rustyline expects it.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() || input.trim().is_empty() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut first_word = true;
        let mut rest = input;

        while !rest.is_empty() {
            let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            result.push_str(&rest[..word_start]);
            rest = &rest[word_start..];

            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            if !word.is_empty() {
                result.push_str(&self.highlight_word(word, first_word));
                first_word = false;
            }
            rest = &rest[word_end..];
        }

        result
    }

    fn highlight_word(&self, word: &str, is_command: bool) -> String {
        if is_command && BUILTIN_COMMANDS.contains(&word) {
            let command_style = Style::builder()
                .foreground(Color::Cyan)
                .bold()
                .build();
            word.style(command_style).to_string()
        } else if word.contains('$') {
            let variable_style = Style::builder()
                .foreground(Color::Yellow)
                .build();
            word.style(variable_style).to_string()
        } else {
            word.to_string()
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }
}
