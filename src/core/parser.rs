/// Split a raw input line into its whitespace-separated tokens.
///
/// No quoting, escaping or globbing is performed. A blank line yields an empty
/// vector, which callers treat as "nothing to run" rather than as an error.
pub fn parse_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Drop the trailing `\n` / `\r\n` a line reader leaves behind.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
