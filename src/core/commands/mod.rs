use std::io;

mod assign;
mod exit;
mod external;
mod log;
mod print;
mod theme;

pub use assign::AssignCommand;
pub use exit::ExitCommand;
pub use external::ExternalCommand;
pub use log::LogCommand;
pub use print::PrintCommand;
pub use theme::ThemeCommand;

use crate::core::config::Config;
use crate::core::env::EnvError;
use crate::core::state::Session;
use crate::error::ShellError;
use crate::input::history::CommandStatus;
use crate::process::ProcessError;

/// Names handled inside the interpreter. Variable assignment has no fixed name.
pub const BUILTIN_COMMANDS: &[&str] = &["exit", "log", "print", "theme"];

#[derive(Debug)]
pub enum CommandError {
    MalformedAssignment(EnvError),
    MisplacedAssignment(String),
    UnsupportedTheme(String),
    LaunchFailure { command: String, reason: String },
    Io(io::Error),
    Process(ProcessError),
}

impl CommandError {
    /// Recoverable errors end the command, not the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CommandError::Io(_) | CommandError::Process(_))
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MalformedAssignment(err) => write!(f, "{}", err),
            CommandError::MisplacedAssignment(line) => {
                write!(f, "Variable value expected: {}", line)
            }
            CommandError::UnsupportedTheme(_) => write!(f, "unsupported theme"),
            CommandError::LaunchFailure { command, .. } => write!(
                f,
                "{}: Missing keyword or command, or permission problem.",
                command
            ),
            CommandError::Io(err) => write!(f, "IO error: {}", err),
            CommandError::Process(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::MalformedAssignment(err)
    }
}

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(CommandStatus),
    Exit,
}

pub trait Command {
    /// Run with the full token sequence; `argv[0]` is the command name.
    fn execute(&self, argv: &[String], session: &mut Session) -> Result<Flow, CommandError>;
}

#[derive(Clone, Debug)]
enum CommandType {
    Exit(ExitCommand),
    Print(PrintCommand),
    Theme(ThemeCommand),
    Log(LogCommand),
    Assign(AssignCommand),
    External(ExternalCommand),
}

impl CommandType {
    /// Pick the handler for a non-empty token sequence, first match wins.
    fn route(argv: &[String]) -> Self {
        let name = argv[0].as_str();
        match name {
            "exit" => CommandType::Exit(ExitCommand),
            "print" => CommandType::Print(PrintCommand),
            "theme" if argv.len() == 2 => CommandType::Theme(ThemeCommand),
            "log" => CommandType::Log(LogCommand),
            _ if name.contains('$') => CommandType::Assign(AssignCommand),
            _ => CommandType::External(ExternalCommand::new()),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CommandType::Exit(_) => "exit",
            CommandType::Print(_) => "print",
            CommandType::Theme(_) => "theme",
            CommandType::Log(_) => "log",
            CommandType::Assign(_) => "assign",
            CommandType::External(_) => "external",
        }
    }
}

impl Command for CommandType {
    fn execute(&self, argv: &[String], session: &mut Session) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(argv, session),
            CommandType::Print(cmd) => cmd.execute(argv, session),
            CommandType::Theme(cmd) => cmd.execute(argv, session),
            CommandType::Log(cmd) => cmd.execute(argv, session),
            CommandType::Assign(cmd) => cmd.execute(argv, session),
            CommandType::External(cmd) => cmd.execute(argv, session),
        }
    }
}

/// Routes each parsed line to its handler and records the outcome in the history log.
pub struct Dispatcher {
    session: Session,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Self::with_session(Session::new(config))
    }

    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Run one command.
    ///
    /// Every call with a non-empty `argv` records exactly one history entry, except
    /// `exit`, which ends the session instead. Recoverable failures are reported on
    /// the session's output and recorded as invalid; anything else is returned.
    pub fn dispatch(&mut self, argv: &[String]) -> Result<Flow, ShellError> {
        let Some(name) = argv.first() else {
            return Ok(Flow::Continue(CommandStatus::Valid));
        };

        let command = CommandType::route(argv);
        tracing::debug!(
            target: "dispatch",
            command = name.as_str(),
            route = command.label(),
            args = argv.len() - 1,
            "dispatching"
        );

        let status = match command.execute(argv, &mut self.session) {
            Ok(Flow::Exit) => {
                self.session.flush()?;
                return Ok(Flow::Exit);
            }
            Ok(Flow::Continue(status)) => status,
            Err(err) if err.is_recoverable() => {
                self.report(&err)?;
                CommandStatus::Invalid
            }
            Err(err) => return Err(err.into()),
        };

        self.session.history.append(name, status);
        Ok(Flow::Continue(status))
    }

    fn report(&mut self, err: &CommandError) -> io::Result<()> {
        if let CommandError::LaunchFailure { command, reason } = err {
            tracing::debug!(target: "dispatch", command = command.as_str(), reason = reason.as_str(), "launch failed");
        }

        match err {
            CommandError::UnsupportedTheme(name) => {
                tracing::debug!(target: "dispatch", theme = name.as_str(), "unsupported theme");
                self.session.say(&err.to_string())
            }
            _ => self.session.warn(&err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::testing::{BrokenPipe, SharedBuffer};
    use crate::core::theme::Theme;
    use pretty_assertions::assert_eq;

    struct Harness {
        dispatcher: Dispatcher,
        out: SharedBuffer,
        err: SharedBuffer,
    }

    impl Harness {
        fn new() -> Self {
            let out = SharedBuffer::new();
            let err = SharedBuffer::new();
            let session = Session::with_writers(
                &Config::default(),
                Box::new(out.clone()),
                Box::new(err.clone()),
            );
            Self {
                dispatcher: Dispatcher::with_session(session),
                out,
                err,
            }
        }

        fn run(&mut self, line: &str) -> Flow {
            let argv = crate::core::parser::parse_line(line);
            self.dispatcher.dispatch(&argv).expect("dispatch should not fail")
        }

        fn history(&self) -> Vec<(String, i32)> {
            self.dispatcher
                .session()
                .history
                .list()
                .map(|e| (e.command.clone(), e.status.code()))
                .collect()
        }
    }

    fn entry(name: &str, code: i32) -> (String, i32) {
        (name.to_string(), code)
    }

    #[test]
    fn test_route_priority() {
        let argv = |line: &str| crate::core::parser::parse_line(line);
        assert_eq!(CommandType::route(&argv("exit now")).label(), "exit");
        assert_eq!(CommandType::route(&argv("print $x")).label(), "print");
        assert_eq!(CommandType::route(&argv("theme red")).label(), "theme");
        assert_eq!(CommandType::route(&argv("theme")).label(), "external");
        assert_eq!(CommandType::route(&argv("theme red blue")).label(), "external");
        assert_eq!(CommandType::route(&argv("log")).label(), "log");
        assert_eq!(CommandType::route(&argv("$x=1")).label(), "assign");
        assert_eq!(CommandType::route(&argv("$x=1 extra")).label(), "assign");
        assert_eq!(CommandType::route(&argv("ls -l")).label(), "external");
    }

    #[test]
    fn test_empty_argv_is_ignored() -> Result<(), ShellError> {
        let mut h = Harness::new();
        assert_eq!(
            h.dispatcher.dispatch(&[])?,
            Flow::Continue(CommandStatus::Valid)
        );
        assert!(h.history().is_empty());
        Ok(())
    }

    #[test]
    fn test_print_substitutes_variables() {
        let mut h = Harness::new();
        h.run("$name=world");
        h.out.clear();

        assert_eq!(h.run("print hello $name"), Flow::Continue(CommandStatus::Valid));
        assert_eq!(h.out.contents(), "hello world \n");
    }

    #[test]
    fn test_print_unresolved_marker_is_literal() {
        let mut h = Harness::new();
        h.run("print $missing here");
        assert_eq!(h.out.contents(), "$missing here \n");
    }

    #[test]
    fn test_print_without_arguments() {
        let mut h = Harness::new();
        h.run("print");
        assert_eq!(h.out.contents(), "\n");
        assert_eq!(h.history(), vec![entry("print", 0)]);
    }

    #[test]
    fn test_reassignment_keeps_one_binding() {
        let mut h = Harness::new();
        h.run("$x=1");
        h.run("$x=2");
        let vars = &h.dispatcher.session().vars;
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("$x"), Some("2"));
        assert_eq!(h.history(), vec![entry("$x=1", 0), entry("$x=2", 0)]);
    }

    #[test]
    fn test_malformed_assignment() {
        let mut h = Harness::new();
        assert_eq!(h.run("$x"), Flow::Continue(CommandStatus::Invalid));
        assert_eq!(h.err.contents(), "Variable value expected: $x\n");
        assert!(h.dispatcher.session().vars.is_empty());
        assert_eq!(h.history(), vec![entry("$x", -1)]);
    }

    #[test]
    fn test_assignment_with_extra_tokens() {
        let mut h = Harness::new();
        assert_eq!(h.run("$x=1 2"), Flow::Continue(CommandStatus::Invalid));
        assert!(h.err.contents().starts_with("Variable value expected"));
        assert!(h.dispatcher.session().vars.is_empty());
        assert_eq!(h.history(), vec![entry("$x=1", -1)]);
    }

    #[test]
    fn test_theme_changes_output_colour() {
        let mut h = Harness::new();
        h.run("theme red");
        h.run("print hi");
        assert_eq!(h.out.contents(), "\x1b[0;31mhi \x1b[0m\n");
        assert_eq!(h.dispatcher.session().theme(), Theme::Red);
    }

    #[test]
    fn test_unsupported_theme_keeps_previous() {
        let mut h = Harness::new();
        h.run("theme blue");
        h.out.clear();

        assert_eq!(h.run("theme bogus"), Flow::Continue(CommandStatus::Invalid));
        assert_eq!(h.dispatcher.session().theme(), Theme::Blue);
        assert_eq!(h.out.contents(), "\x1b[0;34munsupported theme\x1b[0m\n");
        assert_eq!(h.history(), vec![entry("theme", 0), entry("theme", -1)]);
    }

    #[test]
    fn test_log_lists_prior_commands_only() {
        let mut h = Harness::new();
        h.run("print a");
        h.run("theme nope");
        h.run("$v=1");
        h.out.clear();

        h.run("log");
        let output = h.out.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], " print 0");
        assert_eq!(lines[3], " theme -1");
        assert_eq!(lines[5], " $v=1 0");
        for stamp in [lines[0], lines[2], lines[4]] {
            assert!(!stamp.starts_with(' '));
        }

        h.out.clear();
        h.run("log");
        let output = h.out.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[7], " log 0");
    }

    #[test]
    fn test_external_success_and_failure() {
        let mut h = Harness::new();
        assert_eq!(h.run("echo hi there"), Flow::Continue(CommandStatus::Valid));
        assert_eq!(h.out.contents(), "hi there\n");

        assert_eq!(h.run("false"), Flow::Continue(CommandStatus::Invalid));
        assert_eq!(h.history(), vec![entry("echo", 0), entry("false", -1)]);
    }

    #[test]
    fn test_external_exit_status_two_is_invalid() {
        let mut h = Harness::new();
        h.run("ls /cshell/definitely/not/here");
        assert_eq!(h.history(), vec![entry("ls", -1)]);
    }

    #[test]
    fn test_missing_program_keeps_session_alive() {
        let mut h = Harness::new();
        assert_eq!(
            h.run("cshell-no-such-program --flag"),
            Flow::Continue(CommandStatus::Invalid)
        );
        assert_eq!(
            h.err.contents(),
            "cshell-no-such-program: Missing keyword or command, or permission problem.\n"
        );

        assert_eq!(h.run("print still here"), Flow::Continue(CommandStatus::Valid));
        assert_eq!(h.out.contents(), "still here \n");
        assert_eq!(
            h.history(),
            vec![entry("cshell-no-such-program", -1), entry("print", 0)]
        );
    }

    #[test]
    fn test_exit_is_terminal_and_unrecorded() {
        let mut h = Harness::new();
        h.run("theme green");
        assert_eq!(h.run("exit"), Flow::Exit);
        assert_eq!(h.out.contents(), "\x1b[0;32mBye!\x1b[0m\n");
        assert_eq!(h.history(), vec![entry("theme", 0)]);
    }

    #[test]
    fn test_output_failure_ends_session() {
        let session = Session::with_writers(
            &Config::default(),
            Box::new(BrokenPipe),
            Box::new(BrokenPipe),
        );
        let mut dispatcher = Dispatcher::with_session(session);

        let argv = crate::core::parser::parse_line("print x");
        assert!(matches!(dispatcher.dispatch(&argv), Err(ShellError::Io(_))));

        // A diagnostic that cannot be written is just as fatal.
        let argv = crate::core::parser::parse_line("theme bogus");
        assert!(matches!(dispatcher.dispatch(&argv), Err(ShellError::Io(_))));

        assert!(dispatcher.session().history.is_empty());
    }
}
