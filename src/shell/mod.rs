use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rustyline::{error::ReadlineError, history::FileHistory, Editor};

mod executor;

use crate::{
    core::{
        commands::{Dispatcher, Flow},
        config::Config,
    },
    error::ShellError,
    flags::Flags,
    input::ShellCompleter,
};

use executor::CommandHandler;

pub const PROMPT: &str = "cshell$ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Script(PathBuf),
}

impl Mode {
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        match flags.positional() {
            [] => Ok(Mode::Interactive),
            [script] => Ok(Mode::Script(PathBuf::from(script))),
            _ => Err(ShellError::FlagError(
                "expected at most one script file".to_string(),
            )),
        }
    }
}

pub struct Shell {
    pub(crate) dispatcher: Dispatcher,
    pub(crate) config: Config,
    pub(crate) mode: Mode,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mode = Mode::from_flags(&flags)?;
        let config = Config::load(&flags)?;
        let dispatcher = Dispatcher::new(&config);

        Ok(Self::with_dispatcher(dispatcher, config, mode))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher, config: Config, mode: Mode) -> Self {
        Shell {
            dispatcher,
            config,
            mode,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        match self.mode.clone() {
            Mode::Interactive => self.run_interactive(),
            Mode::Script(path) => self.run_script(&path),
        }
    }

    pub fn run_script(&mut self, path: &Path) -> Result<(), ShellError> {
        let file = File::open(path).map_err(|source| ShellError::ScriptUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "running script");

        self.run_lines(BufReader::new(file))
    }

    /// Feed every line of `reader` to the dispatcher, then say goodbye at end of input.
    ///
    /// Lines are taken as raw bytes; invalid UTF-8 is replaced rather than rejected.
    pub fn run_lines<R: BufRead>(&mut self, mut reader: R) -> Result<(), ShellError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if self.execute_line(&line)? == Flow::Exit {
                return Ok(());
            }
        }
        self.farewell()
    }

    fn run_interactive(&mut self) -> Result<(), ShellError> {
        let quiet = self.config.quiet;
        ctrlc::set_handler(move || {
            if !quiet {
                println!("\nUse 'exit' to exit the shell");
            }
        })?;

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));

        loop {
            let theme = self.dispatcher.session().theme();
            if let Some(helper) = editor.helper_mut() {
                helper.set_theme(theme);
            }

            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            tracing::warn!("couldn't add to line history: {}", e);
                        }
                    }

                    if self.execute_line(&line)? == Flow::Exit {
                        return Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return self.farewell(),
                Err(e) if is_undecodable(&e) => {
                    tracing::debug!(error = %e, "dropped undecodable line");
                    self.dispatcher
                        .session_mut()
                        .warn("cshell: input line is not valid UTF-8")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// End-of-input behaves like `exit`.
    fn farewell(&mut self) -> Result<(), ShellError> {
        self.dispatcher.dispatch(&["exit".to_string()])?;
        Ok(())
    }
}

/// A line the editor could not decode has already been consumed, so reading can go on.
fn is_undecodable(err: &ReadlineError) -> bool {
    matches!(err, ReadlineError::Io(e) if e.kind() == io::ErrorKind::InvalidData)
}
