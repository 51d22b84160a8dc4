use std::io::{self, Read};
use std::process::{Command, Stdio};

use super::ProcessError;

/// What came back from one external command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub output: Vec<u8>,
    /// Exit code when the child exited normally; `None` if it was killed by a signal
    /// or never started.
    pub exit_code: Option<i32>,
    pub launch_failed: bool,
    /// Why the launch failed, when it did.
    pub launch_error: Option<String>,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        !self.launch_failed && self.exit_code == Some(0)
    }

    fn launch_failure(err: &io::Error) -> Self {
        Self {
            launch_failed: true,
            launch_error: Some(err.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run `args[0]` with the remaining tokens as its arguments and capture its stdout.
    ///
    /// The child inherits stdin and stderr. Its stdout is read to end-of-stream before
    /// waiting, so large outputs are neither truncated nor able to block the child.
    /// A program that cannot be started is reported through `launch_failed`; only
    /// resource exhaustion while creating the pipe or the child is an error.
    pub fn run(&self, args: &[String]) -> Result<CapturedOutput, ProcessError> {
        let Some((program, rest)) = args.split_first() else {
            return Ok(CapturedOutput::launch_failure(&io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty command",
            )));
        };

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if is_resource_exhaustion(&e) => {
                return Err(ProcessError::ResourceExhausted(e));
            }
            Err(e) => {
                tracing::debug!(target: "process", program, error = %e, "launch failed");
                return Ok(CapturedOutput::launch_failure(&e));
            }
        };
        tracing::debug!(target: "process", program, pid = child.id(), "spawned");

        let mut output = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_end(&mut output)?;
        }

        let status = child.wait()?;
        tracing::debug!(target: "process", program, %status, bytes = output.len(), "exited");

        Ok(CapturedOutput {
            output,
            exit_code: status.code(),
            launch_failed: false,
            launch_error: None,
        })
    }
}

/// Errors that mean the system is out of descriptors, processes or memory, as opposed
/// to the requested program being unusable.
fn is_resource_exhaustion(err: &io::Error) -> bool {
    matches!(
        err.raw_os_error(),
        Some(libc::EMFILE) | Some(libc::ENFILE) | Some(libc::EAGAIN) | Some(libc::ENOMEM)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_captures_stdout() -> Result<(), ProcessError> {
        let captured = ProcessExecutor::new().run(&args(&["echo", "hello", "world"]))?;
        assert_eq!(String::from_utf8_lossy(&captured.output), "hello world\n");
        assert_eq!(captured.exit_code, Some(0));
        assert!(captured.success());
        Ok(())
    }

    #[test]
    fn test_nonzero_exit() -> Result<(), ProcessError> {
        let captured = ProcessExecutor::new().run(&args(&["sh", "-c", "exit 2"]))?;
        assert_eq!(captured.exit_code, Some(2));
        assert!(!captured.launch_failed);
        assert!(!captured.success());
        Ok(())
    }

    #[test]
    fn test_missing_program_is_a_launch_failure() -> Result<(), ProcessError> {
        let captured = ProcessExecutor::new().run(&args(&["cshell-test-no-such-program"]))?;
        assert!(captured.launch_failed);
        assert!(captured.launch_error.is_some());
        assert_eq!(captured.exit_code, None);
        assert!(!captured.success());
        Ok(())
    }

    #[test]
    fn test_large_output_is_not_truncated() -> Result<(), ProcessError> {
        // Well past a single pipe buffer.
        let captured =
            ProcessExecutor::new().run(&args(&["sh", "-c", "head -c 200000 /dev/zero"]))?;
        assert_eq!(captured.output.len(), 200_000);
        assert!(captured.success());
        Ok(())
    }

    #[test]
    fn test_killed_child_has_no_exit_code() -> Result<(), ProcessError> {
        let captured = ProcessExecutor::new().run(&args(&["sh", "-c", "kill -9 $$"]))?;
        assert_eq!(captured.exit_code, None);
        assert!(!captured.success());
        Ok(())
    }

    #[test]
    fn test_resource_exhaustion_classification() {
        assert!(is_resource_exhaustion(&io::Error::from_raw_os_error(libc::EMFILE)));
        assert!(is_resource_exhaustion(&io::Error::from_raw_os_error(libc::EAGAIN)));
        assert!(!is_resource_exhaustion(&io::Error::from_raw_os_error(libc::ENOENT)));
        assert!(!is_resource_exhaustion(&io::Error::from_raw_os_error(libc::EACCES)));
    }
}
