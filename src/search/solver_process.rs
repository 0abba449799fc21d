use crate::error::BnsError;
use crate::output::{ParsedOutput, parse_lines};
use log::{debug, warn};
use std::ffi::OsString;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

/// A running solver process.
///
/// Standard output is piped for parsing, standard error is discarded. When dropped, the
/// process is killed (if still running) and reaped, so no exit path of a search leaves
/// a zombie or a running solver behind.
pub struct SolverProcess {
    executable: PathBuf,
    child: Child,
}

impl SolverProcess {
    /// Launch `executable` with the given arguments.
    pub fn spawn(executable: &Path, args: &[OsString]) -> Result<SolverProcess, BnsError> {
        debug!("Launching `{}` with arguments {:?}.", executable.display(), args);
        let child = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| BnsError::ExternalToolUnavailable {
                executable: executable.to_path_buf(),
                source,
            })?;

        Ok(SolverProcess {
            executable: executable.to_path_buf(),
            child,
        })
    }

    /// Parse the whole standard output of the process (see [`parse_lines`]).
    ///
    /// The output can only be read once.
    pub fn read_output(&mut self) -> Result<Option<ParsedOutput>, BnsError> {
        let stdout = self
            .child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("Solver output was already consumed."))?;
        parse_lines(BufReader::new(stdout))
    }

    /// Wait for the process to exit.
    ///
    /// A non-zero exit status is only reported as a warning, because the output
    /// has been fully read at this point.
    pub fn finish(mut self) -> Result<ExitStatus, BnsError> {
        let status = self.child.wait()?;
        if status.success() {
            debug!("`{}` finished.", self.executable.display());
        } else {
            warn!("`{}` finished with {}.", self.executable.display(), status);
        }
        Ok(status)
    }
}

impl Drop for SolverProcess {
    fn drop(&mut self) {
        if let Ok(Some(_)) = self.child.try_wait() {
            return;
        }
        debug!("Terminating `{}`.", self.executable.display());
        // Errors only mean the process is already gone.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
