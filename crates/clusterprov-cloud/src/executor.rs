use crate::shell::{ShellError, ShellOutput};
use std::path::Path;

/// Abstraction over command-line execution for testability.
///
/// Production code uses [`RealShell`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait ShellExecutor: Send + Sync {
    /// Run a complete command line through the host shell.
    ///
    /// A non-zero exit code is not an error here; only failing to run the
    /// shell at all is.
    async fn exec(&self, command_line: &str) -> Result<ShellOutput, ShellError>;

    /// Whether command lines are interpreted by a POSIX shell.
    fn is_unix(&self) -> bool;
}

/// Runs command lines through `sh -c` or `cmd /C`.
pub struct RealShell {
    unix: bool,
}

impl RealShell {
    pub fn new() -> Self {
        Self {
            unix: !cfg!(windows),
        }
    }

    fn invocation(&self) -> (&'static str, &'static str) {
        if self.unix { ("sh", "-c") } else { ("cmd", "/C") }
    }
}

impl Default for RealShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor for RealShell {
    async fn exec(&self, command_line: &str) -> Result<ShellOutput, ShellError> {
        use std::process::Stdio;

        let (shell, flag) = self.invocation();
        let child = tokio::process::Command::new(shell)
            .arg(flag)
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ShellError::Spawn { shell, source: e })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ShellError::Wait {
                command_line: command_line.to_owned(),
                source: e,
            })?;

        let exit_code = match output.status.code() {
            Some(code) => code,
            // Terminated by a signal
            None => -1,
        };

        Ok(ShellOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn is_unix(&self) -> bool {
        self.unix
    }
}

/// Filesystem queries the adapter needs.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
