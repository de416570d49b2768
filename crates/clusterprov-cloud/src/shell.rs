#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("could not start shell '{shell}': {source}")]
    Spawn {
        shell: &'static str,
        source: std::io::Error,
    },

    #[error("failed to collect output of '{command_line}': {source}")]
    Wait {
        command_line: String,
        source: std::io::Error,
    },
}

/// Captured result of one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Zero exit code and nothing written to stderr, not even whitespace.
    pub fn succeeded_quietly(&self) -> bool {
        self.succeeded() && self.stderr.is_empty()
    }
}
