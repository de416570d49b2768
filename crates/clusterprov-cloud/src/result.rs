use crate::shell::ShellError;

/// Success-or-failure value without a description.
pub type Errorable<T> = Result<T, AdapterError>;

/// A labeled outcome, ready for display.
///
/// `description` names the step that produced `result`. When an operation
/// fails in an earlier phase, the description names that phase instead of
/// the one originally requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult<T> {
    pub description: String,
    pub result: Errorable<T>,
}

impl<T> ActionResult<T> {
    pub fn new(description: &str, result: Errorable<T>) -> Self {
        Self {
            description: description.to_owned(),
            result,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Failure side of [`Errorable`].
///
/// Every variant carries a fixed prefix describing the step; command
/// failures append the tool's raw stderr. Nothing finer-grained than that
/// is inferred from the output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("{context}: {detail}")]
    NotInvoked {
        context: &'static str,
        detail: String,
    },

    /// `stderr` is the tool's stderr verbatim, or `exited with code N` when
    /// the tool wrote nothing to stderr.
    #[error("{context}: {stderr}")]
    CommandFailed {
        context: &'static str,
        stderr: String,
    },

    #[error("{context}: unexpected output")]
    Parse { context: &'static str },

    #[error("{} failed: {}", .0.cluster_type, credentials_reason(.0))]
    Configure(Box<crate::client::ConfigureResult>),
}

impl AdapterError {
    pub(crate) fn not_invoked(context: &'static str, err: &ShellError) -> Self {
        Self::NotInvoked {
            context,
            detail: err.to_string(),
        }
    }
}

fn credentials_reason(report: &crate::client::ConfigureResult) -> &str {
    match report.credentials_error.as_deref() {
        Some(reason) => reason,
        None => "unknown error",
    }
}
