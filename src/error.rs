//! Error types for guarded tool calls.
//!
//! Tools surface their failures as [`ToolError`] so the agent loop can show a
//! stable, tool-labelled message instead of whatever a third-party client
//! happened to raise.

use anyhow::Result;
use thiserror::Error;
use tracing::error;

/// Failure of a guarded tool call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// A tool failed; the underlying message is surfaced under the tool's name.
    #[error("Error executing {tool}: {message}")]
    Execution { tool: String, message: String },

    /// Every configured attempt failed and no underlying error was captured.
    ///
    /// [`RetryPolicy`](crate::retry::RetryPolicy) normally propagates the last
    /// attempt's own error; this variant only backs the branch where none exists.
    #[error("{tool}: all {attempts} attempts failed: {last_error}")]
    AttemptsExhausted {
        tool: String,
        attempts: u32,
        last_error: String,
    },
}

impl ToolError {
    /// Wrap a third-party failure with the name of the tool it belongs to.
    pub fn execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Run `op`, logging any failure under `name` before propagating it unchanged.
///
/// Reporting is best-effort: the returned error is always the operation's own,
/// whether or not anything is subscribed to the log.
pub fn log_failures<T, F>(name: &str, op: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    op().map_err(|e| {
        error!(tool = name, error = %e, "tool call failed");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn execution_error_display_format() {
        let err = ToolError::execution("excel_analysis", "sheet 'Q3' not found");
        assert_eq!(
            err.to_string(),
            "Error executing excel_analysis: sheet 'Q3' not found"
        );
    }

    #[test]
    fn exhausted_error_mentions_attempts_and_cause() {
        let err = ToolError::AttemptsExhausted {
            tool: "web_search".to_string(),
            attempts: 3,
            last_error: "connection reset".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3 attempts"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn log_failures_passes_success_through() {
        let result = log_failures("youtube_transcript", || Ok(42));
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn log_failures_propagates_the_original_error() {
        let result: Result<()> = log_failures("file_download", || {
            Err(ToolError::execution("file_download", "404").into())
        });
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Error executing file_download: 404");
        assert!(err.downcast_ref::<ToolError>().is_some());
    }
}
