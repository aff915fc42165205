//! Retry with exponential backoff
//!
//! Bounded, synchronous retry for tool calls that fail transiently (rate
//! limits, flaky downloads, transcript fetches). Waits block the calling
//! thread; there is no timeout and no cancellation, so a hung operation hangs
//! its caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use toolguard::retry::{RetryConfig, RetryPolicy};
//!
//! let policy = RetryPolicy::new(RetryConfig::default().with_max_attempts(4));
//!
//! let transcript = policy.execute("youtube_transcript", || {
//!     fetch_transcript(&video_id)
//! })?;
//! ```

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::error::ToolError;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, counting the first one. Always at least 1; a value of
    /// 1 means no retries.
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each retry (e.g. 2.0 doubles it).
    /// Always at least 1.0.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Set the total number of attempts (clamped to at least 1)
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the delay before the first retry
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the backoff multiplier (clamped to at least 1.0)
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = if multiplier.is_finite() {
            multiplier.max(1.0)
        } else {
            1.0
        };
        self
    }
}

/// Executes operations with bounded retry and exponential backoff
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a retry policy with the given configuration
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Create a retry policy with default configuration
    pub fn with_defaults() -> Self {
        Self::new(RetryConfig::default())
    }

    /// Delay before the given retry (1-indexed; retry 1 follows the first
    /// failed attempt): `initial_delay * backoff_multiplier^(retry - 1)`.
    ///
    /// The schedule is a pure function of the config, unaffected by how long
    /// prior attempts actually took.
    pub fn calculate_delay(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }
        let secs = self.config.initial_delay.as_secs_f64()
            * self.config.backoff_multiplier.powi(retry as i32 - 1);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Execute `op` with retry, reporting failed attempts via `tracing`.
    ///
    /// `tool` labels the operation in log output and in the defensive
    /// exhaustion error.
    pub fn execute<T, F>(&self, tool: &str, op: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        self.execute_with_sink(tool, op, |msg| warn!("{msg}"))
    }

    /// Execute `op` with retry, reporting each failed attempt through `sink`.
    ///
    /// The operation captures whatever arguments it needs; its return type is
    /// unconstrained. On success the value is returned immediately and no
    /// further call is made. Each failure is reported through `sink` (every
    /// one, including the last), then the thread sleeps for the backoff delay
    /// before the next attempt. When the final attempt fails, its error is
    /// propagated to the caller unchanged.
    ///
    /// `sink` is best-effort reporting only and must not panic; it never
    /// alters the returned result.
    pub fn execute_with_sink<T, F, S>(&self, tool: &str, mut op: F, mut sink: S) -> Result<T>
    where
        F: FnMut() -> Result<T>,
        S: FnMut(&str),
    {
        let attempts = self.config.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let remaining = attempts - attempt;
                    if remaining > 0 {
                        let delay = self.calculate_delay(attempt);
                        sink(&format!(
                            "{tool}: attempt {attempt} failed, retrying in {delay:?} \
                             ({remaining} attempts left): {e}"
                        ));
                        last_error = Some(e);
                        thread::sleep(delay);
                    } else {
                        sink(&format!(
                            "{tool}: attempt {attempt} failed, giving up after \
                             {attempts} attempts: {e}"
                        ));
                        last_error = Some(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ToolError::AttemptsExhausted {
                tool: tool.to_string(),
                attempts,
                last_error: "unknown error".to_string(),
            }
            .into()
        }))
    }
}
