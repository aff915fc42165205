//! Toolguard - resilience primitives for agent tool calls
//!
//! An LLM agent leans on external tools (web search, file download,
//! spreadsheet/image/audio analysis) that fail for reasons unrelated to the
//! question being answered: rate limits, flaky endpoints, transient network
//! errors. This crate hardens those calls with three independent pieces:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`retry`] | Bounded retry with exponential backoff |
//! | [`fallback`] | Name-keyed substitute operations for unreliable tools |
//! | [`metrics`] | Per-tool success/failure accounting |
//! | [`error`] | Tool-labelled failures, failure logging passthrough |
//!
//! The pieces compose but do not call each other; the agent loop decides when
//! a retry budget is spent, whether a fallback exists for the tool, and what
//! to record. Everything is synchronous and blocking: backoff waits happen on
//! the calling thread, and a hung tool hangs its caller.
//!
//! ```rust,ignore
//! use toolguard::{FallbackRegistry, RetryConfig, RetryPolicy};
//!
//! let policy = RetryPolicy::new(RetryConfig::default().with_max_attempts(3));
//! let mut fallbacks: FallbackRegistry<Box<dyn Fn(&str) -> anyhow::Result<String>>> =
//!     FallbackRegistry::new();
//! fallbacks.register("web_search", Box::new(duckduckgo_search));
//!
//! let answer = match policy.execute("web_search", || wikipedia_search(&query)) {
//!     Ok(answer) => answer,
//!     Err(e) => match fallbacks.lookup("web_search") {
//!         Some(search) => search(&query)?,
//!         None => return Err(e),
//!     },
//! };
//! ```

pub mod error;
pub mod fallback;
pub mod metrics;
pub mod retry;

pub use error::{log_failures, ToolError};
pub use fallback::FallbackRegistry;
pub use metrics::ToolMetrics;
pub use retry::{RetryConfig, RetryPolicy};
