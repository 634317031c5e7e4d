//! Crate-wide error type.
//!
//! Every failure kind aborts the invocation: nothing here is recovered
//! internally. Errors bubble to `main`, which records them to the trace log
//! and exits non-zero.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A switch needs a value and the argument list ended first.
    #[error("argument after {switch} is missing")]
    MissingArgument { switch: &'static str },

    /// Unknown `-`-prefixed token before the program template.
    #[error("unsupported switch: {0}")]
    UnsupportedSwitch(String),

    /// The `--url` value does not have the `scheme://address[/path]` shape.
    /// Carries the input and the expected pattern for diagnostics.
    #[error("url '{input}' does not match '{pattern}'")]
    MalformedUrl {
        input: String,
        pattern: &'static str,
    },

    /// A template contains invalid placeholder syntax.
    #[error("bad placeholder in template '{template}': {detail}")]
    Format { template: String, detail: String },

    /// The target executable could not be started.
    #[error("failed to launch '{program}'")]
    ProcessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
