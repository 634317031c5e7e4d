//! urlrun: custom URL protocol-handler shim.
//!
//! The OS shell hands this tool a `scheme://address[/path]` URL through a
//! registered URL-handler association. The URL is split into a protocol and
//! an address, both are substituted into the configured program path and
//! argument templates, and the resulting command is spawned fire-and-forget.

pub mod cli;
pub mod error;
pub mod launch;
pub mod logging;
pub mod template;
pub mod url_parts;

pub use error::{Error, Result};
pub use launch::LaunchPlan;
pub use url_parts::UrlParts;
