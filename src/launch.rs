//! Building and firing the launch command.
//!
//! The argument templates are space-joined into a single string before
//! substitution, then split back on whitespace for the spawn call. A
//! protocol or address containing spaces therefore lands as several argv
//! entries. Known limitation, kept for compatibility with existing handler
//! registrations.

use std::process::Command;

use crate::error::{Error, Result};
use crate::template;
use crate::url_parts::{self, UrlParts};

/// Fully expanded launch command: one program path and one argument line.
/// Built once, consumed by [`LaunchPlan::spawn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub arg_line: String,
}

impl LaunchPlan {
    /// Splits `url` and expands the program and argument templates into a
    /// ready-to-spawn plan.
    pub fn prepare(filename: &str, args: &[String], url: Option<&str>) -> Result<LaunchPlan> {
        let parts: UrlParts = url_parts::split(url)?;

        let program = template::expand_filename(filename, &parts)?;
        let arg_line = template::expand(&args.join(" "), &parts)?;

        Ok(LaunchPlan { program, arg_line })
    }

    /// Starts the target process, fire-and-forget: the child is neither
    /// awaited nor supervised.
    pub fn spawn(&self) -> Result<()> {
        tracing::info!("running {} {}", self.program, self.arg_line);

        Command::new(&self.program)
            .args(self.arg_line.split_whitespace())
            .spawn()
            .map_err(|source| Error::ProcessLaunch {
                program: self.program.clone(),
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg_vec(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prepare_expands_program_and_args() {
        let plan = LaunchPlan::prepare(
            "mstsc.exe",
            &arg_vec(&["/v:{1}"]),
            Some("rdp://10.0.0.1"),
        )
        .unwrap();
        assert_eq!(plan.program, "mstsc.exe");
        assert_eq!(plan.arg_line, "/v:10.0.0.1");
    }

    #[test]
    fn prepare_joins_args_with_single_spaces() {
        let plan = LaunchPlan::prepare(
            "handler-{0}",
            &arg_vec(&["--target", "{1}", "--proto", "{0}"]),
            Some("vnc://box:5900"),
        )
        .unwrap();
        assert_eq!(plan.program, "handler-vnc");
        assert_eq!(plan.arg_line, "--target box:5900 --proto vnc");
    }

    #[test]
    fn prepare_without_url_substitutes_nothing() {
        let plan = LaunchPlan::prepare("tool", &arg_vec(&["a", "{1}b"]), None).unwrap();
        assert_eq!(plan.program, "tool");
        assert_eq!(plan.arg_line, "a b");
    }

    #[test]
    fn prepare_surfaces_malformed_url() {
        let err = LaunchPlan::prepare("tool", &[], Some("notaurl")).unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }

    #[test]
    fn prepare_surfaces_bad_template() {
        let err =
            LaunchPlan::prepare("tool", &arg_vec(&["{9}"]), Some("rdp://h")).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn spawn_missing_program_is_launch_error() {
        let plan = LaunchPlan {
            program: "urlrun-test-no-such-program".to_string(),
            arg_line: String::new(),
        };
        match plan.spawn() {
            Err(Error::ProcessLaunch { program, .. }) => {
                assert_eq!(program, "urlrun-test-no-such-program")
            }
            other => panic!("expected ProcessLaunch error, got {other:?}"),
        }
    }
}
