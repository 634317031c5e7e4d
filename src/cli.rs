//! Switch decoding and invocation flow.
//!
//! The grammar is deliberately small: leading `--url`/`--help` switches,
//! then the program template, then argument templates. Tokens after the
//! program template are never interpreted as switches, so templates like
//! `--server={1}` pass through untouched.

use anyhow::Result;

use crate::error::{self, Error};
use crate::launch::LaunchPlan;

/// Decoded command line. Built once by [`Invocation::decode`], read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub show_help: bool,
    pub url: Option<String>,
    pub filename: Option<String>,
    pub args: Vec<String>,
}

impl Invocation {
    /// Decodes `argv` (without the program name).
    ///
    /// `--url` consumes the following token unconditionally and fails if
    /// there is none. Any other leading `-` token is an unsupported switch.
    /// The first non-switch token is the program template; everything after
    /// it is an argument template.
    pub fn decode(argv: &[String]) -> error::Result<Invocation> {
        let mut invocation = Invocation::default();

        let mut index = 0;
        while index < argv.len() {
            let arg = &argv[index];
            if !arg.starts_with('-') {
                break;
            }

            match arg.as_str() {
                "--url" => {
                    index += 1;
                    let value = argv
                        .get(index)
                        .ok_or(Error::MissingArgument { switch: "--url" })?;
                    tracing::info!("url to strip: {}", value);
                    invocation.url = Some(value.clone());
                }
                "--help" => {
                    tracing::info!("displaying help");
                    invocation.show_help = true;
                }
                other => return Err(Error::UnsupportedSwitch(other.to_string())),
            }
            index += 1;
        }

        if index < argv.len() {
            invocation.filename = Some(argv[index].clone());
            index += 1;
        }
        invocation.args = argv[index..].to_vec();

        Ok(invocation)
    }

    /// Help is shown when asked for, and also when there is nothing to
    /// launch.
    pub fn wants_help(&self) -> bool {
        self.show_help || self.filename.is_none()
    }
}

/// Usage text. Shown on stdout; this tool normally runs headless behind a
/// URL-handler registration, so this is the only interactive output it has.
pub fn help_text() -> &'static str {
    "\
urlrun

usage: urlrun --url <scheme>://<address> <program> [arguments...]

   where <program> and arguments can contain {0} for the protocol
   and {1} for the address.

Splits the protocol and address out of a URL and executes another
application. Useful when registering a handler for custom browser
protocols, such as rdp://

example:
   urlrun --url rdp://10.0.0.1 mstsc.exe /v:{1}
"
}

/// Entry point for the binary: decode `std::env::args`, then help or launch.
pub fn run_from_args() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    run(&argv)
}

/// Decodes `argv` and either prints help or launches the target.
pub fn run(argv: &[String]) -> Result<()> {
    let invocation = Invocation::decode(argv)?;

    if invocation.wants_help() {
        print!("{}", help_text());
        return Ok(());
    }

    // wants_help() ruled out a missing filename.
    let filename = invocation.filename.as_deref().unwrap_or_default();
    let plan = LaunchPlan::prepare(filename, &invocation.args, invocation.url.as_deref())?;
    plan.spawn()?;

    Ok(())
}
