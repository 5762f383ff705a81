#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `lark-version`
//! binary. The tool prints the build identity and the resolved snapshot ABI
//! version of the Lark runtime this workspace was compiled as. The crate is
//! intentionally small: it recognises `--help`/`-h`, `--json`, and
//! `--use-abi-version`, and delegates all rendering to
//! [`version::VersionReport`].
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so the binary wrapper and the tests share one code path. Internally
//! a [`clap`](https://docs.rs/clap/) command definition performs the parse;
//! the `--use-abi-version` argument is registered from the shared
//! [`version::abi_version_flag`] descriptor so its help text embeds the
//! concrete supported bounds.
//!
//! # Invariants
//!
//! - [`run`] never panics; parse failures surface as exit code `1` with a
//!   diagnostic on standard error.
//! - An out-of-window `--use-abi-version` request is not a usage error: the
//!   report simply shows the substituted target version and the tool exits
//!   with code `0`.
//! - Banner output is delegated to [`version::VersionReport`] so the CLI
//!   stays byte-identical with the canonical rendering used elsewhere.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["lark-version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Arg, ArgAction, Command, value_parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use version::{VersionReport, abi_version_flag};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Initialises the tracing subscriber with an environment-driven filter.
///
/// Repeated calls are harmless; only the first installation wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

/// Renders the deterministic help text for the tool.
///
/// The `--use-abi-version` line reuses the shared flag descriptor, so the
/// rendered description carries the concrete supported bounds.
fn render_help() -> String {
    let flag = abi_version_flag();
    format!(
        "lark-version {release}\n\
         {source}\n\
         \n\
         Usage: lark-version [--use-abi-version=VERSION] [--json]\n\
         \n\
         Prints the build identity and the resolved snapshot ABI version of\n\
         the Lark runtime.\n\
         \n\
         Options:\n\
         \x20 -h, --help       Show this help message and exit.\n\
         \x20     --json       Render the report as JSON instead of a banner.\n\
         \x20     --use-abi-version=VERSION\n\
         \x20                  {flag_help}\n",
        release = buildinfo::RELEASE_VERSION,
        source = buildinfo::SOURCE_URL,
        flag_help = flag.help_text(),
    )
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    let flag = abi_version_flag();

    Command::new("lark-version")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .allow_negative_numbers(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Render the report as JSON instead of a banner.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("use-abi-version")
                .long(flag.name())
                .value_name("VERSION")
                .help(flag.help_text())
                .value_parser(value_parser!(i64))
                .action(ArgAction::Set),
        )
}

/// Parses the provided arguments and renders the requested report.
///
/// Returns the process exit code: `0` on success, `1` when argument parsing
/// or output writing fails. Diagnostics are written to `stderr`; report
/// output is written to `stdout`.
#[must_use]
pub fn run<Args, A, Out, ErrOut>(args: Args, stdout: &mut Out, stderr: &mut ErrOut) -> i32
where
    Args: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            let _ = writeln!(stderr, "lark-version: {err}");
            return 1;
        }
    };

    if matches.get_flag("help") {
        return match write!(stdout, "{}", render_help()) {
            Ok(()) => 0,
            Err(_) => 1,
        };
    }

    let requested = matches.get_one::<i64>("use-abi-version").copied();
    let report = VersionReport::new(requested);
    debug!(resolved_abi = report.abi.target.as_u32(), "rendering version report");

    let rendered = if matches.get_flag("json") {
        match serde_json::to_string_pretty(&report) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(err) => {
                let _ = writeln!(stderr, "lark-version: failed to render JSON: {err}");
                return 1;
            }
        }
    } else {
        report.human_readable()
    };

    match stdout.write_all(rendered.as_bytes()) {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(stderr, "lark-version: failed to write report: {err}");
            1
        }
    }
}

/// Clamps an exit code into the range representable by the operating system.
#[must_use]
pub fn clamp_exit_code(code: i32) -> u8 {
    u8::try_from(code.clamp(0, MAX_EXIT_CODE)).expect("clamped code fits in u8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use version::AbiVersion;

    fn run_captured(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(args.iter().copied(), &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).expect("stdout is UTF-8"),
            String::from_utf8(stderr).expect("stderr is UTF-8"),
        )
    }

    #[test]
    fn bare_invocation_renders_the_banner() {
        let (code, stdout, stderr) = run_captured(&["lark-version"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, VersionReport::current().human_readable());
    }

    #[test]
    fn help_flag_renders_help_with_concrete_bounds() {
        let (code, stdout, stderr) = run_captured(&["lark-version", "--help"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert!(stdout.contains("Usage: lark-version"));
        assert!(stdout.contains(&AbiVersion::OLDEST_SUPPORTED.to_string()));
        assert!(stdout.contains(&AbiVersion::CURRENT.to_string()));
    }

    #[test]
    fn in_window_request_is_reflected_in_the_banner() {
        let oldest = AbiVersion::OLDEST_SUPPORTED.as_u32().to_string();
        let (code, stdout, _) =
            run_captured(&["lark-version", "--use-abi-version", oldest.as_str()]);

        assert_eq!(code, 0);
        assert!(stdout.contains(&format!("target {oldest}")));
    }

    #[test]
    fn out_of_window_request_still_exits_cleanly() {
        let (code, stdout, stderr) = run_captured(&["lark-version", "--use-abi-version", "-4"]);

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert!(stdout.contains(&format!("target {}", AbiVersion::CURRENT)));
    }

    #[test]
    fn json_flag_renders_a_parsable_document() {
        let (code, stdout, _) = run_captured(&["lark-version", "--json"]);
        assert_eq!(code, 0);

        let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
        assert_eq!(json["snapshot_hash"], buildinfo::SNAPSHOT_HASH);
        assert_eq!(
            json["abi"]["current"],
            u64::from(AbiVersion::CURRENT.as_u32())
        );
    }

    #[test]
    fn non_numeric_request_is_a_usage_error() {
        let (code, stdout, stderr) =
            run_captured(&["lark-version", "--use-abi-version", "newest"]);

        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        assert!(stderr.contains("lark-version:"));
    }

    #[test]
    fn unknown_flags_are_usage_errors() {
        let (code, _, stderr) = run_captured(&["lark-version", "--frobnicate"]);

        assert_eq!(code, 1);
        assert!(!stderr.is_empty());
    }

    #[test]
    fn exit_codes_clamp_into_process_range() {
        assert_eq!(clamp_exit_code(0), 0);
        assert_eq!(clamp_exit_code(1), 1);
        assert_eq!(clamp_exit_code(-7), 0);
        assert_eq!(clamp_exit_code(4096), u8::MAX);
    }
}
