//! CLI argument parsing and command dispatch.
//!
//! The orchestrator runs `/opt/resource/check` and `/opt/resource/in <dir>`.
//! Both are links to this one binary, which picks the subcommand from the name
//! it was invoked under. Run directly, the subcommands are spelled out:
//!
//! ```bash
//! echo '{"source": {...}}' | github-team-resource check
//! echo '{"source": {...}, "version": {"hash": "..."}}' | github-team-resource in /tmp/out
//! ```

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use github_team_core::SystemClock;
use github_team_resource::GithubClient;
use github_team_resource::Result;
use github_team_resource::check::check;
use github_team_resource::fetch::fetch;
use github_team_resource::protocol::CheckRequest;
use github_team_resource::protocol::InRequest;
use github_team_resource::protocol::read_request;
use github_team_resource::protocol::write_response;

/// GitHub team membership resource.
#[derive(Parser, Debug)]
#[command(name = "github-team-resource")]
#[command(version)]
#[command(about = "Pipeline resource exposing the membership of a GitHub team")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options available to every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose", env = "GITHUB_TEAM_RESOURCE_VERBOSE", global = true)]
    pub is_verbose: bool,

    /// Suppress all logging output.
    #[arg(short = 'q', long = "quiet", env = "GITHUB_TEAM_RESOURCE_QUIET", global = true)]
    pub is_quiet: bool,
}

/// Resource operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the current version of the team's membership.
    ///
    /// Reads `{"source": {...}, "version": {"hash": "..."}}` from stdin.
    Check,

    /// Write the member list of a version into a directory.
    ///
    /// Reads `{"source": {...}, "version": {"hash": "..."}}` from stdin.
    In(InArgs),
}

#[derive(Args, Debug)]
pub struct InArgs {
    /// Directory to write `team-members` into.
    pub destination: PathBuf,
}

impl Cli {
    /// Parse the process arguments, honouring `check`/`in` program names.
    ///
    /// Errors are returned rather than exiting so the caller controls the
    /// exit status.
    pub fn try_parse_multicall() -> Result<Self, clap::Error> {
        Self::try_parse_from(multicall_args(std::env::args_os().collect()))
    }

    /// Execute the selected operation against GitHub.
    pub async fn run(self) -> Result<()> {
        let client = GithubClient::new()?;
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();

        match self.command {
            Command::Check => {
                let request: CheckRequest = read_request(stdin)?;
                let response = check(&client, &SystemClock, request).await?;
                write_response(stdout, &response)
            }
            Command::In(args) => {
                let request: InRequest = read_request(stdin)?;
                let response = fetch(&client, &args.destination, request).await?;
                write_response(stdout, &response)
            }
        }
    }
}

/// Exit status for a command line clap rejected.
///
/// `--help` and `--version` also surface as errors but are successful runs.
pub fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Insert the subcommand when invoked as `check` or `in`.
fn multicall_args(mut args: Vec<OsString>) -> Vec<OsString> {
    let alias = args
        .first()
        .and_then(|program| Path::new(program).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| matches!(*name, "check" | "in"))
        .map(OsString::from);

    if let Some(alias) = alias {
        args.insert(1, alias);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn invoked_as_check() {
        let cli = Cli::parse_from(multicall_args(os(&["/opt/resource/check"])));
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn invoked_as_in_with_destination() {
        let cli = Cli::parse_from(multicall_args(os(&["/opt/resource/in", "/tmp/build/get"])));
        match cli.command {
            Command::In(args) => assert_eq!(args.destination, PathBuf::from("/tmp/build/get")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn in_without_destination_is_a_failure() {
        let err = Cli::try_parse_from(multicall_args(os(&["/opt/resource/in"]))).unwrap_err();
        assert_eq!(usage_exit_status(&err), 1);
    }

    #[test]
    fn unknown_flag_is_a_failure() {
        let err = Cli::try_parse_from(os(&["github-team-resource", "--bogus", "check"])).unwrap_err();
        assert_eq!(usage_exit_status(&err), 1);
    }

    #[test]
    fn help_and_version_succeed() {
        for flag in ["--help", "--version"] {
            let err = Cli::try_parse_from(os(&["github-team-resource", flag])).unwrap_err();
            assert_eq!(usage_exit_status(&err), 0, "{flag}");
        }
    }

    #[test]
    fn invoked_directly_uses_subcommands() {
        let args = os(&["github-team-resource", "-q", "in", "out"]);
        assert_eq!(multicall_args(args.clone()), args);

        let cli = Cli::parse_from(args);
        assert!(cli.global.is_quiet);
        assert!(matches!(cli.command, Command::In(_)));
    }
}
