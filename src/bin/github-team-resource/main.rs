//! GitHub team resource entrypoint.
//!
//! Exit status is 0 on success and 1 on any failure, including a command line
//! that does not parse. Operation failures are reported on stderr as
//! `[ERROR] <message>`; stdout only ever carries the JSON response.

mod cli;

use std::process::ExitCode;

use github_team_resource::logging::init_tracing;

use cli::Cli;
use cli::usage_exit_status;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_multicall() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = err.print();
            return ExitCode::from(usage_exit_status(&err));
        }
    };

    init_tracing(cli.global.is_quiet, cli.global.is_verbose);

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err}");
            ExitCode::from(1)
        }
    }
}
