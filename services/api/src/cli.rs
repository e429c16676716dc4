use crate::demo::{run_check, run_demo, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use roster::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Roster Intake",
    about = "Validate personnel records and serve the roster intake API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a single user record stored as JSON
    Check(CheckArgs),
    /// Walk through admitting, rejecting, and retracting sample users
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["roster-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_accepts_file_and_today() {
        let cli = Cli::try_parse_from([
            "roster-api",
            "check",
            "--file",
            "ana.json",
            "--today",
            "2024-01-01",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.file.to_str(), Some("ana.json"));
                assert!(args.today.is_some());
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn check_rejects_malformed_today() {
        let result = Cli::try_parse_from([
            "roster-api",
            "check",
            "--file",
            "ana.json",
            "--today",
            "yesterday",
        ]);
        assert!(result.is_err());
    }
}
