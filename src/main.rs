mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::ffi::OsString;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::cmd::changelog::{self as changelog_cmd, ChangelogCommandArgs};
use crate::cmd::install;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::proxy::ProxyClient;

#[derive(Parser, Debug)]
#[command(
    name = "generate-changelog",
    author,
    version,
    about = "Generate a changelog from git commits using the Claude API proxy."
)]
struct Cli {
    /// Number of commits to include in the changelog.
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..),
        required_unless_present_any = ["install", "check"]
    )]
    n: Option<u32>,

    /// Install this binary into ~/.local/bin and exit.
    #[arg(long, conflicts_with_all = ["n", "check", "dry_run"])]
    install: bool,

    /// Send a small sample request to verify the proxy is reachable.
    #[arg(long, conflicts_with_all = ["n", "dry_run"])]
    check: bool,

    /// Print the request payload instead of sending it.
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => std::process::exit(code),
    };

    logging::init(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Usage problems exit with status 1; `--help` and `--version` exit 0.
fn parse_cli() -> Result<Cli, i32> {
    parse_cli_from(std::env::args_os())
}

fn parse_cli_from<I, T>(args: I) -> Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        eprint!("{}", Cli::command().render_help());
        return Err(1);
    }

    Cli::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        }
    })
}

async fn run(cli: Cli) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    if cli.install {
        return install::run(&config);
    }

    install::hint_if_missing(&config);
    if config.api_key.is_empty() {
        eprintln!("Warning: API key not configured (set CHANGELOG_API_KEY); the proxy may reject the request.");
    }

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let proxy = Arc::new(ProxyClient::new(config.api_url(), config.api_key.clone()));
    let context = AppContext::new(config, git, proxy);

    match cli.n {
        Some(count) if !cli.check => {
            changelog_cmd::run(
                &context,
                ChangelogCommandArgs {
                    count,
                    dry_run: cli.dry_run,
                },
            )
            .await
        }
        _ => changelog_cmd::run_check(&context).await,
    }
}
