use std::io::{self, Write};

use crate::context::AppContext;
use crate::domain::changelog::{ChangelogOutcome, ChangelogRequest};
use crate::error::{AppError, AppResult};
use crate::workflow::changelog::{check_connectivity, generate_changelog, preview_request};

const NO_COMMITS_NOTE: &str = "No commits found; nothing to summarize.";

#[derive(Debug, Clone)]
pub struct ChangelogCommandArgs {
    pub count: u32,
    pub dry_run: bool,
}

pub async fn run(ctx: &AppContext, args: ChangelogCommandArgs) -> AppResult<()> {
    if args.dry_run {
        return print_request(ctx, args.count).await;
    }

    let outcome = generate_changelog(ctx, args.count).await?;
    report(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}

pub async fn run_check(ctx: &AppContext) -> AppResult<()> {
    eprintln!("Checking proxy at {} ...", ctx.config.api_url());
    let outcome = check_connectivity(ctx).await?;
    report(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}

async fn print_request(ctx: &AppContext, count: u32) -> AppResult<()> {
    match preview_request(ctx, count).await? {
        Some(request) => {
            println!("{}", request_json(&request)?);
        }
        None => eprintln!("{NO_COMMITS_NOTE}"),
    }
    Ok(())
}

fn request_json(request: &ChangelogRequest) -> AppResult<String> {
    serde_json::to_string_pretty(request).map_err(|err| AppError::Io(io::Error::other(err)))
}

/// Writes the changelog to `out`; everything else goes to `err`.
pub fn report(outcome: &ChangelogOutcome, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    match outcome {
        ChangelogOutcome::Generated(text) => writeln!(out, "{text}"),
        ChangelogOutcome::NoCommits => writeln!(err, "{NO_COMMITS_NOTE}"),
        ChangelogOutcome::Rejected { status, body } => {
            writeln!(err, "Error: API request failed with status {status}")?;
            writeln!(err, "{body}")
        }
        ChangelogOutcome::Malformed(detail) => {
            writeln!(err, "Error: malformed API response: {detail}")
        }
    }
}
