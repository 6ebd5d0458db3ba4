mod cli;

use anyhow::Context;
use tftarget::command::{TerraformCommand, DEFAULT_PROGRAM};
use tftarget::repo_info::RepoInfo;
use tftarget::target::TargetExpression;
use tftarget::workspace::Workspace;

/// Program used in place of `terraform`
const PROGRAM_VARIABLE: &str = "TFTARGET_TERRAFORM";

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("TFTARGET_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let workspace = Workspace::new(std::env::current_dir()?);

    let info = RepoInfo::load(&workspace, &cli.env)?;
    let targets = TargetExpression::collect(&workspace, &cli.tf_files)
        .context("Failed to collect terraform targets")?;

    if targets.is_empty() {
        tracing::warn!(files=%cli.tf_files, "no blocks found, terraform will act on everything");
    }

    let program = std::env::var(PROGRAM_VARIABLE).unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());
    let command = TerraformCommand::new(
        program,
        cli.action,
        cli.env,
        cli.env_id,
        info.version,
        targets,
    );

    command.execute(workspace.root(), &info.profile)?;
    Ok(())
}
