use decomment_core::{GroupOutcome, ScanGroup, StripOptions, strip_comments_under};
mod args;

use anyhow::{Context, Result};
use args::{CliArgs, Command};
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_group(group: &ScanGroup, options: &StripOptions) -> Result<()> {
    let outcome = strip_comments_under(&group.root, group.extensions, options, |path| {
        println!(
            "Processing {} file: {}",
            group.label,
            style(path.display()).dim()
        );
    })
    .with_context(|| format!("{} files could not be processed", group.label))?;

    match outcome {
        GroupOutcome::Missing => {
            println!(
                "{} directory not found: {}",
                group.label,
                style(group.root.display()).yellow()
            );
        }
        GroupOutcome::Processed { scanned, modified } if options.dry_run => {
            println!(
                "{} files checked: {} of {} would change (dry run).",
                group.label,
                style(modified).cyan(),
                scanned
            );
        }
        GroupOutcome::Processed { .. } => {
            println!("{} files processed successfully.", group.label);
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            Command::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let main_app_args = cli.main_opts;
    setup_logging(main_app_args.verbose);

    let options = main_app_args.strip_options();
    tracing::debug!(?options, "starting comment stripping");
    for group in main_app_args.scan_groups() {
        if let Err(e) = run_group(&group, &options) {
            eprintln!("{}", style(format!("Error: {:#}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
