use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;
use texture_resizer::{confirm_continue, BatchProcessor, Cli, RunOutcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init(&cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let config = cli.to_config();
    let max_size = config.max_size;

    let outcome = BatchProcessor::new(config).and_then(|processor| {
        processor.run(|| confirm_continue(&mut io::stdin().lock(), &mut io::stdout()))
    });

    match outcome {
        Ok(RunOutcome::Completed(tally)) => {
            print!("\n{}", tally.summary(max_size));
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.remediation_hint() {
                eprintln!("\n{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init(cli: &Cli) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .try_init()
        .context("failed to initialise logger")?;

    ctrlc::set_handler(|| {
        println!("\n\nCancelled by user");
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    Ok(())
}
