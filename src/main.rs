use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use peektab::{
    Cli, Commands, PeekError, commands,
    inspection::{Console, NoticeLevel},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut console = Console::stdout(cli.color.enabled());
    let result = match cli.command {
        Commands::Show(args) => commands::preview::run(args, &mut console).await,
        Commands::Schema(args) => commands::schema::run(args, &mut console).await,
        Commands::Stats(args) => commands::stats::run(args, &mut console).await,
        Commands::Sample(args) => commands::sample::run(args, &mut console).await,
        Commands::Columns(args) => commands::columns::run(args, &mut console).await,
        Commands::Convert(args) => commands::convert::run(args, &mut console).await,
        Commands::Info(args) => commands::info::run(args, &mut console).await,
        Commands::Completions { shell } => {
            Commands::generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => {
            console.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<PeekError>() {
            Some(peek) if peek.is_reported() => {
                console.notice(NoticeLevel::Error, &peek.to_string())?;
                console.flush()?;
                Ok(ExitCode::from(peek.exit_code()))
            }
            _ => {
                console.flush()?;
                Err(err)
            }
        },
    }
}
