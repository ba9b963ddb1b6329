//! Panocube CLI - download panorama tiles and build skybox cube maps.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panocube", version, about = "360° panorama tiles to skybox cube maps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download a panorama tile grid, assemble it, and write the skybox.
    Run(commands::run::RunArgs),
    /// Reproject an existing equirectangular image into a skybox.
    Project(commands::project::ProjectArgs),
    /// Mirror the files listed in a remote manifest.
    Mirror(commands::mirror::MirrorArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => commands::run::run(args),
        Command::Project(args) => commands::project::run(args),
        Command::Mirror(args) => commands::mirror::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
