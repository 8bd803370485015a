use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::{
    handle_landmarks_command, handle_locations_command, handle_route_command,
    handle_routes_command, RouteArgs, RoutesArgs,
};
use campusnav_cli::output::OutputFormat;
use campusnav_lib::{load_campus, resolve_dataset_path, PathFinder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Walking routes across a campus", long_about = None)]
struct Cli {
    /// Campus dataset file, or a directory containing `campus_data.json`.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest walking route between two locations.
    Route(RouteArgs),
    /// Every reachable destination from a location.
    Routes(RoutesArgs),
    /// List the campus locations.
    Locations,
    /// List every landmark tag on campus.
    Landmarks,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset =
        resolve_dataset_path(cli.data.as_deref()).context("failed to locate campus dataset")?;
    let graph = load_campus(&dataset)
        .with_context(|| format!("failed to load campus dataset from {}", dataset.display()))?;

    match cli.command {
        Command::Locations => handle_locations_command(&graph, cli.format),
        Command::Landmarks => handle_landmarks_command(&graph, cli.format),
        Command::Route(args) => {
            let mut finder = PathFinder::new(graph);
            handle_route_command(&mut finder, &args, cli.format)
        }
        Command::Routes(args) => {
            let finder = PathFinder::new(graph);
            handle_routes_command(&finder, &args, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
