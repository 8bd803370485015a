//! Routes command handler: every destination from one location, optionally
//! filtered by landmark and sorted.

use anyhow::Result;
use clap::Args;

use campusnav_lib::{
    filter_by_landmark, filter_by_landmark_strict, sort_routes_by, Error as LibError, PathFinder,
    Route, RouteSummary, SortCriterion,
};

use crate::output::{format_route_line, print_json, OutputFormat};

/// Arguments for the routes command.
#[derive(Debug, Clone, Args)]
pub struct RoutesArgs {
    /// Starting location name.
    #[arg(long = "from")]
    pub from: String,
    /// Order by distance, time or landmarks (most first).
    #[arg(long, value_parser = parse_sort_criterion)]
    pub sort: Option<SortCriterion>,
    /// Prefer routes passing this landmark; all routes are kept when none do.
    #[arg(long)]
    pub landmark: Option<String>,
    /// Only keep routes passing the landmark, even if none do.
    #[arg(long, requires = "landmark")]
    pub strict: bool,
}

fn parse_sort_criterion(value: &str) -> std::result::Result<SortCriterion, String> {
    value
        .parse()
        .map_err(|err: LibError| err.to_string())
}

/// Handle the routes subcommand.
pub fn handle_routes_command(
    finder: &PathFinder,
    args: &RoutesArgs,
    format: OutputFormat,
) -> Result<()> {
    let graph = finder.graph();
    let start = graph.resolve_location(&args.from)?;

    let mut routes: Vec<&Route> = finder.routes_from(start);
    if let Some(landmark) = &args.landmark {
        let filtered = if args.strict {
            filter_by_landmark_strict(&routes, landmark)
        } else {
            filter_by_landmark(&routes, landmark).into_owned()
        };
        routes = filtered;
    }
    if let Some(criterion) = args.sort {
        sort_routes_by(&mut routes, criterion);
    }

    match format {
        OutputFormat::Text => {
            if routes.is_empty() {
                println!("No routes from {}", args.from);
                return Ok(());
            }
            println!("Routes from {} ({}):", args.from, routes.len());
            for (index, route) in routes.iter().enumerate() {
                println!("{}", format_route_line(index + 1, graph, route));
            }
        }
        OutputFormat::Json => {
            let summaries = routes
                .iter()
                .map(|route| RouteSummary::from_route(graph, route))
                .collect::<campusnav_lib::Result<Vec<_>>>()?;
            print_json(&summaries)?;
        }
    }
    Ok(())
}
