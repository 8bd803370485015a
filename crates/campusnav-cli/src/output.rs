//! Output helpers shared by the subcommands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{Graph, Route};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Location names along `route` joined with arrows.
pub fn format_path(graph: &Graph, route: &Route) -> String {
    route
        .path()
        .iter()
        .map(|id| graph.name(*id).unwrap_or("<unknown>"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One-line description of a candidate route.
pub fn format_route_line(position: usize, graph: &Graph, route: &Route) -> String {
    let mut line = format!(
        "{:>2}. {} ({:.0} m, {:.1} min)",
        position,
        format_path(graph, route),
        route.distance(),
        route.time()
    );
    if !route.landmarks().is_empty() {
        line.push_str(&format!(" [{}]", route.landmarks().join(", ")));
    }
    line
}
