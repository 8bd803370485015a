//! Route command handler for a single start/goal query.

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use tracing::debug;

use campusnav_lib::{Graph, PathFinder, RouteSummary};

use crate::output::{print_json, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone, Args)]
pub struct RouteArgs {
    /// Starting location name.
    #[arg(long = "from")]
    pub from: String,
    /// Destination location name.
    #[arg(long = "to")]
    pub to: String,
    /// Congestion applied to a walkway in both directions after routes are
    /// precomputed. Repeatable.
    #[arg(long = "congestion", value_name = "FROM:TO=FACTOR")]
    pub congestion: Vec<CongestionUpdate>,
}

/// A `FROM:TO=FACTOR` congestion update.
#[derive(Debug, Clone, PartialEq)]
pub struct CongestionUpdate {
    pub from: String,
    pub to: String,
    pub factor: f64,
}

impl FromStr for CongestionUpdate {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || format!("expected FROM:TO=FACTOR, got '{value}'");

        let (pair, factor) = value.rsplit_once('=').ok_or_else(malformed)?;
        let (from, to) = pair.split_once(':').ok_or_else(malformed)?;
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(malformed());
        }

        let factor = factor
            .trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid congestion factor '{}': {err}", factor.trim()))?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            factor,
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    finder: &mut PathFinder,
    args: &RouteArgs,
    format: OutputFormat,
) -> Result<()> {
    let start = finder.graph().resolve_location(&args.from)?;
    let goal = finder.graph().resolve_location(&args.to)?;
    if start == goal {
        bail!("start and end locations cannot be the same");
    }

    for update in &args.congestion {
        apply_congestion(finder.graph_mut(), update)?;
    }

    let route = finder
        .get_precomputed_path(start, goal)
        .ok_or_else(|| anyhow!("No route found between {} and {}", args.from, args.to))?;
    let summary =
        RouteSummary::from_route(finder.graph(), route)?.with_live_time(finder.live_time(route));

    match format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}

fn apply_congestion(graph: &mut Graph, update: &CongestionUpdate) -> Result<()> {
    let from = graph.resolve_location(&update.from)?;
    let to = graph.resolve_location(&update.to)?;

    let forward = graph.set_congestion(from, to, update.factor);
    let backward = graph.set_congestion(to, from, update.factor);
    if !(forward && backward) {
        bail!("no walkway between {} and {}", update.from, update.to);
    }

    debug!(
        from = %update.from,
        to = %update.to,
        factor = update.factor,
        "applied congestion update"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn congestion_update_parses() {
        let update: CongestionUpdate = "Student Cafe:Science Block=3".parse().unwrap();
        assert_eq!(
            update,
            CongestionUpdate {
                from: "Student Cafe".to_string(),
                to: "Science Block".to_string(),
                factor: 3.0,
            }
        );
    }

    #[test]
    fn congestion_update_rejects_malformed_values() {
        assert!("A:B".parse::<CongestionUpdate>().is_err());
        assert!("AB=2".parse::<CongestionUpdate>().is_err());
        assert!(":B=2".parse::<CongestionUpdate>().is_err());
        let err = "A:B=fast".parse::<CongestionUpdate>().unwrap_err();
        assert!(err.contains("invalid congestion factor 'fast'"));
    }
}
