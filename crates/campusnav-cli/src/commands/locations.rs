//! Listing commands for locations and landmarks.

use anyhow::Result;

use campusnav_lib::{Graph, Location};

use crate::output::{print_json, OutputFormat};

/// Print every location sorted by name.
pub fn handle_locations_command(graph: &Graph, format: OutputFormat) -> Result<()> {
    let locations: Vec<&Location> = graph
        .locations_by_name()
        .into_iter()
        .map(|(_, location)| location)
        .collect();

    match format {
        OutputFormat::Text => {
            for location in locations {
                if location.tags().is_empty() {
                    println!("{} ({:.4}, {:.4})", location.name(), location.lat(), location.lon());
                } else {
                    println!(
                        "{} ({:.4}, {:.4}) [{}]",
                        location.name(),
                        location.lat(),
                        location.lon(),
                        location.tags().join(", ")
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&locations)?,
    }
    Ok(())
}

/// Print the landmark union across all locations.
pub fn handle_landmarks_command(graph: &Graph, format: OutputFormat) -> Result<()> {
    let landmarks = graph.all_landmarks();
    match format {
        OutputFormat::Text => {
            for landmark in &landmarks {
                println!("{landmark}");
            }
        }
        OutputFormat::Json => print_json(&landmarks)?,
    }
    Ok(())
}
