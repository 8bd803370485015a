use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::route::Route;

/// Live times within this many minutes of the stored time are not reported.
const LIVE_TIME_EPSILON: f64 = 1e-9;

/// Stop along a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Distance walked from the previous stop in metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
    /// Time from the previous stop in minutes, under current congestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_time: Option<f64>,
}

impl RouteStep {
    fn role(&self, last_index: usize) -> &'static str {
        if self.index == 0 {
            "START"
        } else if self.index == last_index {
            "END"
        } else {
            "STOP"
        }
    }
}

/// Structured representation of a route that front ends can serialise or
/// render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
    pub total_distance: f64,
    pub total_time: f64,
    /// Time under current congestion, when it differs from `total_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_pace_kmh: Option<f64>,
    pub landmarks: Vec<String>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with resolved location names.
    pub fn from_route(graph: &Graph, route: &Route) -> Result<Self> {
        if route.path().is_empty() {
            return Err(Error::EmptyRoute);
        }

        let steps: Vec<RouteStep> = route
            .path()
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let location = graph.location(*id);
                let leg = index
                    .checked_sub(1)
                    .and_then(|previous| graph.segment(route.path()[previous], *id));
                RouteStep {
                    index,
                    name: location
                        .map(|loc| loc.name().to_string())
                        .unwrap_or_else(|| "<unknown>".to_string()),
                    lat: location.map(|loc| loc.lat()).unwrap_or_default(),
                    lon: location.map(|loc| loc.lon()).unwrap_or_default(),
                    leg_distance: leg.map(|segment| segment.distance()),
                    leg_time: leg.map(|segment| segment.effective_time()),
                }
            })
            .collect();

        let start = steps[0].name.clone();
        let goal = steps[steps.len() - 1].name.clone();

        Ok(Self {
            start,
            goal,
            hops: route.hop_count(),
            steps,
            total_distance: route.distance(),
            total_time: route.time(),
            live_time: None,
            walking_pace_kmh: walking_pace_kmh(route.distance(), route.time()),
            landmarks: route.landmarks().to_vec(),
        })
    }

    /// Attach the time under current congestion when it differs from the
    /// stored snapshot.
    pub fn with_live_time(mut self, live_time: Option<f64>) -> Self {
        self.live_time =
            live_time.filter(|live| (live - self.total_time).abs() > LIVE_TIME_EPSILON);
        self
    }

    /// Plain-text rendering of the route.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let last_index = self.steps.len().saturating_sub(1);

        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} stops):",
            self.start,
            self.goal,
            self.steps.len()
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:<6} {}", format!("{}:", step.role(last_index)), step.name);
        }

        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Total distance: {:.0} m ({:.2} km)",
            self.total_distance,
            self.total_distance / 1000.0
        );
        let _ = writeln!(buffer, "Estimated time: {:.1} min", self.total_time);
        if let Some(live) = self.live_time {
            let _ = writeln!(buffer, "Current time:   {:.1} min (with congestion)", live);
        }
        if let Some(pace) = self.walking_pace_kmh {
            let _ = writeln!(buffer, "Walking pace:   {:.1} km/h", pace);
        }
        let _ = writeln!(buffer, "Total stops:    {} locations", self.steps.len());

        if !self.landmarks.is_empty() {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Landmarks:");
            for landmark in &self.landmarks {
                let _ = writeln!(buffer, "  - {}", capitalize(landmark));
            }
        }

        if self.steps.len() > 2 {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Directions:");
            for pair in self.steps.windows(2) {
                let (from, to) = (&pair[0], &pair[1]);
                let _ = write!(buffer, "Step {}: From {} to {}", to.index, from.name, to.name);
                if let (Some(distance), Some(time)) = (to.leg_distance, to.leg_time) {
                    let _ = write!(buffer, " ({:.0} m, {:.1} min)", distance, time);
                }
                let _ = writeln!(buffer);
            }
        }

        buffer
    }
}

fn walking_pace_kmh(distance_m: f64, time_min: f64) -> Option<f64> {
    (time_min > 0.0).then(|| (distance_m / 1000.0) / (time_min / 60.0))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_is_absent_for_zero_time() {
        assert_eq!(walking_pace_kmh(450.0, 0.0), None);
        let pace = walking_pace_kmh(450.0, 9.0).unwrap();
        assert!((pace - 3.0).abs() < 1e-9);
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("library"), "Library");
        assert_eq!(capitalize("école"), "École");
    }
}
