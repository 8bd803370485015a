// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs dispatches to these handlers.

pub mod locations;
pub mod route;
pub mod routes;

pub use locations::{handle_landmarks_command, handle_locations_command};
pub use route::{handle_route_command, CongestionUpdate, RouteArgs};
pub use routes::{handle_routes_command, RoutesArgs};
