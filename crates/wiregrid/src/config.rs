use serde::{Deserialize, Serialize};

/// Routing engine configuration. Fixed for a router's lifetime.
///
/// The penalty and bonus constants are tunable policy, not contract: they
/// shape which of several candidate paths wins, never whether a path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// World units per grid cell.
    pub grid_size: f64,
    /// Obstacle margin around component bounds, in grid cells.
    pub clearance: i32,
    /// Cost added for every direction change, biasing toward long straight runs.
    pub bend_penalty: u32,
    /// Cost added for crossing a foreign wire segment perpendicularly.
    pub wire_cross_penalty: u32,
    /// Maximum distance in cells at which running beside an existing wire
    /// earns a bundling bonus.
    pub bundle_distance: i32,
    /// Bonus per proximity step: `(bundle_distance + 1 - d) * weight` for a
    /// parallel run at distance `d`.
    pub bundle_bonus_weight: u32,
    /// Expansion budget for a single search. Exceeding it counts as no path.
    pub max_expansions: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            clearance: 2,
            bend_penalty: 5,
            wire_cross_penalty: 10,
            bundle_distance: 3,
            bundle_bonus_weight: 10,
            max_expansions: 200_000,
        }
    }
}

/// Per-call routing options.
#[derive(Debug, Clone, Copy)]
pub struct RouteOptions {
    /// Treat registered wires as obstacles (perpendicular crossings stay
    /// possible, at a cost).
    pub avoid_wires: bool,
    /// Reward paths running parallel and close to existing wires.
    pub bundle_with_wires: bool,
    /// On failure, retry once ignoring wires and with a clearance of 1.
    pub allow_relaxed_constraints: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            avoid_wires: true,
            bundle_with_wires: true,
            allow_relaxed_constraints: false,
        }
    }
}
