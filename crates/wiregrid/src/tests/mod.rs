mod edge_cases;
mod simple;

use crate::config::{RouteOptions, RouterConfig};
use crate::router::Router;
use crate::types::{Bounds, GridCell, PathResult, WorldPoint};

/// Helper to create a router with the default configuration.
fn router() -> Router {
    Router::new(RouterConfig::default())
}

fn point(x: f64, y: f64) -> WorldPoint {
    WorldPoint::new(x, y)
}

fn bounds(x: f64, y: f64, width: f64, height: f64) -> Bounds {
    Bounds::new(x, y, width, height)
}

/// Route a wire with default options, panicking on invalid input.
fn route(router: &Router, id: &str, from: (f64, f64), to: (f64, f64)) -> Option<PathResult> {
    router
        .find_path(
            point(from.0, from.1),
            point(to.0, to.1),
            Some(id),
            &RouteOptions::default(),
        )
        .expect("valid route input")
}

/// Route a wire and panic if no path was found.
fn route_ok(router: &Router, id: &str, from: (f64, f64), to: (f64, f64)) -> PathResult {
    route(router, id, from, to).expect("expected a path")
}

/// All grid cells covered by a result's segments.
fn cells_of(result: &PathResult) -> Vec<GridCell> {
    let mut cells = Vec::new();
    for seg in &result.segments {
        for cell in seg.cells() {
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Assert that every returned segment is axis-aligned.
fn assert_orthogonal(result: &PathResult) {
    for seg in &result.segments {
        assert!(
            seg.start.x == seg.end.x || seg.start.y == seg.end.y,
            "diagonal segment: {:?}",
            seg
        );
    }
}

/// Register a sealed square ring of wall components around a center point.
/// The enclosed free region is large enough to hold a goal cell that is not
/// within clearance of any wall.
fn seal_ring(router: &mut Router, cx: f64, cy: f64) {
    router
        .update_component_bounds("ring-top", bounds(cx - 70.0, cy - 70.0, 140.0, 10.0))
        .unwrap();
    router
        .update_component_bounds("ring-bottom", bounds(cx - 70.0, cy + 60.0, 140.0, 10.0))
        .unwrap();
    router
        .update_component_bounds("ring-left", bounds(cx - 70.0, cy - 70.0, 10.0, 140.0))
        .unwrap();
    router
        .update_component_bounds("ring-right", bounds(cx + 60.0, cy - 70.0, 10.0, 140.0))
        .unwrap();
}
