use super::*;
use crate::config::RouterConfig;

#[test]
fn same_cell_terminals_return_a_zero_bend_path() {
    // Both terminals round to the same grid cell: nothing to search.
    let r = router();
    let result = route_ok(&r, "w1", (3.0, 4.0), (6.0, 1.0));
    assert_eq!(result.path, vec![point(3.0, 4.0), point(6.0, 1.0)]);
    assert!(result.segments.is_empty());
    assert_eq!(result.bends, 0);
    assert_eq!(result.length, 6.0);
}

#[test]
fn identical_terminals_return_a_zero_length_path() {
    let r = router();
    let result = route_ok(&r, "w1", (50.0, 50.0), (50.0, 50.0));
    assert_eq!(result.length, 0.0);
    assert_eq!(result.bends, 0);
}

#[test]
fn terminal_inside_a_component_is_reachable() {
    // A terminal on (or in) a component exempts that component from
    // blocking: a wire cannot avoid the thing it plugs into.
    let mut r = router();
    r.update_component_bounds("board", bounds(100.0, 100.0, 40.0, 40.0))
        .unwrap();
    let result = route_ok(&r, "w1", (0.0, 0.0), (120.0, 120.0));
    assert_eq!(result.path.last(), Some(&point(120.0, 120.0)));
}

#[test]
fn zero_size_component_still_blocks_its_cell() {
    let mut r = router();
    r.update_component_bounds("pin", bounds(100.0, 0.0, 0.0, 0.0))
        .unwrap();
    // The pin occupies cell (10,0) plus clearance; a straight route through
    // it must bend around.
    let result = route_ok(&r, "w1", (0.0, 0.0), (200.0, 0.0));
    assert!(result.bends >= 2);
    assert!(result.length > 200.0);
}

#[test]
fn negative_coordinates_route_normally() {
    let r = router();
    let result = route_ok(&r, "w1", (-100.0, -50.0), (-10.0, -50.0));
    assert_eq!(result.length, 90.0);
    assert_eq!(result.bends, 0);
}

#[test]
fn full_diagram_scale_routes_within_budget() {
    // The diagram space is up to 10000x6000 world units.
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (9000.0, 5000.0));
    assert_eq!(result.length, 14000.0);
    assert_orthogonal(&result);
}

#[test]
fn expansion_budget_reports_no_path() {
    let r = Router::new(RouterConfig {
        max_expansions: 10,
        ..RouterConfig::default()
    });
    assert!(route(&r, "w1", (0.0, 0.0), (500.0, 500.0)).is_none());
}

#[test]
fn relaxed_constraints_recover_a_clearance_sealed_gap() {
    // Two wall sections leave a gap that the full clearance buffer seals
    // shut but a clearance of 1 leaves open. The strict attempt fails; the
    // relaxed retry routes through the gap.
    let mut r = Router::new(RouterConfig {
        max_expansions: 20_000,
        ..RouterConfig::default()
    });
    // Ring around the goal with a gap on the right side (rows 48..51).
    r.update_component_bounds("top", bounds(430.0, 430.0, 140.0, 10.0))
        .unwrap();
    r.update_component_bounds("bottom", bounds(430.0, 560.0, 140.0, 10.0))
        .unwrap();
    r.update_component_bounds("left", bounds(430.0, 430.0, 10.0, 140.0))
        .unwrap();
    r.update_component_bounds("right-upper", bounds(560.0, 430.0, 10.0, 40.0))
        .unwrap();
    r.update_component_bounds("right-lower", bounds(560.0, 520.0, 10.0, 50.0))
        .unwrap();

    assert!(route(&r, "w1", (700.0, 500.0), (500.0, 500.0)).is_none());

    let options = RouteOptions {
        allow_relaxed_constraints: true,
        ..RouteOptions::default()
    };
    let result = r
        .find_path(point(700.0, 500.0), point(500.0, 500.0), Some("w1"), &options)
        .unwrap();
    assert!(result.is_some(), "relaxed retry should route through the gap");
}

#[test]
fn custom_grid_size_scales_the_routing() {
    let r = Router::new(RouterConfig {
        grid_size: 25.0,
        ..RouterConfig::default()
    });
    let result = route_ok(&r, "w1", (0.0, 0.0), (250.0, 0.0));
    assert_eq!(result.length, 250.0);
    assert_eq!(result.bends, 0);
}
