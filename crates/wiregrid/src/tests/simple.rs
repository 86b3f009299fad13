use super::*;

#[test]
fn straight_horizontal_route() {
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (100.0, 0.0));
    assert_eq!(result.length, 100.0);
    assert_eq!(result.bends, 0);
    assert_eq!(result.path, vec![point(0.0, 0.0), point(100.0, 0.0)]);
}

#[test]
fn straight_vertical_route() {
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (0.0, 80.0));
    assert_eq!(result.length, 80.0);
    assert_eq!(result.bends, 0);
}

#[test]
fn l_shaped_route_has_one_bend() {
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (50.0, 30.0));
    assert_eq!(result.length, 80.0);
    assert_eq!(result.bends, 1);
    assert_orthogonal(&result);
}

#[test]
fn unobstructed_length_equals_manhattan_distance() {
    // With no obstacles, wires or penalties in effect, the routed length is
    // exactly the Manhattan distance between the terminals.
    let r = router();
    for (from, to, expected) in [
        ((30.0, 40.0), (130.0, 40.0), 100.0),
        ((0.0, 0.0), (200.0, 0.0), 200.0),
        ((50.0, 50.0), (50.0, 250.0), 200.0),
        ((0.0, 0.0), (120.0, 90.0), 210.0),
    ] {
        let result = route_ok(&r, "w1", from, to);
        assert_eq!(result.length, expected);
    }
}

#[test]
fn no_diagonal_segments() {
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (70.0, 50.0));
    assert_orthogonal(&result);
}

#[test]
fn endpoints_are_exact_terminal_positions() {
    // Routing snaps to the grid internally but terminates precisely at the
    // requested positions.
    let r = router();
    let result = route_ok(&r, "w1", (12.0, 7.0), (133.0, 44.0));
    assert_eq!(result.path.first(), Some(&point(12.0, 7.0)));
    assert_eq!(result.path.last(), Some(&point(133.0, 44.0)));
}

#[test]
fn segments_form_a_connected_polyline() {
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (90.0, 60.0));
    assert!(!result.segments.is_empty());
    for pair in result.segments.windows(2) {
        let a = [pair[0].start, pair[0].end];
        let b = [pair[1].start, pair[1].end];
        assert!(
            a.iter().any(|cell| b.contains(cell)),
            "segments {:?} and {:?} do not touch",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn length_matches_waypoint_polyline() {
    let r = router();
    let result = route_ok(&r, "w1", (0.0, 0.0), (90.0, 60.0));
    let mut computed = 0.0;
    for pair in result.path.windows(2) {
        computed += pair[0].distance_to(pair[1]);
    }
    assert!(
        (computed - result.length).abs() < 0.001,
        "length mismatch: computed={}, reported={}",
        computed,
        result.length
    );
}

#[test]
fn reverse_route_has_same_length() {
    let r = router();
    let forward = route_ok(&r, "w1", (0.0, 0.0), (150.0, 70.0));
    let backward = route_ok(&r, "w1", (150.0, 70.0), (0.0, 0.0));
    assert_eq!(forward.length, backward.length);
    assert_eq!(forward.bends, backward.bends);
}

#[test]
fn find_path_does_not_mutate_the_index() {
    // Routing is read-only; only explicit registration adds obstacle data.
    let r = router();
    let _ = route_ok(&r, "w1", (0.0, 0.0), (100.0, 0.0));
    assert_eq!(r.obstacles().wire_count(), 0);
}
