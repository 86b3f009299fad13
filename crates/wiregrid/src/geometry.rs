use serde::Serialize;

use crate::types::WorldPoint;

/// A renderable path primitive. Not tied to any drawing API; the host
/// application converts these into whatever representation it persists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(WorldPoint),
    LineTo(WorldPoint),
    QuadTo { control: WorldPoint, to: WorldPoint },
}

/// Turn an optimized waypoint polyline into path geometry.
///
/// With a zero radius (or fewer than three points) the output is straight
/// line segments. Otherwise each interior waypoint becomes a rounded corner:
/// trim back along both adjacent segments by `min(radius, half the shorter
/// adjacent segment)` — never overshooting a segment, so rounding short
/// zig-zags cannot self-intersect — and join with a quadratic curve
/// control-pointed at the original corner vertex.
pub fn render_path(path: &[WorldPoint], corner_radius: f64) -> Vec<PathCommand> {
    let Some(&first) = path.first() else {
        return Vec::new();
    };
    let mut commands = vec![PathCommand::MoveTo(first)];

    if path.len() <= 2 || corner_radius <= 0.0 {
        for &p in &path[1..] {
            commands.push(PathCommand::LineTo(p));
        }
        return commands;
    }

    for i in 1..path.len() - 1 {
        let prev = path[i - 1];
        let curr = path[i];
        let next = path[i + 1];

        let in_len = prev.distance_to(curr);
        let out_len = curr.distance_to(next);

        // Clamp the trim to half the shorter adjacent segment.
        let r = corner_radius.min(in_len / 2.0).min(out_len / 2.0);
        if r <= 0.0 || in_len == 0.0 || out_len == 0.0 {
            commands.push(PathCommand::LineTo(curr));
            continue;
        }

        let in_dir = ((curr.x - prev.x) / in_len, (curr.y - prev.y) / in_len);
        let out_dir = ((next.x - curr.x) / out_len, (next.y - curr.y) / out_len);

        let arc_start = WorldPoint::new(curr.x - in_dir.0 * r, curr.y - in_dir.1 * r);
        let arc_end = WorldPoint::new(curr.x + out_dir.0 * r, curr.y + out_dir.1 * r);

        commands.push(PathCommand::LineTo(arc_start));
        commands.push(PathCommand::QuadTo {
            control: curr,
            to: arc_end,
        });
    }

    commands.push(PathCommand::LineTo(path[path.len() - 1]));
    commands
}

/// Total length of a waypoint polyline.
pub fn polyline_length(path: &[WorldPoint]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}
