use crate::grid::GridMapper;
use crate::obstacles::{BlockQuery, ObstacleIndex};
use crate::types::{GridCell, MoveKind, WorldPoint};

/// Reduce a dense cell-by-cell path to its corner waypoints.
///
/// Greedy forward scan: from the current cell, keep the farthest later
/// dense-path cell still reachable by one straight, obstacle-free orthogonal
/// run, then continue from there. The first and last output points are the
/// exact continuous-space terminals — routing snaps to the grid internally
/// but terminates precisely at the requested positions.
pub fn optimize(
    index: &ObstacleIndex,
    mapper: &GridMapper,
    dense: &[GridCell],
    world_start: WorldPoint,
    world_end: WorldPoint,
    query: &BlockQuery,
) -> Vec<WorldPoint> {
    if dense.len() <= 2 {
        return vec![world_start, world_end];
    }

    let mut kept = vec![0_usize];
    let mut i = 0;
    while i < dense.len() - 1 {
        let mut next = i + 1;
        for j in (i + 1..dense.len()).rev() {
            if can_connect_direct(index, dense[i], dense[j], query) {
                next = j;
                break;
            }
        }
        kept.push(next);
        i = next;
    }

    let last = kept.len() - 1;
    kept.iter()
        .enumerate()
        .map(|(k, &idx)| {
            if k == 0 {
                world_start
            } else if k == last {
                world_end
            } else {
                mapper.to_world(dense[idx])
            }
        })
        .collect()
}

/// Whether a single straight orthogonal run connects `a` to `b` without
/// entering a blocked cell. The endpoints themselves were validated by the
/// search; only the cells strictly between them are re-checked.
fn can_connect_direct(
    index: &ObstacleIndex,
    a: GridCell,
    b: GridCell,
    query: &BlockQuery,
) -> bool {
    let Some(dir) = a.direction_to(b) else {
        return false;
    };
    let mut cur = a.step(dir);
    while cur != b {
        if index.classify_move(cur, dir, query) == MoveKind::Blocked {
            return false;
        }
        cur = cur.step(dir);
    }
    true
}
