use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::config::{RouteOptions, RouterConfig};
use crate::obstacles::{BlockQuery, ObstacleIndex};
use crate::types::{Direction, GridCell, MoveKind};

/// State key for the visited set — identifies a unique search state.
///
/// The incoming direction is part of the state so the bend penalty composes
/// correctly: the cheapest way into a cell heading east can differ from the
/// cheapest way in heading south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct StateKey {
    cell: GridCell,
    /// `None` only for the start state, which has no incoming direction.
    entered: Option<Direction>,
}

/// Wrapper for the priority queue with deterministic ordering.
/// BinaryHeap is a max-heap, so the ordering is reversed (lowest cost =
/// highest priority).
#[derive(Debug)]
struct PqEntry {
    f_cost: u32,
    g_cost: u32,
    key: StateKey,
}

impl PartialEq for PqEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PqEntry {}

impl Ord for PqEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap.
        other
            .f_cost
            .cmp(&self.f_cost)
            // For same f_cost, prefer higher g_cost: the deeper state is
            // closer to the goal, which keeps equal-cost staircases from
            // flooding the frontier on large diagrams.
            .then_with(|| self.g_cost.cmp(&other.g_cost))
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for PqEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Manhattan distance heuristic. Admissible whenever no bundling bonus is in
/// play, which is the only regime where optimality is promised.
fn heuristic(from: GridCell, to: GridCell) -> u32 {
    from.manhattan_to(to) as u32
}

/// A* over the 4-connected orthogonal grid.
///
/// Returns the dense cell-by-cell path from `start` to `goal`, or `None`
/// when the search space is exhausted or the expansion budget runs out.
/// The start and goal cells themselves are always enterable; everything else
/// goes through the obstacle index.
pub fn search(
    index: &ObstacleIndex,
    config: &RouterConfig,
    start: GridCell,
    goal: GridCell,
    options: &RouteOptions,
    query: &BlockQuery,
) -> Option<Vec<GridCell>> {
    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<StateKey, u32> = HashMap::new();
    let mut came_from: HashMap<StateKey, StateKey> = HashMap::new();

    let start_key = StateKey {
        cell: start,
        entered: None,
    };
    best_g.insert(start_key, 0);
    open.push(PqEntry {
        f_cost: heuristic(start, goal),
        g_cost: 0,
        key: start_key,
    });

    let mut expansions = 0_usize;

    while let Some(entry) = open.pop() {
        let key = entry.key;

        // Skip if a better path to this state was found after this entry
        // was queued.
        if best_g.get(&key).is_some_and(|&best| entry.g_cost > best) {
            continue;
        }

        if key.cell == goal {
            return Some(reconstruct(&came_from, key));
        }

        expansions += 1;
        if expansions > config.max_expansions {
            return None;
        }

        for dir in Direction::ALL {
            // Don't go backwards.
            if key.entered.is_some_and(|d| dir == d.opposite()) {
                continue;
            }

            let next = key.cell.step(dir);
            let kind = if next == goal || next == start {
                MoveKind::Free
            } else {
                index.classify_move(next, dir, query)
            };
            if kind == MoveKind::Blocked {
                continue;
            }

            let mut cost = 1_i64;
            if key.entered.is_some_and(|d| d.is_turn(dir)) {
                cost += config.bend_penalty as i64;
            }
            if kind == MoveKind::Crossing {
                cost += config.wire_cross_penalty as i64;
            }
            if options.bundle_with_wires {
                cost -= index.bundle_bonus(
                    next,
                    dir,
                    query.exclude_wire,
                    config.bundle_distance,
                    config.bundle_bonus_weight,
                ) as i64;
            }
            // Bundling bonuses must not create negative cycles.
            let cost = cost.max(0) as u32;

            let new_g = entry.g_cost + cost;
            let new_key = StateKey {
                cell: next,
                entered: Some(dir),
            };
            if best_g.get(&new_key).is_some_and(|&best| new_g >= best) {
                continue;
            }
            best_g.insert(new_key, new_g);
            came_from.insert(new_key, key);
            open.push(PqEntry {
                f_cost: new_g + heuristic(next, goal),
                g_cost: new_g,
                key: new_key,
            });
        }
    }

    None
}

/// Walk predecessor links from the goal state back to the start, producing
/// the dense start-to-goal cell sequence.
fn reconstruct(came_from: &HashMap<StateKey, StateKey>, final_key: StateKey) -> Vec<GridCell> {
    let mut cells = vec![final_key.cell];
    let mut current = final_key;
    while let Some(&parent) = came_from.get(&current) {
        cells.push(parent.cell);
        current = parent;
    }
    cells.reverse();
    cells
}
