use std::collections::HashMap;

use rayon::prelude::*;

use crate::grid::GridMapper;
use crate::types::{Bounds, Direction, GridCell, MoveKind, Segment, WireRecord, WorldPoint};

/// Component footprint in grid cells, inclusive on both corners.
///
/// Stored without the clearance buffer; queries pass the clearance they want
/// so the relaxed-constraint retry can shrink it without re-registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRect {
    pub min: GridCell,
    pub max: GridCell,
}

impl GridRect {
    pub fn from_bounds(bounds: Bounds, mapper: &GridMapper) -> Self {
        let min = mapper.to_grid(WorldPoint::new(bounds.x, bounds.y));
        let max = mapper.to_grid(WorldPoint::new(
            bounds.x + bounds.width,
            bounds.y + bounds.height,
        ));
        Self { min, max }
    }

    /// Whether `cell` lies within the rect expanded by `margin` on all sides.
    pub fn contains(&self, cell: GridCell, margin: i32) -> bool {
        cell.x >= self.min.x - margin
            && cell.x <= self.max.x + margin
            && cell.y >= self.min.y - margin
            && cell.y <= self.max.y + margin
    }

    /// Whether `cell` lies strictly inside the rect (not on its boundary).
    pub fn contains_interior(&self, cell: GridCell) -> bool {
        cell.x > self.min.x && cell.x < self.max.x && cell.y > self.min.y && cell.y < self.max.y
    }
}

/// Query context for blocking checks.
#[derive(Debug, Clone, Copy)]
pub struct BlockQuery<'a> {
    /// Wire being routed; its own segments never block it.
    pub exclude_wire: Option<&'a str>,
    /// Whether registered wires count as obstacles at all.
    pub avoid_wires: bool,
    /// Margin around component rects, in cells.
    pub clearance: i32,
    /// Components the current route's terminals sit on; a wire cannot avoid
    /// the component it plugs into.
    pub exempt_components: &'a [String],
}

/// Tracks component footprints and routed wires, and answers blocking
/// queries for the search.
///
/// Lookups scan all registered entries linearly; the target scale is low
/// hundreds of components and wires.
pub struct ObstacleIndex {
    components: HashMap<String, GridRect>,
    wires: HashMap<String, WireRecord>,
}

impl ObstacleIndex {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            wires: HashMap::new(),
        }
    }

    /// Insert or replace a component's footprint. Last write wins.
    pub fn update_component_bounds(&mut self, id: &str, bounds: Bounds, mapper: &GridMapper) {
        self.components
            .insert(id.to_string(), GridRect::from_bounds(bounds, mapper));
    }

    /// Drop a component's footprint. Missing id is a no-op.
    pub fn remove_component(&mut self, id: &str) {
        self.components.remove(id);
    }

    pub fn component_rect(&self, id: &str) -> Option<&GridRect> {
        self.components.get(id)
    }

    /// Ids of components whose rect (expanded by `clearance`) contains `cell`,
    /// in sorted order.
    pub fn components_containing(&self, cell: GridCell, clearance: i32) -> Vec<String> {
        let mut ids: Vec<String> = self
            .components
            .iter()
            .filter(|(_, rect)| rect.contains(cell, clearance))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Store a wire's routed footprint, grouping it with the closest parallel
    /// existing wire. Re-registering an id overwrites the prior record.
    pub fn register_wire(&mut self, wire_id: &str, segments: Vec<Segment>, bundle_distance: i32) {
        let bundle_group = self.best_bundle_match(wire_id, &segments, bundle_distance);
        self.wires.insert(
            wire_id.to_string(),
            WireRecord {
                wire_id: wire_id.to_string(),
                segments,
                bundle_group,
            },
        );
    }

    /// Remove a wire's record. Missing id is a no-op.
    pub fn unregister_wire(&mut self, wire_id: &str) {
        self.wires.remove(wire_id);
    }

    pub fn wire(&self, wire_id: &str) -> Option<&WireRecord> {
        self.wires.get(wire_id)
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Direction-agnostic blocking check: a cell is blocked when it lies
    /// within any non-exempt component's buffered rect, or (when wires are
    /// avoided) on any foreign wire segment.
    pub fn is_blocked(&self, cell: GridCell, query: &BlockQuery) -> bool {
        if self.component_blocks(cell, query) {
            return true;
        }
        if !query.avoid_wires {
            return false;
        }
        self.foreign_segments(query.exclude_wire)
            .any(|seg| seg.contains(cell))
    }

    /// Direction-aware blocking check used by the search and the optimizer.
    ///
    /// A foreign wire segment parallel to the travel direction blocks the
    /// cell (wires may not run on top of each other); a perpendicular one is
    /// a crossing, allowed at a cost.
    pub fn classify_move(&self, cell: GridCell, dir: Direction, query: &BlockQuery) -> MoveKind {
        if self.component_blocks(cell, query) {
            return MoveKind::Blocked;
        }
        if !query.avoid_wires {
            return MoveKind::Free;
        }
        let mut crossing = false;
        for seg in self.foreign_segments(query.exclude_wire) {
            if !seg.contains(cell) {
                continue;
            }
            if seg.is_horizontal() == dir.is_horizontal() {
                return MoveKind::Blocked;
            }
            crossing = true;
        }
        if crossing {
            MoveKind::Crossing
        } else {
            MoveKind::Free
        }
    }

    /// Bundling bonus for entering `cell` while traveling in `dir`: the best
    /// `(bundle_distance + 1 - d) * weight` over foreign segments running
    /// parallel within `bundle_distance` cells, or 0.
    pub fn bundle_bonus(
        &self,
        cell: GridCell,
        dir: Direction,
        exclude_wire: Option<&str>,
        bundle_distance: i32,
        weight: u32,
    ) -> u32 {
        let horizontal = dir.is_horizontal();
        let mut best = 0;
        for seg in self.foreign_segments(exclude_wire) {
            if seg.is_horizontal() != horizontal {
                continue;
            }
            let (d, within) = if horizontal {
                let (min_x, max_x) = seg.span_x();
                (
                    (cell.y - seg.start.y).abs(),
                    cell.x >= min_x && cell.x <= max_x,
                )
            } else {
                let (min_y, max_y) = seg.span_y();
                (
                    (cell.x - seg.start.x).abs(),
                    cell.y >= min_y && cell.y <= max_y,
                )
            };
            if within && d >= 1 && d <= bundle_distance {
                best = best.max(bundle_distance + 1 - d);
            }
        }
        best as u32 * weight
    }

    fn component_blocks(&self, cell: GridCell, query: &BlockQuery) -> bool {
        self.components.iter().any(|(id, rect)| {
            rect.contains(cell, query.clearance)
                && !query.exempt_components.iter().any(|e| e == id)
        })
    }

    fn foreign_segments<'a>(
        &'a self,
        exclude_wire: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Segment> {
        self.wires
            .iter()
            .filter(move |(id, _)| exclude_wire != Some(id.as_str()))
            .flat_map(|(_, record)| record.segments.iter())
    }

    /// Pick the bundle group for a new wire: the highest-scoring existing
    /// wire donates its group (or starts one named after itself). Ties break
    /// toward the lexicographically smaller wire id.
    fn best_bundle_match(
        &self,
        wire_id: &str,
        segments: &[Segment],
        bundle_distance: i32,
    ) -> Option<String> {
        self.wires
            .par_iter()
            .filter(|(id, _)| id.as_str() != wire_id)
            .map(|(id, record)| {
                (
                    bundle_score(segments, &record.segments, bundle_distance),
                    id,
                    record,
                )
            })
            .filter(|(score, _, _)| *score > 0)
            .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(a.1)))
            .map(|(_, id, record)| {
                record
                    .bundle_group
                    .clone()
                    .unwrap_or_else(|| id.clone())
            })
    }
}

impl Default for ObstacleIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel-and-close score between two wires: for each same-orientation
/// segment pair within `bundle_distance` cells, the overlap length weighted
/// by proximity.
fn bundle_score(a: &[Segment], b: &[Segment], bundle_distance: i32) -> i64 {
    let mut score = 0_i64;
    for sa in a {
        for sb in b {
            if sa.is_horizontal() != sb.is_horizontal() {
                continue;
            }
            let (d, overlap) = if sa.is_horizontal() {
                let (a_min, a_max) = sa.span_x();
                let (b_min, b_max) = sb.span_x();
                (
                    (sa.start.y - sb.start.y).abs(),
                    a_max.min(b_max) - a_min.max(b_min) + 1,
                )
            } else {
                let (a_min, a_max) = sa.span_y();
                let (b_min, b_max) = sb.span_y();
                (
                    (sa.start.x - sb.start.x).abs(),
                    a_max.min(b_max) - a_min.max(b_min) + 1,
                )
            };
            if d >= 1 && d <= bundle_distance && overlap > 0 {
                score += overlap as i64 * (bundle_distance + 1 - d) as i64;
            }
        }
    }
    score
}
