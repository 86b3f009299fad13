use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::config::{RouteOptions, RouterConfig};
use crate::geometry::polyline_length;
use crate::grid::GridMapper;
use crate::obstacles::{BlockQuery, ObstacleIndex};
use crate::optimize::optimize;
use crate::search::search;
use crate::types::{Bounds, GridCell, PathResult, Segment, WorldPoint};

/// Outcome of rerouting one wire after a component move.
#[derive(Debug, Clone)]
pub enum RerouteOutcome {
    /// The wire was rerouted and re-registered with its new segments.
    Rerouted(PathResult),
    /// No path exists for the new terminals; the wire is left unregistered.
    Unroutable,
}

/// The routing engine: obstacle state plus the find/optimize pipeline.
///
/// All state is owned here and mutated only through these methods — there is
/// no ambient global registry, so independent routers (e.g. per document)
/// coexist freely. `find_path` itself is read-only with respect to the
/// obstacle index; registration is a separate, explicit step.
pub struct Router {
    config: RouterConfig,
    mapper: GridMapper,
    obstacles: ObstacleIndex,
    /// Wire id → the two components its terminals are attached to.
    attachments: HashMap<String, (String, String)>,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        let mapper = GridMapper::new(config.grid_size);
        Self {
            config,
            mapper,
            obstacles: ObstacleIndex::new(),
            attachments: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    pub fn obstacles(&self) -> &ObstacleIndex {
        &self.obstacles
    }

    /// Insert or replace a component's obstacle footprint. Last write wins.
    pub fn update_component_bounds(&mut self, id: &str, bounds: Bounds) -> Result<()> {
        validate_bounds(&bounds)?;
        self.obstacles
            .update_component_bounds(id, bounds, &self.mapper);
        Ok(())
    }

    /// Drop a component's obstacle footprint. Missing id is a no-op.
    pub fn remove_component(&mut self, id: &str) {
        self.obstacles.remove_component(id);
    }

    /// Store a wire's routed segments as obstacle data for future searches.
    pub fn register_wire(&mut self, id: &str, segments: Vec<Segment>) {
        self.obstacles
            .register_wire(id, segments, self.config.bundle_distance);
    }

    /// Remove a wire's obstacle data. Attachments are kept — rerouting
    /// unregisters and re-registers without losing them. Missing id is a
    /// no-op.
    pub fn unregister_wire(&mut self, id: &str) {
        self.obstacles.unregister_wire(id);
    }

    /// Record which two components a wire's terminals sit on.
    pub fn attach_wire(&mut self, id: &str, from_component: &str, to_component: &str) {
        self.attachments.insert(
            id.to_string(),
            (from_component.to_string(), to_component.to_string()),
        );
    }

    /// Forget a wire's attachments. Missing id is a no-op.
    pub fn detach_wire(&mut self, id: &str) {
        self.attachments.remove(id);
    }

    /// Ids of wires attached to a component, in sorted order.
    pub fn wires_connected_to_component(&self, component_id: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .attachments
            .iter()
            .filter(|(_, (a, b))| a == component_id || b == component_id)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Find an orthogonal path between two world-space terminals.
    ///
    /// Returns `Ok(None)` when no path exists — an expected outcome in a
    /// dense layout, left to the caller to handle. Invalid geometry
    /// (non-finite coordinates) fails fast instead.
    ///
    /// Components whose buffered footprint contains a terminal are exempt
    /// from blocking for this search: terminals sit on component edges, and
    /// a wire cannot avoid the component it plugs into.
    pub fn find_path(
        &self,
        start: WorldPoint,
        end: WorldPoint,
        wire_id: Option<&str>,
        options: &RouteOptions,
    ) -> Result<Option<PathResult>> {
        validate_point(start)?;
        validate_point(end)?;

        let start_cell = self.mapper.to_grid(start);
        let goal_cell = self.mapper.to_grid(end);

        if start_cell == goal_cell {
            // Both terminals inside one cell: nothing to search.
            let length = (end.x - start.x).abs() + (end.y - start.y).abs();
            return Ok(Some(PathResult {
                path: vec![start, end],
                segments: Vec::new(),
                length,
                bends: 0,
            }));
        }

        let mut exempt = self
            .obstacles
            .components_containing(start_cell, self.config.clearance);
        for id in self
            .obstacles
            .components_containing(goal_cell, self.config.clearance)
        {
            if !exempt.contains(&id) {
                exempt.push(id);
            }
        }

        let strict = BlockQuery {
            exclude_wire: wire_id,
            avoid_wires: options.avoid_wires,
            clearance: self.config.clearance,
            exempt_components: &exempt,
        };

        let found = match search(
            &self.obstacles,
            &self.config,
            start_cell,
            goal_cell,
            options,
            &strict,
        ) {
            Some(dense) => Some((dense, strict)),
            None if options.allow_relaxed_constraints => {
                let relaxed = BlockQuery {
                    avoid_wires: false,
                    clearance: 1,
                    ..strict
                };
                search(
                    &self.obstacles,
                    &self.config,
                    start_cell,
                    goal_cell,
                    options,
                    &relaxed,
                )
                .map(|dense| (dense, relaxed))
            }
            None => None,
        };

        let Some((dense, query)) = found else {
            return Ok(None);
        };

        let path = optimize(&self.obstacles, &self.mapper, &dense, start, end, &query);
        let cells = grid_waypoints(&self.mapper, &path);
        let segments = cells
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        let bends = count_bends(&cells);
        let length = polyline_length(&path);

        Ok(Some(PathResult {
            path,
            segments,
            length,
            bends,
        }))
    }

    /// The reroute protocol: update a component's bounds, then for every
    /// attached wire unregister it, ask the caller for its new terminal
    /// positions, route again and re-register. Unroutable wires stay
    /// unregistered so stale geometry never lingers as obstacle data.
    pub fn move_component<F>(
        &mut self,
        id: &str,
        bounds: Bounds,
        options: &RouteOptions,
        mut terminals: F,
    ) -> Result<Vec<(String, RerouteOutcome)>>
    where
        F: FnMut(&str) -> (WorldPoint, WorldPoint),
    {
        self.update_component_bounds(id, bounds)?;

        let affected = self.wires_connected_to_component(id);
        let mut outcomes = Vec::with_capacity(affected.len());
        for wire_id in affected {
            self.unregister_wire(&wire_id);
            let (start, end) = terminals(&wire_id);
            match self.find_path(start, end, Some(&wire_id), options)? {
                Some(result) => {
                    self.register_wire(&wire_id, result.segments.clone());
                    outcomes.push((wire_id, RerouteOutcome::Rerouted(result)));
                }
                None => outcomes.push((wire_id, RerouteOutcome::Unroutable)),
            }
        }
        Ok(outcomes)
    }
}

/// Map the world waypoints back to grid cells, dropping consecutive
/// duplicates (the exact terminals share a cell with their neighbors).
fn grid_waypoints(mapper: &GridMapper, path: &[WorldPoint]) -> Vec<GridCell> {
    let mut cells: Vec<GridCell> = Vec::with_capacity(path.len());
    for p in path {
        let cell = mapper.to_grid(*p);
        if cells.last() != Some(&cell) {
            cells.push(cell);
        }
    }
    cells
}

fn count_bends(cells: &[GridCell]) -> u32 {
    let mut bends = 0;
    for w in cells.windows(3) {
        if let (Some(a), Some(b)) = (w[0].direction_to(w[1]), w[1].direction_to(w[2])) {
            if a.is_turn(b) {
                bends += 1;
            }
        }
    }
    bends
}

fn validate_point(p: WorldPoint) -> Result<()> {
    if !p.is_finite() {
        bail!("non-finite terminal coordinate: ({}, {})", p.x, p.y);
    }
    Ok(())
}

fn validate_bounds(b: &Bounds) -> Result<()> {
    if !b.is_finite() {
        bail!(
            "non-finite component bounds: ({}, {}, {}, {})",
            b.x,
            b.y,
            b.width,
            b.height
        );
    }
    if b.width < 0.0 || b.height < 0.0 {
        bail!(
            "negative component dimensions: {}x{}",
            b.width,
            b.height
        );
    }
    Ok(())
}
