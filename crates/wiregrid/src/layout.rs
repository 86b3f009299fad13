use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{RouteOptions, RouterConfig};
use crate::geometry::{render_path, PathCommand};
use crate::router::Router;
use crate::types::{Bounds, PathResult, WorldPoint};

/// A cabinet layout document: components with world bounds and the wires to
/// route between their terminals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Routing configuration overrides. Omitted fields use the defaults.
    #[serde(default)]
    pub routing: RouterConfig,

    #[serde(default)]
    pub components: Vec<ComponentSpec>,

    #[serde(default)]
    pub wires: Vec<WireSpec>,
}

/// A component (board, reader, power supply, …) and its world bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ComponentSpec {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// A wire between two component terminals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireSpec {
    pub id: String,
    pub from: Terminal,
    pub to: Terminal,

    /// Wire color, carried through to the output. Never affects routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A terminal: a world-space point on a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminal {
    pub component: String,
    pub at: [f64; 2],
}

impl Terminal {
    pub fn point(&self) -> WorldPoint {
        WorldPoint::new(self.at[0], self.at[1])
    }
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let layout: Layout = serde_yaml::from_str(contents).context("Invalid layout file")?;
        Ok(layout)
    }

    /// Structural validation: unique ids, sane bounds, known terminal
    /// references. Routability is not checked here — an unroutable wire is a
    /// per-wire warning, not a document error.
    pub fn validate(&self) -> Result<()> {
        let mut component_ids = HashSet::new();
        for c in &self.components {
            if !component_ids.insert(c.id.as_str()) {
                bail!("Duplicate component id: {}", c.id);
            }
            let b = c.bounds();
            if !b.is_finite() {
                bail!("Component '{}' has non-finite bounds", c.id);
            }
            if b.width < 0.0 || b.height < 0.0 {
                bail!(
                    "Component '{}' has negative dimensions: {}x{}",
                    c.id,
                    b.width,
                    b.height
                );
            }
        }

        let mut wire_ids = HashSet::new();
        for w in &self.wires {
            if !wire_ids.insert(w.id.as_str()) {
                bail!("Duplicate wire id: {}", w.id);
            }
            for terminal in [&w.from, &w.to] {
                if !terminal.point().is_finite() {
                    bail!("Wire '{}' has a non-finite terminal", w.id);
                }
            }
        }

        if self.routing.grid_size <= 0.0 || !self.routing.grid_size.is_finite() {
            bail!("grid_size must be a positive number");
        }

        Ok(())
    }
}

/// Result for routing a single wire.
#[derive(Debug, Clone)]
pub enum RouteOutcome {
    /// Successfully routed; geometry rendered with the requested corner
    /// radius.
    Routed {
        result: PathResult,
        commands: Vec<PathCommand>,
    },
    /// Could not route this wire.
    Failed { warning: String },
}

/// Output of routing all wires in a layout.
#[derive(Debug, Clone)]
pub struct LayoutOutput {
    pub results: Vec<(WireSpec, RouteOutcome)>,
}

impl LayoutOutput {
    pub fn routed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| matches!(outcome, RouteOutcome::Routed { .. }))
            .count()
    }
}

/// Route all wires in a layout.
///
/// Wires are processed sequentially in definition order. Earlier wires claim
/// their cells first, so later wires route around (or bundle with) them.
pub fn route_layout(
    layout: &Layout,
    options: &RouteOptions,
    corner_radius: f64,
) -> Result<LayoutOutput> {
    let mut router = Router::new(layout.routing.clone());
    for component in &layout.components {
        router.update_component_bounds(&component.id, component.bounds())?;
    }

    let mut results = Vec::with_capacity(layout.wires.len());
    for wire in &layout.wires {
        let outcome = route_wire(&mut router, layout, wire, options, corner_radius);
        results.push((wire.clone(), outcome));
    }

    Ok(LayoutOutput { results })
}

fn route_wire(
    router: &mut Router,
    layout: &Layout,
    wire: &WireSpec,
    options: &RouteOptions,
    corner_radius: f64,
) -> RouteOutcome {
    for terminal in [&wire.from, &wire.to] {
        if !layout
            .components
            .iter()
            .any(|c| c.id == terminal.component)
        {
            return RouteOutcome::Failed {
                warning: format!(
                    "Unknown component '{}' for wire '{}'",
                    terminal.component, wire.id
                ),
            };
        }
    }

    match router.find_path(wire.from.point(), wire.to.point(), Some(&wire.id), options) {
        Ok(Some(result)) => {
            router.register_wire(&wire.id, result.segments.clone());
            router.attach_wire(&wire.id, &wire.from.component, &wire.to.component);
            let commands = render_path(&result.path, corner_radius);
            RouteOutcome::Routed { result, commands }
        }
        Ok(None) => RouteOutcome::Failed {
            warning: format!(
                "Could not find route from '{}' to '{}'",
                wire.from.component, wire.to.component
            ),
        },
        Err(e) => RouteOutcome::Failed {
            warning: e.to_string(),
        },
    }
}
