//! Grid-based orthogonal wire routing for cabinet layout diagrams.
//!
//! Components (boards, readers, power supplies) register their bounds as
//! obstacles; wires are routed between terminals as Manhattan paths that
//! avoid component bodies, cross other wires only at a cost, and prefer to
//! bundle alongside existing cable runs. Routed wires register their
//! segments back into the obstacle index, and moving a component reroutes
//! exactly the wires attached to it.
//!
//! ```
//! use wiregrid::{Bounds, RouteOptions, Router, RouterConfig, WorldPoint};
//!
//! let mut router = Router::new(RouterConfig::default());
//! router.update_component_bounds("psu", Bounds::new(0.0, 0.0, 40.0, 40.0))?;
//! router.update_component_bounds("reader", Bounds::new(200.0, 0.0, 40.0, 40.0))?;
//!
//! let result = router
//!     .find_path(
//!         WorldPoint::new(40.0, 20.0),
//!         WorldPoint::new(200.0, 20.0),
//!         Some("w1"),
//!         &RouteOptions::default(),
//!     )?
//!     .expect("open corridor");
//! assert_eq!(result.bends, 0);
//!
//! router.register_wire("w1", result.segments.clone());
//! router.attach_wire("w1", "psu", "reader");
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod obstacles;
pub mod optimize;
pub mod router;
pub mod search;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{RouteOptions, RouterConfig};
pub use geometry::{render_path, PathCommand};
pub use router::{RerouteOutcome, Router};
pub use types::{Bounds, GridCell, PathResult, Segment, WireRecord, WorldPoint};
