use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer grid cell. One cell covers `grid_size` world units per axis.
///
/// Equality and hashing are by value, so cells can key the search's visited
/// set and the obstacle index without any floating-point comparison issues.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step one cell in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::North => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::South => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::East => Self {
                x: self.x + 1,
                y: self.y,
            },
            Direction::West => Self {
                x: self.x - 1,
                y: self.y,
            },
        }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_to(self, other: GridCell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Direction of travel toward another cell on the same row or column.
    /// Returns `None` for the cell itself and for anything off-axis.
    pub fn direction_to(self, other: GridCell) -> Option<Direction> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx > 0 && dy == 0 {
            Some(Direction::East)
        } else if dx < 0 && dy == 0 {
            Some(Direction::West)
        } else if dy > 0 && dx == 0 {
            Some(Direction::South)
        } else if dy < 0 && dx == 0 {
            Some(Direction::North)
        } else {
            None
        }
    }
}

impl Ord for GridCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for GridCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous point in diagram coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Straight-line distance to another point.
    pub fn distance_to(self, other: WorldPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle in world space, owned by a component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Cardinal direction for travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Whether this direction is horizontal (East/West).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Whether a transition from `self` to `other` constitutes a turn.
    pub fn is_turn(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    /// The opposite direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Axis-aligned run of grid cells. `start` is always the lesser endpoint so
/// that equal runs compare equal regardless of travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: GridCell,
    pub end: GridCell,
}

impl Segment {
    /// Create a canonical segment. The lesser endpoint goes first.
    pub fn new(a: GridCell, b: GridCell) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Whether this segment is horizontal.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Whether this segment is vertical.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Inclusive x extent.
    pub fn span_x(&self) -> (i32, i32) {
        (
            self.start.x.min(self.end.x),
            self.start.x.max(self.end.x),
        )
    }

    /// Inclusive y extent.
    pub fn span_y(&self) -> (i32, i32) {
        (
            self.start.y.min(self.end.y),
            self.start.y.max(self.end.y),
        )
    }

    /// Whether the segment's cells include `cell`.
    pub fn contains(&self, cell: GridCell) -> bool {
        let (min_x, max_x) = self.span_x();
        let (min_y, max_y) = self.span_y();
        cell.x >= min_x && cell.x <= max_x && cell.y >= min_y && cell.y <= max_y
    }

    /// Every cell covered by the segment, in start-to-end order.
    pub fn cells(&self) -> Vec<GridCell> {
        let mut out = vec![self.start];
        let mut cur = self.start;
        if let Some(dir) = self.start.direction_to(self.end) {
            while cur != self.end {
                cur = cur.step(dir);
                out.push(cur);
            }
        }
        out
    }
}

/// A registered wire's routed footprint: the segments it occupies and the
/// bundle it was grouped into at registration time.
#[derive(Debug, Clone)]
pub struct WireRecord {
    pub wire_id: String,
    pub segments: Vec<Segment>,
    pub bundle_group: Option<String>,
}

/// Result of a successful route request.
///
/// `path` is the optimized waypoint polyline in world coordinates; its first
/// and last points are the exact requested terminals, not cell centers.
/// `segments` is the same polyline in grid cells, suitable for
/// `register_wire`. Transient: recomputed per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub path: Vec<WorldPoint>,
    pub segments: Vec<Segment>,
    /// Total polyline length in world units.
    pub length: f64,
    /// Number of interior direction changes.
    pub bends: u32,
}

/// Classification of entering a cell while traveling in a known direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Nothing in the way.
    Free,
    /// The move crosses a foreign wire perpendicularly; allowed with a cost.
    Crossing,
    /// A component body, or a foreign wire running the same way.
    Blocked,
}
