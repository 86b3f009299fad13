use crate::types::{GridCell, WorldPoint};

/// Maps between continuous world coordinates and integer grid cells.
///
/// All routing happens on the grid; the mapper is the only place the two
/// coordinate spaces meet.
#[derive(Debug, Clone, Copy)]
pub struct GridMapper {
    grid_size: f64,
}

impl GridMapper {
    pub fn new(grid_size: f64) -> Self {
        Self { grid_size }
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Nearest grid cell to a world point.
    pub fn to_grid(&self, p: WorldPoint) -> GridCell {
        GridCell {
            x: (p.x / self.grid_size).round() as i32,
            y: (p.y / self.grid_size).round() as i32,
        }
    }

    /// World position of a cell center.
    pub fn to_world(&self, cell: GridCell) -> WorldPoint {
        WorldPoint {
            x: cell.x as f64 * self.grid_size,
            y: cell.y as f64 * self.grid_size,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn to_grid_rounds_to_nearest() {
        let m = GridMapper::new(10.0);
        assert_eq!(m.to_grid(WorldPoint::new(14.0, 16.0)), GridCell::new(1, 2));
        assert_eq!(m.to_grid(WorldPoint::new(15.0, -15.0)), GridCell::new(2, -1));
    }

    #[test]
    fn to_world_is_cell_center() {
        let m = GridMapper::new(10.0);
        assert_eq!(m.to_world(GridCell::new(3, -2)), WorldPoint::new(30.0, -20.0));
    }

    #[test]
    fn round_trip_on_grid_points() {
        let m = GridMapper::new(10.0);
        let cell = GridCell::new(7, 11);
        assert_eq!(m.to_grid(m.to_world(cell)), cell);
    }

    #[test]
    fn non_default_grid_size() {
        let m = GridMapper::new(25.0);
        assert_eq!(m.to_grid(WorldPoint::new(60.0, 0.0)), GridCell::new(2, 0));
        assert_eq!(m.to_world(GridCell::new(2, 0)), WorldPoint::new(50.0, 0.0));
    }
}
