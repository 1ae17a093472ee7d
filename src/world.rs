//! The tile floor plan the default game walks.

/// The 17x9 room the skeleton wakes up in. Nonzero tiles are walls; the
/// two zero gaps in the border are doorways.
const BORDERED_ROOM: [[u32; 17]; 9] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
    [1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// A rectangular grid of tiles, row-major, y down.
///
/// Coordinates are signed so that a step can leave the plan. Anything
/// outside the grid reads as empty; walking out through a doorway is how
/// a run ends.
pub struct FloorPlan {
    width: i32,
    height: i32,
    tiles: Vec<u32>,
}

impl FloorPlan {
    /// Builds a plan from rows of tile values. All rows must be the same
    /// width.
    pub fn from_rows(rows: &[&[u32]]) -> FloorPlan {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;
        debug_assert!(rows.iter().all(|row| row.len() as i32 == width));

        FloorPlan {
            width,
            height,
            tiles: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        }
    }

    /// The built-in room.
    pub fn bordered_room() -> FloorPlan {
        let rows: Vec<&[u32]> = BORDERED_ROOM.iter().map(|row| row.as_slice()).collect();
        FloorPlan::from_rows(&rows)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// The tile at (x, y). Tiles outside the plan read as 0.
    pub fn tile_value(&self, x: i32, y: i32) -> u32 {
        if self.contains(x, y) {
            self.tiles[(y * self.width + x) as usize]
        } else {
            0
        }
    }

    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.tile_value(x, y) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bordered_room_has_the_expected_shape() {
        let plan = FloorPlan::bordered_room();
        assert_eq!(plan.width(), 17);
        assert_eq!(plan.height(), 9);
    }

    #[test]
    fn walls_block_and_floor_does_not() {
        let plan = FloorPlan::bordered_room();
        assert!(!plan.is_empty(0, 0));
        assert!(!plan.is_empty(16, 8));
        assert!(plan.is_empty(3, 2));
    }

    #[test]
    fn doorways_are_open() {
        let plan = FloorPlan::bordered_room();
        assert!(plan.is_empty(16, 4));
        assert!(plan.is_empty(8, 8));
    }

    #[test]
    fn outside_the_plan_reads_as_empty() {
        let plan = FloorPlan::bordered_room();
        assert!(!plan.contains(17, 4));
        assert!(plan.is_empty(17, 4));
        assert!(!plan.contains(-1, 0));
        assert!(plan.is_empty(-1, 0));
    }

    #[test]
    fn from_rows_keeps_row_major_order() {
        let plan = FloorPlan::from_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(plan.width(), 3);
        assert_eq!(plan.height(), 2);
        assert_eq!(plan.tile_value(0, 0), 1);
        assert_eq!(plan.tile_value(2, 0), 3);
        assert_eq!(plan.tile_value(0, 1), 4);
        assert_eq!(plan.tile_value(2, 1), 6);
    }
}
