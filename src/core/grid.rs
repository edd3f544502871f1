//! Tile grid with a closed-world bounds policy.
use crate::core::tile::{TILE_SIZE, TileType};

#[rustfmt::skip]
const REFERENCE_LAYOUT: [[u8; 24]; 24] = [
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,0,0,0,0,1],
    [1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,1],
    [1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,1],
    [1,0,0,0,1,0,0,1,1,1,1,1,1,1,1,0,0,0,1,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,1,2,1,1,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,1,1,1,1,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,0,0,0,0,0,0,1,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,1,1,1,1,1,1,1,1,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1],
    [1,0,0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

/// Fixed-size grid of tiles. Reads outside the grid return [`TileType::Wall`]
/// and writes outside it are ignored, so callers never bounds-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileType>,
    revision: u64,
}

impl TileGrid {
    /// All-empty grid. Note that nothing stops rays at the edge except the
    /// out-of-range policy of [`TileGrid::get`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![TileType::Empty; width * height],
            revision: 0,
        }
    }

    /// Empty room enclosed by a one-tile wall ring.
    pub fn walled(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    grid.cells[y * width + x] = TileType::Wall;
                }
            }
        }
        grid
    }

    /// Builds a grid from rows of tile codes. Short rows are padded with
    /// walls up to the widest row.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            cells.extend(row.iter().map(|&c| TileType::from_code(c)));
            cells.extend(std::iter::repeat_n(TileType::Wall, width - row.len()));
        }
        Self { width, height, cells, revision: 0 }
    }

    /// The built-in 24x24 level.
    pub fn reference() -> Self {
        Self::from_rows(&REFERENCE_LAYOUT)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bumped by every successful [`TileGrid::set`]. Caches built from the
    /// grid compare against it to know when to rebuild.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> TileType {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => TileType::Wall,
        }
    }

    /// Returns false when `(x, y)` is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        self.cells[i] = tile;
        self.revision += 1;
        true
    }

    /// Whether the world-space point lies in a blocking tile.
    pub fn is_wall_at(&self, world_x: f32, world_y: f32) -> bool {
        let (x, y) = world_to_cell(world_x, world_y);
        self.get(x, y).is_blocking()
    }

    #[inline]
    pub fn is_door_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == TileType::Door
    }

    /// Row-major `(x, y, tile)` iterator over in-bounds cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, TileType)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| ((i % w) as i32, (i / w) as i32, t))
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::reference()
    }
}

/// World coordinates to the containing cell (floor division).
#[inline]
pub fn world_to_cell(world_x: f32, world_y: f32) -> (i32, i32) {
    (
        (world_x / TILE_SIZE).floor() as i32,
        (world_y / TILE_SIZE).floor() as i32,
    )
}
