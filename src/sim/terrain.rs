//! Procedural snowfield terrain
//!
//! Tiles are never stored: appearance is a pure hash of (world row, column),
//! so the field scrolls forever and a given tile looks the same every time
//! it comes into view.

/// What occupies a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Frozen path down the middle of the field
    Path,
    Snow,
    /// Snow with a dead tree on top
    SnowWithTree,
}

/// A tile's kind plus which of its two shades to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    /// Second shade: odd checkerboard square on the path, darker snow off it
    pub alternate: bool,
}

/// Half-width of the path, in columns
pub const PATH_HALF_WIDTH: i64 = 2;
/// Trees never grow closer to the center than this
pub const TREE_CLEARANCE: i64 = 3;

/// Appearance of the tile at (`world_row`, `column`)
pub fn tile_at(world_row: i64, column: i64, center_column: i64) -> Tile {
    let dist = (column - center_column).abs();
    if dist <= PATH_HALF_WIDTH {
        return Tile {
            kind: TileKind::Path,
            alternate: (world_row + column).rem_euclid(2) != 0,
        };
    }

    let alternate = (world_row * 7 + column).rem_euclid(3) != 0;
    let tree = (world_row * 3 + column * 7).rem_euclid(13) == 0 && dist > TREE_CLEARANCE;
    Tile {
        kind: if tree { TileKind::SnowWithTree } else { TileKind::Snow },
        alternate,
    }
}

/// A tile placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    pub x: f32,
    pub y: f32,
    pub world_row: i64,
    pub column: i64,
    pub tile: Tile,
}

/// The band of tiles visible below the horizon for one camera offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileWindow {
    /// World row drawn at the horizon (before sub-tile shift)
    pub start_row: i64,
    /// Sub-tile scroll in pixels, `0 <= pixel_offset < tile_px`
    pub pixel_offset: f32,
    /// Number of rows below the horizon (plus one for the scroll-in row)
    pub rows: i64,
    pub cols: i64,
    pub center_column: i64,
    pub horizon_y: f32,
    /// On-screen tile pitch (tile size x pixel scale)
    pub tile_px: f32,
}

impl TileWindow {
    pub fn new(camera_offset: f64, width: f32, height: f32, horizon_y: f32, tile_px: f32) -> Self {
        let pitch = tile_px.max(1.0) as f64;
        let start_row = (camera_offset / pitch).floor() as i64;
        let pixel_offset = camera_offset.rem_euclid(pitch).floor() as f32;
        let ground = (height - horizon_y).max(0.0);
        let rows = (ground / tile_px.max(1.0)).ceil() as i64 + 1;
        let cols = (width / tile_px.max(1.0)).ceil() as i64 + 1;
        Self {
            start_row,
            pixel_offset,
            rows,
            cols,
            center_column: cols / 2,
            horizon_y,
            tile_px: pitch as f32,
        }
    }

    /// Every tile to draw, row-major, top to bottom
    pub fn tiles(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        (-1..self.rows)
            .filter_map(move |r| {
                let y = self.horizon_y + r as f32 * self.tile_px - self.pixel_offset;
                // Entirely above the horizon: clipped anyway
                (y + self.tile_px >= self.horizon_y).then_some((r, y))
            })
            .flat_map(move |(r, y)| {
                let world_row = self.start_row + r;
                (0..self.cols).map(move |column| PlacedTile {
                    x: column as f32 * self.tile_px,
                    y,
                    world_row,
                    column,
                    tile: tile_at(world_row, column, self.center_column),
                })
            })
    }
}
