//! Terrain layer: the scrolling snowfield below the horizon

use super::surface::{Color, Rect, Surface};
use crate::sim::{PlacedTile, TileKind, TileWindow};

pub const PATH_EVEN: Color = Color::rgb(0x1e293b);
pub const PATH_ODD: Color = Color::rgb(0x334155);
pub const SNOW_LIGHT: Color = Color::rgb(0xe2e8f0);
pub const SNOW_SHADE: Color = Color::rgb(0xcbd5e1);
pub const DEAD_WOOD: Color = Color::rgb(0x0f172a);

/// Fill color of a tile's base
pub fn tile_color(tile: &PlacedTile) -> Color {
    match (tile.tile.kind, tile.tile.alternate) {
        (TileKind::Path, false) => PATH_EVEN,
        (TileKind::Path, true) => PATH_ODD,
        (_, false) => SNOW_LIGHT,
        (_, true) => SNOW_SHADE,
    }
}

/// Draw every tile in `window`, clipped to the region below the horizon.
/// `unit` is the sprite pixel scale used for tree decorations.
pub fn draw_terrain(surface: &mut dyn Surface, window: &TileWindow, unit: f32) {
    let below = Rect::new(
        0.0,
        window.horizon_y,
        surface.width(),
        (surface.height() - window.horizon_y).max(0.0),
    );
    surface.set_clip(Some(below));

    // One pixel of overlap hides seams between neighbours
    let size = window.tile_px + 1.0;
    for tile in window.tiles() {
        surface.fill_rect(Rect::new(tile.x, tile.y, size, size), tile_color(&tile));

        if tile.tile.kind == TileKind::SnowWithTree {
            // Trunk
            surface.fill_rect(
                Rect::new(tile.x + 6.0 * unit, tile.y + 4.0 * unit, 4.0 * unit, 10.0 * unit),
                DEAD_WOOD,
            );
            // Bare branches
            surface.fill_rect(
                Rect::new(tile.x + 2.0 * unit, tile.y + 2.0 * unit, 12.0 * unit, 2.0 * unit),
                DEAD_WOOD,
            );
        }
    }

    surface.set_clip(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{PixelBuffer, Viewport};

    #[test]
    fn test_terrain_stays_below_horizon() {
        let mut buf = PixelBuffer::new(Viewport::new(800.0, 600.0, 1.0));
        let window = TileWindow::new(100.0, 800.0, 600.0, 240.0, 48.0);
        draw_terrain(&mut buf, &window, 3.0);

        // Row 2 starts at y 236 but is clipped at the horizon
        for x in [0, 400, 799] {
            assert_eq!(buf.pixel(x, 239), Some(Color::BLACK));
            assert_ne!(buf.pixel(x, 240), Some(Color::BLACK));
        }
        assert_ne!(buf.pixel(400, 599), Some(Color::BLACK));
    }

    #[test]
    fn test_path_runs_down_the_middle() {
        let mut buf = PixelBuffer::new(Viewport::new(800.0, 600.0, 1.0));
        let window = TileWindow::new(0.0, 800.0, 600.0, 240.0, 48.0);
        draw_terrain(&mut buf, &window, 3.0);

        // Center column 9 spans x 432..480
        let mid = buf.pixel(450, 300).unwrap();
        assert!(mid == PATH_EVEN || mid == PATH_ODD);
        // Column 0 is far off the path
        let edge = buf.pixel(20, 300).unwrap();
        assert!(edge == SNOW_LIGHT || edge == SNOW_SHADE || edge == DEAD_WOOD);
    }

    #[test]
    fn test_clip_is_lifted_afterwards() {
        let mut buf = PixelBuffer::new(Viewport::new(200.0, 200.0, 1.0));
        let window = TileWindow::new(0.0, 200.0, 200.0, 80.0, 48.0);
        draw_terrain(&mut buf, &window, 3.0);
        buf.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        assert_eq!(buf.pixel(0, 0), Some(Color::WHITE));
    }
}
