//! Animated entity renderer
//!
//! One routine draws every character: a sprite grid at a fixed pixel scale
//! with a sine bob, a four-step walk cycle, a drop shadow and optional
//! horizontal mirroring. The party and the enemy both go through it.

use glam::Vec2;

use super::surface::{Color, Rect, Surface};
use crate::sprites::{Sprite, SpriteId};

/// How to draw one sprite
#[derive(Debug, Clone, Copy)]
pub struct SpriteRender<'a> {
    pub sprite: &'a Sprite,
    /// Surface pixels per sprite pixel
    pub scale: f32,
    /// Reflect horizontally
    pub mirrored: bool,
}

/// Inclusive span of sprite rows or columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub first: usize,
    pub last: usize,
}

impl Span {
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// `first` and everything after it
    pub const fn starting(first: usize) -> Self {
        Self::new(first, usize::MAX)
    }

    /// Everything up to and including `last`
    pub const fn through(last: usize) -> Self {
        Self::new(0, last)
    }

    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.first <= i && i <= self.last
    }
}

/// Pixels raised by one unit on a given walk step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lift {
    pub step: u32,
    pub rows: Span,
    /// Source columns (before mirroring)
    pub columns: Span,
}

/// Steps in one walk cycle
pub const WALK_STEPS: i64 = 4;

/// Pose table: legs alternate on steps 1 and 3, arms swing opposite
pub const WALK_CYCLE: [Lift; 4] = [
    // Left leg
    Lift {
        step: 1,
        rows: Span::starting(13),
        columns: Span::through(7),
    },
    // Right leg
    Lift {
        step: 3,
        rows: Span::starting(13),
        columns: Span::starting(8),
    },
    // Right arm
    Lift {
        step: 1,
        rows: Span::new(9, 10),
        columns: Span::starting(12),
    },
    // Left arm
    Lift {
        step: 3,
        rows: Span::new(9, 10),
        columns: Span::through(3),
    },
];

pub const SHADOW: Color = Color::rgba8(0, 10, 20, 77);

/// Walk step for an animation phase, `0..WALK_STEPS`
#[inline]
pub fn walk_step(phase: f64) -> u32 {
    ((phase * 0.2).floor() as i64).rem_euclid(WALK_STEPS) as u32
}

/// Vertical bob in surface pixels, one of -2..=1
#[inline]
pub fn bob_offset(phase: f64) -> f32 {
    ((phase * 0.15).sin() * 2.0).floor() as f32
}

/// Whether the pixel at (`row`, `column`) is raised on `step`
pub fn is_lifted(step: u32, row: usize, column: usize) -> bool {
    WALK_CYCLE
        .iter()
        .any(|l| l.step == step && l.rows.contains(row) && l.columns.contains(column))
}

/// Draw column for a source column when mirrored
#[inline]
pub fn mirror_column(column: usize, width: usize) -> usize {
    width.saturating_sub(1).saturating_sub(column)
}

/// Draw `render.sprite` with its top-left corner at `base` (before bob)
pub fn draw_entity(surface: &mut dyn Surface, render: &SpriteRender, base: Vec2, phase: f64) {
    let sprite = render.sprite;
    let u = render.scale;
    let rows = sprite.height();
    let cols = sprite.width();

    let origin = Vec2::new(base.x.floor(), (base.y + bob_offset(phase)).floor());
    let step = walk_step(phase);

    let shadow_w = cols.saturating_sub(4) as f32 * u;
    surface.fill_rect(
        Rect::new(
            origin.x + 2.0 * u,
            origin.y + rows.saturating_sub(1) as f32 * u,
            shadow_w,
            3.0 * u,
        ),
        SHADOW,
    );

    for row in 0..rows {
        for column in 0..cols {
            let Some(color) = sprite.cell(row, column) else {
                continue;
            };
            let draw_col = if render.mirrored {
                mirror_column(column, cols)
            } else {
                column
            };
            let lift = if is_lifted(step, row, column) { u } else { 0.0 };
            surface.fill_rect(
                Rect::new(
                    origin.x + draw_col as f32 * u,
                    origin.y + row as f32 * u - lift,
                    u,
                    u,
                ),
                color,
            );
        }
    }
}

/// A party member's slot in the marching formation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub sprite: SpriteId,
    /// Offset from the formation anchor, in sprite pixels
    pub offset: Vec2,
}

/// Marching order, left to right
pub const PARTY: [Placement; 4] = [
    Placement {
        sprite: SpriteId::Edgar,
        offset: Vec2::new(-40.0, 0.0),
    },
    Placement {
        sprite: SpriteId::Terra,
        offset: Vec2::new(-12.0, 20.0),
    },
    Placement {
        sprite: SpriteId::Celes,
        offset: Vec2::new(12.0, 5.0),
    },
    Placement {
        sprite: SpriteId::Locke,
        offset: Vec2::new(40.0, 25.0),
    },
];

/// Party sorted back to front (smallest vertical offset first)
pub fn painter_order(party: &[Placement]) -> Vec<Placement> {
    let mut sorted = party.to_vec();
    sorted.sort_by(|a, b| a.offset.y.total_cmp(&b.offset.y));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{PixelBuffer, Viewport};
    use crate::sprites::SpriteDef;
    use proptest::prelude::*;

    const RED: Color = Color::rgb(0xff0000);

    const PLUS: SpriteDef = SpriteDef {
        name: "plus",
        palette: &[('X', RED)],
        pixels: &[
            "  X  ", //
            "  X  ", //
            "XXXXX", //
            "  X  ", //
            "  X  ", //
        ],
    };

    #[test]
    fn test_walk_cycle_matches_hand_tuned_ranges() {
        // Step 0 and 2 are neutral
        for step in [0, 2] {
            for row in 0..16 {
                for col in 0..16 {
                    assert!(!is_lifted(step, row, col));
                }
            }
        }
        assert!(is_lifted(1, 13, 0));
        assert!(is_lifted(1, 15, 7));
        assert!(!is_lifted(1, 15, 8));
        assert!(is_lifted(3, 14, 8));
        assert!(!is_lifted(3, 14, 7));

        assert!(is_lifted(1, 9, 12));
        assert!(is_lifted(1, 10, 15));
        assert!(!is_lifted(1, 11, 12));
        assert!(is_lifted(3, 9, 3));
        assert!(!is_lifted(3, 9, 4));
        assert!(!is_lifted(3, 8, 0));
    }

    #[test]
    fn test_walk_step_and_bob() {
        assert_eq!(walk_step(0.0), 0);
        assert_eq!(walk_step(5.0), 1);
        assert_eq!(walk_step(19.9), 3);
        assert_eq!(walk_step(20.0), 0);
        assert_eq!(walk_step(-1.0), 3);
        assert_eq!(bob_offset(0.0), 0.0);
        for i in 0..200 {
            let b = bob_offset(i as f64 * 0.7);
            assert!((-2.0..=1.0).contains(&b));
        }
    }

    #[test]
    fn test_plus_sprite_lands_on_exact_cells() {
        let sprite = Sprite::new(&PLUS).unwrap();
        let mut buf = PixelBuffer::new(Viewport::new(800.0, 600.0, 1.0));
        let render = SpriteRender {
            sprite: &sprite,
            scale: 3.0,
            mirrored: false,
        };
        draw_entity(&mut buf, &render, Vec2::new(10.0, 10.0), 0.0);

        for row in 0..5u32 {
            for col in 0..5u32 {
                let opaque = sprite.cell(row as usize, col as usize).is_some();
                for dy in 0..3 {
                    for dx in 0..3 {
                        let px = buf.pixel(10 + col * 3 + dx, 10 + row * 3 + dy).unwrap();
                        if opaque {
                            assert_eq!(px, RED, "cell ({row},{col}) should be red");
                        } else {
                            assert_eq!(px, Color::BLACK, "cell ({row},{col}) untouched");
                        }
                    }
                }
            }
        }
        // Just outside the grid
        assert_eq!(buf.pixel(9, 16), Some(Color::BLACK));
        assert_eq!(buf.pixel(25, 16), Some(Color::BLACK));
    }

    #[test]
    fn test_mirrored_sprite_reflects() {
        const HOOK: SpriteDef = SpriteDef {
            name: "hook",
            palette: &[('X', RED)],
            pixels: &["X  ", "XXX"],
        };
        let sprite = Sprite::new(&HOOK).unwrap();
        let mut buf = PixelBuffer::new(Viewport::new(40.0, 40.0, 1.0));
        let render = SpriteRender {
            sprite: &sprite,
            scale: 1.0,
            mirrored: true,
        };
        draw_entity(&mut buf, &render, Vec2::new(0.0, 0.0), 0.0);
        assert_eq!(buf.pixel(2, 0), Some(RED));
        assert_eq!(buf.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_lifted_pixels_rise_one_unit() {
        // Single opaque pixel in the leg band, column 0
        const FOOT: SpriteDef = SpriteDef {
            name: "foot",
            palette: &[('X', RED)],
            pixels: &[
                "  ", "  ", "  ", "  ", "  ", "  ", "  ", "  ", "  ", "  ", "  ", "  ", "  ",
                "X ",
            ],
        };
        let sprite = Sprite::new(&FOOT).unwrap();
        let mut buf = PixelBuffer::new(Viewport::new(40.0, 40.0, 1.0));
        let render = SpriteRender {
            sprite: &sprite,
            scale: 2.0,
            mirrored: false,
        };
        // Phase 5 -> step 1; bob = floor(sin(0.75) * 2) = 1
        draw_entity(&mut buf, &render, Vec2::new(0.0, 0.0), 5.0);
        // Row 13 normally at y 1 + 26 = 27; lifted to 25
        assert_eq!(buf.pixel(0, 25), Some(RED));
        assert_eq!(buf.pixel(0, 26), Some(RED));
        assert_ne!(buf.pixel(0, 27), Some(RED));
    }

    #[test]
    fn test_party_painter_order() {
        let order: Vec<_> = painter_order(&PARTY).iter().map(|p| p.sprite).collect();
        assert_eq!(
            order,
            vec![SpriteId::Edgar, SpriteId::Celes, SpriteId::Terra, SpriteId::Locke]
        );
    }

    proptest! {
        #[test]
        fn prop_mirror_is_involution(width in 1usize..64, seed in 0usize..64) {
            let column = seed % width;
            let once = mirror_column(column, width);
            prop_assert!(once < width);
            prop_assert_eq!(mirror_column(once, width), column);
        }
    }
}
