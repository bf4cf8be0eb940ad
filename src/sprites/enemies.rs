//! Enemy sprites

use super::SpriteDef;
use crate::renderer::Color;

/// Cactuar (12x15): three spines, square head, stubby legs
pub const CACTUAR: SpriteDef = SpriteDef {
    name: "Cactuar",
    palette: &[
        ('G', Color::rgb(0x22c55e)),
        ('D', Color::rgb(0x16a34a)),
        ('B', Color::rgb(0x000000)),
        ('W', Color::rgb(0xffffff)),
    ],
    pixels: &[
        "     B      ",
        "    BBB     ",
        "     B      ",
        "   GGGG     ",
        "  GGGDGG    ",
        "  GGBBGG    ",
        "  GGGDGG    ",
        "  GGGDGG    ",
        " GGGGDGGG   ",
        "GGGGGDGGGG  ",
        "GGGGGDGGGG  ",
        " GGGGDGGG   ",
        "  GGGDGG    ",
        "  GG  GG    ",
        "  B    B    ",
    ],
};
