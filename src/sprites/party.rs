//! Party member sprites (16x16), front- and back-facing
//!
//! Back-facing variants reuse the front palettes. Rows 9-10 hold the arms
//! and rows 13-15 the legs; the walk cycle in `renderer::entity` depends on
//! that layout.

use super::SpriteDef;
use crate::renderer::Color;

const TERRA_PALETTE: &[(char, Color)] = &[
    ('G', Color::rgb(0x4ade80)), // hair
    ('D', Color::rgb(0x16a34a)), // hair shadow
    ('P', Color::rgb(0xa855f7)), // top
    ('Q', Color::rgb(0x9333ea)), // top shadow
    ('R', Color::rgb(0xdc2626)), // skirt
    ('T', Color::rgb(0x991b1b)), // skirt shadow
    ('S', Color::rgb(0xfde68a)), // skin
    ('W', Color::rgb(0xffffff)),
    ('B', Color::rgb(0x000000)),
];

const LOCKE_PALETTE: &[(char, Color)] = &[
    ('U', Color::rgb(0x3b82f6)), // bandana
    ('M', Color::rgb(0x8b5cf6)),
    ('Y', Color::rgb(0xeab308)),
    ('E', Color::rgb(0x22c55e)),
    ('B', Color::rgb(0x92400e)), // hair
    ('D', Color::rgb(0x78350f)),
    ('V', Color::rgb(0x1e3a8a)), // vest
    ('L', Color::rgb(0x1e40af)),
    ('N', Color::rgb(0xf3f4f6)), // sleeves
    ('S', Color::rgb(0xfde68a)),
    ('K', Color::rgb(0x92400e)), // pants
    ('X', Color::rgb(0x78350f)),
    ('O', Color::rgb(0x000000)),
];

const EDGAR_PALETTE: &[(char, Color)] = &[
    ('Y', Color::rgb(0xfacc15)), // hair
    ('D', Color::rgb(0xca8a04)),
    ('B', Color::rgb(0x3b82f6)), // clothing
    ('P', Color::rgb(0xa855f7)),
    ('G', Color::rgb(0xfbbf24)), // gold accents
    ('H', Color::rgb(0xf59e0b)),
    ('S', Color::rgb(0xfde68a)),
    ('A', Color::rgb(0x1e40af)),
    ('K', Color::rgb(0x000000)),
];

const CELES_PALETTE: &[(char, Color)] = &[
    ('Y', Color::rgb(0xfef08a)), // hair
    ('P', Color::rgb(0xc084fc)),
    ('D', Color::rgb(0xeab308)),
    ('W', Color::rgb(0xffffff)), // dress
    ('L', Color::rgb(0xe0e7ff)),
    ('G', Color::rgb(0x22c55e)), // accents
    ('E', Color::rgb(0x16a34a)),
    ('S', Color::rgb(0xfde68a)),
    ('K', Color::rgb(0x000000)),
];

pub const TERRA: SpriteDef = SpriteDef {
    name: "Terra",
    palette: TERRA_PALETTE,
    pixels: &[
        "      GGGG      ",
        "     GGDGGG     ",
        "    GGDGGDGG    ",
        "   GGDGGDGGDG   ",
        "   GGSGSGSGGG   ",
        "   GGSBSSBGGG   ",
        "    SSSSSSSS    ",
        "   PPPPPPPP     ",
        "  PPPQQQPPPPP   ",
        "  SS PPPPP SS   ",
        "  WW PPQQPP WW  ",
        "     RRRRRR     ",
        "    RRRRRRRR    ",
        "    RRRRRRRR    ",
        "    RRRTTTRR    ",
        "    RR    RR    ",
    ],
};

pub const LOCKE: SpriteDef = SpriteDef {
    name: "Locke",
    palette: LOCKE_PALETTE,
    pixels: &[
        "      UUUU      ",
        "     UUMYUU     ",
        "    UUBBUBBUU   ",
        "   UUBBBBBBBUU  ",
        "   UUSUSUSUUU   ",
        "   UUSOSSOUUU   ",
        "    SSSSSSSS    ",
        "   VVVVVVVVVV   ",
        "  VVVLLLLVVVV   ",
        "  NN VVVVVV NN  ",
        "  NN VVLLVV NN  ",
        "     VVVVVV     ",
        "    KKKKKKKK    ",
        "    KKKKKKKK    ",
        "    KKKXXXKK    ",
        "    KK    KK    ",
    ],
};

pub const EDGAR: SpriteDef = SpriteDef {
    name: "Edgar",
    palette: EDGAR_PALETTE,
    pixels: &[
        "      YYYY      ",
        "     YYDYYY     ",
        "    YYYDYYDYY   ",
        "   YYYYDYYDYYY  ",
        "   YYSYSYSYYY   ",
        "   YYSKSSKYYY   ",
        "    SSSSSSSS    ",
        "   BBBBBBBBBB   ",
        "  BBBPPPPPBBBB  ",
        "  GG BBBBBB GG  ",
        "  GG BBAAAB GG  ",
        "     GGGGGG     ",
        "    BBBBBBBB    ",
        "    BBBBBBBB    ",
        "    BBBAAABB    ",
        "    BB    BB    ",
    ],
};

pub const CELES: SpriteDef = SpriteDef {
    name: "Celes",
    palette: CELES_PALETTE,
    pixels: &[
        "      YYYY      ",
        "     YYPYYY     ",
        "    YYYPYYDYY   ",
        "   YYYYPYYDYYY  ",
        "   YYSYSYSYYY   ",
        "   YYSKSSKYYY   ",
        "    SSSSSSSS    ",
        "   WWWWWWWWWW   ",
        "  WWWLLLLWWWW   ",
        "  GG WWWWWW GG  ",
        "  GG WWLLWW GG  ",
        "     GGGGGG     ",
        "    WWWWWWWW    ",
        "    WWWWWWWW    ",
        "    WWWEEEWW    ",
        "    WW    WW    ",
    ],
};

pub const TERRA_BACK: SpriteDef = SpriteDef {
    name: "Terra (back)",
    palette: TERRA_PALETTE,
    pixels: &[
        "      GGGG      ",
        "     GGDGGG     ",
        "    GGDGGDGG    ",
        "   GGDGGDGGDG   ",
        "   GGDGGDGGDG   ",
        "   GGDGGDGGDG   ",
        "    GGDGGDGG    ",
        "   PPPPPPPP     ",
        "  PPPQQQPPPPP   ",
        "  PPPQQQPPPPP   ",
        "  PPPQQQPPPPP   ",
        "     RRRRRR     ",
        "    RRRRRRRR    ",
        "    RRRRRRRR    ",
        "    RRRTTTRR    ",
        "    RR    RR    ",
    ],
};

pub const LOCKE_BACK: SpriteDef = SpriteDef {
    name: "Locke (back)",
    palette: LOCKE_PALETTE,
    pixels: &[
        "      UUUU      ",
        "     UUMYUU     ",
        "    UUBBUBBUU   ",
        "   UUBBBBBBBUU  ",
        "   UUBBBBBBBUU  ",
        "   UUBBBBBBBUU  ",
        "    UUBBBBUU    ",
        "   VVVVVVVVVV   ",
        "  VVVLLLLVVVV   ",
        "  VVVLLLLVVVV   ",
        "  VVVLLLLVVVV   ",
        "     VVVVVV     ",
        "    KKKKKKKK    ",
        "    KKKKKKKK    ",
        "    KKKXXXKK    ",
        "    KK    KK    ",
    ],
};

pub const EDGAR_BACK: SpriteDef = SpriteDef {
    name: "Edgar (back)",
    palette: EDGAR_PALETTE,
    pixels: &[
        "      YYYY      ",
        "     YYDYYY     ",
        "    YYYDYYDYY   ",
        "   YYYYDYYDYYY  ",
        "   YYYYDYYDYYY  ",
        "   YYYYDYYDYYY  ",
        "    YYYDYYY     ",
        "   BBBBBBBBBB   ",
        "  BBBPPPPPBBBB  ",
        "  GG BBBBBB GG  ",
        "  GG BBBBBB GG  ",
        "     GGGGGG     ",
        "    BBBBBBBB    ",
        "    BBBBBBBB    ",
        "    BBBAAABB    ",
        "    BB    BB    ",
    ],
};

pub const CELES_BACK: SpriteDef = SpriteDef {
    name: "Celes (back)",
    palette: CELES_PALETTE,
    pixels: &[
        "      YYYY      ",
        "     YYPYYY     ",
        "    YYYPYYDYY   ",
        "   YYYYPYYDYYY  ",
        "   YYYYPYYDYYY  ",
        "   YYYYPYYDYYY  ",
        "    YYYPYYY     ",
        "   WWWWWWWWWW   ",
        "  WWWLLLLWWWW   ",
        "  WWWLLLLWWWW   ",
        "  WWWLLLLWWWW   ",
        "     GGGGGG     ",
        "    WWWWWWWW    ",
        "    WWWWWWWW    ",
        "    WWWEEEWW    ",
        "    WW    WW    ",
    ],
};
