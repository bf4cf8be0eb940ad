//! Sprite catalog
//!
//! Sprites are literal pixel grids compiled into the binary: each row is a
//! string of single-character palette codes, with `' '` reserved for
//! transparency. Grids are validated and resolved to colors once, when the
//! catalog is built. A defective sprite fails catalog construction instead
//! of rendering blank pixels.

pub mod enemies;
pub mod party;

use std::collections::BTreeMap;

use crate::error::SpriteError;
use crate::renderer::Color;

/// Reserved pixel code for "draw nothing"
pub const TRANSPARENT_CODE: char = ' ';

/// Static description of a sprite, as written in source
#[derive(Debug, Clone, Copy)]
pub struct SpriteDef {
    pub name: &'static str,
    pub palette: &'static [(char, Color)],
    pub pixels: &'static [&'static str],
}

/// Built-in sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpriteId {
    Terra,
    Locke,
    Edgar,
    Celes,
    TerraBack,
    LockeBack,
    EdgarBack,
    CelesBack,
    Cactuar,
}

impl SpriteId {
    pub const ALL: [SpriteId; 9] = [
        SpriteId::Terra,
        SpriteId::Locke,
        SpriteId::Edgar,
        SpriteId::Celes,
        SpriteId::TerraBack,
        SpriteId::LockeBack,
        SpriteId::EdgarBack,
        SpriteId::CelesBack,
        SpriteId::Cactuar,
    ];

    fn def(self) -> &'static SpriteDef {
        match self {
            SpriteId::Terra => &party::TERRA,
            SpriteId::Locke => &party::LOCKE,
            SpriteId::Edgar => &party::EDGAR,
            SpriteId::Celes => &party::CELES,
            SpriteId::TerraBack => &party::TERRA_BACK,
            SpriteId::LockeBack => &party::LOCKE_BACK,
            SpriteId::EdgarBack => &party::EDGAR_BACK,
            SpriteId::CelesBack => &party::CELES_BACK,
            SpriteId::Cactuar => &enemies::CACTUAR,
        }
    }

    /// Back-facing variant of a party member (identity for others)
    pub fn back(self) -> SpriteId {
        match self {
            SpriteId::Terra => SpriteId::TerraBack,
            SpriteId::Locke => SpriteId::LockeBack,
            SpriteId::Edgar => SpriteId::EdgarBack,
            SpriteId::Celes => SpriteId::CelesBack,
            other => other,
        }
    }
}

/// A validated, immutable pixel-art sprite
#[derive(Debug, Clone)]
pub struct Sprite {
    name: &'static str,
    palette: BTreeMap<char, Color>,
    rows: &'static [&'static str],
    width: usize,
    /// Row-major resolved colors, `None` for transparent
    cells: Vec<Option<Color>>,
}

impl Sprite {
    /// Validate a definition and resolve its pixel codes
    pub fn new(def: &SpriteDef) -> Result<Self, SpriteError> {
        let sprite = def.name;

        let mut palette = BTreeMap::new();
        for &(code, color) in def.palette {
            if code == TRANSPARENT_CODE {
                return Err(SpriteError::TransparentInPalette { sprite });
            }
            if palette.insert(code, color).is_some() {
                return Err(SpriteError::DuplicatePaletteKey { sprite, code });
            }
        }

        let width = def.pixels.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(SpriteError::Empty { sprite });
        }

        let mut cells = Vec::with_capacity(width * def.pixels.len());
        for (row, line) in def.pixels.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(SpriteError::RaggedRow {
                    sprite,
                    row,
                    expected: width,
                    actual,
                });
            }
            for (column, code) in line.chars().enumerate() {
                if code == TRANSPARENT_CODE {
                    cells.push(None);
                    continue;
                }
                let color = palette
                    .get(&code)
                    .copied()
                    .ok_or(SpriteError::UnknownCode {
                        sprite,
                        row,
                        column,
                        code,
                    })?;
                cells.push(Some(color));
            }
        }

        Ok(Self {
            name: def.name,
            palette,
            rows: def.pixels,
            width,
            cells,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn palette(&self) -> &BTreeMap<char, Color> {
        &self.palette
    }

    /// Source rows as written
    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Width in sprite pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in sprite pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Resolved color of a cell, `None` when transparent or out of range
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> Option<Color> {
        if column >= self.width {
            return None;
        }
        self.cells.get(row * self.width + column).copied().flatten()
    }
}

/// All built-in sprites, validated
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    sprites: Vec<Sprite>,
}

impl SpriteCatalog {
    /// Build and validate every built-in sprite
    pub fn builtin() -> Result<Self, SpriteError> {
        let sprites = SpriteId::ALL
            .iter()
            .map(|id| Sprite::new(id.def()))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Sprite catalog built ({} sprites)", sprites.len());
        Ok(Self { sprites })
    }

    /// Sprites are stored in `SpriteId::ALL` order
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id as usize]
    }

    pub fn by_name(&self, name: &str) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(0xff0000);

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = SpriteCatalog::builtin().expect("built-in sprites must validate");
        assert_eq!(catalog.len(), SpriteId::ALL.len());
        for id in SpriteId::ALL {
            let sprite = catalog.get(id);
            assert!(sprite.width() > 0 && sprite.height() > 0, "{}", sprite.name());
        }
        assert_eq!(catalog.get(SpriteId::Terra).width(), 16);
        assert_eq!(catalog.get(SpriteId::Terra).height(), 16);
        assert_eq!(catalog.get(SpriteId::Cactuar).height(), 15);
    }

    #[test]
    fn test_back_variants_share_palette() {
        let catalog = SpriteCatalog::builtin().unwrap();
        for id in [SpriteId::Terra, SpriteId::Locke, SpriteId::Edgar, SpriteId::Celes] {
            let front = catalog.get(id);
            let back = catalog.get(id.back());
            assert_eq!(front.palette(), back.palette());
            assert_ne!(front.name(), back.name());
        }
        assert_eq!(SpriteId::Cactuar.back(), SpriteId::Cactuar);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = SpriteCatalog::builtin().unwrap();
        assert_eq!(catalog.by_name("Cactuar").map(Sprite::height), Some(15));
        assert!(catalog.by_name("Kefka").is_none());
    }

    #[test]
    fn test_unknown_code_fails_fast() {
        let def = SpriteDef {
            name: "broken",
            palette: &[('X', RED)],
            pixels: &[" X ", " Y "],
        };
        assert_eq!(
            Sprite::new(&def).unwrap_err(),
            SpriteError::UnknownCode {
                sprite: "broken",
                row: 1,
                column: 1,
                code: 'Y'
            }
        );
    }

    #[test]
    fn test_ragged_and_empty_rows_rejected() {
        let ragged = SpriteDef {
            name: "ragged",
            palette: &[('X', RED)],
            pixels: &["XX", "X"],
        };
        assert!(matches!(
            Sprite::new(&ragged),
            Err(SpriteError::RaggedRow { row: 1, expected: 2, actual: 1, .. })
        ));

        let empty = SpriteDef {
            name: "empty",
            palette: &[],
            pixels: &[],
        };
        assert_eq!(
            Sprite::new(&empty).unwrap_err(),
            SpriteError::Empty { sprite: "empty" }
        );
    }

    #[test]
    fn test_palette_keys_unique() {
        let def = SpriteDef {
            name: "dupe",
            palette: &[('X', RED), ('X', Color::WHITE)],
            pixels: &["X"],
        };
        assert!(matches!(
            Sprite::new(&def),
            Err(SpriteError::DuplicatePaletteKey { code: 'X', .. })
        ));

        let def = SpriteDef {
            name: "clear",
            palette: &[(' ', RED)],
            pixels: &["X"],
        };
        assert!(matches!(
            Sprite::new(&def),
            Err(SpriteError::TransparentInPalette { .. })
        ));
    }

    #[test]
    fn test_cells_resolve_colors() {
        let def = SpriteDef {
            name: "plus",
            palette: &[('X', RED)],
            pixels: &["  X  ", " XXX ", "  X  "],
        };
        let sprite = Sprite::new(&def).unwrap();
        assert_eq!(sprite.cell(0, 2), Some(RED));
        assert_eq!(sprite.cell(0, 0), None);
        assert_eq!(sprite.cell(1, 3), Some(RED));
        assert_eq!(sprite.cell(0, 9), None);
        assert_eq!(sprite.cell(9, 0), None);
    }
}
