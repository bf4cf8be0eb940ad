//! Scene rendering
//!
//! Layer renderers draw onto any `Surface`: the software `PixelBuffer`
//! (native, tests) or the browser canvas. A frame is the layers of
//! `LAYER_ORDER` painted back to front; later layers win.

pub mod atmosphere;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod entity;
pub mod pixel_buffer;
pub mod surface;
pub mod terrain;
pub mod weather;

pub use entity::{SpriteRender, WALK_CYCLE, draw_entity, mirror_column};
pub use pixel_buffer::PixelBuffer;
pub use surface::{Color, GradientStop, Rect, Surface, Viewport};

use glam::Vec2;

use crate::consts::{ENEMY_BASELINE, MS_PER_PHASE, PARTY_BASELINE, PARTY_PHASE_STRIDE};
use crate::settings::{Facing, SceneConfig};
use crate::sim::{SceneState, TileWindow};
use crate::sprites::{SpriteCatalog, SpriteId};

/// Geometry shared by every layer of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    pub width: f32,
    pub height: f32,
    pub horizon: f32,
    pub center_x: f32,
}

impl FrameLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            horizon: crate::horizon_y(height),
            center_x: width / 2.0,
        }
    }
}

/// Compositing layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Sky,
    Clouds,
    Mountains,
    Lights,
    Terrain,
    Enemy,
    Party,
    Particles,
    Wind,
    Fog,
    Dim,
}

/// Back to front
pub const LAYER_ORDER: [Layer; 11] = [
    Layer::Sky,
    Layer::Clouds,
    Layer::Mountains,
    Layer::Lights,
    Layer::Terrain,
    Layer::Enemy,
    Layer::Party,
    Layer::Particles,
    Layer::Wind,
    Layer::Fog,
    Layer::Dim,
];

/// Everything one frame reads
pub struct FrameContext<'a> {
    pub catalog: &'a SpriteCatalog,
    pub config: &'a SceneConfig,
    pub state: &'a SceneState,
    pub watch_mode: bool,
}

impl FrameContext<'_> {
    /// Whether `layer` is painted this frame
    pub fn wants(&self, layer: Layer) -> bool {
        match layer {
            // Odd frames skip the wind when the cost saver is on
            Layer::Wind => !self.config.skip_alternate_wind() || self.state.frame % 2 == 0,
            Layer::Dim => !self.watch_mode && self.config.dim_alpha > 0.0,
            _ => true,
        }
    }
}

/// Paint one layer
pub fn draw_layer(
    surface: &mut dyn Surface,
    layer: Layer,
    frame: &FrameContext,
    layout: &FrameLayout,
) {
    let t = frame.state.elapsed_ms;
    let unit = frame.config.pixel_scale as f32;
    match layer {
        Layer::Sky => atmosphere::draw_sky(surface, layout),
        Layer::Clouds => atmosphere::draw_clouds(surface, layout, t),
        Layer::Mountains => atmosphere::draw_mountains(surface, layout),
        Layer::Lights => atmosphere::draw_lights(surface, layout, t),
        Layer::Terrain => {
            let window = TileWindow::new(
                frame.state.camera.offset,
                layout.width,
                layout.height,
                layout.horizon,
                frame.config.tile_px(),
            );
            terrain::draw_terrain(surface, &window, unit);
        }
        Layer::Enemy => draw_enemy(surface, frame, layout),
        Layer::Party => draw_party(surface, frame, layout),
        Layer::Particles => weather::draw_particles(surface, &frame.state.particles, unit),
        Layer::Wind => atmosphere::draw_wind(surface, layout, t),
        Layer::Fog => atmosphere::draw_fog(surface, layout),
        Layer::Dim => atmosphere::draw_dim(surface, layout, frame.config.dim_alpha),
    }
}

/// Paint a whole frame; returns how many layers were drawn
pub fn compose_frame(surface: &mut dyn Surface, frame: &FrameContext) -> usize {
    let layout = FrameLayout::new(surface.width(), surface.height());
    let mut drawn = 0;
    for layer in LAYER_ORDER {
        if frame.wants(layer) {
            draw_layer(surface, layer, frame, &layout);
            drawn += 1;
        }
    }
    drawn
}

/// Drawn width of the enemy, for bounce limits
pub fn enemy_extent(catalog: &SpriteCatalog, config: &SceneConfig) -> f32 {
    catalog.get(SpriteId::Cactuar).width() as f32 * config.pixel_scale as f32
}

fn draw_enemy(surface: &mut dyn Surface, frame: &FrameContext, layout: &FrameLayout) {
    let enemy = &frame.state.enemy;
    let render = SpriteRender {
        sprite: frame.catalog.get(SpriteId::Cactuar),
        scale: frame.config.pixel_scale as f32,
        mirrored: enemy.moving_left(),
    };
    let phase = frame.state.elapsed_ms / MS_PER_PHASE;
    draw_entity(
        surface,
        &render,
        Vec2::new(enemy.x, layout.horizon + ENEMY_BASELINE),
        phase,
    );
}

fn draw_party(surface: &mut dyn Surface, frame: &FrameContext, layout: &FrameLayout) {
    let scale = frame.config.pixel_scale as f32;
    let anchor = Vec2::new(layout.center_x, layout.horizon + PARTY_BASELINE);

    for (i, member) in entity::painter_order(&entity::PARTY).iter().enumerate() {
        let id = match frame.config.party_facing {
            Facing::Front => member.sprite,
            Facing::Back => member.sprite.back(),
        };
        let sprite = frame.catalog.get(id);
        let render = SpriteRender {
            sprite,
            scale,
            mirrored: false,
        };
        // Anchor is the formation center; sprites are drawn from their left edge
        let half = sprite.width() as f32 / 2.0 * scale;
        let base = anchor + member.offset * scale - Vec2::new(half, 0.0);
        let phase = frame.state.elapsed_ms / MS_PER_PHASE + i as f64 * PARTY_PHASE_STRIDE;
        draw_entity(surface, &render, base, phase);
    }
}
