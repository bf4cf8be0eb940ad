//! Snow layer

use super::surface::{Color, Surface};
use crate::sim::ParticlePool;

pub const SNOW_ALPHA: f32 = 0.8;

/// Draw every flake as a soft white disc; radii are in sprite pixels
pub fn draw_particles(surface: &mut dyn Surface, pool: &ParticlePool, unit: f32) {
    let color = Color::WHITE.with_alpha(SNOW_ALPHA);
    for flake in pool.iter() {
        surface.fill_circle(flake.pos, flake.radius * unit, color);
    }
}
