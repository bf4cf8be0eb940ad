//! Weather particle pool
//!
//! A fixed-size pool of snowflakes. Flakes are never added or removed after
//! construction; a flake that falls past the bottom edge is recycled at the
//! top with a fresh horizontal position.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::REFERENCE_TICK_HZ;

/// A single snowflake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Fall speed, surface units per reference tick
    pub speed: f32,
    /// Lateral drift, surface units per reference tick
    pub drift: f32,
    /// Radius in sprite pixels (scaled at draw time)
    pub radius: f32,
}

pub struct ParticlePool {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticlePool {
    /// Scatter `count` flakes uniformly over a `width` x `height` surface
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(
                    sample(&mut rng, 0.0, width),
                    sample(&mut rng, 0.0, height),
                ),
                speed: rng.random_range(1.0..4.0),
                drift: rng.random_range(-0.25..0.25),
                radius: rng.random_range(0.0..2.0),
            })
            .collect();
        Self { particles, rng }
    }

    /// Integrate every flake by `dt` seconds and recycle the ones that fell
    /// past `height`
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) {
        let ticks = dt * REFERENCE_TICK_HZ;
        for p in &mut self.particles {
            p.pos.y += p.speed * ticks;
            p.pos.x += p.drift * ticks;

            if p.pos.y > height {
                p.pos.y = 0.0;
                p.pos.x = sample(&mut self.rng, 0.0, width);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Uniform sample in `[lo, hi)`, tolerating an empty range
#[inline]
fn sample(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
