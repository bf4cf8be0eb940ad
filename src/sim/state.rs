//! Per-session scene state
//!
//! Everything that changes from frame to frame lives here. Created when the
//! scheduler mounts, dropped when it stops.

use crate::settings::SceneConfig;

use super::camera::Camera;
use super::enemy::EnemyAgent;
use super::particles::ParticlePool;

pub struct SceneState {
    pub camera: Camera,
    pub enemy: EnemyAgent,
    pub particles: ParticlePool,
    /// Animation clock, milliseconds of scene time since mount
    pub elapsed_ms: f64,
    /// Accepted (rendered) frames since mount
    pub frame: u64,
}

impl SceneState {
    /// Fresh state for a `width` x `height` surface
    pub fn new(config: &SceneConfig, width: f32, height: f32, seed: u64) -> Self {
        Self {
            camera: Camera::new(config.scroll_speed),
            enemy: EnemyAgent::new(0.0, config.enemy_speed),
            particles: ParticlePool::new(config.particle_count(), width, height, seed),
            elapsed_ms: 0.0,
            frame: 0,
        }
    }

    /// Advance every moving part by `dt` seconds
    pub fn advance(&mut self, dt: f32, width: f32, height: f32, enemy_extent: f32) {
        let dt = dt.max(0.0);
        self.particles.advance(dt, width, height);
        self.camera.advance(dt);
        self.enemy.advance(dt, width, enemy_extent);
        self.elapsed_ms += dt as f64 * 1000.0;
        self.frame += 1;
    }
}
