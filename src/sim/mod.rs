//! Scene simulation module
//!
//! Everything that moves between frames, with no drawing or platform code:
//! - Seeded RNG only
//! - Motion scaled by frame delta
//! - Terrain is a pure function of world coordinates

pub mod camera;
pub mod enemy;
pub mod particles;
pub mod state;
pub mod terrain;

pub use camera::Camera;
pub use enemy::EnemyAgent;
pub use particles::{Particle, ParticlePool};
pub use state::SceneState;
pub use terrain::{PlacedTile, Tile, TileKind, TileWindow, tile_at};
