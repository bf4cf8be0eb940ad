//! Whole-frame rendering through the headless host

use glam::Vec2;
use narshe_scene::renderer::atmosphere::{MOUNTAIN, SKY_HORIZON};
use narshe_scene::renderer::terrain::{PATH_EVEN, PATH_ODD};
use narshe_scene::renderer::{SpriteRender, draw_entity};
use narshe_scene::sprites::SpriteDef;
use narshe_scene::{
    Color, Facing, FrameScheduler, HeadlessHost, PixelBuffer, SceneConfig, Sprite, Viewport,
};

fn run(config: SceneConfig, frames: u32) -> FrameScheduler<HeadlessHost> {
    let mut scheduler = FrameScheduler::new(config).unwrap();
    scheduler
        .start(HeadlessHost::new(Viewport::new(800.0, 600.0, 1.0)))
        .unwrap();
    for i in 0..frames {
        scheduler.pump(i as f64 * 1000.0 / 60.0);
    }
    scheduler
}

fn quiet_config() -> SceneConfig {
    SceneConfig {
        particle_count: Some(0),
        skip_alternate_wind: Some(true),
        seed: Some(11),
        ..SceneConfig::default()
    }
}

#[test]
fn test_frame_has_sky_mountain_and_path() {
    let scheduler = run(quiet_config(), 3);
    let buf = scheduler.surface().unwrap();

    // Sky at the very top darkens toward the zenith
    let top = buf.pixel(5, 0).unwrap();
    assert!(top.b < SKY_HORIZON.b);
    // Main spire silhouette
    assert_eq!(buf.pixel(400, 150), Some(MOUNTAIN));
    // Path tiles at the bottom of the screen, column 8
    let path = buf.pixel(410, 595).unwrap();
    assert!(path == PATH_EVEN || path == PATH_ODD, "got {path:?}");
}

#[test]
fn test_same_seed_same_pixels() {
    let config = SceneConfig {
        seed: Some(99),
        ..SceneConfig::default()
    };
    let a = run(config.clone(), 20);
    let b = run(config, 20);
    assert_eq!(
        a.surface().unwrap().as_bytes(),
        b.surface().unwrap().as_bytes()
    );
}

#[test]
fn test_scene_changes_over_time() {
    let early = run(quiet_config(), 2);
    let late = run(quiet_config(), 90);
    assert_ne!(
        early.surface().unwrap().as_bytes(),
        late.surface().unwrap().as_bytes()
    );
}

#[test]
fn test_back_facing_party_differs() {
    let front = run(quiet_config(), 5);
    let back = run(
        SceneConfig {
            party_facing: Facing::Back,
            ..quiet_config()
        },
        5,
    );
    assert_ne!(
        front.surface().unwrap().as_bytes(),
        back.surface().unwrap().as_bytes()
    );
}

#[test]
fn test_dim_overlay_only_when_not_watching() {
    let config = SceneConfig {
        dim_alpha: 0.6,
        ..quiet_config()
    };
    let watching = run(config.clone(), 4);

    let mut dimmed = FrameScheduler::new(config).unwrap();
    dimmed.set_watch_mode(false);
    dimmed
        .start(HeadlessHost::new(Viewport::new(800.0, 600.0, 1.0)))
        .unwrap();
    for i in 0..4 {
        dimmed.pump(i as f64 * 1000.0 / 60.0);
    }

    let bright = watching.surface().unwrap().pixel(410, 595).unwrap();
    let dark = dimmed.surface().unwrap().pixel(410, 595).unwrap();
    assert!(dark.r < bright.r && dark.g < bright.g && dark.b < bright.b);
}

#[test]
fn test_plus_sprite_end_to_end() {
    const RED: Color = Color::rgb(0xff0000);
    const PLUS: SpriteDef = SpriteDef {
        name: "plus",
        palette: &[('X', RED)],
        pixels: &["  X  ", "  X  ", "XXXXX", "  X  ", "  X  "],
    };

    let sprite = Sprite::new(&PLUS).unwrap();
    let mut buf = PixelBuffer::new(Viewport::new(800.0, 600.0, 1.0));
    let render = SpriteRender {
        sprite: &sprite,
        scale: 3.0,
        mirrored: false,
    };
    draw_entity(&mut buf, &render, Vec2::new(10.0, 10.0), 0.0);

    let mut red = 0;
    for (row, line) in PLUS.pixels.iter().enumerate() {
        for (col, code) in line.chars().enumerate() {
            let x = 10 + col as u32 * 3 + 1;
            let y = 10 + row as u32 * 3 + 1;
            let px = buf.pixel(x, y).unwrap();
            if code == 'X' {
                assert_eq!(px, RED);
                red += 1;
            } else {
                assert_eq!(px, Color::BLACK);
            }
        }
    }
    assert_eq!(red, 9);
}
