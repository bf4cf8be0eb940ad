//! Atmospheric layers
//!
//! Sky, parallax clouds, the cliff silhouette with its flickering windows,
//! wind streaks and the horizon fog. Nothing here keeps state between
//! frames: every position is derived from the layout and the scene clock
//! `t` (milliseconds).

use glam::Vec2;

use super::FrameLayout;
use super::surface::{Color, GradientStop, Rect, Surface};

pub const SKY_TOP: Color = Color::rgb(0x02040a);
pub const SKY_HORIZON: Color = Color::rgb(0x0b1224);
pub const MOUNTAIN: Color = Color::BLACK;
pub const LIGHT: Color = Color::rgb(0xfbbf24);
pub const FOG: Color = Color::rgb(0x020617);

/// A row of clouds looping horizontally
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudBand {
    pub count: u32,
    pub size: Vec2,
    /// Milliseconds per pixel of drift (larger is slower)
    pub ms_per_px: f64,
    /// Horizontal gap between cloud starts
    pub spacing: f64,
    /// Extra travel beyond the surface edges before wrapping
    pub wrap_pad: f64,
    /// Height above the horizon
    pub rise: f32,
    /// Vertical sway amplitude
    pub sway: f32,
    pub sway_period_ms: f64,
    pub color: Color,
}

/// Far band first
pub const CLOUD_BANDS: [CloudBand; 2] = [
    CloudBand {
        count: 4,
        size: Vec2::new(200.0, 60.0),
        ms_per_px: 80.0,
        spacing: 250.0,
        wrap_pad: 300.0,
        rise: 100.0,
        sway: 20.0,
        sway_period_ms: 2000.0,
        color: Color::rgb(0x0f172a),
    },
    CloudBand {
        count: 3,
        size: Vec2::new(260.0, 36.0),
        ms_per_px: 45.0,
        spacing: 340.0,
        wrap_pad: 400.0,
        rise: 55.0,
        sway: 12.0,
        sway_period_ms: 1500.0,
        color: Color::rgba8(0x1e, 0x29, 0x3b, 140),
    },
];

impl CloudBand {
    /// Top-left corner of cloud `i` at time `t`
    pub fn position(&self, i: u32, t: f64, layout: &FrameLayout) -> Vec2 {
        let travel = layout.width as f64 + self.wrap_pad;
        let x = (t / self.ms_per_px + i as f64 * self.spacing).rem_euclid(travel)
            - self.wrap_pad / 2.0;
        let y = layout.horizon - self.rise
            + ((t / self.sway_period_ms + i as f64).sin() as f32) * self.sway;
        Vec2::new(x as f32, y)
    }
}

/// A lit window in the cliffs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Offset from (center, horizon)
    pub offset: Vec2,
    pub size: Vec2,
    /// Twinkle phase, radians
    pub phase: f64,
}

pub const LIGHTS: [Light; 3] = [
    Light {
        offset: Vec2::new(-140.0, -100.0),
        size: Vec2::new(2.0, 2.0),
        phase: 0.0,
    },
    Light {
        offset: Vec2::new(-130.0, -90.0),
        size: Vec2::new(2.0, 2.0),
        phase: 2.1,
    },
    Light {
        offset: Vec2::new(10.0, -110.0),
        size: Vec2::new(3.0, 5.0),
        phase: 4.2,
    },
];

/// Brightness of a light at time `t`, within 0.1..=1.0
#[inline]
pub fn light_alpha(t: f64, phase: f64) -> f32 {
    (0.55 + 0.45 * (t / 400.0 + phase).sin()) as f32
}

pub fn draw_sky(surface: &mut dyn Surface, layout: &FrameLayout) {
    surface.fill_vertical_gradient(
        Rect::new(0.0, 0.0, layout.width, layout.horizon),
        &[
            GradientStop::new(0.0, SKY_TOP),
            GradientStop::new(1.0, SKY_HORIZON),
        ],
    );
    surface.fill_rect(
        Rect::new(
            0.0,
            layout.horizon,
            layout.width,
            layout.height - layout.horizon,
        ),
        SKY_HORIZON,
    );
}

pub fn draw_clouds(surface: &mut dyn Surface, layout: &FrameLayout, t: f64) {
    for band in &CLOUD_BANDS {
        for i in 0..band.count {
            let pos = band.position(i, t, layout);
            surface.fill_rect(
                Rect::new(pos.x, pos.y, band.size.x, band.size.y),
                band.color,
            );
        }
    }
}

/// Cliff skyline, anchored at both surface edges on the horizon
pub fn mountain_outline(layout: &FrameLayout) -> [Vec2; 8] {
    let (cx, cy) = (layout.center_x, layout.horizon);
    [
        Vec2::new(0.0, cy),
        Vec2::new(cx - 200.0, cy - 80.0),
        Vec2::new(cx - 150.0, cy - 120.0),
        Vec2::new(cx - 100.0, cy - 90.0),
        Vec2::new(cx, cy - 140.0),
        Vec2::new(cx + 80.0, cy - 90.0),
        Vec2::new(cx + 180.0, cy - 110.0),
        Vec2::new(layout.width, cy),
    ]
}

pub fn draw_mountains(surface: &mut dyn Surface, layout: &FrameLayout) {
    surface.fill_polygon(&mountain_outline(layout), MOUNTAIN);
}

pub fn draw_lights(surface: &mut dyn Surface, layout: &FrameLayout, t: f64) {
    let anchor = Vec2::new(layout.center_x, layout.horizon);
    for light in &LIGHTS {
        let pos = anchor + light.offset;
        surface.fill_rect(
            Rect::new(pos.x, pos.y, light.size.x, light.size.y),
            LIGHT.with_alpha(light_alpha(t, light.phase)),
        );
    }
}

const WIND_BANDS: u32 = 3;
const WIND_SEGMENT: f32 = 8.0;
const WIND_AMPLITUDE: f32 = 6.0;
const WIND_ALPHA: f32 = 0.07;

/// Wavy translucent streaks across the ground
pub fn draw_wind(surface: &mut dyn Surface, layout: &FrameLayout, t: f64) {
    let color = Color::WHITE.with_alpha(WIND_ALPHA);
    let ground = (layout.height - layout.horizon).max(0.0);
    let pitch = ground / WIND_BANDS as f32;
    let segments = (layout.width / WIND_SEGMENT).ceil() as u32;

    for band in 0..WIND_BANDS {
        let base = layout.horizon + pitch * (band as f32 + 0.5);
        let drift = t / 600.0 + band as f64 * 1.3;
        for s in 0..segments {
            let x = s as f32 * WIND_SEGMENT;
            let wave = ((x as f64 / 120.0 + drift).sin() as f32) * WIND_AMPLITUDE;
            surface.fill_rect(Rect::new(x, base + wave, WIND_SEGMENT, 2.0), color);
        }
    }
}

/// Fog band above and below the horizon
pub fn fog_band(layout: &FrameLayout) -> Rect {
    Rect::new(0.0, layout.horizon - 80.0, layout.width, 130.0)
}

pub fn draw_fog(surface: &mut dyn Surface, layout: &FrameLayout) {
    surface.fill_vertical_gradient(
        fog_band(layout),
        &[
            GradientStop::new(0.0, FOG.with_alpha(0.0)),
            GradientStop::new(0.5, FOG.with_alpha(0.8)),
            GradientStop::new(1.0, FOG.with_alpha(0.0)),
        ],
    );
}

/// Whole-surface veil shown while watch mode is off
pub fn draw_dim(surface: &mut dyn Surface, layout: &FrameLayout, alpha: f32) {
    surface.fill_rect(
        Rect::new(0.0, 0.0, layout.width, layout.height),
        FOG.with_alpha(alpha),
    );
}
