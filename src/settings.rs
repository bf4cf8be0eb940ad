//! Scene configuration
//!
//! Persisted as JSON in LocalStorage on the web; native builds use defaults
//! or an explicit JSON string.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Snowflakes in the pool
    pub fn particle_count(&self) -> usize {
        match self {
            QualityPreset::Low => 75,
            QualityPreset::Medium => 150,
            QualityPreset::High => 300,
        }
    }

    /// Frame-rate ceiling (None = every refresh)
    pub fn frame_cap_fps(&self) -> Option<f32> {
        match self {
            QualityPreset::Low => Some(30.0),
            QualityPreset::Medium => None,
            QualityPreset::High => None,
        }
    }

    /// Whether the wind overlay is drawn only on even ticks
    pub fn skip_alternate_wind(&self) -> bool {
        match self {
            QualityPreset::Low => true,
            QualityPreset::Medium => true,
            QualityPreset::High => false,
        }
    }
}

/// Which way the party faces while walking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Facing {
    /// Toward the viewer
    #[default]
    Front,
    /// Away from the viewer, up the path
    Back,
}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Cost/quality preset
    pub quality: QualityPreset,
    /// Overrides the preset's snowflake count
    pub particle_count: Option<usize>,

    // === Geometry ===
    /// Screen pixels per sprite pixel
    pub pixel_scale: u32,
    /// Terrain tile edge, in sprite pixels
    pub tile_size: u32,

    // === Motion ===
    /// Camera scroll, screen pixels per second
    pub scroll_speed: f32,
    /// Enemy patrol speed, screen pixels per second
    pub enemy_speed: f32,
    pub party_facing: Facing,

    // === Scheduling ===
    /// Overrides the preset's frame-rate ceiling
    pub frame_cap_fps: Option<f32>,
    /// Overrides the preset's wind-skip behaviour
    pub skip_alternate_wind: Option<bool>,
    /// Quiet period before a resize is applied
    pub resize_debounce_ms: f64,

    // === Presentation ===
    /// Alpha of the dim overlay drawn while watch mode is off (0 = host dims)
    pub dim_alpha: f32,
    /// Fixed RNG seed (None = seeded from the host clock)
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particle_count: None,

            pixel_scale: 3,
            tile_size: 16,

            scroll_speed: 50.0,
            enemy_speed: 60.0,
            party_facing: Facing::Front,

            frame_cap_fps: None,
            skip_alternate_wind: None,
            resize_debounce_ms: 250.0,

            dim_alpha: 0.0,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Create a config from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse and validate JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values that would make the scene degenerate
    pub fn validate(&self) -> Result<()> {
        if self.pixel_scale == 0 {
            return Err(SceneError::InvalidConfig("pixel_scale must be > 0".into()));
        }
        if self.tile_size == 0 {
            return Err(SceneError::InvalidConfig("tile_size must be > 0".into()));
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "scroll_speed must be finite and >= 0, got {}",
                self.scroll_speed
            )));
        }
        if !self.enemy_speed.is_finite() || self.enemy_speed < 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "enemy_speed must be finite and >= 0, got {}",
                self.enemy_speed
            )));
        }
        if let Some(fps) = self.frame_cap_fps {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(SceneError::InvalidConfig(format!(
                    "frame_cap_fps must be > 0, got {fps}"
                )));
            }
        }
        if !(self.resize_debounce_ms.is_finite() && self.resize_debounce_ms >= 0.0) {
            return Err(SceneError::InvalidConfig(
                "resize_debounce_ms must be >= 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.dim_alpha) {
            return Err(SceneError::InvalidConfig(format!(
                "dim_alpha must be within 0..=1, got {}",
                self.dim_alpha
            )));
        }
        Ok(())
    }

    /// Effective snowflake count
    pub fn particle_count(&self) -> usize {
        self.particle_count
            .unwrap_or_else(|| self.quality.particle_count())
    }

    /// Effective frame-rate ceiling
    pub fn frame_cap_fps(&self) -> Option<f32> {
        self.frame_cap_fps.or_else(|| self.quality.frame_cap_fps())
    }

    /// Effective wind-skip
    pub fn skip_alternate_wind(&self) -> bool {
        self.skip_alternate_wind
            .unwrap_or_else(|| self.quality.skip_alternate_wind())
    }

    /// On-screen terrain tile pitch
    pub fn tile_px(&self) -> f32 {
        (self.tile_size * self.pixel_scale) as f32
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "narshe_scene_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded scene config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored scene config: {e}"),
                }
            }
        }

        log::info!("Using default scene config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Scene config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
