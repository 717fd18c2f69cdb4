//! Physics tuning and display preferences
//!
//! Persisted in LocalStorage so the feel can be tweaked without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable physics parameters
///
/// Defaults match the constants in [`crate::consts`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Bounce velocity retention (0.0 - 1.0)
    pub restitution: f32,
    /// Launch speed per pixel of drag, applied on top of the drag length
    pub speed_multiplier: f32,
    /// Frame delta clamp (seconds)
    pub max_frame_dt: f32,
    /// Floor contacts slower than this land without bouncing
    pub soft_landing_speed: f32,
    /// Rolling friction (pixels/s²)
    pub friction: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            speed_multiplier: SPEED_MULTIPLIER,
            max_frame_dt: MAX_FRAME_DT,
            soft_landing_speed: SOFT_LANDING_SPEED,
            friction: FRICTION,
        }
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsConfig,

    // === Aim preview ===
    /// Draw the dashed trajectory and arrow while dragging
    pub aim_preview: bool,
    /// Wall reflections traced by the dashed line
    pub preview_bounces: u32,

    /// Surface fill colour (any CSS colour)
    pub background: String,
}

impl PhysicsConfig {
    /// Copy with every field usable by the stepper
    ///
    /// `max_frame_dt` lands in `(0, MAX_FRAME_DT]` and `restitution` in
    /// `[0, 1]`. Other fields must be finite and non-negative. A field that
    /// breaks these rules falls back to its default.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let non_negative = |v: f32, fallback: f32| {
            if v.is_finite() && v >= 0.0 { v } else { fallback }
        };

        Self {
            gravity: non_negative(self.gravity, defaults.gravity),
            restitution: non_negative(self.restitution, defaults.restitution).min(1.0),
            speed_multiplier: non_negative(self.speed_multiplier, defaults.speed_multiplier),
            max_frame_dt: if self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0 {
                self.max_frame_dt.min(MAX_FRAME_DT)
            } else {
                defaults.max_frame_dt
            },
            soft_landing_speed: non_negative(self.soft_landing_speed, defaults.soft_landing_speed),
            friction: non_negative(self.friction, defaults.friction),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aim_preview: true,
            preview_bounces: PREVIEW_MAX_BOUNCES,
            background: BACKGROUND_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_box_settings";

    /// Copy with physics sanitized and the preview bounce count capped
    pub fn sanitized(&self) -> Self {
        let clean = Self {
            physics: self.physics.sanitized(),
            preview_bounces: self.preview_bounces.min(PREVIEW_BOUNCE_LIMIT),
            ..self.clone()
        };
        if clean != *self {
            log::warn!("Stored settings out of range, using {:?}", clean);
        }
        clean
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    /// and out-of-range values
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    ///
    /// Writes the result back, so defaults are seeded and out-of-range
    /// values are replaced in storage.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    settings.save();
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        let settings = Self::default();
        settings.save();
        settings
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
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
