//! Window and driver settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH, TICK_INTERVAL_MS};

/// Host window parameters (passed through to the host, not used by the core)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub resizable: bool,
    pub exit_on_close: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
            title: "Brick Breaker".to_string(),
            resizable: false,
            exit_on_close: true,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,

    // === Driver ===
    /// Milliseconds between frames. Physics steps are per tick, so this sets
    /// gameplay speed.
    pub tick_interval_ms: u64,
    /// Catch-up frames allowed per driver advance
    pub max_substeps: u32,

    // === Headless runner ===
    /// Steer the paddle automatically
    pub autopilot: bool,
    /// Sleep between frames instead of running flat out
    pub realtime: bool,
    /// Stop after this many frames
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
            autopilot: true,
            realtime: false,
            max_frames: 20_000,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Can't read settings {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.warn_if_retuned();
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Frame interval, never zero
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    fn warn_if_retuned(&self) {
        if self.tick_interval_ms != TICK_INTERVAL_MS {
            log::warn!(
                "Tick interval {} ms differs from the tuned {} ms; gameplay speed changes",
                self.tick_interval_ms,
                TICK_INTERVAL_MS
            );
        }
    }
}
