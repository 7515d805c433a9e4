//! Playback settings
//!
//! Speed is an integer on a bounded slider. Higher values mean shorter
//! waits between automatic ticks:
//!
//! ```text
//! interval_ms = (max + 1) - speed
//! ```
//!
//! With the default range `100..=1000` the slowest speed waits 901 ms and
//! the fastest 1 ms; the default speed of 750 waits 251 ms.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default lower speed bound
pub const DEFAULT_MIN_SPEED: u32 = 100;

/// Default upper speed bound
pub const DEFAULT_MAX_SPEED: u32 = 1000;

/// Default speed for a fresh player
pub const DEFAULT_SPEED: u32 = 750;

/// Inclusive bounds on the speed slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: u32,
    pub max: u32,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SPEED,
            max: DEFAULT_MAX_SPEED,
        }
    }
}

impl SpeedRange {
    /// Create a range, swapping the bounds if given in reverse
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamp a requested speed into the range
    pub fn clamp(&self, speed: u32) -> u32 {
        speed.clamp(self.min, self.max)
    }

    /// Delay between automatic ticks at `speed`
    pub fn interval(&self, speed: u32) -> Duration {
        let speed = self.clamp(speed);
        Duration::from_millis(u64::from(self.max + 1 - speed))
    }
}

/// Persistent playback preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Slider bounds
    #[serde(default)]
    pub speed_range: SpeedRange,

    /// Speed a new player starts with
    #[serde(default = "default_speed")]
    pub initial_speed: u32,
}

fn default_speed() -> u32 {
    DEFAULT_SPEED
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            speed_range: SpeedRange::default(),
            initial_speed: DEFAULT_SPEED,
        }
    }
}

impl PlaybackSettings {
    /// Initial speed after clamping to the configured range
    pub fn clamped_initial_speed(&self) -> u32 {
        self.speed_range.clamp(self.initial_speed)
    }
}
