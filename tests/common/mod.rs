//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod events;

use mergesort_studio::config::{PlaybackSettings, SpeedRange};
use std::time::Duration;

/// Upper bound on how long a test waits for a background ticker
pub fn test_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Settings whose interval is a single millisecond
pub fn fast_settings() -> PlaybackSettings {
    PlaybackSettings {
        speed_range: SpeedRange::new(1, 10),
        initial_speed: 10,
    }
}

/// Settings slow enough that no tick lands during a test
pub fn frozen_settings() -> PlaybackSettings {
    PlaybackSettings {
        speed_range: SpeedRange::new(1, 60_000),
        initial_speed: 1,
    }
}
