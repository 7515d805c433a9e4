//! Playback data types

use crate::trace::Step;

/// Whether the cursor is advancing on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Cursor moves only on manual steps
    #[default]
    Idle,
    /// A timer advances the cursor
    Playing,
}

impl PlaybackState {
    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Playing => "Playing",
        }
    }

    /// Localized status label
    pub fn label(&self) -> String {
        match self {
            PlaybackState::Idle => rust_i18n::t!("playback.idle").into_owned(),
            PlaybackState::Playing => rust_i18n::t!("playback.playing").into_owned(),
        }
    }
}

/// Result of one automatic-advance tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed
    Idle,
    /// Cursor moved to this index and playback continues
    Advanced(usize),
    /// Cursor sits on the last index and playback has stopped
    Finished(usize),
}

impl TickOutcome {
    /// Whether the ticker should keep running
    pub fn keeps_playing(&self) -> bool {
        matches!(self, TickOutcome::Advanced(_))
    }
}

/// Borrowed read view of a controller
#[derive(Debug, Clone, Copy)]
pub struct PlaybackView<'a> {
    pub step: &'a Step,
    pub cursor: usize,
    pub total: usize,
    pub is_playing: bool,
}

impl PlaybackView<'_> {
    /// Copy the view out, e.g. from behind a lock
    pub fn to_snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            step: self.step.clone(),
            cursor: self.cursor,
            total: self.total,
            is_playing: self.is_playing,
        }
    }

    /// Localized "Step: n / last" counter
    pub fn counter_label(&self) -> String {
        rust_i18n::t!(
            "playback.step_counter",
            cursor = self.cursor,
            last = self.total.saturating_sub(1)
        )
        .into_owned()
    }
}

/// Owned copy of a [`PlaybackView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub step: Step,
    pub cursor: usize,
    pub total: usize,
    pub is_playing: bool,
}

/// Notifications published by an [`AutoPlayer`](super::AutoPlayer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The cursor changed (manual step or tick)
    CursorMoved { cursor: usize },
    /// Automatic advance began
    Started { cursor: usize },
    /// Automatic advance ended (paused, reached the end, or reset)
    Stopped { cursor: usize },
    /// A new trace replaced the old one; cursor is back at 0
    Reset { total: usize },
}
