//! Trace playback
//!
//! This module exposes a generated trace as an explorable sequence: a single
//! cursor moved by manual steps or by a timer, with a speed slider and
//! stop-at-end semantics (playback never loops).
//!
//! # Layers
//!
//! - [`PlaybackController`] - the cursor state machine, single owner, no timer
//! - [`Ticker`] - one background timer thread, cancelled by dropping its handle
//! - [`AutoPlayer`] - controller + ticker + event channel for renderers
//!
//! # State machine
//!
//! ```text
//!            set_playing(true), cursor < last
//!   Idle ─────────────────────────────────────▶ Playing
//!    ▲                                            │
//!    └──── set_playing(false) / last step / reset ┘
//! ```
//!
//! Manual steps move the cursor in either state without changing it.

pub mod controller;
pub mod player;
pub mod ticker;
pub mod types;

pub use controller::PlaybackController;
pub use player::AutoPlayer;
pub use ticker::Ticker;
pub use types::{PlaybackEvent, PlaybackSnapshot, PlaybackState, PlaybackView, TickOutcome};
