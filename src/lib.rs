//! # Merge Sort Studio
//!
//! An instructional merge sort visualizer core. The crate records every
//! observable micro-operation of a merge sort as an immutable snapshot and
//! replays the resulting trace under manual or timed control. Drawing the
//! snapshots is left to the caller.
//!
//! ## Architecture
//!
//! - **Trace**: [`generate_trace`] turns an input array into an ordered,
//!   non-empty list of [`Step`]s (init, divide, compare, merge, sorted, complete)
//! - **Playback**: [`PlaybackController`] moves a cursor over a trace;
//!   [`AutoPlayer`] adds a cancellable background ticker and an event channel
//! - **Input**: parsing and validation of typed, loaded, shared and random arrays
//! - **Localization**: step descriptions rendered through `rust-i18n`
//!   (English and Japanese)
//!
//! ## Example
//!
//! ```
//! use mergesort_studio::{generate_trace, PlaybackController, StepKind};
//! use mergesort_studio::config::PlaybackSettings;
//!
//! let trace = generate_trace(&[5, 3, 5, 1]);
//! assert_eq!(trace.first().kind, StepKind::Init);
//! assert_eq!(trace.sorted(), &[1, 3, 5, 5]);
//!
//! let mut controller = PlaybackController::new(trace, &PlaybackSettings::default());
//! controller.step_forward();
//! assert_eq!(controller.current_step().kind, StepKind::Divide);
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod playback;
pub mod trace;

// Re-export commonly used types
pub use config::StudioConfig;
pub use error::{InputError, Result, StudioError};
pub use i18n::Language;
pub use playback::{AutoPlayer, PlaybackController, PlaybackEvent, PlaybackState};
pub use trace::{generate_trace, ActiveRange, Narration, Step, StepKind, Trace};
