//! Thread-safe player with automatic advance
//!
//! [`AutoPlayer`] owns a [`PlaybackController`] behind one mutex and at most
//! one [`Ticker`]. Every operation that could race a tick (pausing,
//! resetting, dropping the player) first cancels the ticker, which joins its
//! thread, and only then touches the controller.
//!
//! Renderers subscribe with [`AutoPlayer::events`] and redraw on
//! [`PlaybackEvent::CursorMoved`].

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::PlaybackSettings;
use crate::error::Result;
use crate::trace::{Step, Trace};

use super::controller::PlaybackController;
use super::ticker::Ticker;
use super::types::{PlaybackEvent, PlaybackSnapshot};

/// Playback controller driven by a background timer
#[derive(Debug)]
pub struct AutoPlayer {
    controller: Arc<Mutex<PlaybackController>>,
    ticker: Option<Ticker>,
    event_tx: Sender<PlaybackEvent>,
    event_rx: Receiver<PlaybackEvent>,
}

impl AutoPlayer {
    /// Create an idle player at the first step of `trace`
    pub fn new(trace: Trace, settings: &PlaybackSettings) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            controller: Arc::new(Mutex::new(PlaybackController::new(trace, settings))),
            ticker: None,
            event_tx,
            event_rx,
        }
    }

    /// Receiver for playback notifications
    pub fn events(&self) -> Receiver<PlaybackEvent> {
        self.event_rx.clone()
    }

    /// Copy of the current step, cursor, total and play state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.controller.lock().view().to_snapshot()
    }

    /// Copy of the step at `cursor`, wherever playback is now
    pub fn step_at(&self, cursor: usize) -> Option<Step> {
        self.controller.lock().trace().get(cursor).cloned()
    }

    /// Run `f` against the controller under its lock
    pub fn with_controller<R>(&self, f: impl FnOnce(&PlaybackController) -> R) -> R {
        f(&self.controller.lock())
    }

    pub fn cursor(&self) -> usize {
        self.controller.lock().cursor()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.lock().is_playing()
    }

    /// Whether a ticker thread is currently alive
    pub fn has_active_ticker(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Step forward by one step; allowed while playing
    pub fn step_forward(&self) {
        self.step_with(PlaybackController::step_forward);
    }

    /// Step backward by one step; allowed while playing
    pub fn step_backward(&self) {
        self.step_with(PlaybackController::step_backward);
    }

    fn step_with(&self, op: fn(&mut PlaybackController)) {
        let moved = {
            let mut c = self.controller.lock();
            let before = c.cursor();
            op(&mut c);
            (c.cursor() != before).then_some(c.cursor())
        };
        if let Some(cursor) = moved {
            self.emit(PlaybackEvent::CursorMoved { cursor });
        }
    }

    /// Start or stop automatic advance
    ///
    /// Starting on the last step leaves the player idle. Starting while a
    /// ticker is already running does not arm a second one. Every
    /// `Idle -> Playing` transition joins the previous ticker and arms a
    /// fresh one.
    pub fn set_playing(&mut self, playing: bool) -> Result<()> {
        if !playing {
            self.disarm();
            let cursor = {
                let mut c = self.controller.lock();
                let was_playing = c.is_playing();
                c.set_playing(false);
                was_playing.then_some(c.cursor())
            };
            if let Some(cursor) = cursor {
                tracing::info!(cursor, "playback paused");
                self.emit(PlaybackEvent::Stopped { cursor });
            }
            return Ok(());
        }

        let (started, cursor) = {
            let mut c = self.controller.lock();
            let was_playing = c.is_playing();
            c.set_playing(true);
            (c.is_playing() && !was_playing, c.cursor())
        };

        if !self.is_playing() {
            tracing::debug!(cursor, "play requested at end of trace; staying idle");
            return Ok(());
        }

        if started {
            // The previous ticker may have stopped playback but still be
            // delivering its final events; it never ticks again, so join it.
            self.disarm();
            tracing::info!(cursor, "playback started");
            self.emit(PlaybackEvent::Started { cursor });
        } else if self.has_active_ticker() {
            return Ok(());
        }

        self.disarm();
        match Ticker::spawn(Arc::clone(&self.controller), self.event_tx.clone()) {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(e) => {
                self.controller.lock().set_playing(false);
                self.emit(PlaybackEvent::Stopped { cursor });
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Update the tick speed; the wait already in progress is not shortened
    pub fn set_speed(&self, speed: u32) {
        let mut c = self.controller.lock();
        c.set_speed(speed);
        tracing::debug!(speed = c.speed(), interval = ?c.interval(), "speed changed");
    }

    /// Replace the trace, rewind and stop
    ///
    /// The running ticker is cancelled and joined before the trace is
    /// replaced.
    pub fn reset(&mut self, trace: Trace) {
        self.disarm();

        let (was_playing, total) = {
            let mut c = self.controller.lock();
            let was_playing = c.is_playing();
            c.reset(trace);
            (was_playing, c.total())
        };

        tracing::info!(total, "trace replaced");
        if was_playing {
            self.emit(PlaybackEvent::Stopped { cursor: 0 });
        }
        self.emit(PlaybackEvent::Reset { total });
    }

    fn disarm(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    fn emit(&self, event: PlaybackEvent) {
        // The player holds a receiver, so the channel never disconnects
        let _ = self.event_tx.send(event);
    }
}

impl Drop for AutoPlayer {
    fn drop(&mut self) {
        self.disarm();
    }
}
