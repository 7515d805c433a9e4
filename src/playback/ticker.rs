//! Automatic-advance timer
//!
//! A [`Ticker`] is a worker thread that ticks a shared
//! [`PlaybackController`] until playback stops. It is armed for one trace
//! generation: if the controller has been reset since, the thread exits
//! without touching it.
//!
//! The handle is the timer. Dropping it (or calling [`Ticker::cancel`])
//! signals the thread through a crossbeam channel and joins it, so once the
//! handle is gone no further tick can land.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::JoinHandle;

use super::controller::PlaybackController;
use super::types::{PlaybackEvent, TickOutcome};

/// Handle to a running automatic-advance thread
#[derive(Debug)]
pub struct Ticker {
    /// Stop signal; closing it also stops the thread
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    /// Spawn a ticker for the controller's current generation
    pub fn spawn(
        controller: Arc<Mutex<PlaybackController>>,
        events: Sender<PlaybackEvent>,
    ) -> std::io::Result<Self> {
        let generation = controller.lock().generation();
        let (stop_tx, stop_rx) = bounded(1);

        let handle = std::thread::Builder::new()
            .name("playback-ticker".to_string())
            .spawn(move || run(controller, events, stop_rx, generation))?;

        tracing::debug!(generation, "ticker armed");

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
            generation,
        })
    }

    /// Generation this ticker was armed for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the thread has exited on its own
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stop the thread and wait for it
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.try_send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!(generation = self.generation, "ticker thread panicked");
            }
            tracing::debug!(generation = self.generation, "ticker disarmed");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(
    controller: Arc<Mutex<PlaybackController>>,
    events: Sender<PlaybackEvent>,
    stop_rx: Receiver<()>,
    generation: u64,
) {
    loop {
        // Re-read every wait so speed changes apply from the next tick
        let interval = controller.lock().interval();

        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }

        let outcome = {
            let mut c = controller.lock();
            if c.generation() != generation {
                tracing::debug!(generation, "stale ticker exiting");
                return;
            }
            c.tick()
        };

        tracing::trace!(?outcome, "tick");

        match outcome {
            TickOutcome::Advanced(cursor) => {
                let _ = events.send(PlaybackEvent::CursorMoved { cursor });
            }
            TickOutcome::Finished(cursor) => {
                let _ = events.send(PlaybackEvent::CursorMoved { cursor });
                let _ = events.send(PlaybackEvent::Stopped { cursor });
                return;
            }
            TickOutcome::Idle => return,
        }
    }
}
