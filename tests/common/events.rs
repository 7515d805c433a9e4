//! Helpers for draining playback event channels

use crossbeam_channel::{Receiver, RecvTimeoutError};
use mergesort_studio::PlaybackEvent;
use std::time::{Duration, Instant};

/// Collect events until a `Stopped` event arrives or `timeout` elapses
///
/// The `Stopped` event is included as the last element when it arrives.
pub fn collect_until_stopped(rx: &Receiver<PlaybackEvent>, timeout: Duration) -> Vec<PlaybackEvent> {
    let deadline = Instant::now() + timeout;
    let mut events = Vec::new();

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(event) => {
                let stop = matches!(event, PlaybackEvent::Stopped { .. });
                events.push(event);
                if stop {
                    return events;
                }
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return events,
        }
    }
}

/// Cursor values reported by `CursorMoved` events, in order
pub fn cursor_moves(events: &[PlaybackEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            PlaybackEvent::CursorMoved { cursor } => Some(*cursor),
            _ => None,
        })
        .collect()
}
