//! Single-owner playback controller
//!
//! [`PlaybackController`] is the cursor state machine over a [`Trace`]. It
//! has no timer of its own: [`tick`](PlaybackController::tick) is the body of
//! one automatic advance, called by a [`Ticker`](super::Ticker) or directly by
//! a host loop.

use std::time::Duration;

use crate::config::{PlaybackSettings, SpeedRange};
use crate::trace::{Step, Trace};

use super::types::{PlaybackState, PlaybackView, TickOutcome};

/// Cursor, play state and speed over one trace
#[derive(Debug, Clone)]
pub struct PlaybackController {
    /// The trace being played
    trace: Trace,
    /// Current step index, always `< trace.len()`
    cursor: usize,
    state: PlaybackState,
    speed: u32,
    speed_range: SpeedRange,
    /// Bumped on every reset
    generation: u64,
}

impl PlaybackController {
    /// Create an idle controller at the first step
    pub fn new(trace: Trace, settings: &PlaybackSettings) -> Self {
        Self {
            trace,
            cursor: 0,
            state: PlaybackState::Idle,
            speed: settings.clamped_initial_speed(),
            speed_range: settings.speed_range,
            generation: 0,
        }
    }

    /// Get the trace being played
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Get current step index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the step under the cursor
    pub fn current_step(&self) -> &Step {
        &self.trace[self.cursor]
    }

    /// Number of steps
    pub fn total(&self) -> usize {
        self.trace.len()
    }

    pub fn last_index(&self) -> usize {
        self.trace.last_index()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.last_index()
    }

    /// Get current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Get playback speed
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn speed_range(&self) -> SpeedRange {
        self.speed_range
    }

    /// Delay before the next automatic tick
    pub fn interval(&self) -> Duration {
        self.speed_range.interval(self.speed)
    }

    /// Identifies the current trace; changes on every reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read view for renderers
    pub fn view(&self) -> PlaybackView<'_> {
        PlaybackView {
            step: self.current_step(),
            cursor: self.cursor,
            total: self.total(),
            is_playing: self.is_playing(),
        }
    }

    /// Step forward by one step; no-op at the end
    pub fn step_forward(&mut self) {
        self.cursor = (self.cursor + 1).min(self.last_index());
    }

    /// Step backward by one step; no-op at the start
    pub fn step_backward(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Start or stop automatic advance
    ///
    /// Starting on the last step is accepted but leaves the controller idle.
    pub fn set_playing(&mut self, playing: bool) {
        self.state = if playing && !self.is_at_end() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        };
    }

    /// Set playback speed, clamped to the configured range
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = self.speed_range.clamp(speed);
    }

    /// Replace the trace, rewind to the first step and stop playing
    pub fn reset(&mut self, trace: Trace) {
        self.trace = trace;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance one step if playing
    ///
    /// Landing on the last step stops playback.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }

        self.cursor = (self.cursor + 1).min(self.last_index());

        if self.is_at_end() {
            self.state = PlaybackState::Idle;
            TickOutcome::Finished(self.cursor)
        } else {
            TickOutcome::Advanced(self.cursor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::generate_trace;

    fn controller(input: &[i32]) -> PlaybackController {
        PlaybackController::new(generate_trace(input), &PlaybackSettings::default())
    }

    #[test]
    fn test_controller_lifecycle() {
        let mut c = controller(&[3, 1, 2]);
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.state(), PlaybackState::Idle);

        c.set_playing(true);
        assert_eq!(c.state(), PlaybackState::Playing);

        c.set_playing(false);
        assert_eq!(c.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_step() {
        let mut c = controller(&[3, 1, 2]);

        c.step_forward();
        assert_eq!(c.cursor(), 1);

        c.step_forward();
        assert_eq!(c.cursor(), 2);

        c.step_backward();
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn test_step_clamping() {
        let mut c = controller(&[2, 1]);
        c.step_backward();
        assert_eq!(c.cursor(), 0);

        for _ in 0..100 {
            c.step_forward();
        }
        assert_eq!(c.cursor(), c.last_index());
        c.step_forward();
        assert_eq!(c.cursor(), c.last_index());
    }

    #[test]
    fn test_play_at_end_stays_idle() {
        let mut c = controller(&[2, 1]);
        while !c.is_at_end() {
            c.step_forward();
        }
        c.set_playing(true);
        assert!(!c.is_playing());
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert_eq!(c.cursor(), c.last_index());
    }

    #[test]
    fn test_tick_from_penultimate_finishes() {
        let mut c = controller(&[4, 2, 3, 1]);
        while c.cursor() < c.last_index() - 1 {
            c.step_forward();
        }
        c.set_playing(true);

        assert_eq!(c.tick(), TickOutcome::Finished(c.last_index()));
        assert!(!c.is_playing());
        assert_eq!(c.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_tick_runs_to_end() {
        let mut c = controller(&[5, 3, 5, 1]);
        c.set_playing(true);

        let mut ticks = 0;
        while c.tick().keeps_playing() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, c.last_index());
        assert_eq!(c.current_step(), c.trace().last());
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut c = controller(&[3, 2, 1]);
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn test_manual_step_keeps_play_state() {
        let mut c = controller(&[3, 2, 1]);
        c.set_playing(true);
        c.step_forward();
        c.step_backward();
        assert!(c.is_playing());
    }

    #[test]
    fn test_speed_clamping() {
        let mut c = controller(&[1, 2]);
        assert_eq!(c.speed(), 750);
        assert_eq!(c.interval(), Duration::from_millis(251));

        c.set_speed(100_000);
        assert_eq!(c.speed(), 1000);

        c.set_speed(0);
        assert_eq!(c.speed(), 100);
    }

    #[test]
    fn test_reset() {
        let mut c = controller(&[3, 2, 1]);
        c.step_forward();
        c.set_playing(true);
        let before = c.generation();

        c.reset(generate_trace(&[9, 8]));
        assert_eq!(c.cursor(), 0);
        assert!(!c.is_playing());
        assert_eq!(c.current_step().array, vec![9, 8]);
        assert_ne!(c.generation(), before);
    }

    #[test]
    fn test_view() {
        let mut c = controller(&[2, 1]);
        c.step_forward();
        let view = c.view();
        assert_eq!(view.cursor, 1);
        assert_eq!(view.total, c.total());
        assert!(!view.is_playing);
        assert_eq!(view.to_snapshot().step, c.trace()[1]);
    }

    #[test]
    fn test_single_step_trace() {
        let trace = crate::trace::Trace::from_steps(vec![generate_trace(&[]).first().clone()])
            .unwrap();
        let mut c = PlaybackController::new(trace, &PlaybackSettings::default());
        c.step_forward();
        c.step_backward();
        c.set_playing(true);
        assert_eq!(c.cursor(), 0);
        assert!(!c.is_playing());
    }
}
