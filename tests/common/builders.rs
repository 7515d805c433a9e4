//! Trace replay helpers
//!
//! [`replay_origins`] re-runs a trace's placements on original input
//! positions instead of values, which makes stability observable: equal
//! values can be told apart by where they started.

use mergesort_studio::{Narration, StepKind, Trace};

/// Final arrangement of original input positions implied by `trace`
pub fn replay_origins(trace: &Trace) -> Vec<usize> {
    let n = trace.first().array.len();
    let mut origins: Vec<usize> = (0..n).collect();
    let mut left: Vec<usize> = Vec::new();
    let mut right: Vec<usize> = Vec::new();

    for step in trace {
        match (step.kind, step.narration) {
            (StepKind::Merge, Narration::MergeRange { low, high }) => {
                let mid = (low + high) / 2;
                left = origins[low..=mid].to_vec();
                right = origins[mid + 1..=high].to_vec();
                left.reverse();
                right.reverse();
            }
            (StepKind::Merge, narration) => {
                let from_left = narration
                    .placed_from_left()
                    .expect("placement step must say which half it took from");
                let origin = if from_left { left.pop() } else { right.pop() }
                    .expect("placement from an exhausted half");
                origins[step.indices[0]] = origin;
            }
            _ => {}
        }
    }

    origins
}

/// Builder for inputs with deliberate duplicates
pub struct InputBuilder {
    values: Vec<i32>,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(mut self, value: i32) -> Self {
        self.values.push(value);
        self
    }

    pub fn repeat(mut self, value: i32, times: usize) -> Self {
        self.values.extend(std::iter::repeat(value).take(times));
        self
    }

    pub fn build(self) -> Vec<i32> {
        self.values
    }
}
