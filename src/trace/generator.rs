//! Merge sort step-trace generator
//!
//! [`generate_trace`] runs a top-down merge sort over a private working
//! buffer and records a [`Step`] for every division, comparison, placement
//! and completed range. Each step owns a fresh copy of the buffer.
//!
//! Recursion is depth-first and left-first: the left half of a range is
//! fully divided and merged before the right half begins. The displayed
//! step order depends on it.

use super::listing::CodeLine;
use super::narration::Narration;
use super::types::{ActiveRange, Step, StepKind, Trace, Value};

/// Build the full step trace for sorting `input`
///
/// Never fails and never touches `input`. Empty and single-element inputs
/// produce exactly an `init` step followed by a `complete` step.
pub fn generate_trace(input: &[Value]) -> Trace {
    let mut recorder = Recorder {
        work: input.to_vec(),
        steps: Vec::with_capacity(estimated_steps(input.len())),
    };

    recorder.push(StepKind::Init, Narration::Start, Vec::new(), None);

    if input.len() > 1 {
        recorder.sort(0, input.len() - 1);
    }

    let all = (0..input.len()).collect();
    recorder.push(StepKind::Complete, Narration::Finished, all, None);

    tracing::debug!(
        len = input.len(),
        steps = recorder.steps.len(),
        "generated merge sort trace"
    );

    // init and complete are always present
    Trace {
        steps: recorder.steps,
    }
}

/// Rough upper bound used to size the step buffer
fn estimated_steps(n: usize) -> usize {
    if n < 2 {
        return 2;
    }
    let depth = usize::BITS - (n - 1).leading_zeros();
    2 + 3 * (n - 1) + 2 * n * depth as usize
}

struct Recorder {
    work: Vec<Value>,
    steps: Vec<Step>,
}

impl Recorder {
    fn push(
        &mut self,
        kind: StepKind,
        narration: Narration,
        indices: Vec<usize>,
        active_range: Option<ActiveRange>,
    ) {
        let annotation = match (kind, narration) {
            (StepKind::Init | StepKind::Complete, _) => CodeLine::Entry,
            (StepKind::Divide, _) => CodeLine::Recurse,
            (StepKind::Sorted, _) => CodeLine::ReturnMerged,
            (StepKind::Compare, _) => CodeLine::CompareHeads,
            (StepKind::Merge, Narration::TakeLeft { .. }) => CodeLine::TakeLeft,
            (StepKind::Merge, Narration::TakeRight { .. }) => CodeLine::TakeRight,
            (StepKind::Merge, Narration::DrainLeft { .. } | Narration::DrainRight { .. }) => {
                CodeLine::AppendRest
            }
            (StepKind::Merge, _) => CodeLine::MergeEntry,
        };

        self.steps.push(Step {
            array: self.work.clone(),
            indices,
            active_range,
            kind,
            narration,
            annotation: Some(annotation),
        });
    }

    fn sort(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }

        let range = ActiveRange::new(low, high);
        let mid = range.mid();
        self.push(
            StepKind::Divide,
            Narration::Split { low, high, mid },
            Vec::new(),
            Some(range),
        );

        self.sort(low, mid);
        self.sort(mid + 1, high);
        self.merge(range);
    }

    fn merge(&mut self, range: ActiveRange) {
        let ActiveRange { low, high } = range;
        let mid = range.mid();
        let left = self.work[low..=mid].to_vec();
        let right = self.work[mid + 1..=high].to_vec();

        self.push(
            StepKind::Merge,
            Narration::MergeRange { low, high },
            Vec::new(),
            Some(range),
        );

        let (mut i, mut j, mut k) = (0, 0, low);

        while i < left.len() && j < right.len() {
            self.push(
                StepKind::Compare,
                Narration::Compare {
                    left: left[i],
                    right: right[j],
                },
                vec![low + i, mid + 1 + j],
                Some(range),
            );

            // `<=` keeps equal values in input order
            let (value, narration) = if left[i] <= right[j] {
                let value = left[i];
                i += 1;
                (value, Narration::TakeLeft { value })
            } else {
                let value = right[j];
                j += 1;
                (value, Narration::TakeRight { value })
            };
            self.work[k] = value;
            self.push(StepKind::Merge, narration, vec![k], Some(range));
            k += 1;
        }

        for &value in &left[i..] {
            self.work[k] = value;
            self.push(
                StepKind::Merge,
                Narration::DrainLeft { value },
                vec![k],
                Some(range),
            );
            k += 1;
        }

        for &value in &right[j..] {
            self.work[k] = value;
            self.push(
                StepKind::Merge,
                Narration::DrainRight { value },
                vec![k],
                Some(range),
            );
            k += 1;
        }

        self.push(
            StepKind::Sorted,
            Narration::RangeSorted { low, high },
            Vec::new(),
            Some(range),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(trace: &Trace) -> Vec<StepKind> {
        trace.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let trace = generate_trace(&[]);
        assert_eq!(kinds(&trace), vec![StepKind::Init, StepKind::Complete]);
        assert!(trace[0].array.is_empty());
        assert!(trace[1].indices.is_empty());
        assert!(trace[1].active_range.is_none());
    }

    #[test]
    fn test_single_element() {
        let trace = generate_trace(&[7]);
        assert_eq!(kinds(&trace), vec![StepKind::Init, StepKind::Complete]);
        assert_eq!(trace[0].array, vec![7]);
        assert_eq!(trace[1].array, vec![7]);
        assert_eq!(trace[1].indices, vec![0]);
    }

    #[test]
    fn test_two_elements_exact_shape() {
        let trace = generate_trace(&[2, 1]);
        assert_eq!(
            kinds(&trace),
            vec![
                StepKind::Init,
                StepKind::Divide,
                StepKind::Merge,
                StepKind::Compare,
                StepKind::Merge,
                StepKind::Merge,
                StepKind::Sorted,
                StepKind::Complete,
            ]
        );
        assert_eq!(trace[3].indices, vec![0, 1]);
        assert_eq!(trace[4].narration, Narration::TakeRight { value: 1 });
        assert_eq!(trace[4].array, vec![1, 1]);
        assert_eq!(trace[5].narration, Narration::DrainLeft { value: 2 });
        assert_eq!(trace[5].indices, vec![1]);
        assert_eq!(trace.sorted(), &[1, 2]);
    }

    #[test]
    fn test_split_narration_uses_floor_midpoint() {
        let trace = generate_trace(&[4, 3, 2, 1, 0]);
        assert_eq!(
            trace[1].narration,
            Narration::Split {
                low: 0,
                high: 4,
                mid: 2
            }
        );
        assert_eq!(trace[1].active_range, Some(ActiveRange::new(0, 4)));
        assert!(trace[1].indices.is_empty());
    }

    #[test]
    fn test_left_subtree_resolves_first() {
        let trace = generate_trace(&[4, 3, 2, 1]);
        let ranges: Vec<_> = trace
            .iter()
            .filter(|s| s.kind == StepKind::Sorted)
            .filter_map(|s| s.active_range)
            .collect();
        assert_eq!(
            ranges,
            vec![
                ActiveRange::new(0, 1),
                ActiveRange::new(2, 3),
                ActiveRange::new(0, 3)
            ]
        );
    }

    #[test]
    fn test_annotations() {
        let trace = generate_trace(&[2, 1]);
        assert_eq!(trace[0].annotation, Some(CodeLine::Entry));
        assert_eq!(trace[1].annotation, Some(CodeLine::Recurse));
        assert_eq!(trace[2].annotation, Some(CodeLine::MergeEntry));
        assert_eq!(trace[3].annotation, Some(CodeLine::CompareHeads));
        assert_eq!(trace[4].annotation, Some(CodeLine::TakeRight));
        assert_eq!(trace[5].annotation, Some(CodeLine::AppendRest));
        assert_eq!(trace[6].annotation, Some(CodeLine::ReturnMerged));
        assert_eq!(trace[7].annotation, Some(CodeLine::Entry));
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![9, 8, 7];
        let _ = generate_trace(&input);
        assert_eq!(input, vec![9, 8, 7]);
    }

    #[test]
    fn test_estimate_covers_actual() {
        for n in 0..40 {
            let input: Vec<Value> = (0..n as Value).rev().collect();
            assert!(generate_trace(&input).len() <= estimated_steps(n));
        }
    }
}
