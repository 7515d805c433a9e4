//! Trace data types

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::i18n::Language;

use super::listing::CodeLine;
use super::narration::Narration;

/// Values sorted by the studio
pub type Value = i32;

/// Kind of micro-operation a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// The unmodified input, before any work
    Init,
    /// A range is about to be split at its midpoint
    Divide,
    /// Two elements, one from each half, are compared
    Compare,
    /// A merge is announced, or a value is placed during a merge
    Merge,
    /// A range has been merged and is internally ordered
    Sorted,
    /// The whole array is sorted
    Complete,
}

impl StepKind {
    /// Stable identifier used in exports and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::Divide => "divide",
            StepKind::Compare => "compare",
            StepKind::Merge => "merge",
            StepKind::Sorted => "sorted",
            StepKind::Complete => "complete",
        }
    }

    /// Localized label for display
    pub fn label(&self) -> String {
        let label = match self {
            StepKind::Init => rust_i18n::t!("kind.init"),
            StepKind::Divide => rust_i18n::t!("kind.divide"),
            StepKind::Compare => rust_i18n::t!("kind.compare"),
            StepKind::Merge => rust_i18n::t!("kind.merge"),
            StepKind::Sorted => rust_i18n::t!("kind.sorted"),
            StepKind::Complete => rust_i18n::t!("kind.complete"),
        };
        label.into_owned()
    }
}

/// Inclusive `[low, high]` index span under division or merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveRange {
    pub low: usize,
    pub high: usize,
}

impl ActiveRange {
    pub fn new(low: usize, high: usize) -> Self {
        debug_assert!(low <= high, "inverted range [{low}, {high}]");
        Self { low, high }
    }

    /// Midpoint used to split this range
    pub fn mid(&self) -> usize {
        (self.low + self.high) / 2
    }

    /// Number of positions covered
    pub fn len(&self) -> usize {
        self.high - self.low + 1
    }

    /// A range always covers at least one position
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.low..=self.high).contains(&index)
    }
}

/// One immutable snapshot of the sort at a single micro-operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Full working array at this instant
    pub array: Vec<Value>,
    /// Highlighted positions
    pub indices: Vec<usize>,
    /// Segment being divided or merged; absent for init and complete
    pub active_range: Option<ActiveRange>,
    pub kind: StepKind,
    /// Locale-free content of the description
    pub narration: Narration,
    /// Line of the reference listing to highlight
    pub annotation: Option<CodeLine>,
}

impl Step {
    /// Description in the current locale
    pub fn description(&self) -> String {
        self.narration.describe()
    }

    /// Description in an explicit language
    pub fn description_in(&self, lang: Language) -> String {
        self.narration.describe_in(lang)
    }

    /// Whether `index` is highlighted in this step
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Whether `index` lies inside the active range
    pub fn in_active_range(&self, index: usize) -> bool {
        self.active_range.is_some_and(|r| r.contains(index))
    }
}

/// Ordered, non-empty list of steps describing one merge sort execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Step>", into = "Vec<Step>")]
pub struct Trace {
    pub(super) steps: Vec<Step>,
}

impl Trace {
    /// Wrap a step list, rejecting an empty one
    pub fn from_steps(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(StudioError::EmptyTrace);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of steps (always at least one)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Array after the final step
    pub fn sorted(&self) -> &[Value] {
        &self.last().array
    }

    /// Number of steps of a given kind
    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl std::ops::Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl TryFrom<Vec<Step>> for Trace {
    type Error = StudioError;

    fn try_from(steps: Vec<Step>) -> Result<Self> {
        Trace::from_steps(steps)
    }
}

impl From<Trace> for Vec<Step> {
    fn from(trace: Trace) -> Self {
        trace.steps
    }
}
