//! Reference code listing shown next to the animation

use serde::{Deserialize, Serialize};

/// Classroom merge sort shown alongside the trace
pub const REFERENCE_LISTING: &[&str] = &[
    "def merge_sort(arr):",
    "    if len(arr) <= 1:",
    "        return arr",
    "    mid = len(arr) // 2",
    "    left = merge_sort(arr[:mid])",
    "    right = merge_sort(arr[mid:])",
    "    return merge(left, right)",
    "",
    "def merge(left, right):",
    "    result = []",
    "    while left and right:",
    "        if left[0] <= right[0]:",
    "            result.append(left.pop(0))",
    "        else:",
    "            result.append(right.pop(0))",
    "    return result + left + right",
];

/// Line of [`REFERENCE_LISTING`] a step highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeLine {
    Entry,
    Recurse,
    ReturnMerged,
    MergeEntry,
    CompareHeads,
    TakeLeft,
    TakeRight,
    AppendRest,
}

impl CodeLine {
    /// Zero-based line index into [`REFERENCE_LISTING`]
    pub fn line(&self) -> usize {
        match self {
            CodeLine::Entry => 0,
            CodeLine::Recurse => 4,
            CodeLine::ReturnMerged => 6,
            CodeLine::MergeEntry => 8,
            CodeLine::CompareHeads => 11,
            CodeLine::TakeLeft => 12,
            CodeLine::TakeRight => 14,
            CodeLine::AppendRest => 15,
        }
    }

    /// Source text of the line
    pub fn text(&self) -> &'static str {
        REFERENCE_LISTING[self.line()]
    }
}
