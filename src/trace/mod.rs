//! Merge sort step traces
//!
//! This module turns an input array into the ordered list of snapshots a
//! learner steps through. Generation is a pure function of the input; the
//! result is never mutated afterwards.
//!
//! # Step kinds
//!
//! - `init` / `complete` bracket every trace
//! - `divide` announces a split of the active range
//! - `compare` highlights the two heads being compared
//! - `merge` announces a merge (no highlight) or places one value
//! - `sorted` marks a range as internally ordered

pub mod export;
pub mod generator;
pub mod listing;
pub mod narration;
pub mod types;

pub use export::{ExportedStep, TraceExport};
pub use generator::generate_trace;
pub use listing::{CodeLine, REFERENCE_LISTING};
pub use narration::Narration;
pub use types::{ActiveRange, Step, StepKind, Trace, Value};
