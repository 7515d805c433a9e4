//! JSON export of a trace for external renderers
//!
//! The export flattens each step into plain fields a renderer can consume
//! without linking this crate: the localized description and the listing
//! line are resolved at export time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StudioError};
use crate::i18n::Language;

use super::types::{ActiveRange, Step, StepKind, Trace, Value};

/// A step as written to an export file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedStep {
    pub array: Vec<Value>,
    pub indices: Vec<usize>,
    pub active_range: Option<ActiveRange>,
    pub kind: StepKind,
    pub description: String,
    pub code_line: Option<usize>,
}

impl ExportedStep {
    fn from_step(step: &Step, lang: Language) -> Self {
        Self {
            array: step.array.clone(),
            indices: step.indices.clone(),
            active_range: step.active_range,
            kind: step.kind,
            description: step.description_in(lang),
            code_line: step.annotation.map(|line| line.line()),
        }
    }
}

/// Complete export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceExport {
    /// When the export was produced
    pub generated_at: chrono::DateTime<chrono::Utc>,
    /// Locale code of the descriptions
    pub language: String,
    /// Unsorted input
    pub input: Vec<Value>,
    pub steps: Vec<ExportedStep>,
}

impl TraceExport {
    /// Flatten `trace` with descriptions in `lang`
    pub fn new(trace: &Trace, lang: Language) -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            language: lang.code().to_string(),
            input: trace.first().array.clone(),
            steps: trace
                .iter()
                .map(|step| ExportedStep::from_step(step, lang))
                .collect(),
        }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(StudioError::from)
    }

    /// Write pretty JSON to `path`
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), steps = self.steps.len(), "exported trace");
        Ok(())
    }
}
