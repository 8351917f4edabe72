// Fri Oct 16 2026 - Alex

pub mod json;
pub mod report;

pub use json::{JsonError, JsonSerializer};
pub use report::{ReportFormat, ReportGenerator};

use crate::injection::FinalizeReport;
use crate::method::{MethodHandle, MethodId};
use serde::{Deserialize, Serialize};

/// Result of a `patch` run: the finalized target and its new body.
#[derive(Debug, Clone, Serialize)]
pub struct PatchOutput {
    pub version: String,
    pub fingerprint: String,
    pub report: FinalizeReport,
    pub listing: Vec<String>,
}

impl PatchOutput {
    pub fn new(fingerprint: &str, report: FinalizeReport, method: &MethodHandle) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fingerprint: fingerprint.to_string(),
            report,
            listing: method.instructions().iter().map(|i| i.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub id: usize,
    pub method: String,
    pub instructions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutput {
    pub fingerprint: String,
    pub matches: Vec<MatchEntry>,
}

impl MatchOutput {
    pub fn new(fingerprint: &str) -> Self {
        Self {
            fingerprint: fingerprint.to_string(),
            matches: Vec::new(),
        }
    }

    pub fn push(&mut self, id: MethodId, method: &MethodHandle) {
        self.matches.push(MatchEntry {
            id: id.index(),
            method: method.reference().to_string(),
            instructions: method.instruction_count(),
        });
    }
}
