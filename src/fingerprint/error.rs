// Tue Oct 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Fingerprint '{signature}' matched no method")]
    NotFound { signature: String },
    #[error("Fingerprint '{signature}' is ambiguous, matched {}: {}", .candidates.len(), .candidates.join(", "))]
    Ambiguous {
        signature: String,
        candidates: Vec<String>,
    },
}

impl ResolutionError {
    pub fn signature(&self) -> &str {
        match self {
            ResolutionError::NotFound { signature } => signature,
            ResolutionError::Ambiguous { signature, .. } => signature,
        }
    }
}
