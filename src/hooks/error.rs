// Wed Oct 14 2026 - Alex

use crate::hooks::HookCategory;
use thiserror::Error;

/// Rejected hook registrations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookError {
    #[error("Invalid hook descriptor '{descriptor}': {reason}")]
    InvalidDescriptor { descriptor: String, reason: String },
    #[error("Hook '{descriptor}' takes {found} parameters, {category} hooks take {expected}")]
    ArityMismatch {
        descriptor: String,
        category: HookCategory,
        expected: usize,
        found: usize,
    },
    #[error("Hook '{descriptor}' must return the proto buffer value")]
    MissingReturnValue { descriptor: String },
    #[error("Hook registry is frozen, finalization already ran")]
    RegistryFrozen,
}
