// Thu Oct 15 2026 - Alex

use crate::config::ConfigError;
use crate::fingerprint::ResolutionError;
use crate::hooks::HookError;
use crate::injection::{FinalizationError, PlanError};
use crate::method::PoolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Hook(#[from] HookError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Finalization(#[from] FinalizationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type PatchResult<T> = Result<T, PatchError>;
