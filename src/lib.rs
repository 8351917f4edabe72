// Mon Oct 12 2026 - Alex

pub mod bytecode;
pub mod method;
pub mod fingerprint;
pub mod hooks;
pub mod injection;
pub mod config;
pub mod error;
pub mod output;
pub mod cli;

pub use config::PatchConfig;
pub use error::{PatchError, PatchResult};
pub use fingerprint::{FingerprintDatabase, FingerprintMatcher, ResolutionCache, Signature};
pub use hooks::{Hook, HookCategory, HookRegistry};
pub use injection::{FinalizeReport, PlayerResponseHook, TargetLayout};
pub use method::{MethodHandle, MethodId, MethodPool};
