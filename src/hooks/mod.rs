// Wed Oct 14 2026 - Alex

pub mod descriptor;
pub mod registry;
pub mod error;

pub use descriptor::{CallbackDescriptor, Hook, HookCategory};
pub use registry::{HookRegistry, SealedHooks};
pub use error::HookError;
