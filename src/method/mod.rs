// Mon Oct 12 2026 - Alex

pub mod access;
pub mod error;
pub mod handle;
pub mod pool;

pub use access::AccessFlags;
pub use error::PoolError;
pub use handle::{MethodHandle, MethodRef};
pub use pool::{MethodId, MethodPool};
