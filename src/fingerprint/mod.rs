// Tue Oct 13 2026 - Alex

pub mod signature;
pub mod matcher;
pub mod cache;
pub mod database;
pub mod error;

pub use signature::Signature;
pub use matcher::FingerprintMatcher;
pub use cache::ResolutionCache;
pub use database::FingerprintDatabase;
pub use error::ResolutionError;
