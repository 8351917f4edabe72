// Wed Oct 14 2026 - Alex

pub mod error;
pub mod registers;
pub mod planner;
pub mod patch;

pub use error::{FinalizationError, PlanError};
pub use registers::{RegisterPlan, RegisterPlanner, TargetLayout};
pub use planner::{InjectionPlan, InjectionPlanner, Insertion};
pub use patch::{FinalizeReport, PlayerResponseHook, ResolvedTarget};
