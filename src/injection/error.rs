// Wed Oct 14 2026 - Alex

use crate::bytecode::{Opcode, Register};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinalizationError {
    #[error("Hooks were already applied, finalization runs once")]
    AlreadyFinalized,
    #[error("No target method resolved before finalization")]
    NoTargetResolved,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Parameter p{parameter} is outside the {count} declared parameters")]
    ParameterOutOfRange { parameter: usize, count: usize },
    #[error("Register count {registers} cannot hold {parameters} parameters")]
    RegisterCountTooSmall { registers: usize, parameters: usize },
    #[error("Register {register} (v{absolute}) does not fit a 4-bit {opcode} argument")]
    RegisterOutOfRange { opcode: Opcode, register: Register, absolute: usize },
}
