// Mon Oct 12 2026 - Alex

pub mod opcode;
pub mod register;
pub mod instruction;

pub use opcode::Opcode;
pub use register::{Register, MAX_4BIT_REGISTER};
pub use instruction::Instruction;

pub fn parse_listing(lines: &[&str]) -> Result<Vec<Instruction>, String> {
    lines.iter().map(|line| Instruction::parse_line(line)).collect()
}
