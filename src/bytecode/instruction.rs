// Mon Oct 12 2026 - Alex

use crate::bytecode::{Opcode, Register};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single instruction of a method body.
///
/// Instructions decoded from the container keep their operands as opaque
/// text; only the forms the injector synthesizes are modelled structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Instruction {
    Decoded { opcode: Opcode, operands: String },
    InvokeStatic { arguments: Vec<Register>, target: String },
    MoveResultObject(Register),
    MoveObjectFrom16 { destination: Register, source: Register },
    MoveFrom16 { destination: Register, source: Register },
}

impl Instruction {
    pub fn decoded(opcode: Opcode, operands: &str) -> Self {
        Instruction::Decoded {
            opcode,
            operands: operands.trim().to_string(),
        }
    }

    pub fn invoke_static(arguments: &[Register], target: &str) -> Self {
        Instruction::InvokeStatic {
            arguments: arguments.to_vec(),
            target: target.to_string(),
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Decoded { opcode, .. } => *opcode,
            Instruction::InvokeStatic { .. } => Opcode::InvokeStatic,
            Instruction::MoveResultObject(_) => Opcode::MoveResultObject,
            Instruction::MoveObjectFrom16 { .. } => Opcode::MoveObjectFrom16,
            Instruction::MoveFrom16 { .. } => Opcode::MoveFrom16,
        }
    }

    pub fn invoke_target(&self) -> Option<&str> {
        match self {
            Instruction::InvokeStatic { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Registers passed to a synthesized invoke; empty for other forms.
    pub fn argument_registers(&self) -> &[Register] {
        match self {
            Instruction::InvokeStatic { arguments, .. } => arguments,
            _ => &[],
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(
            self,
            Instruction::MoveObjectFrom16 { .. } | Instruction::MoveFrom16 { .. }
        )
    }

    /// Parses one smali-style line, e.g. `iget-object v0, p0, La;->b:Lc;`.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Err("empty instruction".to_string());
        }

        let (mnemonic, operands) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], line[pos..].trim()),
            None => (line, ""),
        };

        let opcode: Opcode = mnemonic.parse()?;
        Ok(Instruction::decoded(opcode, operands))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Decoded { opcode, operands } if operands.is_empty() => {
                write!(f, "{}", opcode)
            }
            Instruction::Decoded { opcode, operands } => write!(f, "{} {}", opcode, operands),
            Instruction::InvokeStatic { arguments, target } => {
                write!(f, "invoke-static {{{}}}, {}", arguments.iter().join(", "), target)
            }
            Instruction::MoveResultObject(register) => write!(f, "move-result-object {}", register),
            Instruction::MoveObjectFrom16 { destination, source } => {
                write!(f, "move-object/from16 {}, {}", destination, source)
            }
            Instruction::MoveFrom16 { destination, source } => {
                write!(f, "move/from16 {}, {}", destination, source)
            }
        }
    }
}

impl FromStr for Instruction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instruction::parse_line(s)
    }
}

impl TryFrom<String> for Instruction {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Instruction::parse_line(&value)
    }
}

impl From<Instruction> for String {
    fn from(instruction: Instruction) -> Self {
        instruction.to_string()
    }
}
