// Mon Oct 12 2026 - Alex

use crate::bytecode::{Instruction, Opcode};
use crate::method::{AccessFlags, PoolError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static CONST_STRING_OPERANDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[vp]\d+\s*,\s*"(.*)"$"#).expect("valid const-string regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    pub class: String,
    pub name: String,
    pub descriptor: String,
}

impl MethodRef {
    pub fn new(class: &str, name: &str, descriptor: &str) -> Self {
        Self {
            class: class.to_string(),
            name: name.to_string(),
            descriptor: descriptor.to_string(),
        }
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}{}", self.class, self.name, self.descriptor)
    }
}

/// A method body plus its identity. Identity fields (class, name, return
/// type, parameters) key the pool and are fixed after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodHandle {
    class: String,
    name: String,
    #[serde(default)]
    pub access_flags: AccessFlags,
    return_type: String,
    #[serde(default)]
    parameters: Vec<String>,
    pub register_count: usize,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub strings: Vec<String>,
}

impl MethodHandle {
    pub fn new(class: &str, name: &str, return_type: &str) -> Self {
        Self {
            class: class.to_string(),
            name: name.to_string(),
            access_flags: AccessFlags::empty(),
            return_type: return_type.to_string(),
            parameters: Vec::new(),
            register_count: 0,
            instructions: Vec::new(),
            strings: Vec::new(),
        }
    }

    pub fn with_access_flags(mut self, flags: AccessFlags) -> Self {
        self.access_flags = flags;
        self
    }

    pub fn with_parameters<S: AsRef<str>>(mut self, parameters: &[S]) -> Self {
        self.parameters = parameters.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_register_count(mut self, count: usize) -> Self {
        self.register_count = count;
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<Instruction>) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn with_strings<S: AsRef<str>>(mut self, strings: &[S]) -> Self {
        self.strings = strings.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn descriptor(&self) -> String {
        format!("({}){}", self.parameters.concat(), self.return_type)
    }

    pub fn reference(&self) -> MethodRef {
        MethodRef::new(&self.class, &self.name, &self.descriptor())
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn opcodes(&self) -> impl Iterator<Item = Opcode> + '_ {
        self.instructions.iter().map(Instruction::opcode)
    }

    /// Explicit string references plus literals loaded by `const-string`.
    pub fn string_constants(&self) -> Vec<&str> {
        let mut strings: Vec<&str> = self.strings.iter().map(String::as_str).collect();

        for instruction in &self.instructions {
            if let Instruction::Decoded { opcode, operands } = instruction {
                if !matches!(opcode, Opcode::ConstString | Opcode::ConstStringJumbo) {
                    continue;
                }
                if let Some(literal) = CONST_STRING_OPERANDS
                    .captures(operands)
                    .and_then(|caps| caps.get(1))
                {
                    strings.push(literal.as_str());
                }
            }
        }

        strings
    }

    pub fn add_instructions(&mut self, offset: usize, block: Vec<Instruction>) -> Result<(), PoolError> {
        if offset > self.instructions.len() {
            return Err(PoolError::OffsetOutOfBounds {
                method: self.reference().to_string(),
                offset,
                len: self.instructions.len(),
            });
        }

        self.instructions.splice(offset..offset, block);
        Ok(())
    }

    pub fn add_instruction(&mut self, offset: usize, instruction: Instruction) -> Result<(), PoolError> {
        self.add_instructions(offset, vec![instruction])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::Register;

    fn sample() -> MethodHandle {
        MethodHandle::new("Lcom/example/Player;", "build", "Ljava/lang/String;")
            .with_parameters(&["Ljava/lang/String;", "I", "Z"])
            .with_register_count(6)
            .with_instructions(vec![
                Instruction::parse_line("const-string v0, \"psps\"").unwrap(),
                Instruction::parse_line("return-object v0").unwrap(),
            ])
            .with_strings(&["explicit"])
    }

    #[test]
    fn test_reference_and_descriptor() {
        let method = sample();
        assert_eq!(method.descriptor(), "(Ljava/lang/String;IZ)Ljava/lang/String;");
        assert_eq!(
            method.reference().to_string(),
            "Lcom/example/Player;->build(Ljava/lang/String;IZ)Ljava/lang/String;"
        );
    }

    #[test]
    fn test_string_constants_include_const_string_literals() {
        let method = sample();
        assert_eq!(method.string_constants(), vec!["explicit", "psps"]);
    }

    #[test]
    fn test_add_instructions_shifts_body() {
        let mut method = sample();
        method
            .add_instructions(0, vec![Instruction::MoveResultObject(Register::local(1))])
            .unwrap();
        method
            .add_instruction(1, Instruction::parse_line("nop").unwrap())
            .unwrap();

        assert_eq!(method.instruction_count(), 4);
        assert_eq!(method.instructions()[0].opcode(), Opcode::MoveResultObject);
        assert_eq!(method.instructions()[1].opcode(), Opcode::Nop);
        assert_eq!(method.instructions()[2].opcode(), Opcode::ConstString);
    }

    #[test]
    fn test_add_instructions_out_of_bounds() {
        let mut method = sample();
        let err = method.add_instruction(3, Instruction::parse_line("nop").unwrap());
        assert!(matches!(err, Err(PoolError::OffsetOutOfBounds { offset: 3, len: 2, .. })));
        assert_eq!(method.instruction_count(), 2);
    }
}
