// Tue Oct 13 2026 - Alex

use crate::bytecode::Opcode;
use crate::method::{AccessFlags, MethodHandle};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative shape of a method. Absent or empty fields are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    name: String,
    #[serde(default)]
    return_type: Option<String>,
    #[serde(default)]
    parameters: Option<Vec<String>>,
    #[serde(default)]
    access_flags: Option<AccessFlags>,
    #[serde(default)]
    opcodes: Vec<Opcode>,
    #[serde(default)]
    strings: Vec<String>,
}

impl Signature {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            return_type: None,
            parameters: None,
            access_flags: None,
            opcodes: Vec::new(),
            strings: Vec::new(),
        }
    }

    pub fn with_return_type(mut self, return_type: &str) -> Self {
        self.return_type = Some(return_type.to_string());
        self
    }

    pub fn with_parameters<S: AsRef<str>>(mut self, parameters: &[S]) -> Self {
        self.parameters = Some(parameters.iter().map(|p| p.as_ref().to_string()).collect());
        self
    }

    pub fn with_access_flags(mut self, flags: AccessFlags) -> Self {
        self.access_flags = Some(flags);
        self
    }

    pub fn with_opcodes(mut self, opcodes: &[Opcode]) -> Self {
        self.opcodes = opcodes.to_vec();
        self
    }

    pub fn with_strings<S: AsRef<str>>(mut self, strings: &[S]) -> Self {
        self.strings = strings.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn parameters(&self) -> Option<&[String]> {
        self.parameters.as_deref()
    }

    pub fn access_flags(&self) -> Option<AccessFlags> {
        self.access_flags
    }

    pub fn opcodes(&self) -> &[Opcode] {
        &self.opcodes
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// True when no predicate is active, i.e. every method would match.
    pub fn is_degenerate(&self) -> bool {
        self.return_type.is_none()
            && self.parameters.is_none()
            && self.access_flags.is_none()
            && self.opcodes.is_empty()
            && self.strings.is_empty()
    }

    pub fn matches_return_type(&self, method: &MethodHandle) -> bool {
        match &self.return_type {
            Some(expected) => method.return_type() == expected.as_str(),
            None => true,
        }
    }

    pub fn matches_parameters(&self, method: &MethodHandle) -> bool {
        match &self.parameters {
            Some(expected) => method.parameters() == expected.as_slice(),
            None => true,
        }
    }

    pub fn matches_access_flags(&self, method: &MethodHandle) -> bool {
        match self.access_flags {
            Some(expected) => method.access_flags == expected,
            None => true,
        }
    }

    pub fn matches_opcodes(&self, method: &MethodHandle) -> bool {
        if self.opcodes.is_empty() {
            return true;
        }
        let body: Vec<Opcode> = method.opcodes().collect();
        contains_run(&body, &self.opcodes)
    }

    pub fn matches_strings(&self, method: &MethodHandle) -> bool {
        if self.strings.is_empty() {
            return true;
        }
        let constants = method.string_constants();
        self.strings
            .iter()
            .all(|needle| constants.iter().any(|constant| constant.contains(needle.as_str())))
    }

    pub fn matches(&self, method: &MethodHandle) -> bool {
        self.matches_return_type(method)
            && self.matches_parameters(method)
            && self.matches_access_flags(method)
            && self.matches_opcodes(method)
            && self.matches_strings(method)
    }
}

/// Position of the first strictly contiguous occurrence of `pattern` in `body`.
pub fn find_run(body: &[Opcode], pattern: &[Opcode]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > body.len() {
        return None;
    }
    body.windows(pattern.len()).position(|window| window == pattern)
}

pub fn contains_run(body: &[Opcode], pattern: &[Opcode]) -> bool {
    find_run(body, pattern).is_some()
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(params) = &self.parameters {
            write!(f, " ({})", params.concat())?;
        } else {
            write!(f, " (*)")?;
        }

        write!(f, "{}", self.return_type.as_deref().unwrap_or("*"))?;

        if !self.opcodes.is_empty() {
            write!(f, " [{}]", self.opcodes.iter().join(", "))?;
        }

        if !self.strings.is_empty() {
            write!(f, " strings={:?}", self.strings)?;
        }

        Ok(())
    }
}
