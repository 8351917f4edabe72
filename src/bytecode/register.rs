// Mon Oct 12 2026 - Alex

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Highest register index reachable from the compact invoke encoding.
pub const MAX_4BIT_REGISTER: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Local(u16),
    Param(u16),
}

impl Register {
    pub fn local(index: u16) -> Self {
        Register::Local(index)
    }

    pub fn param(index: u16) -> Self {
        Register::Param(index)
    }

    pub fn index(&self) -> u16 {
        match self {
            Register::Local(i) | Register::Param(i) => *i,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Register::Param(_))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Local(i) => write!(f, "v{}", i),
            Register::Param(i) => write!(f, "p{}", i),
        }
    }
}

impl FromStr for Register {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let kind = chars.next();
        let index: u16 = chars
            .as_str()
            .parse()
            .map_err(|_| format!("invalid register '{}'", s))?;
        match kind {
            Some('v') => Ok(Register::Local(index)),
            Some('p') => Ok(Register::Param(index)),
            _ => Err(format!("invalid register '{}'", s)),
        }
    }
}

impl Serialize for Register {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
