// Wed Oct 14 2026 - Alex

use crate::hooks::{Hook, HookCategory, HookError};

/// Append-only hook collection. Sealing hands the hooks to finalization
/// exactly once; afterwards every registration is rejected.
pub struct HookRegistry {
    hooks: Vec<Hook>,
    sealed: bool,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            sealed: false,
        }
    }

    pub fn register(&mut self, hook: Hook) -> Result<(), HookError> {
        if self.sealed {
            return Err(HookError::RegistryFrozen);
        }
        hook.validate()?;

        log::debug!("Registered {} hook {}", hook.category, hook.target);
        self.hooks.push(hook);
        Ok(())
    }

    pub fn register_descriptor(&mut self, category: HookCategory, descriptor: &str) -> Result<(), HookError> {
        if self.sealed {
            return Err(HookError::RegistryFrozen);
        }
        self.register(Hook::new(category, descriptor)?)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hook> {
        self.hooks.iter()
    }

    pub fn seal(&mut self) -> Result<SealedHooks, HookError> {
        if self.sealed {
            return Err(HookError::RegistryFrozen);
        }
        self.sealed = true;
        Ok(SealedHooks {
            hooks: std::mem::take(&mut self.hooks),
        })
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SealedHooks {
    hooks: Vec<Hook>,
}

impl SealedHooks {
    /// Hooks of one category in registration order.
    pub fn by_category(&self, category: HookCategory) -> Vec<&Hook> {
        self.hooks.iter().filter(|h| h.category == category).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hook> {
        self.hooks.iter()
    }
}
