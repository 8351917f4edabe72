// Mon Oct 12 2026 - Alex

use crate::method::{MethodHandle, MethodRef, PoolError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodId(usize);

impl MethodId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered arena of method bodies. Ids are insertion positions and stay
/// stable because methods are never removed.
pub struct MethodPool {
    methods: IndexMap<MethodRef, MethodHandle>,
}

impl MethodPool {
    pub fn new() -> Self {
        Self {
            methods: IndexMap::new(),
        }
    }

    pub fn from_methods(methods: Vec<MethodHandle>) -> Result<Self, PoolError> {
        let mut pool = Self::new();
        for method in methods {
            pool.add(method)?;
        }
        Ok(pool)
    }

    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        let methods: Vec<MethodHandle> = serde_json::from_str(json)?;
        Self::from_methods(methods)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let content = fs::read_to_string(path.as_ref())?;
        let pool = Self::from_json(&content)?;
        log::info!("Loaded {} methods from {}", pool.len(), path.as_ref().display());
        Ok(pool)
    }

    pub fn add(&mut self, method: MethodHandle) -> Result<MethodId, PoolError> {
        let reference = method.reference();
        if self.methods.contains_key(&reference) {
            return Err(PoolError::DuplicateMethod(reference.to_string()));
        }
        let (index, _) = self.methods.insert_full(reference, method);
        Ok(MethodId(index))
    }

    pub fn get(&self, id: MethodId) -> Option<&MethodHandle> {
        self.methods.get_index(id.0).map(|(_, method)| method)
    }

    pub fn get_mut(&mut self, id: MethodId) -> Option<&mut MethodHandle> {
        self.methods.get_index_mut(id.0).map(|(_, method)| method)
    }

    pub fn find(&self, reference: &MethodRef) -> Option<MethodId> {
        self.methods.get_index_of(reference).map(MethodId)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = MethodId> {
        (0..self.methods.len()).map(MethodId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MethodId, &MethodHandle)> {
        self.methods
            .values()
            .enumerate()
            .map(|(index, method)| (MethodId(index), method))
    }

    pub fn to_json(&self) -> Result<String, PoolError> {
        let methods: Vec<&MethodHandle> = self.methods.values().collect();
        Ok(serde_json::to_string_pretty(&methods)?)
    }
}

impl Default for MethodPool {
    fn default() -> Self {
        Self::new()
    }
}
