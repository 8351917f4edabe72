// Tue Oct 13 2026 - Alex

use crate::bytecode::Opcode;
use crate::fingerprint::Signature;
use std::collections::HashMap;

pub struct FingerprintEntry {
    pub signature: Signature,
    pub category: String,
    pub description: Option<String>,
}

pub struct FingerprintDatabase {
    entries: HashMap<String, FingerprintEntry>,
    categories: HashMap<String, Vec<String>>,
}

impl FingerprintDatabase {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    pub fn add(&mut self, signature: Signature, category: &str) {
        self.insert(signature, category, None);
    }

    pub fn add_with_description(&mut self, signature: Signature, category: &str, description: &str) {
        self.insert(signature, category, Some(description.to_string()));
    }

    fn insert(&mut self, signature: Signature, category: &str, description: Option<String>) {
        let name = signature.name().to_string();

        let entry = FingerprintEntry {
            signature,
            category: category.to_string(),
            description,
        };

        if let Some(previous) = self.entries.insert(name.clone(), entry) {
            if previous.category == category {
                return;
            }
            if let Some(names) = self.categories.get_mut(&previous.category) {
                names.retain(|n| n != &name);
                if names.is_empty() {
                    self.categories.remove(&previous.category);
                }
            }
        }

        self.categories.entry(category.to_string())
            .or_default()
            .push(name);
    }

    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.entries.get(name).map(|e| &e.signature)
    }

    pub fn in_category(&self, category: &str) -> Vec<&Signature> {
        self.categories.get(category)
            .map(|names| {
                names.iter()
                    .filter_map(|name| self.entries.get(name))
                    .map(|entry| &entry.signature)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn sorted(&self) -> Vec<(&String, &FingerprintEntry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn with_default_fingerprints() -> Self {
        let mut db = Self::new();

        db.add_with_description(
            Signature::new("RenderBottomNavigationBar")
                .with_return_type("V")
                .with_parameters(&["Ljava/lang/String;"])
                .with_opcodes(&[
                    Opcode::IgetObject,
                    Opcode::MonitorEnter,
                    Opcode::IgetObject,
                    Opcode::IfEqz,
                    Opcode::InvokeInterface,
                    Opcode::MonitorExit,
                    Opcode::ReturnVoid,
                    Opcode::MoveException,
                    Opcode::MonitorExit,
                    Opcode::Throw,
                ]),
            "layout",
            "Synchronized bottom navigation bar render callback",
        );

        db.add_with_description(
            Signature::new("RollingNumberSetter")
                .with_opcodes(&[Opcode::InvokeDirect, Opcode::IgetObject])
                .with_strings(&["RollingNumberType required properties missing! Need"]),
            "layout",
            "Rolling number text setter, located by a partial error message",
        );

        db
    }
}

impl Default for FingerprintDatabase {
    fn default() -> Self {
        Self::new()
    }
}
