// Thu Oct 15 2026 - Alex

use crate::fingerprint::{FingerprintDatabase, Signature};
use crate::hooks::{Hook, HookCategory, HookError};
use crate::injection::{PlayerResponseHook, TargetLayout};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Unknown fingerprint: {0}")]
    UnknownFingerprint(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEntry {
    pub category: HookCategory,
    pub descriptor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    pub layout: TargetLayout,
    pub fingerprint: Option<String>,
    pub signature: Option<Signature>,
    pub hooks: Vec<HookEntry>,
    pub parallel_scan: bool,
    pub fingerprints: Vec<Signature>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            layout: TargetLayout::default(),
            fingerprint: None,
            signature: None,
            hooks: Vec::new(),
            parallel_scan: true,
            fingerprints: Vec::new(),
        }
    }
}

impl PatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_layout(mut self, layout: TargetLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_fingerprint(mut self, name: &str) -> Self {
        self.fingerprint = Some(name.to_string());
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    pub fn with_hook(mut self, category: HookCategory, descriptor: &str) -> Self {
        self.hooks.push(HookEntry {
            category,
            descriptor: descriptor.to_string(),
        });
        self
    }

    pub fn with_parallel_scan(mut self, parallel: bool) -> Self {
        self.parallel_scan = parallel;
        self
    }

    pub fn with_custom_fingerprint(mut self, signature: Signature) -> Self {
        self.fingerprints.push(signature);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.fingerprint, &self.signature) {
            (None, None) => {
                return Err(ConfigError::Invalid(
                    "Either fingerprint or signature must be set".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid(
                    "Only one of fingerprint or signature may be set".to_string(),
                ))
            }
            _ => {}
        }

        let layout = &self.layout;
        if layout.video_id_parameter == 0 || layout.proto_buffer_parameter == 0 || layout.flag_parameter == 0 {
            return Err(ConfigError::Invalid("Layout parameters start at p1".to_string()));
        }
        if layout.video_id_parameter == layout.proto_buffer_parameter
            || layout.video_id_parameter == layout.flag_parameter
            || layout.proto_buffer_parameter == layout.flag_parameter
        {
            return Err(ConfigError::Invalid("Layout parameters must be distinct".to_string()));
        }

        for entry in &self.hooks {
            Hook::new(entry.category, &entry.descriptor)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        Ok(())
    }

    /// Built-in fingerprints plus the ones declared in this config.
    pub fn database(&self) -> FingerprintDatabase {
        let mut db = FingerprintDatabase::with_default_fingerprints();
        for signature in &self.fingerprints {
            db.add(signature.clone(), "custom");
        }
        db
    }

    /// The inline signature, or the named one looked up in `db`.
    pub fn target_signature(&self, db: &FingerprintDatabase) -> Result<Signature, ConfigError> {
        if let Some(signature) = &self.signature {
            return Ok(signature.clone());
        }

        let name = self
            .fingerprint
            .as_deref()
            .ok_or_else(|| ConfigError::Invalid("No target fingerprint configured".to_string()))?;

        db.get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownFingerprint(name.to_string()))
    }

    pub fn register_hooks(&self, patch: &mut PlayerResponseHook) -> Result<(), HookError> {
        for entry in &self.hooks {
            patch.register_hook(entry.category, &entry.descriptor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_ID_HOOK: &str = "Lhooks/VideoInformation;->setVideoId(Ljava/lang/String;Z)V";

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "fingerprint": "RollingNumberSetter",
            "layout": { "video_id_parameter": 1, "proto_buffer_parameter": 3, "flag_parameter": 11 },
            "hooks": [ { "category": "VideoId", "descriptor": "Lhooks/VideoInformation;->setVideoId(Ljava/lang/String;Z)V" } ]
        }"#;

        let config = PatchConfig::from_json(json).unwrap();
        assert_eq!(config.layout, TargetLayout::legacy());
        assert_eq!(config.hooks.len(), 1);
        assert!(config.parallel_scan);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let config = PatchConfig::new()
            .with_signature(Signature::new("Builder").with_strings(&["psps"]))
            .with_hook(HookCategory::VideoId, VIDEO_ID_HOOK)
            .with_parallel_scan(false);

        let parsed = PatchConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed.signature, config.signature);
        assert_eq!(parsed.hooks, config.hooks);
        assert!(!parsed.parallel_scan);
    }

    #[test]
    fn test_validate_requires_one_target() {
        assert!(matches!(PatchConfig::new().validate(), Err(ConfigError::Invalid(_))));

        let both = PatchConfig::new()
            .with_fingerprint("RollingNumberSetter")
            .with_signature(Signature::new("Inline"));
        assert!(matches!(both.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_hook_and_layout() {
        let bad_hook = PatchConfig::new()
            .with_fingerprint("RollingNumberSetter")
            .with_hook(HookCategory::ProtoBufferAfterVideoId, VIDEO_ID_HOOK);
        assert!(matches!(bad_hook.validate(), Err(ConfigError::Invalid(_))));

        let bad_layout = PatchConfig::new()
            .with_fingerprint("RollingNumberSetter")
            .with_layout(TargetLayout::new(1, 1, 12));
        assert!(matches!(bad_layout.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_target_signature_lookup() {
        let config = PatchConfig::new()
            .with_fingerprint("Custom")
            .with_custom_fingerprint(Signature::new("Custom").with_return_type("V"));
        let db = config.database();

        assert_eq!(config.target_signature(&db).unwrap().name(), "Custom");
        assert!(db.get("RenderBottomNavigationBar").is_some());

        let missing = PatchConfig::new().with_fingerprint("Nope");
        assert!(matches!(
            missing.target_signature(&missing.database()),
            Err(ConfigError::UnknownFingerprint(name)) if name == "Nope"
        ));
    }

    #[test]
    fn test_register_hooks() {
        let config = PatchConfig::new().with_hook(HookCategory::VideoId, VIDEO_ID_HOOK);
        let mut patch = PlayerResponseHook::new(config.layout);
        config.register_hooks(&mut patch).unwrap();
        assert_eq!(patch.registry().len(), 1);
    }
}
