// Wed Oct 14 2026 - Alex

use crate::hooks::HookError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static METHOD_DESCRIPTOR: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^(L[^;\s]+;)->([^(\s]+)\(([^)\s]*)\)(\S+)$").expect("valid descriptor regex")
});

/// Which runtime values a hook observes, and where its call block lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookCategory {
    /// Receives (video id, flag).
    VideoId,
    /// Receives (proto buffer, video id, flag) and returns the proto buffer.
    /// Runs before the video id hooks.
    ProtoBufferBeforeVideoId,
    /// Receives (proto buffer, video id, flag) and returns the proto buffer.
    /// Runs after the video id hooks.
    ProtoBufferAfterVideoId,
}

impl HookCategory {
    pub const ALL: [HookCategory; 3] = [
        HookCategory::VideoId,
        HookCategory::ProtoBufferBeforeVideoId,
        HookCategory::ProtoBufferAfterVideoId,
    ];

    pub fn expected_arity(&self) -> usize {
        match self {
            HookCategory::VideoId => 2,
            HookCategory::ProtoBufferBeforeVideoId | HookCategory::ProtoBufferAfterVideoId => 3,
        }
    }

    pub fn returns_proto_buffer(&self) -> bool {
        !matches!(self, HookCategory::VideoId)
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookCategory::VideoId => "VideoId",
            HookCategory::ProtoBufferBeforeVideoId => "ProtoBufferBeforeVideoId",
            HookCategory::ProtoBufferAfterVideoId => "ProtoBufferAfterVideoId",
        };
        write!(f, "{}", name)
    }
}

/// Static callback reference, `Lpkg/Class;->name(PARAMS)RET`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallbackDescriptor {
    raw: String,
    parameters: Vec<String>,
    return_type: String,
}

impl CallbackDescriptor {
    pub fn parse(descriptor: &str) -> Result<Self, HookError> {
        let invalid = |reason: &str| HookError::InvalidDescriptor {
            descriptor: descriptor.to_string(),
            reason: reason.to_string(),
        };

        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            return Err(invalid("descriptor is empty"));
        }

        let caps = METHOD_DESCRIPTOR
            .captures(descriptor)
            .ok_or_else(|| invalid("expected Lpkg/Class;->name(PARAMS)RET"))?;

        let parameters = split_type_list(&caps[3]).map_err(|e| invalid(&e))?;

        let return_type = caps[4].to_string();
        if return_type != "V" {
            let parsed = split_type_list(&return_type).map_err(|e| invalid(&e))?;
            if parsed.len() != 1 {
                return Err(invalid("malformed return type"));
            }
        }

        Ok(Self {
            raw: descriptor.to_string(),
            parameters,
            return_type,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn returns_void(&self) -> bool {
        self.return_type == "V"
    }
}

/// Splits a concatenated type list such as `Ljava/lang/String;[BZ`.
pub fn split_type_list(list: &str) -> Result<Vec<String>, String> {
    let mut types = Vec::new();
    let mut current = String::new();
    let mut chars = list.chars();

    while let Some(c) = chars.next() {
        current.push(c);
        match c {
            '[' => continue,
            'Z' | 'B' | 'S' | 'C' | 'I' | 'J' | 'F' | 'D' => {}
            'L' => {
                let mut closed = false;
                for next in chars.by_ref() {
                    current.push(next);
                    if next == ';' {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(format!("unterminated class type '{}'", current));
                }
            }
            other => return Err(format!("unexpected type character '{}'", other)),
        }
        types.push(std::mem::take(&mut current));
    }

    if !current.is_empty() {
        return Err(format!("dangling array prefix '{}'", current));
    }

    Ok(types)
}

impl fmt::Display for CallbackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for CallbackDescriptor {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CallbackDescriptor::parse(s)
    }
}

impl TryFrom<String> for CallbackDescriptor {
    type Error = HookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CallbackDescriptor::parse(&value)
    }
}

impl From<CallbackDescriptor> for String {
    fn from(descriptor: CallbackDescriptor) -> Self {
        descriptor.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub category: HookCategory,
    pub target: CallbackDescriptor,
}

impl Hook {
    pub fn new(category: HookCategory, descriptor: &str) -> Result<Self, HookError> {
        let target = CallbackDescriptor::parse(descriptor)?;
        let hook = Self { category, target };
        hook.validate()?;
        Ok(hook)
    }

    pub fn video_id(descriptor: &str) -> Result<Self, HookError> {
        Self::new(HookCategory::VideoId, descriptor)
    }

    pub fn proto_buffer_before_video_id(descriptor: &str) -> Result<Self, HookError> {
        Self::new(HookCategory::ProtoBufferBeforeVideoId, descriptor)
    }

    pub fn proto_buffer_after_video_id(descriptor: &str) -> Result<Self, HookError> {
        Self::new(HookCategory::ProtoBufferAfterVideoId, descriptor)
    }

    pub fn validate(&self) -> Result<(), HookError> {
        let expected = self.category.expected_arity();
        let found = self.target.parameters().len();
        if found != expected {
            return Err(HookError::ArityMismatch {
                descriptor: self.target.to_string(),
                category: self.category,
                expected,
                found,
            });
        }

        if self.category.returns_proto_buffer() && self.target.returns_void() {
            return Err(HookError::MissingReturnValue {
                descriptor: self.target.to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_ID_HOOK: &str = "Lapp/hooks/VideoInformation;->setVideoId(Ljava/lang/String;Z)V";
    const PROTO_HOOK: &str =
        "Lapp/hooks/Spoof;->setPlayerParameter(Ljava/lang/String;Ljava/lang/String;Z)Ljava/lang/String;";

    #[test]
    fn test_parse_descriptor() {
        let desc = CallbackDescriptor::parse(PROTO_HOOK).unwrap();
        assert_eq!(desc.parameters(), &["Ljava/lang/String;", "Ljava/lang/String;", "Z"]);
        assert_eq!(desc.return_type(), "Ljava/lang/String;");
        assert!(!desc.returns_void());
        assert_eq!(desc.to_string(), PROTO_HOOK);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(CallbackDescriptor::parse(""), Err(HookError::InvalidDescriptor { .. })));
        assert!(matches!(CallbackDescriptor::parse("   "), Err(HookError::InvalidDescriptor { .. })));
        assert!(CallbackDescriptor::parse("setVideoId").is_err());
        assert!(CallbackDescriptor::parse("La;->m(Q)V").is_err());
        assert!(CallbackDescriptor::parse("La;->m(Ljava/lang/String)V").is_err());
        assert!(CallbackDescriptor::parse("La;->m([)V").is_err());
        assert!(CallbackDescriptor::parse("La;->m()II").is_err());
    }

    #[test]
    fn test_split_type_list() {
        assert_eq!(
            split_type_list("[BLjava/util/Set;IZ").unwrap(),
            vec!["[B", "Ljava/util/Set;", "I", "Z"]
        );
        assert!(split_type_list("").unwrap().is_empty());
        assert_eq!(split_type_list("[[Ljava/lang/String;").unwrap(), vec!["[[Ljava/lang/String;"]);
    }

    #[test]
    fn test_hook_arity_checks() {
        assert!(Hook::video_id(VIDEO_ID_HOOK).is_ok());
        assert!(Hook::proto_buffer_before_video_id(PROTO_HOOK).is_ok());

        assert!(matches!(
            Hook::video_id(PROTO_HOOK),
            Err(HookError::ArityMismatch { expected: 2, found: 3, .. })
        ));
        assert!(matches!(
            Hook::proto_buffer_after_video_id("La;->m(Ljava/lang/String;Ljava/lang/String;Z)V"),
            Err(HookError::MissingReturnValue { .. })
        ));
    }

    #[test]
    fn test_hook_serde() {
        let hook: Hook = serde_json::from_str(&format!(
            r#"{{"category": "VideoId", "target": "{}"}}"#,
            VIDEO_ID_HOOK
        ))
        .unwrap();
        assert_eq!(hook.category, HookCategory::VideoId);
        assert_eq!(hook.target.as_str(), VIDEO_ID_HOOK);

        let bad = serde_json::from_str::<Hook>(r#"{"category": "VideoId", "target": ""}"#);
        assert!(bad.is_err());
    }
}
