// Tue Oct 13 2026 - Alex

use crate::fingerprint::{FingerprintMatcher, ResolutionError, Signature};
use crate::method::{MethodId, MethodPool};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Memoizes successful resolutions per signature. Entries are only valid
/// for the pool they were resolved against.
pub struct ResolutionCache {
    matcher: FingerprintMatcher,
    resolved: RwLock<HashMap<Signature, MethodId>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::with_matcher(FingerprintMatcher::new())
    }

    pub fn with_matcher(matcher: FingerprintMatcher) -> Self {
        Self {
            matcher,
            resolved: RwLock::new(HashMap::new()),
        }
    }

    pub fn resolve(&self, signature: &Signature, pool: &MethodPool) -> Result<MethodId, ResolutionError> {
        if let Some(id) = self.get(signature) {
            return Ok(id);
        }

        let id = self.matcher.find_unique(signature, pool)?;
        if let Some(method) = pool.get(id) {
            log::info!("Resolved fingerprint '{}' to {}", signature.name(), method.reference());
        }
        self.resolved.write().insert(signature.clone(), id);
        Ok(id)
    }

    pub fn get(&self, signature: &Signature) -> Option<MethodId> {
        self.resolved.read().get(signature).copied()
    }

    pub fn clear(&self) {
        self.resolved.write().clear();
    }

    pub fn size(&self) -> usize {
        self.resolved.read().len()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::MethodHandle;

    #[test]
    fn test_resolution_is_memoized() {
        let mut pool = MethodPool::from_methods(vec![
            MethodHandle::new("La;", "one", "V"),
            MethodHandle::new("La;", "two", "I"),
        ])
        .unwrap();

        let cache = ResolutionCache::new();
        let sig = Signature::new("int").with_return_type("I");
        let id = cache.resolve(&sig, &pool).unwrap();
        assert_eq!(cache.size(), 1);

        // A second matching method would now make a fresh scan ambiguous.
        pool.add(MethodHandle::new("Lb;", "three", "I")).unwrap();
        assert_eq!(cache.resolve(&sig, &pool), Ok(id));

        cache.clear();
        assert!(matches!(cache.resolve(&sig, &pool), Err(ResolutionError::Ambiguous { .. })));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let mut pool = MethodPool::new();
        let cache = ResolutionCache::new();
        let sig = Signature::new("late").with_return_type("Z");

        assert!(cache.resolve(&sig, &pool).is_err());
        assert_eq!(cache.size(), 0);

        pool.add(MethodHandle::new("La;", "flag", "Z")).unwrap();
        assert!(cache.resolve(&sig, &pool).is_ok());
        assert_eq!(cache.get(&sig).map(|id| id.index()), Some(0));
    }

    #[test]
    fn test_same_name_different_predicates() {
        let pool = MethodPool::from_methods(vec![
            MethodHandle::new("La;", "v", "V"),
            MethodHandle::new("La;", "i", "I"),
        ])
        .unwrap();

        let cache = ResolutionCache::new();
        let void = Signature::new("T").with_return_type("V");
        let int = Signature::new("T").with_return_type("I");

        let first = cache.resolve(&void, &pool).unwrap();
        let second = cache.resolve(&int, &pool).unwrap();
        assert_eq!(pool.get(first).unwrap().name(), "v");
        assert_eq!(pool.get(second).unwrap().name(), "i");
        assert_eq!(cache.size(), 2);
        assert_eq!(cache.get(&void), Some(first));
    }
}
