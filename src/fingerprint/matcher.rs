// Tue Oct 13 2026 - Alex

use crate::fingerprint::{ResolutionError, Signature};
use crate::method::{MethodId, MethodPool};
use rayon::prelude::*;

pub struct FingerprintMatcher {
    parallel: bool,
}

impl FingerprintMatcher {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Every method satisfying all active predicates, in pool order.
    pub fn find_all(&self, signature: &Signature, pool: &MethodPool) -> Vec<MethodId> {
        if signature.is_degenerate() {
            log::warn!("Fingerprint '{}' has no predicates and matches every method", signature.name());
        }

        let matches: Vec<MethodId> = if self.parallel {
            self.scan_parallel(signature, pool)
        } else {
            self.scan_sequential(signature, pool)
        };

        log::debug!(
            "Fingerprint '{}' matched {} of {} methods",
            signature.name(),
            matches.len(),
            pool.len()
        );

        matches
    }

    fn scan_sequential(&self, signature: &Signature, pool: &MethodPool) -> Vec<MethodId> {
        pool.iter()
            .filter(|(_, method)| signature.matches(method))
            .map(|(id, _)| id)
            .collect()
    }

    fn scan_parallel(&self, signature: &Signature, pool: &MethodPool) -> Vec<MethodId> {
        let ids: Vec<MethodId> = pool.ids().collect();

        ids.par_iter()
            .copied()
            .filter(|id| pool.get(*id).map_or(false, |method| signature.matches(method)))
            .collect()
    }

    pub fn find_unique(&self, signature: &Signature, pool: &MethodPool) -> Result<MethodId, ResolutionError> {
        let matches = self.find_all(signature, pool);

        match matches.as_slice() {
            [] => Err(ResolutionError::NotFound {
                signature: signature.name().to_string(),
            }),
            [id] => Ok(*id),
            _ => Err(ResolutionError::Ambiguous {
                signature: signature.name().to_string(),
                candidates: matches
                    .iter()
                    .filter_map(|id| pool.get(*id))
                    .map(|method| method.reference().to_string())
                    .collect(),
            }),
        }
    }
}

impl Default for FingerprintMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{parse_listing, Opcode};
    use crate::method::MethodHandle;

    fn pool() -> MethodPool {
        MethodPool::from_methods(vec![
            MethodHandle::new("La;", "first", "V")
                .with_parameters(&["Ljava/lang/String;"])
                .with_instructions(parse_listing(&["iget-object v0, p0, La;->f:Lb;", "monitor-enter v0", "return-void"]).unwrap()),
            MethodHandle::new("La;", "second", "V")
                .with_parameters(&["Ljava/lang/String;"])
                .with_instructions(parse_listing(&["iget-object v0, p0, La;->f:Lb;", "nop", "monitor-enter v0", "return-void"]).unwrap()),
            MethodHandle::new("Lc;", "third", "I")
                .with_strings(&["RollingNumberType required properties missing! Need text"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_unique_match() {
        let sig = Signature::new("monitor")
            .with_return_type("V")
            .with_opcodes(&[Opcode::IgetObject, Opcode::MonitorEnter]);

        for parallel in [true, false] {
            let matcher = FingerprintMatcher::new().with_parallel(parallel);
            let id = matcher.find_unique(&sig, &pool()).unwrap();
            assert_eq!(pool().get(id).unwrap().name(), "first");
        }
    }

    #[test]
    fn test_not_found() {
        let sig = Signature::new("missing").with_return_type("J");
        let err = FingerprintMatcher::new().find_unique(&sig, &pool()).unwrap_err();
        assert_eq!(err, ResolutionError::NotFound { signature: "missing".to_string() });
        assert_eq!(err.signature(), "missing");
    }

    #[test]
    fn test_ambiguous() {
        let sig = Signature::new("void").with_return_type("V");
        match FingerprintMatcher::new().find_unique(&sig, &pool()) {
            Err(ResolutionError::Ambiguous { signature, candidates }) => {
                assert_eq!(signature, "void");
                assert_eq!(candidates.len(), 2);
                assert!(candidates[0].contains("first"));
                assert!(candidates[1].contains("second"));
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_find_all_preserves_pool_order() {
        let sig = Signature::new("string").with_parameters(&["Ljava/lang/String;"]);
        let parallel = FingerprintMatcher::new().find_all(&sig, &pool());
        let sequential = FingerprintMatcher::new().with_parallel(false).find_all(&sig, &pool());
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 2);
        assert!(parallel[0] < parallel[1]);
    }

    #[test]
    fn test_partial_string_fingerprint() {
        let sig = Signature::new("rolling").with_strings(&["RollingNumberType required properties missing! Need"]);
        let id = FingerprintMatcher::new().find_unique(&sig, &pool()).unwrap();
        assert_eq!(pool().get(id).unwrap().name(), "third");
    }
}
