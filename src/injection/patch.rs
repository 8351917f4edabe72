// Thu Oct 15 2026 - Alex

use crate::error::PatchError;
use crate::fingerprint::{ResolutionCache, Signature};
use crate::hooks::{Hook, HookCategory, HookError, HookRegistry};
use crate::injection::{
    FinalizationError, InjectionPlanner, RegisterPlan, RegisterPlanner, TargetLayout,
};
use crate::method::{MethodId, MethodPool, MethodRef, PoolError};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub method: MethodId,
    pub reference: MethodRef,
    pub registers: RegisterPlan,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalizeReport {
    pub method: String,
    pub registers: RegisterPlan,
    pub hooks: usize,
    pub insertions: usize,
    pub instructions_added: usize,
    pub insertion_order: Vec<String>,
}

/// Forwards the player response parameters (video id, proto buffer, flag)
/// of one resolved method to registered hooks.
///
/// Two phases: `resolve` locks the target and its register plan, then
/// `finalize` applies every registered hook in a single pass. Finalization
/// runs once; afterwards registration is rejected.
pub struct PlayerResponseHook {
    layout: TargetLayout,
    planner: RegisterPlanner,
    registry: HookRegistry,
    target: Option<ResolvedTarget>,
    finalized: bool,
}

impl PlayerResponseHook {
    pub fn new(layout: TargetLayout) -> Self {
        Self {
            layout,
            planner: RegisterPlanner::new(),
            registry: HookRegistry::new(),
            target: None,
            finalized: false,
        }
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    pub fn target(&self) -> Option<&ResolvedTarget> {
        self.target.as_ref()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn resolve(
        &mut self,
        signature: &Signature,
        pool: &MethodPool,
        cache: &ResolutionCache,
    ) -> Result<&ResolvedTarget, PatchError> {
        if self.finalized {
            return Err(FinalizationError::AlreadyFinalized.into());
        }

        let id = cache.resolve(signature, pool)?;
        let method = pool.get(id).ok_or(PoolError::InvalidId(id.index()))?;
        let registers = self.planner.plan(method, self.layout)?;

        if let Some(previous) = &self.target {
            log::warn!("Replacing resolved target {} with {}", previous.reference, method.reference());
        }

        log::info!(
            "Hooking {} (highest register {}, remap {})",
            method.reference(),
            registers.highest_needed_register,
            registers.needs_remap
        );

        Ok(&*self.target.insert(ResolvedTarget {
            method: id,
            reference: method.reference(),
            registers,
        }))
    }

    pub fn register(&mut self, hook: Hook) -> Result<(), HookError> {
        self.registry.register(hook)
    }

    pub fn register_hook(&mut self, category: HookCategory, descriptor: &str) -> Result<(), HookError> {
        self.registry.register_descriptor(category, descriptor)
    }

    pub fn finalize(&mut self, pool: &mut MethodPool) -> Result<FinalizeReport, PatchError> {
        if self.finalized {
            return Err(FinalizationError::AlreadyFinalized.into());
        }

        let target = self.target.as_ref().ok_or(FinalizationError::NoTargetResolved)?;
        let method = pool
            .get_mut(target.method)
            .ok_or(PoolError::InvalidId(target.method.index()))?;

        let hooks = self
            .registry
            .seal()
            .map_err(|_| FinalizationError::AlreadyFinalized)?;
        self.finalized = true;

        let plan = InjectionPlanner::new(&target.registers).plan(&hooks)?;
        plan.apply(method)?;

        log::info!(
            "Applied {} hook(s) to {} ({} instructions added)",
            hooks.len(),
            target.reference,
            plan.instructions_added()
        );

        Ok(FinalizeReport {
            method: target.reference.to_string(),
            registers: target.registers.clone(),
            hooks: hooks.len(),
            insertions: plan.insertions().len(),
            instructions_added: plan.instructions_added(),
            insertion_order: plan.insertion_order().iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl Default for PlayerResponseHook {
    fn default() -> Self {
        Self::new(TargetLayout::default())
    }
}
