// Thu Oct 15 2026 - Alex

use crate::bytecode::{Instruction, MAX_4BIT_REGISTER};
use crate::hooks::{Hook, HookCategory, SealedHooks};
use crate::injection::{PlanError, RegisterPlan};
use crate::method::{MethodHandle, PoolError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub offset: usize,
    pub instructions: Vec<Instruction>,
}

/// Ordered insertions, computed in full before the method is touched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InjectionPlan {
    insertions: Vec<Insertion>,
    instructions_added: usize,
}

impl InjectionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, offset: usize, instructions: Vec<Instruction>) {
        self.instructions_added += instructions.len();
        self.insertions.push(Insertion {
            offset,
            instructions,
        });
    }

    pub fn insertions(&self) -> &[Insertion] {
        &self.insertions
    }

    pub fn instructions_added(&self) -> usize {
        self.instructions_added
    }

    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    /// Hook targets in the order their blocks are inserted.
    pub fn insertion_order(&self) -> Vec<&str> {
        self.insertions
            .iter()
            .flat_map(|insertion| insertion.instructions.iter())
            .filter_map(Instruction::invoke_target)
            .collect()
    }

    /// Checks every offset against the growing body, then inserts.
    pub fn apply(&self, method: &mut MethodHandle) -> Result<(), PoolError> {
        let mut len = method.instruction_count();
        for insertion in &self.insertions {
            if insertion.offset > len {
                return Err(PoolError::OffsetOutOfBounds {
                    method: method.reference().to_string(),
                    offset: insertion.offset,
                    len,
                });
            }
            len += insertion.instructions.len();
        }

        for insertion in &self.insertions {
            log::debug!(
                "Inserting {} instruction(s) at offset {} of {}",
                insertion.instructions.len(),
                insertion.offset,
                method.name()
            );
            method.add_instructions(insertion.offset, insertion.instructions.clone())?;
        }

        Ok(())
    }
}

pub struct InjectionPlanner<'a> {
    registers: &'a RegisterPlan,
}

impl<'a> InjectionPlanner<'a> {
    pub fn new(registers: &'a RegisterPlan) -> Self {
        Self { registers }
    }

    fn video_id_block(&self, hook: &Hook) -> Vec<Instruction> {
        vec![Instruction::invoke_static(
            &[self.registers.video_id, self.registers.flag],
            hook.target.as_str(),
        )]
    }

    fn proto_buffer_block(&self, hook: &Hook) -> Vec<Instruction> {
        vec![
            Instruction::invoke_static(
                &[
                    self.registers.proto_buffer,
                    self.registers.video_id,
                    self.registers.flag,
                ],
                hook.target.as_str(),
            ),
            Instruction::MoveResultObject(self.registers.proto_buffer),
        ]
    }

    fn block_for(&self, hook: &Hook) -> Result<Vec<Instruction>, PlanError> {
        let block = match hook.category {
            HookCategory::VideoId => self.video_id_block(hook),
            HookCategory::ProtoBufferBeforeVideoId | HookCategory::ProtoBufferAfterVideoId => {
                self.proto_buffer_block(hook)
            }
        };
        self.check_registers(&block)?;
        Ok(block)
    }

    fn check_registers(&self, block: &[Instruction]) -> Result<(), PlanError> {
        for instruction in block {
            let opcode = instruction.opcode();
            if !opcode.uses_4bit_registers() {
                continue;
            }
            for &register in instruction.argument_registers() {
                let absolute = self.registers.absolute(register);
                if absolute > MAX_4BIT_REGISTER {
                    return Err(PlanError::RegisterOutOfRange {
                        opcode,
                        register,
                        absolute,
                    });
                }
            }
        }
        Ok(())
    }

    /// Every block goes to offset 0, so the last one inserted runs first.
    /// Categories are inserted after, video id, before; each list reversed.
    /// Fails if a hook call would need a register past `v15`.
    pub fn plan(&self, hooks: &SealedHooks) -> Result<InjectionPlan, PlanError> {
        let mut plan = InjectionPlan::new();

        for category in [
            HookCategory::ProtoBufferAfterVideoId,
            HookCategory::VideoId,
            HookCategory::ProtoBufferBeforeVideoId,
        ] {
            for hook in hooks.by_category(category).into_iter().rev() {
                plan.push(0, self.block_for(hook)?);
            }
        }

        if plan.is_empty() {
            return Ok(plan);
        }

        if let Some(restore) = self.registers.restore_move() {
            plan.push(0, self.registers.setup_moves());
            let end = plan.instructions_added();
            plan.push(end, vec![restore]);
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{Opcode, Register};
    use crate::hooks::HookRegistry;
    use crate::injection::{RegisterPlanner, TargetLayout};

    fn descriptor(category: HookCategory, name: &str) -> String {
        match category {
            HookCategory::VideoId => format!("Lhooks/H;->{}(Ljava/lang/String;Z)V", name),
            _ => format!(
                "Lhooks/H;->{}(Ljava/lang/String;Ljava/lang/String;Z)Ljava/lang/String;",
                name
            ),
        }
    }

    fn hook_name(target: &str) -> String {
        let start = target.find("->").unwrap() + 2;
        let end = target.find('(').unwrap();
        target[start..end].to_string()
    }

    fn target(register_count: usize) -> MethodHandle {
        let params: Vec<String> = (0..13).map(|_| "Ljava/lang/Object;".to_string()).collect();
        MethodHandle::new("Lplayer/Builder;", "build", "Ljava/lang/Object;")
            .with_parameters(&params)
            .with_register_count(register_count)
            .with_instructions(
                crate::bytecode::parse_listing(&["const/4 v0, 0x0", "return-object v0"]).unwrap(),
            )
    }

    fn registry(hooks: &[(HookCategory, &str)]) -> SealedHooks {
        let mut registry = HookRegistry::new();
        for (category, name) in hooks {
            registry
                .register_descriptor(*category, &descriptor(*category, name))
                .unwrap();
        }
        registry.seal().unwrap()
    }

    /// Straight-line body, so hook calls execute in listing order.
    fn executed_hooks(method: &MethodHandle) -> Vec<String> {
        method
            .instructions()
            .iter()
            .filter_map(Instruction::invoke_target)
            .map(hook_name)
            .collect()
    }

    #[test]
    fn test_ordering_across_categories() {
        let hooks = registry(&[
            (HookCategory::ProtoBufferAfterVideoId, "A"),
            (HookCategory::VideoId, "B"),
            (HookCategory::ProtoBufferBeforeVideoId, "C"),
            (HookCategory::ProtoBufferAfterVideoId, "D"),
        ]);
        let mut method = target(16);
        let registers = RegisterPlanner::new().plan(&method, TargetLayout::default()).unwrap();
        let plan = InjectionPlanner::new(&registers).plan(&hooks).unwrap();

        let inserted: Vec<String> = plan.insertion_order().into_iter().map(hook_name).collect();
        assert_eq!(inserted, vec!["D", "A", "B", "C"]);
        assert!(plan.insertions().iter().all(|i| i.offset == 0));

        plan.apply(&mut method).unwrap();
        assert_eq!(executed_hooks(&method), vec!["C", "B", "A", "D"]);
        assert_eq!(method.instruction_count(), 2 + 2 + 1 + 2 + 2);
        assert_eq!(plan.instructions_added(), 7);
    }

    #[test]
    fn test_registration_order_within_category() {
        let hooks = registry(&[
            (HookCategory::VideoId, "first"),
            (HookCategory::VideoId, "second"),
            (HookCategory::VideoId, "third"),
        ]);
        let mut method = target(16);
        let registers = RegisterPlanner::new().plan(&method, TargetLayout::default()).unwrap();
        InjectionPlanner::new(&registers).plan(&hooks).unwrap().apply(&mut method).unwrap();

        assert_eq!(executed_hooks(&method), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_block_shapes_without_remap() {
        let hooks = registry(&[
            (HookCategory::VideoId, "video"),
            (HookCategory::ProtoBufferBeforeVideoId, "proto"),
        ]);
        let mut method = target(16);
        let registers = RegisterPlanner::new().plan(&method, TargetLayout::default()).unwrap();
        InjectionPlanner::new(&registers).plan(&hooks).unwrap().apply(&mut method).unwrap();

        let listing: Vec<String> = method.instructions().iter().map(|i| i.to_string()).collect();
        assert_eq!(
            listing[0],
            format!("invoke-static {{p3, p1, p12}}, {}", descriptor(HookCategory::ProtoBufferBeforeVideoId, "proto"))
        );
        assert_eq!(listing[1], "move-result-object p3");
        assert_eq!(
            listing[2],
            format!("invoke-static {{p1, p12}}, {}", descriptor(HookCategory::VideoId, "video"))
        );
        assert_eq!(listing[3], "const/4 v0, 0x0");
        assert!(method.instructions().iter().all(|i| !i.is_move()));
    }

    #[test]
    fn test_remap_wraps_hook_calls() {
        let hooks = registry(&[
            (HookCategory::ProtoBufferAfterVideoId, "A"),
            (HookCategory::VideoId, "B"),
        ]);
        let mut method = target(17);
        let registers = RegisterPlanner::new().plan(&method, TargetLayout::default()).unwrap();
        assert!(registers.needs_remap);

        let plan = InjectionPlanner::new(&registers).plan(&hooks).unwrap();
        let restore = plan.insertions().last().unwrap();
        assert_eq!(restore.offset, 1 + 2 + 3);
        plan.apply(&mut method).unwrap();

        let insns = method.instructions();
        let calls: Vec<usize> = insns
            .iter()
            .enumerate()
            .filter(|(_, i)| i.opcode() == Opcode::InvokeStatic)
            .map(|(idx, _)| idx)
            .collect();
        let first_call = calls[0];
        let last_call = *calls.last().unwrap();

        let setup: Vec<usize> = (0..first_call).filter(|&i| insns[i].is_move()).collect();
        assert_eq!(setup, vec![0, 1, 2]);

        let restores: Vec<usize> = (last_call + 1..insns.len()).filter(|&i| insns[i].is_move()).collect();
        assert_eq!(restores.len(), 1);
        assert_eq!(insns[restores[0]].to_string(), "move-object/from16 p3, v1");
        // Restore follows the last hook's move-result-object and precedes the body.
        assert_eq!(restores[0], 6);
        assert_eq!(insns[7].to_string(), "const/4 v0, 0x0");

        for call in calls {
            if let Instruction::InvokeStatic { arguments, .. } = &insns[call] {
                assert!(arguments.iter().all(|r| !r.is_param() && r.index() <= 2));
            }
        }
        assert_eq!(insns[5], Instruction::MoveResultObject(Register::local(1)));
    }

    #[test]
    fn test_no_hooks_no_instructions() {
        let hooks = registry(&[]);
        let mut method = target(17);
        let registers = RegisterPlanner::new().plan(&method, TargetLayout::default()).unwrap();
        let plan = InjectionPlanner::new(&registers).plan(&hooks).unwrap();
        assert!(plan.is_empty());
        plan.apply(&mut method).unwrap();
        assert_eq!(method.instruction_count(), 2);
    }

    #[test]
    fn test_hook_call_register_past_4bit_limit() {
        let hooks = registry(&[(HookCategory::ProtoBufferBeforeVideoId, "proto")]);
        let params: Vec<String> = (0..14).map(|_| "Ljava/lang/Object;".to_string()).collect();
        let method = target(17).with_parameters(&params);
        // Flag p12 sits at v15, proto buffer p13 at v16.
        let registers = RegisterPlanner::new()
            .plan(&method, TargetLayout::new(1, 13, 12))
            .unwrap();
        assert!(!registers.needs_remap);

        let err = InjectionPlanner::new(&registers).plan(&hooks).unwrap_err();
        assert_eq!(
            err,
            PlanError::RegisterOutOfRange {
                opcode: Opcode::InvokeStatic,
                register: Register::param(13),
                absolute: 16,
            }
        );
    }

    #[test]
    fn test_apply_rejects_bad_offset_without_mutation() {
        let mut plan = InjectionPlan::new();
        plan.push(0, vec![Instruction::parse_line("nop").unwrap()]);
        plan.push(10, vec![Instruction::parse_line("nop").unwrap()]);

        let mut method = target(16);
        assert!(matches!(plan.apply(&mut method), Err(PoolError::OffsetOutOfBounds { offset: 10, .. })));
        assert_eq!(method.instruction_count(), 2);
    }
}
