// Wed Oct 14 2026 - Alex

use crate::bytecode::{Instruction, Register, MAX_4BIT_REGISTER};
use crate::injection::PlanError;
use crate::method::MethodHandle;
use serde::{Deserialize, Serialize};

/// Parameter numbers (`pN`) of the values forwarded to hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLayout {
    pub video_id_parameter: u16,
    pub proto_buffer_parameter: u16,
    pub flag_parameter: u16,
}

impl TargetLayout {
    pub fn new(video_id_parameter: u16, proto_buffer_parameter: u16, flag_parameter: u16) -> Self {
        Self {
            video_id_parameter,
            proto_buffer_parameter,
            flag_parameter,
        }
    }

    /// Older builds pass the flag one parameter earlier.
    pub fn legacy() -> Self {
        Self::new(1, 3, 11)
    }

    pub fn parameters(&self) -> [u16; 3] {
        [self.video_id_parameter, self.proto_buffer_parameter, self.flag_parameter]
    }
}

impl Default for TargetLayout {
    fn default() -> Self {
        Self::new(1, 3, 12)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPlan {
    pub layout: TargetLayout,
    /// Absolute register number of `p0`.
    pub parameter_base: usize,
    pub highest_needed_register: usize,
    pub needs_remap: bool,
    pub video_id: Register,
    pub proto_buffer: Register,
    pub flag: Register,
}

impl RegisterPlan {
    /// Register number in the frame, with parameters counted after locals.
    pub fn absolute(&self, register: Register) -> usize {
        match register {
            Register::Local(index) => usize::from(index),
            Register::Param(index) => self.parameter_base + usize::from(index),
        }
    }

    /// Copies into the scratch registers, in execution order.
    pub fn setup_moves(&self) -> Vec<Instruction> {
        if !self.needs_remap {
            return Vec::new();
        }

        vec![
            Instruction::MoveObjectFrom16 {
                destination: self.video_id,
                source: Register::param(self.layout.video_id_parameter),
            },
            Instruction::MoveObjectFrom16 {
                destination: self.proto_buffer,
                source: Register::param(self.layout.proto_buffer_parameter),
            },
            Instruction::MoveFrom16 {
                destination: self.flag,
                source: Register::param(self.layout.flag_parameter),
            },
        ]
    }

    /// Writes the possibly replaced proto buffer back to its parameter.
    pub fn restore_move(&self) -> Option<Instruction> {
        if !self.needs_remap {
            return None;
        }

        Some(Instruction::MoveObjectFrom16 {
            destination: Register::param(self.layout.proto_buffer_parameter),
            source: self.proto_buffer,
        })
    }
}

pub struct RegisterPlanner {
    limit: usize,
}

impl RegisterPlanner {
    pub fn new() -> Self {
        Self {
            limit: MAX_4BIT_REGISTER,
        }
    }

    pub fn highest_needed_register(method: &MethodHandle, layout: &TargetLayout) -> usize {
        (method.register_count + usize::from(layout.flag_parameter)).saturating_sub(method.parameter_count())
    }

    pub fn plan(&self, method: &MethodHandle, layout: TargetLayout) -> Result<RegisterPlan, PlanError> {
        let count = method.parameter_count();

        for parameter in layout.parameters().map(usize::from) {
            if parameter > count {
                return Err(PlanError::ParameterOutOfRange { parameter, count });
            }
        }

        if method.register_count < count {
            return Err(PlanError::RegisterCountTooSmall {
                registers: method.register_count,
                parameters: count,
            });
        }

        let parameter_base = method.register_count - count;
        let highest_needed_register = Self::highest_needed_register(method, &layout);
        let needs_remap = highest_needed_register > self.limit;

        let plan = if needs_remap {
            RegisterPlan {
                layout,
                parameter_base,
                highest_needed_register,
                needs_remap,
                video_id: Register::local(0),
                proto_buffer: Register::local(1),
                flag: Register::local(2),
            }
        } else {
            RegisterPlan {
                layout,
                parameter_base,
                highest_needed_register,
                needs_remap,
                video_id: Register::param(layout.video_id_parameter),
                proto_buffer: Register::param(layout.proto_buffer_parameter),
                flag: Register::param(layout.flag_parameter),
            }
        };

        log::debug!(
            "Register plan for {}: highest register {}, remap {}",
            method.reference(),
            highest_needed_register,
            needs_remap
        );

        Ok(plan)
    }
}

impl Default for RegisterPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(register_count: usize, parameters: usize) -> MethodHandle {
        let params: Vec<String> = (0..parameters).map(|_| "Ljava/lang/Object;".to_string()).collect();
        MethodHandle::new("Lplayer/Builder;", "build", "Ljava/lang/Object;")
            .with_parameters(&params)
            .with_register_count(register_count)
    }

    #[test]
    fn test_within_limit_uses_parameters() {
        // 16 - 13 + 12 = 15
        let plan = RegisterPlanner::new().plan(&target(16, 13), TargetLayout::default()).unwrap();
        assert_eq!(plan.highest_needed_register, 15);
        assert!(!plan.needs_remap);
        assert_eq!(plan.video_id, Register::param(1));
        assert_eq!(plan.proto_buffer, Register::param(3));
        assert_eq!(plan.flag, Register::param(12));
        assert!(plan.setup_moves().is_empty());
        assert!(plan.restore_move().is_none());
    }

    #[test]
    fn test_above_limit_remaps() {
        // 17 - 13 + 12 = 16
        let plan = RegisterPlanner::new().plan(&target(17, 13), TargetLayout::default()).unwrap();
        assert_eq!(plan.highest_needed_register, 16);
        assert!(plan.needs_remap);
        assert_eq!(plan.video_id, Register::local(0));
        assert_eq!(plan.proto_buffer, Register::local(1));
        assert_eq!(plan.flag, Register::local(2));

        let moves: Vec<String> = plan.setup_moves().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            moves,
            vec![
                "move-object/from16 v0, p1",
                "move-object/from16 v1, p3",
                "move/from16 v2, p12",
            ]
        );
        assert_eq!(plan.restore_move().unwrap().to_string(), "move-object/from16 p3, v1");
    }

    #[test]
    fn test_legacy_layout() {
        let plan = RegisterPlanner::new().plan(&target(16, 12), TargetLayout::legacy()).unwrap();
        assert_eq!(plan.highest_needed_register, 15);
        assert_eq!(plan.flag, Register::param(11));
    }

    #[test]
    fn test_parameter_out_of_range() {
        let err = RegisterPlanner::new().plan(&target(20, 4), TargetLayout::default()).unwrap_err();
        assert_eq!(err, PlanError::ParameterOutOfRange { parameter: 12, count: 4 });
    }

    #[test]
    fn test_absolute_register_numbers() {
        let plan = RegisterPlanner::new().plan(&target(16, 13), TargetLayout::default()).unwrap();
        assert_eq!(plan.parameter_base, 3);
        assert_eq!(plan.absolute(plan.flag), plan.highest_needed_register);
        assert_eq!(plan.absolute(Register::param(1)), 4);
        assert_eq!(plan.absolute(Register::local(2)), 2);
    }

    #[test]
    fn test_layout_rejects_parameter_wider_than_u16() {
        let json = r#"{"video_id_parameter":1,"proto_buffer_parameter":65539,"flag_parameter":12}"#;
        assert!(serde_json::from_str::<TargetLayout>(json).is_err());

        let layout: TargetLayout =
            serde_json::from_str(r#"{"video_id_parameter":1,"proto_buffer_parameter":65535,"flag_parameter":12}"#)
                .unwrap();
        let err = RegisterPlanner::new().plan(&target(20, 13), layout).unwrap_err();
        assert_eq!(err, PlanError::ParameterOutOfRange { parameter: 65535, count: 13 });
    }

    #[test]
    fn test_register_count_too_small() {
        let err = RegisterPlanner::new().plan(&target(5, 13), TargetLayout::default()).unwrap_err();
        assert_eq!(err, PlanError::RegisterCountTooSmall { registers: 5, parameters: 13 });
    }
}
