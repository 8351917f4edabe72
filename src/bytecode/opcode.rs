// Mon Oct 12 2026 - Alex

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

static BY_NAME: Lazy<HashMap<&'static str, Opcode>> =
    Lazy::new(|| Opcode::ALL.iter().map(|op| (op.name(), *op)).collect());

/// Dalvik instruction set, dex versions 035 through 039.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    Move,
    MoveFrom16,
    Move16,
    MoveWide,
    MoveWideFrom16,
    MoveWide16,
    MoveObject,
    MoveObjectFrom16,
    MoveObject16,
    MoveResult,
    MoveResultWide,
    MoveResultObject,
    MoveException,
    ReturnVoid,
    Return,
    ReturnWide,
    ReturnObject,
    Const4,
    Const16,
    Const,
    ConstHigh16,
    ConstWide16,
    ConstWide32,
    ConstWide,
    ConstWideHigh16,
    ConstString,
    ConstStringJumbo,
    ConstClass,
    MonitorEnter,
    MonitorExit,
    CheckCast,
    InstanceOf,
    ArrayLength,
    NewInstance,
    NewArray,
    FilledNewArray,
    FilledNewArrayRange,
    FillArrayData,
    Throw,
    Goto,
    Goto16,
    Goto32,
    PackedSwitch,
    SparseSwitch,
    CmplFloat,
    CmpgFloat,
    CmplDouble,
    CmpgDouble,
    CmpLong,
    IfEq,
    IfNe,
    IfLt,
    IfGe,
    IfGt,
    IfLe,
    IfEqz,
    IfNez,
    IfLtz,
    IfGez,
    IfGtz,
    IfLez,
    Aget,
    AgetWide,
    AgetObject,
    AgetBoolean,
    AgetByte,
    AgetChar,
    AgetShort,
    Aput,
    AputWide,
    AputObject,
    AputBoolean,
    AputByte,
    AputChar,
    AputShort,
    Iget,
    IgetWide,
    IgetObject,
    IgetBoolean,
    IgetByte,
    IgetChar,
    IgetShort,
    Iput,
    IputWide,
    IputObject,
    IputBoolean,
    IputByte,
    IputChar,
    IputShort,
    Sget,
    SgetWide,
    SgetObject,
    SgetBoolean,
    SgetByte,
    SgetChar,
    SgetShort,
    Sput,
    SputWide,
    SputObject,
    SputBoolean,
    SputByte,
    SputChar,
    SputShort,
    InvokeVirtual,
    InvokeSuper,
    InvokeDirect,
    InvokeStatic,
    InvokeInterface,
    InvokeVirtualRange,
    InvokeSuperRange,
    InvokeDirectRange,
    InvokeStaticRange,
    InvokeInterfaceRange,
    NegInt,
    NotInt,
    NegLong,
    NotLong,
    NegFloat,
    NegDouble,
    IntToLong,
    IntToFloat,
    IntToDouble,
    LongToInt,
    LongToFloat,
    LongToDouble,
    FloatToInt,
    FloatToLong,
    FloatToDouble,
    DoubleToInt,
    DoubleToLong,
    DoubleToFloat,
    IntToByte,
    IntToChar,
    IntToShort,
    AddInt,
    SubInt,
    MulInt,
    DivInt,
    RemInt,
    AndInt,
    OrInt,
    XorInt,
    ShlInt,
    ShrInt,
    UshrInt,
    AddLong,
    SubLong,
    MulLong,
    DivLong,
    RemLong,
    AndLong,
    OrLong,
    XorLong,
    ShlLong,
    ShrLong,
    UshrLong,
    AddFloat,
    SubFloat,
    MulFloat,
    DivFloat,
    RemFloat,
    AddDouble,
    SubDouble,
    MulDouble,
    DivDouble,
    RemDouble,
    AddInt2Addr,
    SubInt2Addr,
    MulInt2Addr,
    DivInt2Addr,
    RemInt2Addr,
    AndInt2Addr,
    OrInt2Addr,
    XorInt2Addr,
    ShlInt2Addr,
    ShrInt2Addr,
    UshrInt2Addr,
    AddLong2Addr,
    SubLong2Addr,
    MulLong2Addr,
    DivLong2Addr,
    RemLong2Addr,
    AndLong2Addr,
    OrLong2Addr,
    XorLong2Addr,
    ShlLong2Addr,
    ShrLong2Addr,
    UshrLong2Addr,
    AddFloat2Addr,
    SubFloat2Addr,
    MulFloat2Addr,
    DivFloat2Addr,
    RemFloat2Addr,
    AddDouble2Addr,
    SubDouble2Addr,
    MulDouble2Addr,
    DivDouble2Addr,
    RemDouble2Addr,
    AddIntLit16,
    RsubInt,
    MulIntLit16,
    DivIntLit16,
    RemIntLit16,
    AndIntLit16,
    OrIntLit16,
    XorIntLit16,
    AddIntLit8,
    RsubIntLit8,
    MulIntLit8,
    DivIntLit8,
    RemIntLit8,
    AndIntLit8,
    OrIntLit8,
    XorIntLit8,
    ShlIntLit8,
    ShrIntLit8,
    UshrIntLit8,
    InvokePolymorphic,
    InvokePolymorphicRange,
    InvokeCustom,
    InvokeCustomRange,
    ConstMethodHandle,
    ConstMethodType,
}

impl Opcode {
    pub const ALL: &'static [Opcode] = &[
        Opcode::Nop,
        Opcode::Move,
        Opcode::MoveFrom16,
        Opcode::Move16,
        Opcode::MoveWide,
        Opcode::MoveWideFrom16,
        Opcode::MoveWide16,
        Opcode::MoveObject,
        Opcode::MoveObjectFrom16,
        Opcode::MoveObject16,
        Opcode::MoveResult,
        Opcode::MoveResultWide,
        Opcode::MoveResultObject,
        Opcode::MoveException,
        Opcode::ReturnVoid,
        Opcode::Return,
        Opcode::ReturnWide,
        Opcode::ReturnObject,
        Opcode::Const4,
        Opcode::Const16,
        Opcode::Const,
        Opcode::ConstHigh16,
        Opcode::ConstWide16,
        Opcode::ConstWide32,
        Opcode::ConstWide,
        Opcode::ConstWideHigh16,
        Opcode::ConstString,
        Opcode::ConstStringJumbo,
        Opcode::ConstClass,
        Opcode::MonitorEnter,
        Opcode::MonitorExit,
        Opcode::CheckCast,
        Opcode::InstanceOf,
        Opcode::ArrayLength,
        Opcode::NewInstance,
        Opcode::NewArray,
        Opcode::FilledNewArray,
        Opcode::FilledNewArrayRange,
        Opcode::FillArrayData,
        Opcode::Throw,
        Opcode::Goto,
        Opcode::Goto16,
        Opcode::Goto32,
        Opcode::PackedSwitch,
        Opcode::SparseSwitch,
        Opcode::CmplFloat,
        Opcode::CmpgFloat,
        Opcode::CmplDouble,
        Opcode::CmpgDouble,
        Opcode::CmpLong,
        Opcode::IfEq,
        Opcode::IfNe,
        Opcode::IfLt,
        Opcode::IfGe,
        Opcode::IfGt,
        Opcode::IfLe,
        Opcode::IfEqz,
        Opcode::IfNez,
        Opcode::IfLtz,
        Opcode::IfGez,
        Opcode::IfGtz,
        Opcode::IfLez,
        Opcode::Aget,
        Opcode::AgetWide,
        Opcode::AgetObject,
        Opcode::AgetBoolean,
        Opcode::AgetByte,
        Opcode::AgetChar,
        Opcode::AgetShort,
        Opcode::Aput,
        Opcode::AputWide,
        Opcode::AputObject,
        Opcode::AputBoolean,
        Opcode::AputByte,
        Opcode::AputChar,
        Opcode::AputShort,
        Opcode::Iget,
        Opcode::IgetWide,
        Opcode::IgetObject,
        Opcode::IgetBoolean,
        Opcode::IgetByte,
        Opcode::IgetChar,
        Opcode::IgetShort,
        Opcode::Iput,
        Opcode::IputWide,
        Opcode::IputObject,
        Opcode::IputBoolean,
        Opcode::IputByte,
        Opcode::IputChar,
        Opcode::IputShort,
        Opcode::Sget,
        Opcode::SgetWide,
        Opcode::SgetObject,
        Opcode::SgetBoolean,
        Opcode::SgetByte,
        Opcode::SgetChar,
        Opcode::SgetShort,
        Opcode::Sput,
        Opcode::SputWide,
        Opcode::SputObject,
        Opcode::SputBoolean,
        Opcode::SputByte,
        Opcode::SputChar,
        Opcode::SputShort,
        Opcode::InvokeVirtual,
        Opcode::InvokeSuper,
        Opcode::InvokeDirect,
        Opcode::InvokeStatic,
        Opcode::InvokeInterface,
        Opcode::InvokeVirtualRange,
        Opcode::InvokeSuperRange,
        Opcode::InvokeDirectRange,
        Opcode::InvokeStaticRange,
        Opcode::InvokeInterfaceRange,
        Opcode::NegInt,
        Opcode::NotInt,
        Opcode::NegLong,
        Opcode::NotLong,
        Opcode::NegFloat,
        Opcode::NegDouble,
        Opcode::IntToLong,
        Opcode::IntToFloat,
        Opcode::IntToDouble,
        Opcode::LongToInt,
        Opcode::LongToFloat,
        Opcode::LongToDouble,
        Opcode::FloatToInt,
        Opcode::FloatToLong,
        Opcode::FloatToDouble,
        Opcode::DoubleToInt,
        Opcode::DoubleToLong,
        Opcode::DoubleToFloat,
        Opcode::IntToByte,
        Opcode::IntToChar,
        Opcode::IntToShort,
        Opcode::AddInt,
        Opcode::SubInt,
        Opcode::MulInt,
        Opcode::DivInt,
        Opcode::RemInt,
        Opcode::AndInt,
        Opcode::OrInt,
        Opcode::XorInt,
        Opcode::ShlInt,
        Opcode::ShrInt,
        Opcode::UshrInt,
        Opcode::AddLong,
        Opcode::SubLong,
        Opcode::MulLong,
        Opcode::DivLong,
        Opcode::RemLong,
        Opcode::AndLong,
        Opcode::OrLong,
        Opcode::XorLong,
        Opcode::ShlLong,
        Opcode::ShrLong,
        Opcode::UshrLong,
        Opcode::AddFloat,
        Opcode::SubFloat,
        Opcode::MulFloat,
        Opcode::DivFloat,
        Opcode::RemFloat,
        Opcode::AddDouble,
        Opcode::SubDouble,
        Opcode::MulDouble,
        Opcode::DivDouble,
        Opcode::RemDouble,
        Opcode::AddInt2Addr,
        Opcode::SubInt2Addr,
        Opcode::MulInt2Addr,
        Opcode::DivInt2Addr,
        Opcode::RemInt2Addr,
        Opcode::AndInt2Addr,
        Opcode::OrInt2Addr,
        Opcode::XorInt2Addr,
        Opcode::ShlInt2Addr,
        Opcode::ShrInt2Addr,
        Opcode::UshrInt2Addr,
        Opcode::AddLong2Addr,
        Opcode::SubLong2Addr,
        Opcode::MulLong2Addr,
        Opcode::DivLong2Addr,
        Opcode::RemLong2Addr,
        Opcode::AndLong2Addr,
        Opcode::OrLong2Addr,
        Opcode::XorLong2Addr,
        Opcode::ShlLong2Addr,
        Opcode::ShrLong2Addr,
        Opcode::UshrLong2Addr,
        Opcode::AddFloat2Addr,
        Opcode::SubFloat2Addr,
        Opcode::MulFloat2Addr,
        Opcode::DivFloat2Addr,
        Opcode::RemFloat2Addr,
        Opcode::AddDouble2Addr,
        Opcode::SubDouble2Addr,
        Opcode::MulDouble2Addr,
        Opcode::DivDouble2Addr,
        Opcode::RemDouble2Addr,
        Opcode::AddIntLit16,
        Opcode::RsubInt,
        Opcode::MulIntLit16,
        Opcode::DivIntLit16,
        Opcode::RemIntLit16,
        Opcode::AndIntLit16,
        Opcode::OrIntLit16,
        Opcode::XorIntLit16,
        Opcode::AddIntLit8,
        Opcode::RsubIntLit8,
        Opcode::MulIntLit8,
        Opcode::DivIntLit8,
        Opcode::RemIntLit8,
        Opcode::AndIntLit8,
        Opcode::OrIntLit8,
        Opcode::XorIntLit8,
        Opcode::ShlIntLit8,
        Opcode::ShrIntLit8,
        Opcode::UshrIntLit8,
        Opcode::InvokePolymorphic,
        Opcode::InvokePolymorphicRange,
        Opcode::InvokeCustom,
        Opcode::InvokeCustomRange,
        Opcode::ConstMethodHandle,
        Opcode::ConstMethodType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Opcode::Nop => "nop",
            Opcode::Move => "move",
            Opcode::MoveFrom16 => "move/from16",
            Opcode::Move16 => "move/16",
            Opcode::MoveWide => "move-wide",
            Opcode::MoveWideFrom16 => "move-wide/from16",
            Opcode::MoveWide16 => "move-wide/16",
            Opcode::MoveObject => "move-object",
            Opcode::MoveObjectFrom16 => "move-object/from16",
            Opcode::MoveObject16 => "move-object/16",
            Opcode::MoveResult => "move-result",
            Opcode::MoveResultWide => "move-result-wide",
            Opcode::MoveResultObject => "move-result-object",
            Opcode::MoveException => "move-exception",
            Opcode::ReturnVoid => "return-void",
            Opcode::Return => "return",
            Opcode::ReturnWide => "return-wide",
            Opcode::ReturnObject => "return-object",
            Opcode::Const4 => "const/4",
            Opcode::Const16 => "const/16",
            Opcode::Const => "const",
            Opcode::ConstHigh16 => "const/high16",
            Opcode::ConstWide16 => "const-wide/16",
            Opcode::ConstWide32 => "const-wide/32",
            Opcode::ConstWide => "const-wide",
            Opcode::ConstWideHigh16 => "const-wide/high16",
            Opcode::ConstString => "const-string",
            Opcode::ConstStringJumbo => "const-string/jumbo",
            Opcode::ConstClass => "const-class",
            Opcode::MonitorEnter => "monitor-enter",
            Opcode::MonitorExit => "monitor-exit",
            Opcode::CheckCast => "check-cast",
            Opcode::InstanceOf => "instance-of",
            Opcode::ArrayLength => "array-length",
            Opcode::NewInstance => "new-instance",
            Opcode::NewArray => "new-array",
            Opcode::FilledNewArray => "filled-new-array",
            Opcode::FilledNewArrayRange => "filled-new-array/range",
            Opcode::FillArrayData => "fill-array-data",
            Opcode::Throw => "throw",
            Opcode::Goto => "goto",
            Opcode::Goto16 => "goto/16",
            Opcode::Goto32 => "goto/32",
            Opcode::PackedSwitch => "packed-switch",
            Opcode::SparseSwitch => "sparse-switch",
            Opcode::CmplFloat => "cmpl-float",
            Opcode::CmpgFloat => "cmpg-float",
            Opcode::CmplDouble => "cmpl-double",
            Opcode::CmpgDouble => "cmpg-double",
            Opcode::CmpLong => "cmp-long",
            Opcode::IfEq => "if-eq",
            Opcode::IfNe => "if-ne",
            Opcode::IfLt => "if-lt",
            Opcode::IfGe => "if-ge",
            Opcode::IfGt => "if-gt",
            Opcode::IfLe => "if-le",
            Opcode::IfEqz => "if-eqz",
            Opcode::IfNez => "if-nez",
            Opcode::IfLtz => "if-ltz",
            Opcode::IfGez => "if-gez",
            Opcode::IfGtz => "if-gtz",
            Opcode::IfLez => "if-lez",
            Opcode::Aget => "aget",
            Opcode::AgetWide => "aget-wide",
            Opcode::AgetObject => "aget-object",
            Opcode::AgetBoolean => "aget-boolean",
            Opcode::AgetByte => "aget-byte",
            Opcode::AgetChar => "aget-char",
            Opcode::AgetShort => "aget-short",
            Opcode::Aput => "aput",
            Opcode::AputWide => "aput-wide",
            Opcode::AputObject => "aput-object",
            Opcode::AputBoolean => "aput-boolean",
            Opcode::AputByte => "aput-byte",
            Opcode::AputChar => "aput-char",
            Opcode::AputShort => "aput-short",
            Opcode::Iget => "iget",
            Opcode::IgetWide => "iget-wide",
            Opcode::IgetObject => "iget-object",
            Opcode::IgetBoolean => "iget-boolean",
            Opcode::IgetByte => "iget-byte",
            Opcode::IgetChar => "iget-char",
            Opcode::IgetShort => "iget-short",
            Opcode::Iput => "iput",
            Opcode::IputWide => "iput-wide",
            Opcode::IputObject => "iput-object",
            Opcode::IputBoolean => "iput-boolean",
            Opcode::IputByte => "iput-byte",
            Opcode::IputChar => "iput-char",
            Opcode::IputShort => "iput-short",
            Opcode::Sget => "sget",
            Opcode::SgetWide => "sget-wide",
            Opcode::SgetObject => "sget-object",
            Opcode::SgetBoolean => "sget-boolean",
            Opcode::SgetByte => "sget-byte",
            Opcode::SgetChar => "sget-char",
            Opcode::SgetShort => "sget-short",
            Opcode::Sput => "sput",
            Opcode::SputWide => "sput-wide",
            Opcode::SputObject => "sput-object",
            Opcode::SputBoolean => "sput-boolean",
            Opcode::SputByte => "sput-byte",
            Opcode::SputChar => "sput-char",
            Opcode::SputShort => "sput-short",
            Opcode::InvokeVirtual => "invoke-virtual",
            Opcode::InvokeSuper => "invoke-super",
            Opcode::InvokeDirect => "invoke-direct",
            Opcode::InvokeStatic => "invoke-static",
            Opcode::InvokeInterface => "invoke-interface",
            Opcode::InvokeVirtualRange => "invoke-virtual/range",
            Opcode::InvokeSuperRange => "invoke-super/range",
            Opcode::InvokeDirectRange => "invoke-direct/range",
            Opcode::InvokeStaticRange => "invoke-static/range",
            Opcode::InvokeInterfaceRange => "invoke-interface/range",
            Opcode::NegInt => "neg-int",
            Opcode::NotInt => "not-int",
            Opcode::NegLong => "neg-long",
            Opcode::NotLong => "not-long",
            Opcode::NegFloat => "neg-float",
            Opcode::NegDouble => "neg-double",
            Opcode::IntToLong => "int-to-long",
            Opcode::IntToFloat => "int-to-float",
            Opcode::IntToDouble => "int-to-double",
            Opcode::LongToInt => "long-to-int",
            Opcode::LongToFloat => "long-to-float",
            Opcode::LongToDouble => "long-to-double",
            Opcode::FloatToInt => "float-to-int",
            Opcode::FloatToLong => "float-to-long",
            Opcode::FloatToDouble => "float-to-double",
            Opcode::DoubleToInt => "double-to-int",
            Opcode::DoubleToLong => "double-to-long",
            Opcode::DoubleToFloat => "double-to-float",
            Opcode::IntToByte => "int-to-byte",
            Opcode::IntToChar => "int-to-char",
            Opcode::IntToShort => "int-to-short",
            Opcode::AddInt => "add-int",
            Opcode::SubInt => "sub-int",
            Opcode::MulInt => "mul-int",
            Opcode::DivInt => "div-int",
            Opcode::RemInt => "rem-int",
            Opcode::AndInt => "and-int",
            Opcode::OrInt => "or-int",
            Opcode::XorInt => "xor-int",
            Opcode::ShlInt => "shl-int",
            Opcode::ShrInt => "shr-int",
            Opcode::UshrInt => "ushr-int",
            Opcode::AddLong => "add-long",
            Opcode::SubLong => "sub-long",
            Opcode::MulLong => "mul-long",
            Opcode::DivLong => "div-long",
            Opcode::RemLong => "rem-long",
            Opcode::AndLong => "and-long",
            Opcode::OrLong => "or-long",
            Opcode::XorLong => "xor-long",
            Opcode::ShlLong => "shl-long",
            Opcode::ShrLong => "shr-long",
            Opcode::UshrLong => "ushr-long",
            Opcode::AddFloat => "add-float",
            Opcode::SubFloat => "sub-float",
            Opcode::MulFloat => "mul-float",
            Opcode::DivFloat => "div-float",
            Opcode::RemFloat => "rem-float",
            Opcode::AddDouble => "add-double",
            Opcode::SubDouble => "sub-double",
            Opcode::MulDouble => "mul-double",
            Opcode::DivDouble => "div-double",
            Opcode::RemDouble => "rem-double",
            Opcode::AddInt2Addr => "add-int/2addr",
            Opcode::SubInt2Addr => "sub-int/2addr",
            Opcode::MulInt2Addr => "mul-int/2addr",
            Opcode::DivInt2Addr => "div-int/2addr",
            Opcode::RemInt2Addr => "rem-int/2addr",
            Opcode::AndInt2Addr => "and-int/2addr",
            Opcode::OrInt2Addr => "or-int/2addr",
            Opcode::XorInt2Addr => "xor-int/2addr",
            Opcode::ShlInt2Addr => "shl-int/2addr",
            Opcode::ShrInt2Addr => "shr-int/2addr",
            Opcode::UshrInt2Addr => "ushr-int/2addr",
            Opcode::AddLong2Addr => "add-long/2addr",
            Opcode::SubLong2Addr => "sub-long/2addr",
            Opcode::MulLong2Addr => "mul-long/2addr",
            Opcode::DivLong2Addr => "div-long/2addr",
            Opcode::RemLong2Addr => "rem-long/2addr",
            Opcode::AndLong2Addr => "and-long/2addr",
            Opcode::OrLong2Addr => "or-long/2addr",
            Opcode::XorLong2Addr => "xor-long/2addr",
            Opcode::ShlLong2Addr => "shl-long/2addr",
            Opcode::ShrLong2Addr => "shr-long/2addr",
            Opcode::UshrLong2Addr => "ushr-long/2addr",
            Opcode::AddFloat2Addr => "add-float/2addr",
            Opcode::SubFloat2Addr => "sub-float/2addr",
            Opcode::MulFloat2Addr => "mul-float/2addr",
            Opcode::DivFloat2Addr => "div-float/2addr",
            Opcode::RemFloat2Addr => "rem-float/2addr",
            Opcode::AddDouble2Addr => "add-double/2addr",
            Opcode::SubDouble2Addr => "sub-double/2addr",
            Opcode::MulDouble2Addr => "mul-double/2addr",
            Opcode::DivDouble2Addr => "div-double/2addr",
            Opcode::RemDouble2Addr => "rem-double/2addr",
            Opcode::AddIntLit16 => "add-int/lit16",
            Opcode::RsubInt => "rsub-int",
            Opcode::MulIntLit16 => "mul-int/lit16",
            Opcode::DivIntLit16 => "div-int/lit16",
            Opcode::RemIntLit16 => "rem-int/lit16",
            Opcode::AndIntLit16 => "and-int/lit16",
            Opcode::OrIntLit16 => "or-int/lit16",
            Opcode::XorIntLit16 => "xor-int/lit16",
            Opcode::AddIntLit8 => "add-int/lit8",
            Opcode::RsubIntLit8 => "rsub-int/lit8",
            Opcode::MulIntLit8 => "mul-int/lit8",
            Opcode::DivIntLit8 => "div-int/lit8",
            Opcode::RemIntLit8 => "rem-int/lit8",
            Opcode::AndIntLit8 => "and-int/lit8",
            Opcode::OrIntLit8 => "or-int/lit8",
            Opcode::XorIntLit8 => "xor-int/lit8",
            Opcode::ShlIntLit8 => "shl-int/lit8",
            Opcode::ShrIntLit8 => "shr-int/lit8",
            Opcode::UshrIntLit8 => "ushr-int/lit8",
            Opcode::InvokePolymorphic => "invoke-polymorphic",
            Opcode::InvokePolymorphicRange => "invoke-polymorphic/range",
            Opcode::InvokeCustom => "invoke-custom",
            Opcode::InvokeCustomRange => "invoke-custom/range",
            Opcode::ConstMethodHandle => "const-method-handle",
            Opcode::ConstMethodType => "const-method-type",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// Argument registers are packed into 4-bit fields (35c format).
    pub fn uses_4bit_registers(&self) -> bool {
        matches!(
            self,
            Opcode::InvokeVirtual
                | Opcode::InvokeSuper
                | Opcode::InvokeDirect
                | Opcode::InvokeStatic
                | Opcode::InvokeInterface
                | Opcode::InvokeCustom
                | Opcode::FilledNewArray
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Opcode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::from_name(s).ok_or_else(|| format!("unknown opcode '{}'", s))
    }
}

impl Serialize for Opcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Opcode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
