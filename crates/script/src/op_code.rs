//! NeoVM instruction opcodes.
//!
//! The full N3 instruction set; this SDK emits only the push, syscall and
//! compound-type groups but recognizes every opcode when classifying
//! externally loaded scripts.

/// A NeoVM instruction opcode.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    PUSHINT8 = 0x00,
    PUSHINT16 = 0x01,
    PUSHINT32 = 0x02,
    PUSHINT64 = 0x03,
    PUSHINT128 = 0x04,
    PUSHINT256 = 0x05,
    PUSHT = 0x08,
    PUSHF = 0x09,
    PUSHA = 0x0A,
    PUSHNULL = 0x0B,
    PUSHDATA1 = 0x0C,
    PUSHDATA2 = 0x0D,
    PUSHDATA4 = 0x0E,
    PUSHM1 = 0x0F,
    PUSH0 = 0x10,
    PUSH1 = 0x11,
    PUSH2 = 0x12,
    PUSH3 = 0x13,
    PUSH4 = 0x14,
    PUSH5 = 0x15,
    PUSH6 = 0x16,
    PUSH7 = 0x17,
    PUSH8 = 0x18,
    PUSH9 = 0x19,
    PUSH10 = 0x1A,
    PUSH11 = 0x1B,
    PUSH12 = 0x1C,
    PUSH13 = 0x1D,
    PUSH14 = 0x1E,
    PUSH15 = 0x1F,
    PUSH16 = 0x20,
    NOP = 0x21,
    JMP = 0x22,
    JMP_L = 0x23,
    JMPIF = 0x24,
    JMPIF_L = 0x25,
    JMPIFNOT = 0x26,
    JMPIFNOT_L = 0x27,
    JMPEQ = 0x28,
    JMPEQ_L = 0x29,
    JMPNE = 0x2A,
    JMPNE_L = 0x2B,
    JMPGT = 0x2C,
    JMPGT_L = 0x2D,
    JMPGE = 0x2E,
    JMPGE_L = 0x2F,
    JMPLT = 0x30,
    JMPLT_L = 0x31,
    JMPLE = 0x32,
    JMPLE_L = 0x33,
    CALL = 0x34,
    CALL_L = 0x35,
    CALLA = 0x36,
    CALLT = 0x37,
    ABORT = 0x38,
    ASSERT = 0x39,
    THROW = 0x3A,
    TRY = 0x3B,
    TRY_L = 0x3C,
    ENDTRY = 0x3D,
    ENDTRY_L = 0x3E,
    ENDFINALLY = 0x3F,
    RET = 0x40,
    SYSCALL = 0x41,
    DEPTH = 0x43,
    DROP = 0x45,
    NIP = 0x46,
    XDROP = 0x48,
    CLEAR = 0x49,
    DUP = 0x4A,
    OVER = 0x4B,
    PICK = 0x4D,
    TUCK = 0x4E,
    SWAP = 0x50,
    ROT = 0x51,
    ROLL = 0x52,
    REVERSE3 = 0x53,
    REVERSE4 = 0x54,
    REVERSEN = 0x55,
    INITSSLOT = 0x56,
    INITSLOT = 0x57,
    LDSFLD0 = 0x58,
    LDSFLD1 = 0x59,
    LDSFLD2 = 0x5A,
    LDSFLD3 = 0x5B,
    LDSFLD4 = 0x5C,
    LDSFLD5 = 0x5D,
    LDSFLD6 = 0x5E,
    LDSFLD = 0x5F,
    STSFLD0 = 0x60,
    STSFLD1 = 0x61,
    STSFLD2 = 0x62,
    STSFLD3 = 0x63,
    STSFLD4 = 0x64,
    STSFLD5 = 0x65,
    STSFLD6 = 0x66,
    STSFLD = 0x67,
    LDLOC0 = 0x68,
    LDLOC1 = 0x69,
    LDLOC2 = 0x6A,
    LDLOC3 = 0x6B,
    LDLOC4 = 0x6C,
    LDLOC5 = 0x6D,
    LDLOC6 = 0x6E,
    LDLOC = 0x6F,
    STLOC0 = 0x70,
    STLOC1 = 0x71,
    STLOC2 = 0x72,
    STLOC3 = 0x73,
    STLOC4 = 0x74,
    STLOC5 = 0x75,
    STLOC6 = 0x76,
    STLOC = 0x77,
    LDARG0 = 0x78,
    LDARG1 = 0x79,
    LDARG2 = 0x7A,
    LDARG3 = 0x7B,
    LDARG4 = 0x7C,
    LDARG5 = 0x7D,
    LDARG6 = 0x7E,
    LDARG = 0x7F,
    STARG0 = 0x80,
    STARG1 = 0x81,
    STARG2 = 0x82,
    STARG3 = 0x83,
    STARG4 = 0x84,
    STARG5 = 0x85,
    STARG6 = 0x86,
    STARG = 0x87,
    NEWBUFFER = 0x88,
    MEMCPY = 0x89,
    CAT = 0x8B,
    SUBSTR = 0x8C,
    LEFT = 0x8D,
    RIGHT = 0x8E,
    INVERT = 0x90,
    AND = 0x91,
    OR = 0x92,
    XOR = 0x93,
    EQUAL = 0x97,
    NOTEQUAL = 0x98,
    SIGN = 0x99,
    ABS = 0x9A,
    NEGATE = 0x9B,
    INC = 0x9C,
    DEC = 0x9D,
    ADD = 0x9E,
    SUB = 0x9F,
    MUL = 0xA0,
    DIV = 0xA1,
    MOD = 0xA2,
    POW = 0xA3,
    SQRT = 0xA4,
    MODMUL = 0xA5,
    MODPOW = 0xA6,
    SHL = 0xA8,
    SHR = 0xA9,
    NOT = 0xAA,
    BOOLAND = 0xAB,
    BOOLOR = 0xAC,
    NZ = 0xB1,
    NUMEQUAL = 0xB3,
    NUMNOTEQUAL = 0xB4,
    LT = 0xB5,
    LE = 0xB6,
    GT = 0xB7,
    GE = 0xB8,
    MIN = 0xB9,
    MAX = 0xBA,
    WITHIN = 0xBB,
    PACKMAP = 0xBE,
    PACKSTRUCT = 0xBF,
    PACK = 0xC0,
    UNPACK = 0xC1,
    NEWARRAY0 = 0xC2,
    NEWARRAY = 0xC3,
    NEWARRAY_T = 0xC4,
    NEWSTRUCT0 = 0xC5,
    NEWSTRUCT = 0xC6,
    NEWMAP = 0xC8,
    SIZE = 0xCA,
    HASKEY = 0xCB,
    KEYS = 0xCC,
    VALUES = 0xCD,
    PICKITEM = 0xCE,
    APPEND = 0xCF,
    SETITEM = 0xD0,
    REVERSEITEMS = 0xD1,
    REMOVE = 0xD2,
    CLEARITEMS = 0xD3,
    ISNULL = 0xD8,
    ISTYPE = 0xD9,
    CONVERT = 0xDB,
}

impl OpCode {
    /// The opcode's byte value.
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Looks up the opcode for a byte value.
    pub fn from_byte(byte: u8) -> Option<OpCode> {
        match byte {
            0x00 => Some(OpCode::PUSHINT8),
            0x01 => Some(OpCode::PUSHINT16),
            0x02 => Some(OpCode::PUSHINT32),
            0x03 => Some(OpCode::PUSHINT64),
            0x04 => Some(OpCode::PUSHINT128),
            0x05 => Some(OpCode::PUSHINT256),
            0x08 => Some(OpCode::PUSHT),
            0x09 => Some(OpCode::PUSHF),
            0x0A => Some(OpCode::PUSHA),
            0x0B => Some(OpCode::PUSHNULL),
            0x0C => Some(OpCode::PUSHDATA1),
            0x0D => Some(OpCode::PUSHDATA2),
            0x0E => Some(OpCode::PUSHDATA4),
            0x0F => Some(OpCode::PUSHM1),
            0x10 => Some(OpCode::PUSH0),
            0x11 => Some(OpCode::PUSH1),
            0x12 => Some(OpCode::PUSH2),
            0x13 => Some(OpCode::PUSH3),
            0x14 => Some(OpCode::PUSH4),
            0x15 => Some(OpCode::PUSH5),
            0x16 => Some(OpCode::PUSH6),
            0x17 => Some(OpCode::PUSH7),
            0x18 => Some(OpCode::PUSH8),
            0x19 => Some(OpCode::PUSH9),
            0x1A => Some(OpCode::PUSH10),
            0x1B => Some(OpCode::PUSH11),
            0x1C => Some(OpCode::PUSH12),
            0x1D => Some(OpCode::PUSH13),
            0x1E => Some(OpCode::PUSH14),
            0x1F => Some(OpCode::PUSH15),
            0x20 => Some(OpCode::PUSH16),
            0x21 => Some(OpCode::NOP),
            0x22 => Some(OpCode::JMP),
            0x23 => Some(OpCode::JMP_L),
            0x24 => Some(OpCode::JMPIF),
            0x25 => Some(OpCode::JMPIF_L),
            0x26 => Some(OpCode::JMPIFNOT),
            0x27 => Some(OpCode::JMPIFNOT_L),
            0x28 => Some(OpCode::JMPEQ),
            0x29 => Some(OpCode::JMPEQ_L),
            0x2A => Some(OpCode::JMPNE),
            0x2B => Some(OpCode::JMPNE_L),
            0x2C => Some(OpCode::JMPGT),
            0x2D => Some(OpCode::JMPGT_L),
            0x2E => Some(OpCode::JMPGE),
            0x2F => Some(OpCode::JMPGE_L),
            0x30 => Some(OpCode::JMPLT),
            0x31 => Some(OpCode::JMPLT_L),
            0x32 => Some(OpCode::JMPLE),
            0x33 => Some(OpCode::JMPLE_L),
            0x34 => Some(OpCode::CALL),
            0x35 => Some(OpCode::CALL_L),
            0x36 => Some(OpCode::CALLA),
            0x37 => Some(OpCode::CALLT),
            0x38 => Some(OpCode::ABORT),
            0x39 => Some(OpCode::ASSERT),
            0x3A => Some(OpCode::THROW),
            0x3B => Some(OpCode::TRY),
            0x3C => Some(OpCode::TRY_L),
            0x3D => Some(OpCode::ENDTRY),
            0x3E => Some(OpCode::ENDTRY_L),
            0x3F => Some(OpCode::ENDFINALLY),
            0x40 => Some(OpCode::RET),
            0x41 => Some(OpCode::SYSCALL),
            0x43 => Some(OpCode::DEPTH),
            0x45 => Some(OpCode::DROP),
            0x46 => Some(OpCode::NIP),
            0x48 => Some(OpCode::XDROP),
            0x49 => Some(OpCode::CLEAR),
            0x4A => Some(OpCode::DUP),
            0x4B => Some(OpCode::OVER),
            0x4D => Some(OpCode::PICK),
            0x4E => Some(OpCode::TUCK),
            0x50 => Some(OpCode::SWAP),
            0x51 => Some(OpCode::ROT),
            0x52 => Some(OpCode::ROLL),
            0x53 => Some(OpCode::REVERSE3),
            0x54 => Some(OpCode::REVERSE4),
            0x55 => Some(OpCode::REVERSEN),
            0x56 => Some(OpCode::INITSSLOT),
            0x57 => Some(OpCode::INITSLOT),
            0x58 => Some(OpCode::LDSFLD0),
            0x59 => Some(OpCode::LDSFLD1),
            0x5A => Some(OpCode::LDSFLD2),
            0x5B => Some(OpCode::LDSFLD3),
            0x5C => Some(OpCode::LDSFLD4),
            0x5D => Some(OpCode::LDSFLD5),
            0x5E => Some(OpCode::LDSFLD6),
            0x5F => Some(OpCode::LDSFLD),
            0x60 => Some(OpCode::STSFLD0),
            0x61 => Some(OpCode::STSFLD1),
            0x62 => Some(OpCode::STSFLD2),
            0x63 => Some(OpCode::STSFLD3),
            0x64 => Some(OpCode::STSFLD4),
            0x65 => Some(OpCode::STSFLD5),
            0x66 => Some(OpCode::STSFLD6),
            0x67 => Some(OpCode::STSFLD),
            0x68 => Some(OpCode::LDLOC0),
            0x69 => Some(OpCode::LDLOC1),
            0x6A => Some(OpCode::LDLOC2),
            0x6B => Some(OpCode::LDLOC3),
            0x6C => Some(OpCode::LDLOC4),
            0x6D => Some(OpCode::LDLOC5),
            0x6E => Some(OpCode::LDLOC6),
            0x6F => Some(OpCode::LDLOC),
            0x70 => Some(OpCode::STLOC0),
            0x71 => Some(OpCode::STLOC1),
            0x72 => Some(OpCode::STLOC2),
            0x73 => Some(OpCode::STLOC3),
            0x74 => Some(OpCode::STLOC4),
            0x75 => Some(OpCode::STLOC5),
            0x76 => Some(OpCode::STLOC6),
            0x77 => Some(OpCode::STLOC),
            0x78 => Some(OpCode::LDARG0),
            0x79 => Some(OpCode::LDARG1),
            0x7A => Some(OpCode::LDARG2),
            0x7B => Some(OpCode::LDARG3),
            0x7C => Some(OpCode::LDARG4),
            0x7D => Some(OpCode::LDARG5),
            0x7E => Some(OpCode::LDARG6),
            0x7F => Some(OpCode::LDARG),
            0x80 => Some(OpCode::STARG0),
            0x81 => Some(OpCode::STARG1),
            0x82 => Some(OpCode::STARG2),
            0x83 => Some(OpCode::STARG3),
            0x84 => Some(OpCode::STARG4),
            0x85 => Some(OpCode::STARG5),
            0x86 => Some(OpCode::STARG6),
            0x87 => Some(OpCode::STARG),
            0x88 => Some(OpCode::NEWBUFFER),
            0x89 => Some(OpCode::MEMCPY),
            0x8B => Some(OpCode::CAT),
            0x8C => Some(OpCode::SUBSTR),
            0x8D => Some(OpCode::LEFT),
            0x8E => Some(OpCode::RIGHT),
            0x90 => Some(OpCode::INVERT),
            0x91 => Some(OpCode::AND),
            0x92 => Some(OpCode::OR),
            0x93 => Some(OpCode::XOR),
            0x97 => Some(OpCode::EQUAL),
            0x98 => Some(OpCode::NOTEQUAL),
            0x99 => Some(OpCode::SIGN),
            0x9A => Some(OpCode::ABS),
            0x9B => Some(OpCode::NEGATE),
            0x9C => Some(OpCode::INC),
            0x9D => Some(OpCode::DEC),
            0x9E => Some(OpCode::ADD),
            0x9F => Some(OpCode::SUB),
            0xA0 => Some(OpCode::MUL),
            0xA1 => Some(OpCode::DIV),
            0xA2 => Some(OpCode::MOD),
            0xA3 => Some(OpCode::POW),
            0xA4 => Some(OpCode::SQRT),
            0xA5 => Some(OpCode::MODMUL),
            0xA6 => Some(OpCode::MODPOW),
            0xA8 => Some(OpCode::SHL),
            0xA9 => Some(OpCode::SHR),
            0xAA => Some(OpCode::NOT),
            0xAB => Some(OpCode::BOOLAND),
            0xAC => Some(OpCode::BOOLOR),
            0xB1 => Some(OpCode::NZ),
            0xB3 => Some(OpCode::NUMEQUAL),
            0xB4 => Some(OpCode::NUMNOTEQUAL),
            0xB5 => Some(OpCode::LT),
            0xB6 => Some(OpCode::LE),
            0xB7 => Some(OpCode::GT),
            0xB8 => Some(OpCode::GE),
            0xB9 => Some(OpCode::MIN),
            0xBA => Some(OpCode::MAX),
            0xBB => Some(OpCode::WITHIN),
            0xBE => Some(OpCode::PACKMAP),
            0xBF => Some(OpCode::PACKSTRUCT),
            0xC0 => Some(OpCode::PACK),
            0xC1 => Some(OpCode::UNPACK),
            0xC2 => Some(OpCode::NEWARRAY0),
            0xC3 => Some(OpCode::NEWARRAY),
            0xC4 => Some(OpCode::NEWARRAY_T),
            0xC5 => Some(OpCode::NEWSTRUCT0),
            0xC6 => Some(OpCode::NEWSTRUCT),
            0xC8 => Some(OpCode::NEWMAP),
            0xCA => Some(OpCode::SIZE),
            0xCB => Some(OpCode::HASKEY),
            0xCC => Some(OpCode::KEYS),
            0xCD => Some(OpCode::VALUES),
            0xCE => Some(OpCode::PICKITEM),
            0xCF => Some(OpCode::APPEND),
            0xD0 => Some(OpCode::SETITEM),
            0xD1 => Some(OpCode::REVERSEITEMS),
            0xD2 => Some(OpCode::REMOVE),
            0xD3 => Some(OpCode::CLEARITEMS),
            0xD8 => Some(OpCode::ISNULL),
            0xD9 => Some(OpCode::ISTYPE),
            0xDB => Some(OpCode::CONVERT),
            _ => None,
        }
    }
}
