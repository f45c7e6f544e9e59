use std::fmt;

use lazy_static::lazy_static;

use super::regs::{Flags, Reg, RegPair, StackPair};
use crate::memory::Memory;

/// Branch condition for JMP/CALL/RET.
///
/// Only the zero, carry and sign conditions exist here; the parity forms
/// (JPO/JPE and friends) are undefined opcodes, and CALL/RET are only
/// decoded with the zero and carry conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Always,
    NotZero,
    Zero,
    NoCarry,
    Carry,
    /// Sign clear.
    Plus,
    /// Sign set.
    Minus,
}

impl Condition {
    #[inline]
    pub fn holds(self, flags: &Flags) -> bool {
        match self {
            Condition::Always => true,
            Condition::NotZero => !flags.zero,
            Condition::Zero => flags.zero,
            Condition::NoCarry => !flags.carry,
            Condition::Carry => flags.carry,
            Condition::Plus => !flags.sign,
            Condition::Minus => flags.sign,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Condition::Always => "",
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NoCarry => "NC",
            Condition::Carry => "C",
            Condition::Plus => "P",
            Condition::Minus => "M",
        }
    }
}

/// Accumulator operation selected by bits 3-5 of the 0x80-0xBF block and
/// of the immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    /// Decoded for the register and memory forms (0x98-0x9F) as well as
    /// SBI, although only SBI is an established part of this instruction set.
    Sbb,
    Ana,
    Xra,
    Ora,
    Cmp,
}

impl AluOp {
    pub const fn from_bits(bits: u8) -> AluOp {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbb,
            4 => AluOp::Ana,
            5 => AluOp::Xra,
            6 => AluOp::Ora,
            _ => AluOp::Cmp,
        }
    }

    fn register_mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbb => "SBB",
            AluOp::Ana => "ANA",
            AluOp::Xra => "XRA",
            AluOp::Ora => "ORA",
            AluOp::Cmp => "CMP",
        }
    }

    fn immediate_mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADI",
            AluOp::Adc => "ACI",
            AluOp::Sub => "SUI",
            AluOp::Sbb => "SBI",
            AluOp::Ana => "ANI",
            AluOp::Xra => "XRI",
            AluOp::Ora => "ORI",
            AluOp::Cmp => "CPI",
        }
    }
}

/// A decoded opcode.
///
/// Every one of the 256 byte values decodes to exactly one variant;
/// bytes without defined behaviour decode to `Invalid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    /// LXI rp,d16
    Lxi(RegPair),
    /// STAX B / STAX D
    Stax(RegPair),
    /// LDAX B / LDAX D
    Ldax(RegPair),
    Shld,
    Lhld,
    Sta,
    Lda,
    Inx(RegPair),
    Dcx(RegPair),
    Inr(Reg),
    Dcr(Reg),
    /// MVI r,d8
    Mvi(Reg),
    Dad(RegPair),
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,
    Mov { dst: Reg, src: Reg },
    /// Register or memory operand form (0x80-0xBF).
    Alu(AluOp, Reg),
    /// Immediate form (ADI, ACI, ...).
    AluImm(AluOp),
    Jmp(Condition),
    Call(Condition),
    Ret(Condition),
    /// RST n, n in 0..8.
    Rst(u8),
    Pchl,
    Push(StackPair),
    Pop(StackPair),
    Xchg,
    Xthl,
    Out,
    In,
    Ei,
    Di,
    Invalid(u8),
}

impl Instruction {
    /// Encoded length in bytes, opcode included.
    pub fn size(&self) -> u16 {
        match self {
            Instruction::Lxi(_)
            | Instruction::Shld
            | Instruction::Lhld
            | Instruction::Sta
            | Instruction::Lda
            | Instruction::Jmp(_)
            | Instruction::Call(_) => 3,
            Instruction::Mvi(_) | Instruction::AluImm(_) | Instruction::Out | Instruction::In => 2,
            _ => 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Instruction::Invalid(_))
    }

    /// Instructions that may load PC with something other than the next
    /// sequential address.
    pub fn is_control_transfer(&self) -> bool {
        matches!(
            self,
            Instruction::Jmp(_)
                | Instruction::Call(_)
                | Instruction::Ret(_)
                | Instruction::Rst(_)
                | Instruction::Pchl
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Nop => write!(f, "NOP"),
            Instruction::Lxi(rp) => write!(f, "LXI {}", rp.name()),
            Instruction::Stax(rp) => write!(f, "STAX {}", rp.name()),
            Instruction::Ldax(rp) => write!(f, "LDAX {}", rp.name()),
            Instruction::Shld => write!(f, "SHLD"),
            Instruction::Lhld => write!(f, "LHLD"),
            Instruction::Sta => write!(f, "STA"),
            Instruction::Lda => write!(f, "LDA"),
            Instruction::Inx(rp) => write!(f, "INX {}", rp.name()),
            Instruction::Dcx(rp) => write!(f, "DCX {}", rp.name()),
            Instruction::Inr(r) => write!(f, "INR {}", r.name()),
            Instruction::Dcr(r) => write!(f, "DCR {}", r.name()),
            Instruction::Mvi(r) => write!(f, "MVI {}", r.name()),
            Instruction::Dad(rp) => write!(f, "DAD {}", rp.name()),
            Instruction::Rlc => write!(f, "RLC"),
            Instruction::Rrc => write!(f, "RRC"),
            Instruction::Ral => write!(f, "RAL"),
            Instruction::Rar => write!(f, "RAR"),
            Instruction::Daa => write!(f, "DAA"),
            Instruction::Cma => write!(f, "CMA"),
            Instruction::Stc => write!(f, "STC"),
            Instruction::Cmc => write!(f, "CMC"),
            Instruction::Mov { dst, src } => write!(f, "MOV {},{}", dst.name(), src.name()),
            Instruction::Alu(op, r) => write!(f, "{} {}", op.register_mnemonic(), r.name()),
            Instruction::AluImm(op) => write!(f, "{}", op.immediate_mnemonic()),
            Instruction::Jmp(Condition::Always) => write!(f, "JMP"),
            Instruction::Jmp(cc) => write!(f, "J{}", cc.suffix()),
            Instruction::Call(Condition::Always) => write!(f, "CALL"),
            Instruction::Call(cc) => write!(f, "C{}", cc.suffix()),
            Instruction::Ret(Condition::Always) => write!(f, "RET"),
            Instruction::Ret(cc) => write!(f, "R{}", cc.suffix()),
            Instruction::Rst(n) => write!(f, "RST {n}"),
            Instruction::Pchl => write!(f, "PCHL"),
            Instruction::Push(rp) => write!(f, "PUSH {}", rp.name()),
            Instruction::Pop(rp) => write!(f, "POP {}", rp.name()),
            Instruction::Xchg => write!(f, "XCHG"),
            Instruction::Xthl => write!(f, "XTHL"),
            Instruction::Out => write!(f, "OUT"),
            Instruction::In => write!(f, "IN"),
            Instruction::Ei => write!(f, "EI"),
            Instruction::Di => write!(f, "DI"),
            Instruction::Invalid(op) => write!(f, "DB {op:02X}h"),
        }
    }
}

/// Decode a single opcode byte.
pub fn decode(opcode: u8) -> Instruction {
    use Condition::*;
    use Instruction::*;

    match opcode {
        0x00 => Nop,

        0x01 | 0x11 | 0x21 | 0x31 => Lxi(RegPair::from_bits(opcode >> 4)),
        0x02 | 0x12 => Stax(RegPair::from_bits(opcode >> 4)),
        0x0A | 0x1A => Ldax(RegPair::from_bits(opcode >> 4)),
        0x22 => Shld,
        0x2A => Lhld,
        0x32 => Sta,
        0x3A => Lda,

        0x03 | 0x13 | 0x23 | 0x33 => Inx(RegPair::from_bits(opcode >> 4)),
        0x0B | 0x1B | 0x2B | 0x3B => Dcx(RegPair::from_bits(opcode >> 4)),
        0x09 | 0x19 | 0x29 | 0x39 => Dad(RegPair::from_bits(opcode >> 4)),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Inr(Reg::from_bits(opcode >> 3)),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Dcr(Reg::from_bits(opcode >> 3)),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Mvi(Reg::from_bits(opcode >> 3)),

        0x07 => Rlc,
        0x0F => Rrc,
        0x17 => Ral,
        0x1F => Rar,
        0x27 => Daa,
        0x2F => Cma,
        0x37 => Stc,
        0x3F => Cmc,

        // HLT sits in the middle of the MOV block and has no behaviour here.
        0x76 => Invalid(opcode),
        0x40..=0x7F => Mov {
            dst: Reg::from_bits(opcode >> 3),
            src: Reg::from_bits(opcode),
        },

        0x80..=0xBF => Alu(AluOp::from_bits(opcode >> 3), Reg::from_bits(opcode)),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => AluImm(AluOp::from_bits(opcode >> 3)),

        0xC3 => Jmp(Always),
        0xC2 => Jmp(NotZero),
        0xCA => Jmp(Zero),
        0xD2 => Jmp(NoCarry),
        0xDA => Jmp(Carry),
        0xF2 => Jmp(Plus),
        0xFA => Jmp(Minus),

        0xCD => Call(Always),
        0xC4 => Call(NotZero),
        0xCC => Call(Zero),
        0xD4 => Call(NoCarry),
        0xDC => Call(Carry),

        0xC9 => Ret(Always),
        0xC0 => Ret(NotZero),
        0xC8 => Ret(Zero),
        0xD0 => Ret(NoCarry),
        0xD8 => Ret(Carry),

        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Rst((opcode >> 3) & 0x07),

        0xE9 => Pchl,
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Push(StackPair::from_bits(opcode >> 4)),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Pop(StackPair::from_bits(opcode >> 4)),
        0xEB => Xchg,
        0xE3 => Xthl,

        0xD3 => Out,
        0xDB => In,
        0xFB => Ei,
        0xF3 => Di,

        _ => Invalid(opcode),
    }
}

lazy_static! {
    /// Decode table indexed by opcode byte, built once on first use.
    pub static ref OPCODE_TABLE: [Instruction; 256] = {
        let mut table = [Instruction::Nop; 256];
        for (opcode, slot) in table.iter_mut().enumerate() {
            *slot = decode(opcode as u8);
        }
        table
    };
}

/// Render the instruction at `addr`, immediates included, and return it
/// with its length in bytes.
pub fn disassemble(memory: &Memory, addr: u16) -> (String, u16) {
    let instr = OPCODE_TABLE[memory.read_byte(addr) as usize];
    let text = instr.to_string();
    // Register-operand forms take the immediate after a comma.
    let sep = if text.contains(' ') { ',' } else { ' ' };
    let operand = addr.wrapping_add(1);
    let rendered = match instr.size() {
        2 => format!("{text}{sep}{:02X}h", memory.read_byte(operand)),
        3 => format!("{text}{sep}{:04X}h", memory.read_word(operand)),
        _ => text,
    };
    (rendered, instr.size())
}
