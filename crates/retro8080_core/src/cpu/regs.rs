use bitflags::bitflags;

/// Register file for the Intel 8080.
///
/// Only the 8-bit halves are stored. The 16-bit pairs are derived on every
/// read and split on every write, so `bc() == (b << 8) | c` holds at all
/// times without any resynchronisation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Read a 16-bit pair as addressed by LXI/INX/DCX/DAD.
    pub fn pair(&self, pair: RegPair) -> u16 {
        match pair {
            RegPair::BC => self.bc(),
            RegPair::DE => self.de(),
            RegPair::HL => self.hl(),
            RegPair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, pair: RegPair, value: u16) {
        match pair {
            RegPair::BC => self.set_bc(value),
            RegPair::DE => self.set_de(value),
            RegPair::HL => self.set_hl(value),
            RegPair::SP => self.sp = value,
        }
    }
}

/// 8-bit operand field of an opcode (bits 0-2 or 3-5).
///
/// `M` is the memory byte addressed by HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

impl Reg {
    /// Decode the 3-bit register field.
    pub const fn from_bits(bits: u8) -> Reg {
        match bits & 0x07 {
            0 => Reg::B,
            1 => Reg::C,
            2 => Reg::D,
            3 => Reg::E,
            4 => Reg::H,
            5 => Reg::L,
            6 => Reg::M,
            _ => Reg::A,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Reg::B => "B",
            Reg::C => "C",
            Reg::D => "D",
            Reg::E => "E",
            Reg::H => "H",
            Reg::L => "L",
            Reg::M => "M",
            Reg::A => "A",
        }
    }
}

/// Register pair field used by LXI, INX, DCX and DAD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegPair {
    /// Decode bits 4-5 of the opcode.
    pub const fn from_bits(bits: u8) -> RegPair {
        match bits & 0x03 {
            0 => RegPair::BC,
            1 => RegPair::DE,
            2 => RegPair::HL,
            _ => RegPair::SP,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RegPair::BC => "B",
            RegPair::DE => "D",
            RegPair::HL => "H",
            RegPair::SP => "SP",
        }
    }
}

/// Register pair field used by PUSH and POP, where the fourth slot is the
/// accumulator plus flags rather than SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackPair {
    BC,
    DE,
    HL,
    PSW,
}

impl StackPair {
    pub const fn from_bits(bits: u8) -> StackPair {
        match bits & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::PSW,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StackPair::BC => "B",
            StackPair::DE => "D",
            StackPair::HL => "H",
            StackPair::PSW => "PSW",
        }
    }
}

bitflags! {
    /// Flag byte pushed under the accumulator by `PUSH PSW`.
    ///
    /// Bits 1-3 are always zero. Bit 5 carries the interrupt-enable latch.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Psw: u8 {
        const SIGN = 0x80;
        const ZERO = 0x40;
        const INTERRUPT_ENABLE = 0x20;
        const HALF_CARRY = 0x10;
        const CARRY = 0x01;
    }
}

/// Status flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Result byte was zero.
    pub zero: bool,
    /// Bit 7 of the result byte.
    pub sign: bool,
    /// Carry out of bit 3 into bit 4.
    pub half_carry: bool,
    /// Carry or borrow out of bit 7.
    pub carry: bool,
    /// Inert: no instruction computes or tests parity. Kept so debug
    /// front ends can still show the full flag set.
    pub parity: bool,
}

impl Flags {
    /// Set `zero` and `sign` from a result byte.
    #[inline]
    pub fn set_zs(&mut self, value: u8) {
        self.zero = value == 0;
        self.sign = (value & 0x80) != 0;
    }

    /// Pack the flags and interrupt latch into the PSW low byte.
    pub fn to_psw(self, interrupt_enabled: bool) -> Psw {
        let mut psw = Psw::empty();
        psw.set(Psw::SIGN, self.sign);
        psw.set(Psw::ZERO, self.zero);
        psw.set(Psw::INTERRUPT_ENABLE, interrupt_enabled);
        psw.set(Psw::HALF_CARRY, self.half_carry);
        psw.set(Psw::CARRY, self.carry);
        psw
    }

    /// Restore flags from a PSW byte, returning the interrupt latch.
    ///
    /// `parity` is left alone since the PSW never carries it.
    pub fn load_psw(&mut self, psw: Psw) -> bool {
        self.sign = psw.contains(Psw::SIGN);
        self.zero = psw.contains(Psw::ZERO);
        self.half_carry = psw.contains(Psw::HALF_CARRY);
        self.carry = psw.contains(Psw::CARRY);
        psw.contains(Psw::INTERRUPT_ENABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_views_follow_halves() {
        let mut regs = Registers::default();
        regs.b = 0x12;
        regs.c = 0x34;
        assert_eq!(regs.bc(), 0x1234);

        regs.set_de(0xABCD);
        assert_eq!((regs.d, regs.e), (0xAB, 0xCD));

        regs.l = 0xFF;
        regs.set_pair(RegPair::HL, regs.pair(RegPair::HL).wrapping_add(1));
        assert_eq!((regs.h, regs.l), (0x01, 0x00));
    }

    #[test]
    fn psw_layout() {
        let flags = Flags {
            zero: true,
            sign: true,
            half_carry: true,
            carry: true,
            parity: true,
        };
        assert_eq!(flags.to_psw(true).bits(), 0xF1);
        assert_eq!(flags.to_psw(false).bits(), 0xD1);
        assert_eq!(Flags::default().to_psw(false).bits(), 0x00);
    }

    #[test]
    fn psw_load_ignores_reserved_bits() {
        let mut flags = Flags::default();
        let ie = flags.load_psw(Psw::from_bits_truncate(0xFF));
        assert!(ie);
        assert!(flags.sign && flags.zero && flags.half_carry && flags.carry);
        assert!(!flags.parity);
    }

    #[test]
    fn register_fields_decode() {
        assert_eq!(Reg::from_bits(6), Reg::M);
        assert_eq!(Reg::from_bits(7), Reg::A);
        assert_eq!(RegPair::from_bits(3), RegPair::SP);
        assert_eq!(StackPair::from_bits(3), StackPair::PSW);
    }
}
