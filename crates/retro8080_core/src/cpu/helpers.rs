use super::regs::Reg;
use super::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    /// Read an 8-bit register, or the byte at HL for `M`.
    #[inline]
    pub(super) fn read_reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::B => self.regs.b,
            Reg::C => self.regs.c,
            Reg::D => self.regs.d,
            Reg::E => self.regs.e,
            Reg::H => self.regs.h,
            Reg::L => self.regs.l,
            Reg::M => self.memory.read_byte(self.regs.hl()),
            Reg::A => self.regs.a,
        }
    }

    /// Write an 8-bit register, or the byte at HL for `M`.
    #[inline]
    pub(super) fn write_reg(&mut self, reg: Reg, value: u8) {
        match reg {
            Reg::B => self.regs.b = value,
            Reg::C => self.regs.c = value,
            Reg::D => self.regs.d = value,
            Reg::E => self.regs.e = value,
            Reg::H => self.regs.h = value,
            Reg::L => self.regs.l = value,
            Reg::M => self.memory.write_byte(self.regs.hl(), value),
            Reg::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch_word(&mut self) -> u16 {
        let value = self.memory.read_word(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    /// Stack grows downward: SP -= 2, then memory[SP] = low, memory[SP+1] = high.
    #[inline]
    pub(super) fn push_word(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        self.memory.write_word(self.regs.sp, value);
    }

    #[inline]
    pub(super) fn pop_word(&mut self) -> u16 {
        let value = self.memory.read_word(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }
}
