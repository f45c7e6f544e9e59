use super::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    /// ADD/ADC core. `carry_in` is 0 or 1.
    pub(super) fn alu_add(&mut self, value: u8, carry_in: u8) {
        let a = self.regs.a as u16;
        let result = a + value as u16 + carry_in as u16;
        self.flags.half_carry = (a ^ value as u16 ^ result) & 0x10 != 0;
        self.flags.carry = result > 0xFF;
        self.regs.a = result as u8;
        self.flags.set_zs(self.regs.a);
    }

    /// SUB/SBB core. `carry_in` is the incoming borrow, 0 or 1.
    pub(super) fn alu_sub(&mut self, value: u8, carry_in: u8) {
        let result = self.sub_flags(value, carry_in);
        self.regs.a = result;
    }

    /// CMP: subtract for the flags only.
    pub(super) fn alu_cmp(&mut self, value: u8) {
        self.sub_flags(value, 0);
    }

    /// Flags for `a - value - carry_in`, returning the masked result.
    ///
    /// A borrow is recorded when the wrapped result is not below `a` while
    /// something was actually subtracted.
    fn sub_flags(&mut self, value: u8, carry_in: u8) -> u8 {
        let a = self.regs.a;
        let result = a.wrapping_sub(value).wrapping_sub(carry_in);
        self.flags.carry = result >= a && (value | carry_in) != 0;
        self.flags.half_carry = (a ^ value ^ result) & 0x10 != 0;
        self.flags.set_zs(result);
        result
    }

    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.set_logic_result(result);
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.set_logic_result(result);
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.set_logic_result(result);
    }

    #[inline]
    fn set_logic_result(&mut self, result: u8) {
        self.regs.a = result;
        self.flags.carry = false;
        self.flags.half_carry = false;
        self.flags.set_zs(result);
    }

    /// INR: carry is not affected.
    pub(super) fn alu_inr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.flags.half_carry = (result & 0x0F) != 0;
        self.flags.set_zs(result);
        result
    }

    /// DCR: carry is not affected.
    pub(super) fn alu_dcr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.flags.half_carry = (result & 0x0F) == 0;
        self.flags.set_zs(result);
        result
    }

    /// DAA: decimal-adjust the accumulator after a BCD add.
    ///
    /// The high-digit test runs on the unmasked intermediate, so a low-digit
    /// correction that overflows past 0xFF also forces the high correction.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a as u16;
        if (a & 0x0F) > 9 || self.flags.half_carry {
            a += 0x06;
            self.flags.half_carry = true;
        } else {
            self.flags.half_carry = false;
        }
        if a > 0x9F || self.flags.carry {
            a += 0x60;
            self.flags.carry = true;
        } else {
            self.flags.carry = false;
        }
        self.regs.a = a as u8;
        self.flags.set_zs(self.regs.a);
    }

    /// DAD: HL += value, only carry is affected.
    pub(super) fn alu_dad(&mut self, value: u16) {
        let result = self.regs.hl() as u32 + value as u32;
        self.flags.carry = result > 0xFFFF;
        self.regs.set_hl(result as u16);
    }
}
