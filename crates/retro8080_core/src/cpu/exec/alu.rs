use crate::cpu::decode::AluOp;
use crate::cpu::regs::{Reg, RegPair};
use crate::cpu::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    pub(super) fn exec_alu_reg(&mut self, op: AluOp, src: Reg) {
        let value = self.read_reg(src);
        self.apply_alu(op, value);
    }

    pub(super) fn exec_alu_imm(&mut self, op: AluOp) {
        let value = self.fetch_byte();
        self.apply_alu(op, value);
    }

    fn apply_alu(&mut self, op: AluOp, value: u8) {
        let carry = self.flags.carry as u8;
        match op {
            AluOp::Add => self.alu_add(value, 0),
            AluOp::Adc => self.alu_add(value, carry),
            AluOp::Sub => self.alu_sub(value, 0),
            AluOp::Sbb => self.alu_sub(value, carry),
            AluOp::Ana => self.alu_and(value),
            AluOp::Xra => self.alu_xor(value),
            AluOp::Ora => self.alu_or(value),
            AluOp::Cmp => self.alu_cmp(value),
        }
    }

    pub(super) fn exec_dad(&mut self, rp: RegPair) {
        let value = self.regs.pair(rp);
        self.alu_dad(value);
    }

    /// CMA: flags unaffected.
    pub(super) fn exec_cma(&mut self) {
        self.regs.a ^= 0xFF;
    }

    pub(super) fn exec_stc(&mut self) {
        self.flags.carry = true;
    }

    /// CMC clears carry rather than complementing it.
    pub(super) fn exec_cmc(&mut self) {
        self.flags.carry = false;
    }

    /// RLC: bit 7 goes to bit 0 and to carry. Only carry is affected, as
    /// for all four rotates.
    pub(super) fn exec_rlc(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_left(1);
        self.flags.carry = (a & 0x80) != 0;
    }

    /// RRC: bit 0 goes to bit 7 and to carry.
    pub(super) fn exec_rrc(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_right(1);
        self.flags.carry = (a & 0x01) != 0;
    }

    /// RAL: rotate left through carry.
    pub(super) fn exec_ral(&mut self) {
        let a = self.regs.a;
        self.regs.a = (a << 1) | self.flags.carry as u8;
        self.flags.carry = (a & 0x80) != 0;
    }

    /// RAR: rotate right through carry.
    pub(super) fn exec_rar(&mut self) {
        let a = self.regs.a;
        self.regs.a = (a >> 1) | ((self.flags.carry as u8) << 7);
        self.flags.carry = (a & 0x01) != 0;
    }
}
