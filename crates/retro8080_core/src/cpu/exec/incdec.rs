use crate::cpu::regs::{Reg, RegPair};
use crate::cpu::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    pub(super) fn exec_inr(&mut self, reg: Reg) {
        let value = self.read_reg(reg);
        let result = self.alu_inr(value);
        self.write_reg(reg, result);
    }

    pub(super) fn exec_dcr(&mut self, reg: Reg) {
        let value = self.read_reg(reg);
        let result = self.alu_dcr(value);
        self.write_reg(reg, result);
    }

    /// INX rp: no flags.
    pub(super) fn exec_inx(&mut self, rp: RegPair) {
        let value = self.regs.pair(rp).wrapping_add(1);
        self.regs.set_pair(rp, value);
    }

    /// DCX rp: no flags.
    pub(super) fn exec_dcx(&mut self, rp: RegPair) {
        let value = self.regs.pair(rp).wrapping_sub(1);
        self.regs.set_pair(rp, value);
    }
}
