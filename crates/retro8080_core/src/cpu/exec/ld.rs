use crate::cpu::regs::{Reg, RegPair};
use crate::cpu::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    /// MOV dst,src. Either side may be M, never both (0x76 is not a MOV).
    pub(super) fn exec_mov(&mut self, dst: Reg, src: Reg) {
        let value = self.read_reg(src);
        self.write_reg(dst, value);
    }

    pub(super) fn exec_mvi(&mut self, dst: Reg) {
        let value = self.fetch_byte();
        self.write_reg(dst, value);
    }

    pub(super) fn exec_lxi(&mut self, rp: RegPair) {
        let value = self.fetch_word();
        self.regs.set_pair(rp, value);
    }

    /// LDAX B / LDAX D
    pub(super) fn exec_ldax(&mut self, rp: RegPair) {
        debug_assert!(matches!(rp, RegPair::BC | RegPair::DE));
        let addr = self.regs.pair(rp);
        self.regs.a = self.memory.read_byte(addr);
    }

    /// STAX B / STAX D
    pub(super) fn exec_stax(&mut self, rp: RegPair) {
        debug_assert!(matches!(rp, RegPair::BC | RegPair::DE));
        let addr = self.regs.pair(rp);
        self.memory.write_byte(addr, self.regs.a);
    }

    pub(super) fn exec_lda(&mut self) {
        let addr = self.fetch_word();
        self.regs.a = self.memory.read_byte(addr);
    }

    pub(super) fn exec_sta(&mut self) {
        let addr = self.fetch_word();
        self.memory.write_byte(addr, self.regs.a);
    }

    /// LHLD: L from (addr), H from (addr + 1).
    pub(super) fn exec_lhld(&mut self) {
        let addr = self.fetch_word();
        let value = self.memory.read_word(addr);
        self.regs.set_hl(value);
    }

    pub(super) fn exec_shld(&mut self) {
        let addr = self.fetch_word();
        self.memory.write_word(addr, self.regs.hl());
    }

    pub(super) fn exec_xchg(&mut self) {
        let de = self.regs.de();
        let hl = self.regs.hl();
        self.regs.set_de(hl);
        self.regs.set_hl(de);
    }
}
