use crate::cpu::decode::Condition;
use crate::cpu::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    /// JMP/Jcc: the address is always consumed, PC only moves if `cc` holds.
    pub(super) fn exec_jmp(&mut self, cc: Condition) {
        let addr = self.fetch_word();
        if cc.holds(&self.flags) {
            self.regs.pc = addr;
        }
    }

    /// CALL/Ccc: pushes the address after the operand.
    pub(super) fn exec_call(&mut self, cc: Condition) {
        let addr = self.fetch_word();
        if cc.holds(&self.flags) {
            let ret = self.regs.pc;
            self.push_word(ret);
            self.regs.pc = addr;
        }
    }

    pub(super) fn exec_ret(&mut self, cc: Condition) {
        if cc.holds(&self.flags) {
            self.regs.pc = self.pop_word();
        }
    }

    /// RST n: call to 8 * n.
    pub(super) fn exec_rst(&mut self, n: u8) {
        debug_assert!(n < 8);
        let ret = self.regs.pc;
        self.push_word(ret);
        self.regs.pc = (n as u16) << 3;
    }

    pub(super) fn exec_pchl(&mut self) {
        self.regs.pc = self.regs.hl();
    }
}
