use crate::cpu::regs::{Psw, StackPair};
use crate::cpu::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    pub(super) fn exec_push(&mut self, rp: StackPair) {
        let value = match rp {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::PSW => {
                let psw = self.flags.to_psw(self.interrupt_enabled);
                u16::from_be_bytes([self.regs.a, psw.bits()])
            }
        };
        self.push_word(value);
    }

    pub(super) fn exec_pop(&mut self, rp: StackPair) {
        let value = self.pop_word();
        match rp {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            StackPair::PSW => {
                let [a, psw] = value.to_be_bytes();
                self.regs.a = a;
                self.interrupt_enabled = self.flags.load_psw(Psw::from_bits_truncate(psw));
            }
        }
    }

    /// XTHL: swap HL with the word on top of the stack. SP is unchanged.
    pub(super) fn exec_xthl(&mut self) {
        let sp = self.regs.sp;
        let top = self.memory.read_word(sp);
        self.memory.write_word(sp, self.regs.hl());
        self.regs.set_hl(top);
    }
}
