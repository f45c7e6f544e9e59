use crate::cpu::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    /// OUT port: A goes to the port device untouched.
    pub(super) fn exec_out(&mut self) {
        let port = self.fetch_byte();
        self.io.output(port, self.regs.a);
    }

    pub(super) fn exec_in(&mut self) {
        let port = self.fetch_byte();
        self.regs.a = self.io.input(port);
    }

    pub(super) fn exec_ei(&mut self) {
        self.interrupt_enabled = true;
    }

    pub(super) fn exec_di(&mut self) {
        self.interrupt_enabled = false;
    }
}
