use super::Cpu;
use crate::io::PortIo;
use crate::INTERRUPT_VECTORS;

/// An interrupt injected by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptEntry {
    pub vector: u16,
    /// PC pushed onto the stack on entry.
    pub return_address: u16,
}

/// Half-frame interrupt timing.
///
/// The arcade board raises RST 1 when the beam reaches mid-screen and RST 2
/// at vblank. We model that with an instruction counter instead of cycles:
/// every `period` instructions the next vector in the sequence comes due,
/// and the sequence advances whether or not the CPU accepts it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct InterruptScheduler {
    counter: u32,
    second_half: bool,
}

impl InterruptScheduler {
    /// Count one executed instruction. Returns the vector that comes due
    /// when the counter reaches `period`, resetting the counter.
    pub(super) fn tick(&mut self, period: u32) -> Option<u16> {
        self.counter += 1;
        if self.counter < period {
            return None;
        }
        let vector = self.next_vector();
        self.second_half = !self.second_half;
        self.counter = 0;
        Some(vector)
    }

    pub(super) fn counter(&self) -> u32 {
        self.counter
    }

    pub(super) fn next_vector(&self) -> u16 {
        INTERRUPT_VECTORS[self.second_half as usize]
    }
}

impl<I: PortIo> Cpu<I> {
    /// Advance the scheduler after an instruction and inject the due
    /// interrupt if the program has them enabled.
    pub(super) fn service_scheduler(&mut self) -> Option<InterruptEntry> {
        let vector = self.scheduler.tick(self.config.interrupt_period())?;
        if !self.interrupt_enabled {
            log::trace!("interrupt 0x{vector:04X} dropped, interrupts disabled");
            return None;
        }
        Some(self.interrupt(vector))
    }

    /// Behaves like `RST`: disable interrupts, push PC, jump to `vector`.
    fn interrupt(&mut self, vector: u16) -> InterruptEntry {
        self.interrupt_enabled = false;
        let return_address = self.regs.pc;
        self.push_word(return_address);
        self.regs.pc = vector;
        log::debug!(
            "8080 interrupt: vector=0x{vector:04X} return=0x{return_address:04X} sp=0x{:04X}",
            self.regs.sp
        );
        InterruptEntry {
            vector,
            return_address,
        }
    }
}
