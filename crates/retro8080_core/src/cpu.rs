mod alu;
mod decode;
mod exec;
mod helpers;
mod interrupts;
mod regs;

pub use decode::{decode, disassemble, AluOp, Condition, Instruction, OPCODE_TABLE};
pub use interrupts::InterruptEntry;
pub use regs::{Flags, Psw, Reg, RegPair, Registers, StackPair};

use interrupts::InterruptScheduler;

use crate::config::CpuConfig;
use crate::error::CpuError;
use crate::io::{NullIo, PortIo, SymbolTable};
use crate::memory::Memory;

/// What a successful [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub instruction: Instruction,
    /// Interrupt injected after the instruction, if the half-frame
    /// boundary was reached with interrupts enabled.
    pub interrupt: Option<InterruptEntry>,
}

/// Summary of one [`Cpu::run_frame`] call.
///
/// A frame that crashes still reports the work done before the fault.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub executed: u32,
    /// Interrupts injected during the frame, in order.
    pub interrupts: Vec<InterruptEntry>,
    /// Set when the frame ended on an invalid opcode, or started crashed.
    pub crash: Option<CpuError>,
}

impl FrameReport {
    pub fn is_crashed(&self) -> bool {
        self.crash.is_some()
    }
}

/// Intel 8080 core driving a flat 64 KiB memory and a port device.
///
/// The CPU owns its memory, its port device and every register, flag and
/// scheduler counter; nothing is shared between instances.
pub struct Cpu<I = NullIo> {
    regs: Registers,
    flags: Flags,
    interrupt_enabled: bool,
    memory: Memory,
    io: I,
    symbols: Option<Box<dyn SymbolTable>>,
    config: CpuConfig,
    scheduler: InterruptScheduler,
    crash: Option<CpuError>,
    instructions_executed: u64,
}

impl<I: PortIo> Cpu<I> {
    /// Create a CPU with `image` loaded at address 0 and default settings.
    pub fn new(image: &[u8], io: I) -> Self {
        Self::with_config(image, io, CpuConfig::default())
    }

    pub fn with_config(image: &[u8], io: I, config: CpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            flags: Flags::default(),
            interrupt_enabled: false,
            memory: Memory::with_image(image),
            io,
            symbols: None,
            config,
            scheduler: InterruptScheduler::default(),
            crash: None,
            instructions_executed: 0,
        }
    }

    /// Attach a symbol table used to name the faulting address in crash
    /// reports.
    pub fn with_symbols<S: SymbolTable + 'static>(mut self, symbols: S) -> Self {
        self.symbols = Some(Box::new(symbols));
        self
    }

    /// Reset registers, flags, PC, SP and scheduler state and leave the
    /// crashed state. Memory is preserved.
    pub fn reset(&mut self) {
        log::debug!(
            "8080 reset (pc=0x{:04X}, crashed={})",
            self.regs.pc,
            self.crash.is_some()
        );
        self.regs = Registers::default();
        self.flags = Flags::default();
        self.interrupt_enabled = false;
        self.scheduler = InterruptScheduler::default();
        self.crash = None;
        self.instructions_executed = 0;
    }

    /// Execute one instruction, then run the interrupt scheduler.
    ///
    /// On a crashed CPU this is a no-op that returns the crash again.
    pub fn step(&mut self) -> Result<StepOutcome, CpuError> {
        if let Some(crash) = &self.crash {
            return Err(crash.clone());
        }

        let pc = self.regs.pc;
        if log::log_enabled!(log::Level::Trace) {
            let (text, _) = disassemble(&self.memory, pc);
            log::trace!(
                "{pc:04X}  {text:<14} A={:02X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} F={:02X}",
                self.regs.a,
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp,
                self.flags.to_psw(self.interrupt_enabled).bits(),
            );
        }

        let opcode = self.fetch_byte();
        let instruction = OPCODE_TABLE[opcode as usize];
        if let Instruction::Invalid(opcode) = instruction {
            return Err(self.enter_crash(pc, opcode));
        }

        self.execute(instruction);
        self.instructions_executed += 1;
        let interrupt = self.service_scheduler();

        Ok(StepOutcome {
            pc,
            opcode,
            instruction,
            interrupt,
        })
    }

    /// Execute one frame's instruction quota.
    ///
    /// Stops at the first invalid opcode, since the rest of the quota would
    /// only be no-ops, and records it in the report next to the
    /// instructions and interrupts that ran before it.
    pub fn run_frame(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        for _ in 0..self.config.instructions_per_frame {
            match self.step() {
                Ok(outcome) => {
                    report.executed += 1;
                    if let Some(entry) = outcome.interrupt {
                        report.interrupts.push(entry);
                    }
                }
                Err(crash) => {
                    report.crash = Some(crash);
                    break;
                }
            }
        }
        report
    }

    fn enter_crash(&mut self, pc: u16, opcode: u8) -> CpuError {
        let symbol = self
            .symbols
            .as_ref()
            .and_then(|symbols| symbols.lookup(pc))
            .map(str::to_owned);
        log::error!(
            "8080 crashed: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X}{} after {} instructions (SP=0x{sp:04X} A=0x{a:02X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            symbol.as_deref().map(|name| format!(" <{name}>")).unwrap_or_default(),
            self.instructions_executed,
            sp = self.regs.sp,
            a = self.regs.a,
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        let crash = CpuError::InvalidOpcode {
            instruction_index: self.instructions_executed,
            opcode,
            pc,
            symbol,
        };
        self.crash = Some(crash.clone());
        crash
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn b(&self) -> u8 {
        self.regs.b
    }

    pub fn c(&self) -> u8 {
        self.regs.c
    }

    pub fn d(&self) -> u8 {
        self.regs.d
    }

    pub fn e(&self) -> u8 {
        self.regs.e
    }

    pub fn h(&self) -> u8 {
        self.regs.h
    }

    pub fn l(&self) -> u8 {
        self.regs.l
    }

    pub fn bc(&self) -> u16 {
        self.regs.bc()
    }

    pub fn de(&self) -> u16 {
        self.regs.de()
    }

    pub fn hl(&self) -> u16 {
        self.regs.hl()
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn zero(&self) -> bool {
        self.flags.zero
    }

    pub fn sign(&self) -> bool {
        self.flags.sign
    }

    pub fn half_carry(&self) -> bool {
        self.flags.half_carry
    }

    pub fn carry(&self) -> bool {
        self.flags.carry
    }

    /// Always the reset value; parity is never computed.
    pub fn parity(&self) -> bool {
        self.flags.parity
    }

    /// Flag byte as `PUSH PSW` would store it.
    pub fn psw(&self) -> Psw {
        self.flags.to_psw(self.interrupt_enabled)
    }

    pub fn interrupt_enabled(&self) -> bool {
        self.interrupt_enabled
    }

    pub fn is_crashed(&self) -> bool {
        self.crash.is_some()
    }

    /// Diagnostic for the current crash, if any.
    pub fn crash(&self) -> Option<&CpuError> {
        self.crash.as_ref()
    }

    /// Instructions executed since the last reset.
    pub fn instructions_executed(&self) -> u64 {
        self.instructions_executed
    }

    /// Instructions executed since the last interrupt check.
    pub fn instruction_counter(&self) -> u32 {
        self.scheduler.counter()
    }

    /// Vector used at the next half-frame boundary.
    pub fn next_interrupt_vector(&self) -> u16 {
        self.scheduler.next_vector()
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }
}
