pub mod config;
pub mod cpu;
pub mod error;
pub mod io;
pub mod memory;

pub use config::CpuConfig;
pub use cpu::{
    decode, disassemble, AluOp, Condition, Cpu, FrameReport, Flags, Instruction, InterruptEntry, Psw,
    Reg, RegPair, Registers, StackPair, StepOutcome, OPCODE_TABLE,
};
pub use error::CpuError;
pub use io::{NullIo, PortIo, SymbolTable};
pub use memory::Memory;

/// Size of the flat 8080 address space (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Default number of instructions executed per `run_frame` call.
///
/// Roughly what the arcade board gets through in one 60 Hz video frame.
pub const DEFAULT_INSTRUCTIONS_PER_FRAME: u32 = 4000;

/// The two interrupt vectors serviced per frame (RST 1 mid-screen, RST 2
/// at vblank), in the order they fire.
pub const INTERRUPT_VECTORS: [u16; 2] = [0x0008, 0x0010];
