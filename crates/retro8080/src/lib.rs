use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use retro8080_core::{
    disassemble, Cpu, CpuConfig, CpuError, PortIo, DEFAULT_INSTRUCTIONS_PER_FRAME,
};
use typed_builder::TypedBuilder;

/// Frames run when the command line does not say otherwise (one second at
/// 60 Hz).
pub const DEFAULT_FRAMES: u32 = 60;

#[derive(Clone, Debug, TypedBuilder)]
pub struct RunOptions {
    #[builder(default = DEFAULT_FRAMES)]
    pub frames: u32,
    #[builder(default = DEFAULT_INSTRUCTIONS_PER_FRAME)]
    pub instructions_per_frame: u32,
    /// Names attached to crash reports.
    #[builder(default)]
    pub symbols: HashMap<u16, String>,
    /// Values returned by `IN` for the given ports.
    #[builder(default)]
    pub inputs: Vec<(u8, u8)>,
}

/// Port device for headless runs.
///
/// Input ports return a fixed latch (zero unless set). Output writes are
/// logged and the last value per port is kept for inspection.
#[derive(Debug)]
pub struct LoggingIo {
    inputs: [u8; 256],
    outputs: [u8; 256],
    writes: u64,
}

impl Default for LoggingIo {
    fn default() -> Self {
        Self {
            inputs: [0; 256],
            outputs: [0; 256],
            writes: 0,
        }
    }
}

impl LoggingIo {
    pub fn set_input(&mut self, port: u8, value: u8) {
        self.inputs[port as usize] = value;
    }

    /// Last value written to `port`, or 0 if it was never written.
    pub fn last_output(&self, port: u8) -> u8 {
        self.outputs[port as usize]
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl PortIo for LoggingIo {
    fn input(&mut self, port: u8) -> u8 {
        self.inputs[port as usize]
    }

    fn output(&mut self, port: u8, value: u8) {
        log::debug!("OUT port=0x{port:02X} value=0x{value:02X}");
        self.outputs[port as usize] = value;
        self.writes += 1;
    }
}

/// What a headless run got through.
#[derive(Debug)]
pub struct RunSummary {
    /// Frames that ran their whole quota.
    pub frames: u32,
    pub instructions: u64,
    pub interrupts: u64,
    pub final_pc: u16,
    /// Set when the program hit an invalid opcode; the run stops there.
    pub crash: Option<CpuError>,
    /// Disassembly at the faulting address, e.g. `DB CBh`.
    pub crash_listing: Option<String>,
    pub io: LoggingIo,
}

/// Parse a symbol file: one `ADDR NAME` pair per line, ADDR in hex with an
/// optional `0x` prefix. `#` starts a comment.
pub fn parse_symbols(text: &str) -> Result<HashMap<u16, String>> {
    let mut symbols = HashMap::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(addr), Some(name)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected `ADDR NAME`, got '{line}'", index + 1);
        };
        let digits = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr);
        let addr = u16::from_str_radix(digits, 16)
            .with_context(|| format!("line {}: bad address '{addr}'", index + 1))?;
        symbols.insert(addr, name.to_string());
    }
    Ok(symbols)
}

/// Load `image` at address 0 and run it for `options.frames` frames.
///
/// A crash ends the run early and is reported in the summary rather than as
/// an error; errors are reserved for unusable input.
pub fn run(image: &[u8], options: RunOptions) -> Result<RunSummary> {
    if image.is_empty() {
        bail!("program image is empty");
    }
    if options.instructions_per_frame == 0 {
        bail!("instructions per frame must be at least 1");
    }

    let config = CpuConfig::builder()
        .instructions_per_frame(options.instructions_per_frame)
        .build();
    let mut io = LoggingIo::default();
    for &(port, value) in &options.inputs {
        io.set_input(port, value);
    }
    let mut cpu = Cpu::with_config(image, io, config);
    if !options.symbols.is_empty() {
        log::debug!("loaded {} symbols", options.symbols.len());
        cpu = cpu.with_symbols(options.symbols);
    }

    log::info!(
        "Running {} bytes for {} frames ({} instructions per frame)",
        image.len(),
        options.frames,
        options.instructions_per_frame
    );

    let mut frames = 0;
    let mut interrupts = 0;
    let mut crash = None;
    for _ in 0..options.frames {
        let report = cpu.run_frame();
        interrupts += report.interrupts.len() as u64;
        if let Some(err) = report.crash {
            let (listing, _) = disassemble(cpu.memory(), err.pc());
            log::error!("Crashed at 0x{:04X}: {listing}", err.pc());
            crash = Some((err, listing));
            break;
        }
        frames += 1;
    }

    log::info!(
        "Stopped after {frames} frames, {} instructions, {interrupts} interrupts",
        cpu.instructions_executed()
    );

    let final_pc = cpu.pc();
    let instructions = cpu.instructions_executed();
    let io = std::mem::take(cpu.io_mut());
    let (crash, crash_listing) = crash.unzip();
    Ok(RunSummary {
        frames,
        instructions,
        interrupts,
        final_pc,
        crash,
        crash_listing,
        io,
    })
}
