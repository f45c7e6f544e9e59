use thiserror::Error;

/// Errors surfaced by [`Cpu::step`](crate::Cpu::step) and recorded in
/// [`FrameReport::crash`](crate::FrameReport::crash).
///
/// Every defined opcode is total over all register and memory states, so the
/// only failure is reaching a byte with no defined behaviour. The CPU stays
/// crashed, and keeps returning the same value, until it is reset.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error(
        "invalid opcode 0x{opcode:02X} at PC=0x{pc:04X}{} (instruction {instruction_index})",
        symbol_suffix(.symbol)
    )]
    InvalidOpcode {
        /// Instructions executed since the last reset, not counting this one.
        instruction_index: u64,
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
        /// Name of the faulting address, when a symbol table is installed.
        symbol: Option<String>,
    },
}

impl CpuError {
    /// Address of the faulting fetch.
    pub fn pc(&self) -> u16 {
        match self {
            CpuError::InvalidOpcode { pc, .. } => *pc,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            CpuError::InvalidOpcode { opcode, .. } => *opcode,
        }
    }
}

fn symbol_suffix(symbol: &Option<String>) -> String {
    match symbol {
        Some(name) => format!(" <{name}>"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::CpuError;

    #[test]
    fn display_includes_symbol_when_known() {
        let err = CpuError::InvalidOpcode {
            instruction_index: 12,
            opcode: 0x08,
            pc: 0x1A2B,
            symbol: Some("DrawSprite".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid opcode 0x08 at PC=0x1A2B <DrawSprite> (instruction 12)"
        );

        let err = CpuError::InvalidOpcode {
            instruction_index: 0,
            opcode: 0xED,
            pc: 0x0000,
            symbol: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid opcode 0xED at PC=0x0000 (instruction 0)"
        );
    }
}
