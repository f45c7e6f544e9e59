use std::collections::{BTreeMap, HashMap};

/// Port-mapped I/O seen by the `IN` and `OUT` instructions.
///
/// The core forwards the port number and data byte untouched; what a port
/// means (input latches, shift registers, sound triggers) is entirely up to
/// the machine that implements this trait.
pub trait PortIo {
    fn input(&mut self, port: u8) -> u8;
    fn output(&mut self, port: u8, value: u8);
}

impl<T: PortIo + ?Sized> PortIo for &mut T {
    fn input(&mut self, port: u8) -> u8 {
        (**self).input(port)
    }

    fn output(&mut self, port: u8, value: u8) {
        (**self).output(port, value)
    }
}

impl<T: PortIo + ?Sized> PortIo for Box<T> {
    fn input(&mut self, port: u8) -> u8 {
        (**self).input(port)
    }

    fn output(&mut self, port: u8, value: u8) {
        (**self).output(port, value)
    }
}

/// Port device with nothing attached: reads return 0, writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullIo;

impl PortIo for NullIo {
    fn input(&mut self, _port: u8) -> u8 {
        0
    }

    fn output(&mut self, _port: u8, _value: u8) {}
}

/// Address-to-name lookup used to annotate crash reports.
///
/// It is never consulted while executing instructions.
pub trait SymbolTable {
    fn lookup(&self, addr: u16) -> Option<&str>;
}

impl SymbolTable for HashMap<u16, String> {
    fn lookup(&self, addr: u16) -> Option<&str> {
        self.get(&addr).map(String::as_str)
    }
}

impl SymbolTable for BTreeMap<u16, String> {
    fn lookup(&self, addr: u16) -> Option<&str> {
        self.get(&addr).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_io_reads_zero() {
        let mut io = NullIo;
        io.output(3, 0xFF);
        assert_eq!(io.input(3), 0);
    }

    #[test]
    fn hash_map_symbol_lookup() {
        let mut symbols = HashMap::new();
        symbols.insert(0x0008u16, "ScanLine96".to_string());
        assert_eq!(symbols.lookup(0x0008), Some("ScanLine96"));
        assert_eq!(symbols.lookup(0x0010), None);
    }
}
