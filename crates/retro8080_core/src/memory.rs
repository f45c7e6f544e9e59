use crate::MEMORY_SIZE;

/// Flat, fully writable 64 KiB address space.
///
/// Code, data and stack share this space with no protection between them,
/// so self-modifying code and a stack running into the program are both
/// legal. Addresses are `u16`, which makes out-of-range access impossible;
/// multi-byte accesses wrap from 0xFFFF to 0x0000.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Zero-filled memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Memory preloaded with `image` starting at address 0.
    pub fn with_image(image: &[u8]) -> Self {
        let mut memory = Self::new();
        memory.load(0, image);
        memory
    }

    /// Copy `data` into memory starting at `addr`.
    ///
    /// Data that would run past 0xFFFF is dropped rather than wrapped, the
    /// same way a ROM larger than the address space simply doesn't fit.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        let len = data.len().min(MEMORY_SIZE - start);
        if len < data.len() {
            log::warn!(
                "image of {} bytes at 0x{:04X} truncated to {} bytes",
                data.len(),
                addr,
                len
            );
        }
        self.bytes[start..start + len].copy_from_slice(&data[..len]);
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Little-endian word: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Zero the whole address space.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.bytes.len())
            .finish()
    }
}
