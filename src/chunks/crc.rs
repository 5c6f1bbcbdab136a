//! CRC-32 as used by PNG chunks (ISO 3309, reflected polynomial `0xedb88320`).

const fn entry(index: u32) -> u32 {
    let mut c = index;
    let mut bit = 0;
    while bit < 8 {
        c = (c >> 1) ^ (0xedb88320 & (c & 1).wrapping_neg());
        bit += 1;
    }
    c
}

const TABLE: [u32; 256] = {
    let mut table = [0; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = entry(i as u32);
        i += 1;
    }
    table
};

/// Running checksum over a chunk's type tag followed by its data.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Crc32(u32);
impl Crc32 {
    pub(crate) fn new() -> Self {
        Self(u32::MAX)
    }

    pub(crate) fn update(&mut self, bytes: &[u8]) -> &mut Self {
        for &b in bytes {
            self.0 = TABLE[(self.0 as u8 ^ b) as usize] ^ (self.0 >> 8);
        }
        self
    }

    pub(crate) fn finish(&self) -> u32 {
        !self.0
    }
}
