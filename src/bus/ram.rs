/*!
RAM module: the 2 KiB CPU work RAM with mirrored access.

CPU address map for internal RAM:
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
*/

/// Size of CPU internal RAM (in bytes).
pub const CPU_RAM_SIZE: usize = 0x0800;

/// CPU internal RAM. `read`/`write` take CPU addresses and apply the mirror mask.
#[derive(Debug, Clone)]
pub struct Ram {
    data: [u8; CPU_RAM_SIZE],
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; CPU_RAM_SIZE],
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Physical index for a CPU address.
    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) & (CPU_RAM_SIZE - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{CPU_RAM_SIZE, Ram};

    #[test]
    fn size_and_init() {
        let r = Ram::new();
        assert_eq!(r.as_slice().len(), CPU_RAM_SIZE);
        assert!(r.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn mirrored_reads_and_writes() {
        let mut r = Ram::new();
        r.write(0x0001, 0xAA);
        assert_eq!(r.read(0x0001), 0xAA);
        assert_eq!(r.read(0x0801), 0xAA);
        assert_eq!(r.read(0x1801), 0xAA);

        r.write(0x1801, 0x55);
        assert_eq!(r.read(0x0001), 0x55);
        assert_eq!(r.read(0x0801), 0x55);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut r = Ram::new();
        r.write(0x07FF, 0x12);
        r.clear();
        assert_eq!(r.read(0x07FF), 0);
    }
}
