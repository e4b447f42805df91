#![doc = r#"
PPU memory submodule

Responsibilities
- Own the 2 KiB of nametable VRAM and the 32-byte palette RAM.
- Fold the 4 KiB logical nametable window ($2000-$2FFF, mirrored at $3000-$3EFF)
  onto the two physical 1 KiB banks according to the cartridge mirroring mode.
- Fold $3F00-$3FFF onto 32 palette bytes, with $3F10/$3F14/$3F18/$3F1C aliasing
  $3F00/$3F04/$3F08/$3F0C.

Integration
- Pattern-table reads ($0000-$1FFF) belong to the cartridge and are routed by
  the bus; this module only sees nametable and palette addresses.
- The index helpers are pure so they can be tested on their own.
"#]

use crate::cartridge::Mirroring;

/// Physical nametable VRAM (two 1 KiB banks).
pub const NAMETABLE_RAM_SIZE: usize = 0x0800;
/// Palette RAM size.
pub const PALETTE_RAM_SIZE: usize = 32;

#[derive(Debug, Clone)]
pub struct PpuMemory {
    nametables: [u8; NAMETABLE_RAM_SIZE],
    palette: [u8; PALETTE_RAM_SIZE],
}

impl Default for PpuMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl PpuMemory {
    pub fn new() -> Self {
        Self {
            nametables: [0; NAMETABLE_RAM_SIZE],
            palette: [0; PALETTE_RAM_SIZE],
        }
    }

    pub fn clear(&mut self) {
        self.nametables.fill(0);
        self.palette.fill(0);
    }

    #[inline]
    pub fn read_nametable(&self, addr: u16, mirroring: Mirroring) -> u8 {
        self.nametables[nametable_index(addr, mirroring)]
    }

    #[inline]
    pub fn write_nametable(&mut self, addr: u16, mirroring: Mirroring, value: u8) {
        self.nametables[nametable_index(addr, mirroring)] = value;
    }

    #[inline]
    pub fn read_palette(&self, addr: u16) -> u8 {
        self.palette[palette_index(addr)]
    }

    #[inline]
    pub fn write_palette(&mut self, addr: u16, value: u8) {
        self.palette[palette_index(addr)] = value;
    }
}

/// Physical VRAM index for a nametable address in $2000..=$3EFF.
pub fn nametable_index(addr: u16, mirroring: Mirroring) -> usize {
    let a = addr & 0x0FFF;
    let table = a / 0x0400;
    let offset = (a % 0x0400) as usize;
    let bank = match mirroring {
        // $2000/$2400 share bank 0, $2800/$2C00 share bank 1
        Mirroring::Horizontal => usize::from(table >= 2),
        // $2000/$2800 share bank 0, $2400/$2C00 share bank 1
        Mirroring::Vertical => (table & 1) as usize,
        Mirroring::OneScreenLower => 0,
        Mirroring::OneScreenUpper => 1,
    };
    bank * 0x0400 + offset
}

/// Palette RAM index for an address in $3F00..=$3FFF.
pub fn palette_index(addr: u16) -> usize {
    let mut idx = (addr & 0x001F) as usize;
    if idx >= 16 && (idx & 0x03) == 0 {
        idx -= 16;
    }
    idx
}
