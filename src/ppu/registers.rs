#![doc = r#"
PPU registers module

Purpose
- CPU-visible register semantics for the eight-register window $2000-$2007:
  PPUCTRL, PPUMASK, PPUSTATUS, OAMADDR, OAMDATA, PPUSCROLL, PPUADDR, PPUDATA.

Notes
- Callers pass any address in $2000-$3FFF; only the low three bits select the register.
- PPUSCROLL and PPUADDR share one write latch; reading PPUSTATUS resets it.
- PPUDATA needs the full PPU address space (pattern tables live on the cartridge),
  so the data transfer itself is performed by `bus::ppu_registers`. This module
  supplies the buffering and VRAM-address increment pieces it uses.
- Write-only registers read back as 0; writes to PPUSTATUS are ignored.
"#]

use super::{CTRL_INCREMENT_32, Ppu, STATUS_VBLANK};

impl Ppu {
    /// Register read for every register except the PPUDATA transfer.
    pub(crate) fn read_reg(&mut self, addr: u16) -> u8 {
        match addr & 0x0007 {
            0x2 => {
                let v = (self.status & 0xE0) | (self.data_buffer & 0x1F);
                self.status &= !STATUS_VBLANK;
                self.write_latch = false;
                v
            }
            0x4 => self.oam[self.oam_addr as usize],
            _ => 0,
        }
    }

    /// Register write for every register except the PPUDATA transfer.
    pub(crate) fn write_reg(&mut self, addr: u16, value: u8) {
        match addr & 0x0007 {
            0x0 => self.ctrl = value,
            0x1 => self.mask = value,
            0x3 => self.oam_addr = value,
            0x4 => {
                self.oam[self.oam_addr as usize] = value;
                self.oam_addr = self.oam_addr.wrapping_add(1);
            }
            0x5 => {
                if !self.write_latch {
                    self.scroll_x = value;
                } else {
                    self.scroll_y = value;
                }
                self.write_latch = !self.write_latch;
            }
            0x6 => {
                if !self.write_latch {
                    self.vram_addr = (self.vram_addr & 0x00FF) | (((value & 0x3F) as u16) << 8);
                } else {
                    self.vram_addr = (self.vram_addr & 0x3F00) | value as u16;
                }
                self.write_latch = !self.write_latch;
            }
            _ => {}
        }
    }

    /// PPUDATA read buffering: below $3F00 the caller gets the previous
    /// buffer contents and the fresh byte is latched; palette reads are direct
    /// but still refresh the buffer.
    pub(crate) fn buffered_read(&mut self, addr: u16, fetched: u8) -> u8 {
        let out = if addr < 0x3F00 { self.data_buffer } else { fetched };
        self.data_buffer = fetched;
        out
    }

    /// Advance the VRAM address by 1 or 32 (PPUCTRL bit 2).
    pub(crate) fn increment_vram_addr(&mut self) {
        let step = if (self.ctrl & CTRL_INCREMENT_32) != 0 { 32 } else { 1 };
        self.vram_addr = self.vram_addr.wrapping_add(step) & 0x3FFF;
    }
}
