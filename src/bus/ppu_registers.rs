#![doc = r#"
PPU register window handler

Purpose
- Entry point for CPU accesses to $2000-$3FFF. The window holds eight registers
  mirrored every 8 bytes.
- PPUDATA ($2007) is serviced here because its transfers touch the whole PPU
  address space (CHR on the cartridge, nametables, palette). All other registers
  are forwarded to `Ppu`.

PPUDATA
- Read: fetch through `Bus::ppu_read`, apply the PPU's buffering rule, then
  advance the VRAM address.
- Write: store through `Bus::ppu_write`, then advance the VRAM address.
"#]

use crate::bus::Bus;

/// Handler for CPU-visible PPU register reads/writes.
pub struct PpuRegisters;

impl PpuRegisters {
    pub fn read(bus: &mut Bus, addr: u16) -> u8 {
        let reg = mirror_ppu_reg(addr);
        if reg != 0x2007 {
            return bus.ppu.read_reg(reg);
        }
        let vaddr = bus.ppu.vram_addr();
        let fetched = bus.ppu_read(vaddr);
        let value = bus.ppu.buffered_read(vaddr, fetched);
        bus.ppu.increment_vram_addr();
        value
    }

    pub fn write(bus: &mut Bus, addr: u16, value: u8) {
        let reg = mirror_ppu_reg(addr);
        if reg != 0x2007 {
            bus.ppu.write_reg(reg, value);
            return;
        }
        let vaddr = bus.ppu.vram_addr();
        bus.ppu_write(vaddr, value);
        bus.ppu.increment_vram_addr();
    }
}

#[inline]
pub(crate) fn mirror_ppu_reg(addr: u16) -> u16 {
    0x2000 | (addr & 0x0007)
}
