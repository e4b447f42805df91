/*!
Bus: maps the CPU address space onto RAM, the PPU register window and the
cartridge, and routes the PPU's own 14-bit address space.

Address map (CPU):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
- $2000-$2007: PPU registers
- $2008-$3FFF: Mirrors of $2000-$2007 (mask with & 0x2007)
- $4000-$401F: APU / I/O registers (stubbed: read 0, ignore writes)
- $4020-$FFFF: Cartridge window (expansion stub, PRG RAM, PRG ROM through the mapper)

Address map (PPU):
- $0000-$1FFF: Pattern tables (cartridge CHR through the mapper)
- $2000-$3EFF: Nametables, folded by the cartridge's mirroring mode
- $3F00-$3FFF: Palette RAM (32 bytes, with background aliases)

Interrupt lines:
- `request_nmi` / `request_irq` latch a pending request; the CPU consumes it
  with `take_nmi` / `take_irq` at the next instruction boundary.

Every read and write is total. With no cartridge inserted the cartridge
window reads 0 and swallows writes.
*/

pub mod ppu_registers;
pub mod ram;

#[cfg(test)]
mod tests;

use crate::cartridge::{Cartridge, Mirroring};
use crate::ppu::Ppu;
use ppu_registers::PpuRegisters;
use ram::Ram;

#[derive(Debug, Default)]
pub struct Bus {
    ram: Ram,
    pub ppu: Ppu,
    cartridge: Option<Cartridge>,

    // Interrupt request lines
    nmi_pending: bool,
    irq_pending: bool,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus with `cart` already inserted.
    pub fn with_cartridge(cart: Cartridge) -> Self {
        let mut bus = Self::new();
        bus.insert_cartridge(cart);
        bus
    }

    /// Reset the PPU and drop pending interrupt requests. RAM and cartridge
    /// contents are kept.
    pub fn reset(&mut self) {
        self.ppu.reset();
        self.nmi_pending = false;
        self.irq_pending = false;
    }

    pub fn insert_cartridge(&mut self, cart: Cartridge) {
        self.cartridge = Some(cart);
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn cartridge_mut(&mut self) -> Option<&mut Cartridge> {
        self.cartridge.as_mut()
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => PpuRegisters::read(self, addr),
            0x4000..=0x401F => 0,
            0x4020..=0xFFFF => self.cartridge.as_ref().map_or(0, |c| c.cpu_read(addr)),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, value),
            0x2000..=0x3FFF => PpuRegisters::write(self, addr, value),
            0x4000..=0x401F => {
                log::trace!("discarded I/O write {value:02X} -> {addr:04X}");
            }
            0x4020..=0xFFFF => match self.cartridge.as_mut() {
                Some(cart) => cart.cpu_write(addr, value),
                None => log::trace!("discarded write {value:02X} -> {addr:04X}, no cartridge"),
            },
        }
    }

    /// Little-endian word read (vectors).
    #[inline]
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Side-effect-free read for debuggers and the disassembler. The PPU
    /// register window reads as 0 because its reads have side effects.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x401F => 0,
            0x4020..=0xFFFF => self.cartridge.as_ref().map_or(0, |c| c.cpu_read(addr)),
        }
    }

    // -----------------------------
    // PPU address space
    // -----------------------------

    /// Nametable arrangement in effect; horizontal when no cartridge is inserted.
    pub fn mirroring(&self) -> Mirroring {
        self.cartridge
            .as_ref()
            .map_or(Mirroring::Horizontal, Cartridge::mirroring)
    }

    pub fn ppu_read(&self, addr: u16) -> u8 {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => self.cartridge.as_ref().map_or(0, |c| c.ppu_read(a)),
            0x2000..=0x3EFF => self.ppu.memory().read_nametable(a, self.mirroring()),
            _ => self.ppu.memory().read_palette(a),
        }
    }

    pub fn ppu_write(&mut self, addr: u16, value: u8) {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => {
                if let Some(cart) = self.cartridge.as_mut() {
                    cart.ppu_write(a, value);
                }
            }
            0x2000..=0x3EFF => {
                let mirroring = self.mirroring();
                self.ppu.memory_mut().write_nametable(a, mirroring, value);
            }
            _ => self.ppu.memory_mut().write_palette(a, value),
        }
    }

    // -----------------------------
    // Interrupt lines
    // -----------------------------

    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn request_irq(&mut self) {
        self.irq_pending = true;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// Consume a pending NMI request.
    pub fn take_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_pending)
    }

    /// Consume a pending IRQ request.
    pub fn take_irq(&mut self) -> bool {
        std::mem::take(&mut self.irq_pending)
    }
}
