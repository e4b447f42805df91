#![doc = r#"
famicore library crate.

A cycle-granular 6502 core for the NES together with the bus it drives.

Modules:
- cpu: 6502 CPU core (facade + state + opcode table + addressing + dispatch)
- bus: CPU address decoder (RAM, PPU register window, cartridge) and PPU address space
- cartridge: iNES v1 loader and cartridge storage; binds a Mapper
- mapper: Mapper trait and NROM (mapper 0) implementation
- ppu: PPU register file, nametable/palette memory, timing and NMI request, colour lookup
- nes: system aggregate driving the PPU and CPU from one master clock

Cargo features:
- trace: log a disassembled line for every executed instruction (`log` target "cpu")

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod mapper;
pub mod nes;
pub mod ppu;

pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, CartridgeHeader, Mirroring};
pub use cpu::Cpu;
pub use nes::Nes;

#[cfg(test)]
pub mod test_utils;
