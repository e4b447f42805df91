/*!
Mapper subsystem: the address-translation trait and NROM (mapper 0).

Purpose:
- Decouple cartridge storage from the address arithmetic of a board so a new
  board only has to describe how a bus address folds into its PRG/CHR buffers.
- A mapper is chosen once, at cartridge load, from the header's mapper id and
  is held for the cartridge's lifetime.

Contract:
- `translate` is pure and total. It receives the full CPU address
  ($8000..=$FFFF) or PPU pattern address ($0000..=$1FFF) plus the header's
  unit counts, and returns an offset into the matching storage buffer.
- Unknown ids are rejected by `mapper_for_id` with
  `CartridgeError::UnsupportedMapper`; there is no silent fallback.
*/

use std::fmt::Debug;

use crate::cartridge::CartridgeError;

/// Address translation for one cartridge board.
pub trait Mapper: Debug {
    /// iNES mapper number.
    fn id(&self) -> u8;

    /// Map a CPU program-window or PPU pattern-table address to a storage offset.
    fn translate(&self, addr: u16, prg_units: u8, chr_units: u8) -> u16;
}

/// NROM (mapper 0).
///
/// - PRG: one 16 KiB unit is mirrored across $8000..=$FFFF; two units map
///   straight through the 32 KiB window.
/// - CHR: the 8 KiB pattern window passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nrom;

impl Mapper for Nrom {
    fn id(&self) -> u8 {
        0
    }

    fn translate(&self, addr: u16, prg_units: u8, _chr_units: u8) -> u16 {
        match addr {
            0x8000..=0xFFFF => addr & if prg_units > 1 { 0x7FFF } else { 0x3FFF },
            0x0000..=0x1FFF => addr,
            _ => 0,
        }
    }
}

/// Build the mapper registered for `id`.
pub fn mapper_for_id(id: u8) -> Result<Box<dyn Mapper>, CartridgeError> {
    match id {
        0 => Ok(Box::new(Nrom)),
        other => {
            log::debug!("rejecting cartridge with mapper id {other}");
            Err(CartridgeError::UnsupportedMapper(other))
        }
    }
}
