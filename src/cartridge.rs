/*!
Cartridge storage with the iNES (v1) loader and mapper binding.

Features:
- Build a cartridge straight from header fields (`Cartridge::new`) or parse
  an iNES image from bytes or a file path.
- PRG ROM in 16 KiB units, CHR in 8 KiB units; a CHR count of 0 means the
  board carries 8 KiB of writable CHR RAM.
- 8 KiB of PRG RAM at CPU $6000..=$7FFF.
- A 512-byte trainer, when flagged, is skipped.
- The mapper is bound once from the header id; unknown ids fail the load.

CPU window routing ($4020..=$FFFF):
- $4020..=$5FFF: expansion area, reads 0, writes discarded.
- $6000..=$7FFF: PRG RAM.
- $8000..=$FFFF: PRG ROM through `Mapper::translate`; writes discarded.
*/

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::mapper::{Mapper, mapper_for_id};

/// Size of one PRG ROM unit.
pub const PRG_UNIT: usize = 16 * 1024;
/// Size of one CHR unit.
pub const CHR_UNIT: usize = 8 * 1024;
/// PRG RAM provided at $6000..=$7FFF.
pub const PRG_RAM_SIZE: usize = 8 * 1024;

const INES_MAGIC: &[u8; 4] = b"NES\x1A";
const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;

/// Configuration errors surfaced while loading a cartridge.
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("image is {0} bytes, too short for an iNES header")]
    TooShort(usize),
    #[error("missing iNES magic bytes")]
    BadMagic,
    #[error("{section} truncated: need {needed} bytes, {available} available")]
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("unsupported mapper id {0}")]
    UnsupportedMapper(u8),
    #[error("failed to read cartridge image: {0}")]
    Io(#[from] std::io::Error),
}

/// Nametable arrangement selected by the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mirroring {
    #[default]
    Horizontal,
    Vertical,
    OneScreenLower,
    OneScreenUpper,
}

/// Raw header fields that size the cartridge and select its mapper.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub prg_units: u8,
    pub chr_units: u8,
    pub mapper_id: u8,
    pub mirroring: Mirroring,
}

impl CartridgeHeader {
    /// Decode the 16-byte iNES header.
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::TooShort(data.len()));
        }
        if &data[0..4] != INES_MAGIC {
            return Err(CartridgeError::BadMagic);
        }
        let flags6 = data[6];
        let flags7 = data[7];
        let mirroring = if (flags6 & 0b0000_0001) != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        Ok(Self {
            prg_units: data[4],
            chr_units: data[5],
            mapper_id: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring,
        })
    }
}

pub struct Cartridge {
    header: CartridgeHeader,
    mapper: Box<dyn Mapper>,
    prg_rom: Vec<u8>,
    prg_ram: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("header", &self.header)
            .field("mapper", &self.mapper)
            .field("prg_rom_len", &self.prg_rom.len())
            .field("chr_len", &self.chr.len())
            .field("chr_is_ram", &self.chr_is_ram)
            .finish()
    }
}

impl Cartridge {
    // -------------- Construction --------------

    /// Allocate zero-filled storage for `header` and bind its mapper.
    pub fn new(header: CartridgeHeader) -> Result<Self, CartridgeError> {
        let mapper = mapper_for_id(header.mapper_id)?;
        let chr_is_ram = header.chr_units == 0;
        let chr_len = if chr_is_ram {
            CHR_UNIT
        } else {
            header.chr_units as usize * CHR_UNIT
        };
        Ok(Self {
            header,
            mapper,
            prg_rom: vec![0; header.prg_units as usize * PRG_UNIT],
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr: vec![0; chr_len],
            chr_is_ram,
        })
    }

    /// Parse an iNES (v1) image.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = CartridgeHeader::parse(data)?;
        let mut cart = Self::new(header)?;

        let mut offset = HEADER_LEN;
        if (data[6] & 0b0000_0100) != 0 {
            offset += TRAINER_LEN;
        }

        let prg_len = cart.prg_rom.len();
        let prg = section(data, offset, prg_len, "PRG ROM")?;
        cart.prg_rom.copy_from_slice(prg);
        offset += prg_len;

        if !cart.chr_is_ram {
            let chr_len = cart.chr.len();
            let chr = section(data, offset, chr_len, "CHR ROM")?;
            cart.chr.copy_from_slice(chr);
        }

        log::info!(
            "loaded cartridge: mapper {}, {} x 16 KiB PRG, {} x 8 KiB CHR{}, {:?} mirroring",
            header.mapper_id,
            header.prg_units,
            header.chr_units,
            if cart.chr_is_ram { " (RAM)" } else { "" },
            header.mirroring
        );
        Ok(cart)
    }

    /// Load an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- CPU window ($4020..=$FFFF) --------------

    pub fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self.prg_ram[(addr as usize - 0x6000) & (PRG_RAM_SIZE - 1)],
            0x8000..=0xFFFF => {
                let off = self.mapper.translate(addr, self.header.prg_units, self.header.chr_units);
                self.prg_rom.get(off as usize).copied().unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn cpu_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x6000..=0x7FFF => {
                self.prg_ram[(addr as usize - 0x6000) & (PRG_RAM_SIZE - 1)] = value;
            }
            _ => log::trace!("discarded cartridge write {value:02X} -> {addr:04X}"),
        }
    }

    // -------------- PPU pattern window ($0000..=$1FFF) --------------

    pub fn ppu_read(&self, addr: u16) -> u8 {
        let off = self
            .mapper
            .translate(addr & 0x1FFF, self.header.prg_units, self.header.chr_units);
        self.chr.get(off as usize).copied().unwrap_or(0)
    }

    /// Only lands when the board has CHR RAM.
    pub fn ppu_write(&mut self, addr: u16, value: u8) {
        if !self.chr_is_ram {
            log::trace!("discarded CHR ROM write {value:02X} -> {addr:04X}");
            return;
        }
        let off = self
            .mapper
            .translate(addr & 0x1FFF, self.header.prg_units, self.header.chr_units);
        if let Some(b) = self.chr.get_mut(off as usize) {
            *b = value;
        }
    }

    // -------------- Accessors --------------

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    pub fn mapper_id(&self) -> u8 {
        self.mapper.id()
    }

    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    /// Mutable PRG ROM storage, for loaders and test harnesses.
    pub fn prg_rom_mut(&mut self) -> &mut [u8] {
        &mut self.prg_rom
    }

    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    pub fn chr_mut(&mut self) -> &mut [u8] {
        &mut self.chr
    }
}

fn section<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    name: &'static str,
) -> Result<&'a [u8], CartridgeError> {
    data.get(offset..offset + len)
        .ok_or(CartridgeError::Truncated {
            section: name,
            needed: offset + len,
            available: data.len(),
        })
}
