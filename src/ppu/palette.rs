//! System colour table and pattern-table decoding.
//!
//! Colours are packed ARGB (`0xAARRGGBB`, alpha always opaque). Both helpers
//! read through `Bus::ppu_read`, so they see CHR and palette RAM exactly as
//! the PPU does and never disturb register state.

use crate::bus::Bus;

/// Pattern-table image edge length in pixels (16 tiles of 8 pixels).
pub const PATTERN_TABLE_SIZE: usize = 128;

/// The 64 colours the PPU can emit, indexed by palette RAM value.
#[rustfmt::skip]
pub const SYSTEM_PALETTE: [u32; 64] = [
    0xFF545454, 0xFF001E74, 0xFF081090, 0xFF300088, 0xFF440064, 0xFF5C0030, 0xFF540400, 0xFF3C1800,
    0xFF202A00, 0xFF083A00, 0xFF004000, 0xFF003C00, 0xFF00323C, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFF989698, 0xFF084CC4, 0xFF3032EC, 0xFF5C1EE4, 0xFF8814B0, 0xFFA01464, 0xFF982220, 0xFF783C00,
    0xFF545A00, 0xFF287200, 0xFF087C00, 0xFF007628, 0xFF006678, 0xFF000000, 0xFF000000, 0xFF000000,
    0xFFECEEEC, 0xFF4C9AEC, 0xFF787CEC, 0xFFB062EC, 0xFFE454EC, 0xFFEC58B4, 0xFFEC6A64, 0xFFD48820,
    0xFFA0AA00, 0xFF746400, 0xFF4CD020, 0xFF38CC6C, 0xFF38B4CC, 0xFF3C3C3C, 0xFF000000, 0xFF000000,
    0xFFECEEEC, 0xFFA8CCEC, 0xFFBCBCEC, 0xFFD4B2EC, 0xFFECAEEC, 0xFFECAED4, 0xFFECB4B0, 0xFFE4C490,
    0xFFCCD278, 0xFFB4DE78, 0xFFA8E290, 0xFF98E2B4, 0xFFA0D6E4, 0xFFA0A2A0, 0xFF000000, 0xFF000000,
];

/// Colour of entry `index` (0..=3) of `palette` (0..=7; 4..=7 are sprite palettes).
pub fn color(bus: &Bus, palette: u8, index: u8) -> u32 {
    let addr = 0x3F00 + (palette as u16 & 0x07) * 4 + (index as u16 & 0x03);
    SYSTEM_PALETTE[(bus.ppu_read(addr) & 0x3F) as usize]
}

/// Decode pattern table `table` (0 or 1) into a row-major 128x128 ARGB image
/// coloured with `palette`.
pub fn pattern_table(bus: &Bus, table: u8, palette: u8) -> Vec<u32> {
    let mut pixels = vec![0u32; PATTERN_TABLE_SIZE * PATTERN_TABLE_SIZE];
    let colors: [u32; 4] = std::array::from_fn(|i| color(bus, palette, i as u8));
    let base = (table as u16 & 1) * 0x1000;

    for tile_y in 0..16u16 {
        for tile_x in 0..16u16 {
            let offset = base + tile_y * 256 + tile_x * 16;
            for row in 0..8u16 {
                let mut lsb = bus.ppu_read(offset + row);
                let mut msb = bus.ppu_read(offset + row + 8);
                for col in 0..8u16 {
                    let idx = ((msb & 0x01) << 1) | (lsb & 0x01);
                    lsb >>= 1;
                    msb >>= 1;
                    // bit 0 is the rightmost pixel of the tile row
                    let x = (tile_x * 8 + (7 - col)) as usize;
                    let y = (tile_y * 8 + row) as usize;
                    pixels[y * PATTERN_TABLE_SIZE + x] = colors[idx as usize];
                }
            }
        }
    }
    pixels
}
