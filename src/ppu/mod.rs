/*!
Picture processing unit (2C02) collaborator.

Provides:
- The CPU-visible register file ($2000..$2007), see `registers`.
- Nametable VRAM and palette RAM with their mirroring rules, see `memory`.
- The system colour table and pattern-table decoding, see `palette`.
- Scanline/dot timing with vblank and the NMI request line.

Timing:
- 341 dots per scanline; scanlines run from -1 (pre-render) to 260.
- Scanline 241, dot 1: vblank is set and, with PPUCTRL bit 7 set, an NMI
  request is latched for the system driver to forward to the CPU.
- Scanline -1, dot 1: vblank, sprite-zero hit and sprite overflow clear.
- Wrapping past scanline 260 marks the frame complete.

Background and sprite rendering are not modelled; the timing exists so that
vblank polling and NMI-driven programs run.
*/

pub mod memory;
pub mod palette;
pub(crate) mod registers;

use memory::PpuMemory;

/// Dots per scanline.
pub const DOTS_PER_SCANLINE: u16 = 341;
/// First scanline of a frame (pre-render).
pub const PRE_RENDER_SCANLINE: i16 = -1;
/// Scanline on which vblank starts.
pub const VBLANK_SCANLINE: i16 = 241;
/// Last scanline of a frame.
pub const LAST_SCANLINE: i16 = 260;

pub const CTRL_INCREMENT_32: u8 = 0x04;
pub const CTRL_NMI_ENABLE: u8 = 0x80;

pub const STATUS_SPRITE_OVERFLOW: u8 = 0x20;
pub const STATUS_SPRITE_ZERO_HIT: u8 = 0x40;
pub const STATUS_VBLANK: u8 = 0x80;

#[derive(Debug, Clone)]
pub struct Ppu {
    // CPU-visible register state
    ctrl: u8,
    mask: u8,
    status: u8,
    oam_addr: u8,
    oam: [u8; 256],

    // Shared PPUSCROLL/PPUADDR write latch
    write_latch: bool,
    scroll_x: u8,
    scroll_y: u8,
    vram_addr: u16,
    data_buffer: u8,

    memory: PpuMemory,

    // Timing
    dot: u16,
    scanline: i16,
    frame_complete: bool,
    frame_count: u64,
    nmi_request: bool,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            ctrl: 0,
            mask: 0,
            status: 0,
            oam_addr: 0,
            oam: [0; 256],
            write_latch: false,
            scroll_x: 0,
            scroll_y: 0,
            vram_addr: 0,
            data_buffer: 0,
            memory: PpuMemory::new(),
            dot: 0,
            scanline: PRE_RENDER_SCANLINE,
            frame_complete: false,
            frame_count: 0,
            nmi_request: false,
        }
    }

    /// Clear registers and restart timing at the pre-render line.
    /// VRAM, palette and OAM contents survive.
    pub fn reset(&mut self) {
        self.ctrl = 0;
        self.mask = 0;
        self.status = 0;
        self.oam_addr = 0;
        self.write_latch = false;
        self.scroll_x = 0;
        self.scroll_y = 0;
        self.vram_addr = 0;
        self.data_buffer = 0;
        self.dot = 0;
        self.scanline = PRE_RENDER_SCANLINE;
        self.frame_complete = false;
        self.nmi_request = false;
    }

    /// Advance one dot.
    pub fn clock(&mut self) {
        if self.dot == 1 {
            if self.scanline == PRE_RENDER_SCANLINE {
                self.status &= !(STATUS_VBLANK | STATUS_SPRITE_ZERO_HIT | STATUS_SPRITE_OVERFLOW);
            } else if self.scanline == VBLANK_SCANLINE {
                self.status |= STATUS_VBLANK;
                if self.nmi_enabled() {
                    self.nmi_request = true;
                }
            }
        }

        self.dot += 1;
        if self.dot >= DOTS_PER_SCANLINE {
            self.dot = 0;
            self.scanline += 1;
            if self.scanline > LAST_SCANLINE {
                self.scanline = PRE_RENDER_SCANLINE;
                self.frame_complete = true;
                self.frame_count += 1;
            }
        }
    }

    // -------------- Interrupt and frame handshakes --------------

    /// Returns and clears the pending NMI request.
    pub fn take_nmi_request(&mut self) -> bool {
        std::mem::take(&mut self.nmi_request)
    }

    pub fn frame_complete(&self) -> bool {
        self.frame_complete
    }

    /// Returns and clears the frame-complete marker.
    pub fn take_frame_complete(&mut self) -> bool {
        std::mem::take(&mut self.frame_complete)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // -------------- Accessors --------------

    pub fn ctrl(&self) -> u8 {
        self.ctrl
    }
    pub fn mask(&self) -> u8 {
        self.mask
    }
    pub fn status(&self) -> u8 {
        self.status
    }
    pub fn vblank(&self) -> bool {
        (self.status & STATUS_VBLANK) != 0
    }
    pub fn nmi_enabled(&self) -> bool {
        (self.ctrl & CTRL_NMI_ENABLE) != 0
    }
    pub fn scanline(&self) -> i16 {
        self.scanline
    }
    pub fn dot(&self) -> u16 {
        self.dot
    }
    pub fn scroll(&self) -> (u8, u8) {
        (self.scroll_x, self.scroll_y)
    }
    pub fn vram_addr(&self) -> u16 {
        self.vram_addr
    }

    pub fn peek_oam(&self, idx: u8) -> u8 {
        self.oam[idx as usize]
    }
    pub fn poke_oam(&mut self, idx: u8, value: u8) {
        self.oam[idx as usize] = value;
    }

    pub fn memory(&self) -> &PpuMemory {
        &self.memory
    }
    pub fn memory_mut(&mut self) -> &mut PpuMemory {
        &mut self.memory
    }
}
