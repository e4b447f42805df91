/*!
state.rs - Architectural 6502 register file (A, X, Y, S, PC, P) and the
helpers every instruction handler leans on.

Overview
========
`CpuState` owns the programmer-visible registers only. Decode, addressing
scratch and cycle accounting live one layer up in `cpu::core`.

All register arithmetic is done with `wrapping_*` on the native width. The
stack pointer, zero-page indexing and the program counter all rely on that
wraparound, so nothing here widens a register before storing it back.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (pushed as 1)
  B = BREAK (PHP/BRK only; hardware IRQ/NMI push with B clear)
  D = DECIMAL (stored and restored, never affects arithmetic on this CPU)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

Stack
=====
The stack lives in page one. Push writes at `$0100 | S` then decrements S;
pull increments S then reads. There is no overflow detection.
*/

use crate::bus::Bus;

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;
/// Stack pointer value loaded by reset.
pub const RESET_SP: u8 = 0xFD;

/// Register file of the 6502.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: 0x0000,
            status: UNUSED,
        }
    }
}

impl CpuState {
    /// Power-up register values (identical to the post-reset values, minus PC).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }

    // ---------------------------------------------------------------------
    // Program counter / instruction stream
    // ---------------------------------------------------------------------

    /// Read the byte at PC and advance PC (wrapping at 16 bits).
    #[inline]
    pub fn fetch_u8(&mut self, bus: &mut Bus) -> u8 {
        let b = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        b
    }

    /// Read a little-endian word at PC and advance PC by two.
    #[inline]
    pub fn fetch_u16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.fetch_u8(bus) as u16;
        let hi = self.fetch_u8(bus) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Flags
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    /// ZERO and NEGATIVE from an 8-bit result.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    /// Status byte as it lands on the stack. UNUSED is always 1; BREAK only
    /// for the software paths (BRK, PHP).
    pub fn compose_status_for_push(&self, set_break: bool) -> u8 {
        let v = self.status | UNUSED;
        if set_break { v | BREAK } else { v & !BREAK }
    }

    /// Status byte as loaded back by PLP / RTI.
    #[inline]
    pub fn restore_status(&mut self, pulled: u8) {
        self.status = (pulled | UNUSED) & !BREAK;
    }

    // ---------------------------------------------------------------------
    // Stack
    // ---------------------------------------------------------------------

    #[inline]
    pub fn push_u8(&mut self, bus: &mut Bus, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    #[inline]
    pub fn pop_u8(&mut self, bus: &mut Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    /// Push a word high byte first, so it reads back little-endian.
    #[inline]
    pub fn push_u16(&mut self, bus: &mut Bus, value: u16) {
        self.push_u8(bus, (value >> 8) as u8);
        self.push_u8(bus, value as u8);
    }

    #[inline]
    pub fn pop_u16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.pop_u8(bus) as u16;
        let hi = self.pop_u8(bus) as u16;
        (hi << 8) | lo
    }
}
