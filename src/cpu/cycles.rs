/*!
cycles.rs - Timing constants and vector addresses for the 6502 core.

Base per-opcode costs live in `table.rs`. This module carries the fixed
latencies of the three external-event sequences and the page-cross
predicate shared by the addressing resolvers and the branch rule.
*/

/// Cycles burned by the reset sequence before the first opcode fetch.
pub const RESET_CYCLES: u8 = 8;
/// Cycles for a serviced maskable interrupt.
pub const IRQ_CYCLES: u8 = 7;
/// Cycles for a non-maskable interrupt.
pub const NMI_CYCLES: u8 = 8;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Shared by IRQ and BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// True when `a` and `b` live in different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}
