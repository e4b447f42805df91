//! One-instruction disassembler driven by the opcode table.
//!
//! `read` is any byte source; pass `|a| bus.peek(a)` to avoid register side
//! effects. Relative branches are rendered with their resolved target.

use crate::cpu::table::{AddrMode, lookup};

/// Render the instruction at `addr`. Returns the text and the address of
/// the following instruction.
pub fn disassemble(addr: u16, mut read: impl FnMut(u16) -> u8) -> (String, u16) {
    let ins = lookup(read(addr));
    let b1 = read(addr.wrapping_add(1));
    let b2 = read(addr.wrapping_add(2));
    let word = u16::from_le_bytes([b1, b2]);
    let next = addr.wrapping_add(ins.len());
    let m = ins.mnemonic();

    let text = match ins.mode {
        AddrMode::Imp => m.to_string(),
        AddrMode::Imm => format!("{m} #${b1:02X}"),
        AddrMode::Zp0 => format!("{m} ${b1:02X}"),
        AddrMode::Zpx => format!("{m} ${b1:02X},X"),
        AddrMode::Zpy => format!("{m} ${b1:02X},Y"),
        AddrMode::Rel => {
            let target = next.wrapping_add(b1 as i8 as i16 as u16);
            format!("{m} ${target:04X}")
        }
        AddrMode::Abs => format!("{m} ${word:04X}"),
        AddrMode::Abx => format!("{m} ${word:04X},X"),
        AddrMode::Aby => format!("{m} ${word:04X},Y"),
        AddrMode::Ind => format!("{m} (${word:04X})"),
        AddrMode::Izx => format!("{m} (${b1:02X},X)"),
        AddrMode::Izy => format!("{m} (${b1:02X}),Y"),
    };
    (text, next)
}
