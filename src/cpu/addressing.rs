/*!
addressing.rs - Operand context and the twelve addressing-mode resolvers.

Overview
========
Each resolver consumes 0, 1 or 2 bytes after the opcode (advancing PC
through `CpuState::fetch_*`), stores the effective address or relative
displacement in `OperandContext`, and returns `true` when indexing moved
the address into another page. Whether that page cross actually costs a
cycle is decided by the operation (see `dispatch`).

Quirks reproduced
=================
- Zero page,X / zero page,Y wrap inside page 0.
- `($nn,X)` and `($nn),Y` read their 16-bit pointer from page 0 with the
  high byte wrapping from `$FF` to `$00`.
- `JMP ($xxFF)` fetches the high byte from `$xx00` of the same page.

Implied mode latches A into `fetched`, so shift/rotate handlers can use
one code path for accumulator and memory forms.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::cycles::page_crossed;
use crate::cpu::table::AddrMode;

/// Per-instruction scratch state, cleared before every fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperandContext {
    /// Effective address for memory operands.
    pub addr_abs: u16,
    /// Sign-extended branch displacement.
    pub addr_rel: u16,
    /// Last operand byte fetched (or A in implied mode).
    pub fetched: u8,
    pub opcode: u8,
    pub mode: Option<AddrMode>,
    /// Cycles added by the operation itself (taken branches).
    pub extra_cycles: u8,
}

impl OperandContext {
    #[inline]
    pub fn is_implied(&self) -> bool {
        self.mode == Some(AddrMode::Imp)
    }
}

/// Resolve `mode` for the instruction whose opcode was just fetched.
pub(crate) fn resolve(mode: AddrMode, cpu: &mut Cpu, bus: &mut Bus) -> bool {
    cpu.ctx.mode = Some(mode);
    match mode {
        AddrMode::Imp => imp(cpu),
        AddrMode::Imm => imm(cpu),
        AddrMode::Zp0 => zp0(cpu, bus),
        AddrMode::Zpx => {
            let x = cpu.state.x;
            zp_indexed(cpu, bus, x)
        }
        AddrMode::Zpy => {
            let y = cpu.state.y;
            zp_indexed(cpu, bus, y)
        }
        AddrMode::Rel => rel(cpu, bus),
        AddrMode::Abs => abs(cpu, bus),
        AddrMode::Abx => {
            let x = cpu.state.x;
            abs_indexed(cpu, bus, x)
        }
        AddrMode::Aby => {
            let y = cpu.state.y;
            abs_indexed(cpu, bus, y)
        }
        AddrMode::Ind => ind(cpu, bus),
        AddrMode::Izx => izx(cpu, bus),
        AddrMode::Izy => izy(cpu, bus),
    }
}

fn imp(cpu: &mut Cpu) -> bool {
    cpu.ctx.fetched = cpu.state.a;
    false
}

fn imm(cpu: &mut Cpu) -> bool {
    cpu.ctx.addr_abs = cpu.state.pc;
    cpu.state.pc = cpu.state.pc.wrapping_add(1);
    false
}

fn zp0(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    cpu.ctx.addr_abs = cpu.state.fetch_u8(bus) as u16;
    false
}

fn zp_indexed(cpu: &mut Cpu, bus: &mut Bus, index: u8) -> bool {
    cpu.ctx.addr_abs = cpu.state.fetch_u8(bus).wrapping_add(index) as u16;
    false
}

fn rel(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let offset = cpu.state.fetch_u8(bus);
    cpu.ctx.addr_rel = offset as i8 as i16 as u16;
    false
}

fn abs(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    cpu.ctx.addr_abs = cpu.state.fetch_u16(bus);
    false
}

fn abs_indexed(cpu: &mut Cpu, bus: &mut Bus, index: u8) -> bool {
    let base = cpu.state.fetch_u16(bus);
    let addr = base.wrapping_add(index as u16);
    cpu.ctx.addr_abs = addr;
    page_crossed(base, addr)
}

fn ind(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let ptr = cpu.state.fetch_u16(bus);
    cpu.ctx.addr_abs = read_word_indirect_bug(bus, ptr);
    false
}

fn izx(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let zp = cpu.state.fetch_u8(bus).wrapping_add(cpu.state.x);
    cpu.ctx.addr_abs = read_word_zp(bus, zp);
    false
}

fn izy(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let zp = cpu.state.fetch_u8(bus);
    let base = read_word_zp(bus, zp);
    let addr = base.wrapping_add(cpu.state.y as u16);
    cpu.ctx.addr_abs = addr;
    page_crossed(base, addr)
}

/// 16-bit pointer from zero page; the high byte wraps `$FF` -> `$00`.
#[inline]
pub(crate) fn read_word_zp(bus: &mut Bus, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) pointer read: the high byte never leaves the pointer's page.
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &mut Bus, ptr: u16) -> u16 {
    let lo = bus.read(ptr) as u16;
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::boot;

    #[test]
    fn abs_x_page_cross_detection() {
        // LDA $80F5,X with X=$10 -> $8105
        let (mut cpu, mut bus) = boot(&[0xBD, 0xF5, 0x80]);
        cpu.state.x = 0x10;
        cpu.state.pc = 0x8001;
        assert!(resolve(AddrMode::Abx, &mut cpu, &mut bus));
        assert_eq!(cpu.ctx.addr_abs, 0x8105);
        assert_eq!(cpu.pc(), 0x8003);
    }

    #[test]
    fn abs_y_same_page() {
        let (mut cpu, mut bus) = boot(&[0xB9, 0x00, 0x02]);
        cpu.state.y = 0x20;
        cpu.state.pc = 0x8001;
        assert!(!resolve(AddrMode::Aby, &mut cpu, &mut bus));
        assert_eq!(cpu.ctx.addr_abs, 0x0220);
    }

    #[test]
    fn zero_page_x_wraps_in_page_zero() {
        let (mut cpu, mut bus) = boot(&[0xB5, 0xF0]);
        cpu.state.x = 0x20;
        cpu.state.pc = 0x8001;
        resolve(AddrMode::Zpx, &mut cpu, &mut bus);
        assert_eq!(cpu.ctx.addr_abs, 0x0010);
    }

    #[test]
    fn indexed_indirect_pointer_wraps() {
        // ($FF,X) with X=0 reads lo from $00FF and hi from $0000
        let (mut cpu, mut bus) = boot(&[0xA1, 0xFF]);
        bus.write(0x00FF, 0x34);
        bus.write(0x0000, 0x12);
        cpu.state.pc = 0x8001;
        resolve(AddrMode::Izx, &mut cpu, &mut bus);
        assert_eq!(cpu.ctx.addr_abs, 0x1234);
    }

    #[test]
    fn indirect_indexed_crosses_after_adding_y() {
        let (mut cpu, mut bus) = boot(&[0xB1, 0x10]);
        bus.write(0x0010, 0xFF);
        bus.write(0x0011, 0x02);
        cpu.state.y = 0x01;
        cpu.state.pc = 0x8001;
        assert!(resolve(AddrMode::Izy, &mut cpu, &mut bus));
        assert_eq!(cpu.ctx.addr_abs, 0x0300);
    }

    #[test]
    fn relative_offsets_are_sign_extended() {
        let (mut cpu, mut bus) = boot(&[0xD0, 0xFE]);
        cpu.state.pc = 0x8001;
        resolve(AddrMode::Rel, &mut cpu, &mut bus);
        assert_eq!(cpu.ctx.addr_rel, 0xFFFE);
    }

    #[test]
    fn implied_latches_accumulator() {
        let (mut cpu, mut bus) = boot(&[0x0A]);
        cpu.state.a = 0x5A;
        resolve(AddrMode::Imp, &mut cpu, &mut bus);
        assert_eq!(cpu.ctx.fetched, 0x5A);
        assert!(cpu.ctx.is_implied());
    }

    #[test]
    fn indirect_jmp_bug() {
        let mut bus = crate::bus::Bus::new();
        bus.write(0x02FF, 0x34);
        bus.write(0x0200, 0x12);
        bus.write(0x0300, 0x99);
        assert_eq!(read_word_indirect_bug(&mut bus, 0x02FF), 0x1234);
    }
}
