/*!
rmw.rs - ASL / LSR / ROL / ROR.

Accumulator form when the addressing mode is implied, read-modify-write on
the effective address otherwise. Carry receives the bit shifted out; the
rotates feed the previous Carry into the vacated bit.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::execute::{fetch_operand, write_back};
use crate::cpu::state::CARRY;

#[inline]
fn finish(cpu: &mut Cpu, bus: &mut Bus, result: u8, carry_out: bool) -> bool {
    cpu.state.assign_flag(CARRY, carry_out);
    cpu.state.update_zn(result);
    write_back(cpu, bus, result);
    false
}

pub(super) fn asl(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    finish(cpu, bus, v << 1, (v & 0x80) != 0)
}

pub(super) fn lsr(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    finish(cpu, bus, v >> 1, (v & 0x01) != 0)
}

pub(super) fn rol(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    let carry_in = cpu.state.is_flag_set(CARRY) as u8;
    finish(cpu, bus, (v << 1) | carry_in, (v & 0x80) != 0)
}

pub(super) fn ror(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    let carry_in = (cpu.state.is_flag_set(CARRY) as u8) << 7;
    finish(cpu, bus, (v >> 1) | carry_in, (v & 0x01) != 0)
}
