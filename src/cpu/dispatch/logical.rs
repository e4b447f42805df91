/*!
logical.rs - AND / ORA / EOR / BIT.

The three accumulator ops update N and Z and pay the indexed page-cross
cycle. BIT copies operand bits 7 and 6 into N and V and sets Z from
`A & M`; A is left alone.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::execute::fetch_operand;
use crate::cpu::state::{NEGATIVE, OVERFLOW, ZERO};

pub(super) fn and(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    cpu.state.a &= m;
    cpu.state.update_zn(cpu.state.a);
    true
}

pub(super) fn ora(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    cpu.state.a |= m;
    cpu.state.update_zn(cpu.state.a);
    true
}

pub(super) fn eor(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    cpu.state.a ^= m;
    cpu.state.update_zn(cpu.state.a);
    true
}

pub(super) fn bit(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    cpu.state.assign_flag(ZERO, (cpu.state.a & m) == 0);
    cpu.state.assign_flag(NEGATIVE, (m & 0x80) != 0);
    cpu.state.assign_flag(OVERFLOW, (m & 0x40) != 0);
    false
}
