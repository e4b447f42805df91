/*!
arithmetic.rs - ADC / SBC and the increment / decrement family.

ADC and SBC share one adder (`execute::add_with_carry`): SBC feeds the
one's complement of the operand and lets the incoming Carry supply the +1
of the two's complement, which is exactly how the NMOS ALU borrows.

Increments and decrements touch only N and Z. INC/DEC go through memory;
INX/INY/DEX/DEY stay in registers. Both ADC and SBC are eligible for the
indexed page-cross cycle; the increments are not.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::execute::{add_with_carry, fetch_operand};

pub(super) fn adc(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    add_with_carry(&mut cpu.state, m);
    true
}

pub(super) fn sbc(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    add_with_carry(&mut cpu.state, m ^ 0xFF);
    true
}

pub(super) fn inc(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus).wrapping_add(1);
    bus.write(cpu.ctx.addr_abs, v);
    cpu.state.update_zn(v);
    false
}

pub(super) fn dec(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus).wrapping_sub(1);
    bus.write(cpu.ctx.addr_abs, v);
    cpu.state.update_zn(v);
    false
}

pub(super) fn inx(cpu: &mut Cpu) -> bool {
    cpu.state.x = cpu.state.x.wrapping_add(1);
    cpu.state.update_zn(cpu.state.x);
    false
}

pub(super) fn iny(cpu: &mut Cpu) -> bool {
    cpu.state.y = cpu.state.y.wrapping_add(1);
    cpu.state.update_zn(cpu.state.y);
    false
}

pub(super) fn dex(cpu: &mut Cpu) -> bool {
    cpu.state.x = cpu.state.x.wrapping_sub(1);
    cpu.state.update_zn(cpu.state.x);
    false
}

pub(super) fn dey(cpu: &mut Cpu) -> bool {
    cpu.state.y = cpu.state.y.wrapping_sub(1);
    cpu.state.update_zn(cpu.state.y);
    false
}
