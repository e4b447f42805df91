/*!
execute.rs - Semantic helpers shared by the operation handlers.

Scope
-----
- Operand fetch from the resolved context (`fetch_operand`).
- Write-back to A or memory depending on the addressing mode (`write_back`).
- ALU cores that more than one handler uses (`add_with_carry`, `compare`).
- The conditional branch rule (`branch_if`).
- The interrupt entry sequence shared by BRK, IRQ and NMI (`enter_interrupt`).

Handlers in `dispatch::*` compose these; nothing here touches cycle counts
except `branch_if`, which records its penalty in the operand context.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::cycles::page_crossed;
use crate::cpu::state::{CARRY, CpuState, IRQ_DISABLE, OVERFLOW};

/// Load the operand byte for the current instruction. Implied mode keeps
/// the accumulator latched by the resolver.
#[inline]
pub(crate) fn fetch_operand(cpu: &mut Cpu, bus: &mut Bus) -> u8 {
    if !cpu.ctx.is_implied() {
        cpu.ctx.fetched = bus.read(cpu.ctx.addr_abs);
    }
    cpu.ctx.fetched
}

/// Store a read-modify-write result to A (implied) or the effective address.
#[inline]
pub(crate) fn write_back(cpu: &mut Cpu, bus: &mut Bus, value: u8) {
    if cpu.ctx.is_implied() {
        cpu.state.a = value;
    } else {
        bus.write(cpu.ctx.addr_abs, value);
    }
}

/// A <- A + M + C with the NMOS flag rules. SBC reaches this with M inverted.
pub(crate) fn add_with_carry(state: &mut CpuState, operand: u8) {
    let a = state.a;
    let sum = a as u16 + operand as u16 + state.is_flag_set(CARRY) as u16;
    let result = sum as u8;
    state.assign_flag(CARRY, sum > 0xFF);
    state.assign_flag(OVERFLOW, (!(a ^ operand) & (a ^ result) & 0x80) != 0);
    state.a = result;
    state.update_zn(result);
}

/// Flags for CMP/CPX/CPY. `register` is never written.
#[inline]
pub(crate) fn compare(state: &mut CpuState, register: u8, operand: u8) {
    state.assign_flag(CARRY, register >= operand);
    state.update_zn(register.wrapping_sub(operand));
}

/// Take the branch when `condition` holds: +1 cycle, +1 more when the target
/// lies in another page than the instruction that follows the branch.
pub(crate) fn branch_if(cpu: &mut Cpu, condition: bool) {
    if !condition {
        return;
    }
    let next = cpu.state.pc;
    let target = next.wrapping_add(cpu.ctx.addr_rel);
    cpu.ctx.extra_cycles += if page_crossed(next, target) { 2 } else { 1 };
    cpu.state.pc = target;
}

/// Push PC and status, set I, jump through `vector`.
pub(crate) fn enter_interrupt(cpu: &mut Cpu, bus: &mut Bus, vector: u16, set_break: bool) {
    let pc = cpu.state.pc;
    cpu.state.push_u16(bus, pc);
    let p = cpu.state.compose_status_for_push(set_break);
    cpu.state.push_u8(bus, p);
    cpu.state.assign_flag(IRQ_DISABLE, true);
    cpu.state.pc = bus.read_word(vector);
}
