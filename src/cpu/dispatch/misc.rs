/*!
misc.rs - Flag operations, stack pushes / pulls, NOP and illegal slots.

Flag ops are single-bit writes. PHP pushes status with Break and Unused
set; PLP loads it back with Break dropped. PLA updates N and Z.

NOP returns the page-cross eligibility bit so the undocumented
absolute,X NOPs pay the extra cycle like silicon does. Illegal slots do
nothing beyond consuming their operand bytes and base cycles.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

// -------- Flag operations --------

pub(super) fn clc(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(CARRY, false);
    false
}

pub(super) fn sec(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(CARRY, true);
    false
}

pub(super) fn cli(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(IRQ_DISABLE, false);
    false
}

pub(super) fn sei(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(IRQ_DISABLE, true);
    false
}

pub(super) fn cld(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(DECIMAL, false);
    false
}

pub(super) fn sed(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(DECIMAL, true);
    false
}

pub(super) fn clv(cpu: &mut Cpu) -> bool {
    cpu.state.assign_flag(OVERFLOW, false);
    false
}

// -------- Stack --------

pub(super) fn pha(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let a = cpu.state.a;
    cpu.state.push_u8(bus, a);
    false
}

pub(super) fn pla(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = cpu.state.pop_u8(bus);
    cpu.state.a = v;
    cpu.state.update_zn(v);
    false
}

pub(super) fn php(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let p = cpu.state.compose_status_for_push(true);
    cpu.state.push_u8(bus, p);
    false
}

pub(super) fn plp(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let p = cpu.state.pop_u8(bus);
    cpu.state.restore_status(p);
    false
}

// -------- No-ops --------

pub(super) fn nop() -> bool {
    true
}

pub(super) fn illegal(cpu: &Cpu) -> bool {
    log::trace!(
        "illegal opcode {:02X} at {:04X} treated as no-op",
        cpu.ctx.opcode,
        cpu.state.pc
    );
    false
}
