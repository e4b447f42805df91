/*!
load_store.rs - Loads, stores and register transfers.

Loads (LDA/LDX/LDY) set N and Z and are eligible for the indexed
page-cross cycle. Stores never read their target and never pay the penalty
(their table cost already includes the fix-up cycle). Transfers set N and Z
except TXS, which copies X into S without touching flags.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::execute::fetch_operand;

// ---------------- Loads ----------------

pub(super) fn lda(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    cpu.state.a = v;
    cpu.state.update_zn(v);
    true
}

pub(super) fn ldx(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    cpu.state.x = v;
    cpu.state.update_zn(v);
    true
}

pub(super) fn ldy(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let v = fetch_operand(cpu, bus);
    cpu.state.y = v;
    cpu.state.update_zn(v);
    true
}

// ---------------- Stores ----------------

pub(super) fn sta(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    bus.write(cpu.ctx.addr_abs, cpu.state.a);
    false
}

pub(super) fn stx(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    bus.write(cpu.ctx.addr_abs, cpu.state.x);
    false
}

pub(super) fn sty(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    bus.write(cpu.ctx.addr_abs, cpu.state.y);
    false
}

// ---------------- Transfers ----------------

pub(super) fn tax(cpu: &mut Cpu) -> bool {
    cpu.state.x = cpu.state.a;
    cpu.state.update_zn(cpu.state.x);
    false
}

pub(super) fn tay(cpu: &mut Cpu) -> bool {
    cpu.state.y = cpu.state.a;
    cpu.state.update_zn(cpu.state.y);
    false
}

pub(super) fn txa(cpu: &mut Cpu) -> bool {
    cpu.state.a = cpu.state.x;
    cpu.state.update_zn(cpu.state.a);
    false
}

pub(super) fn tya(cpu: &mut Cpu) -> bool {
    cpu.state.a = cpu.state.y;
    cpu.state.update_zn(cpu.state.a);
    false
}

pub(super) fn tsx(cpu: &mut Cpu) -> bool {
    cpu.state.x = cpu.state.sp;
    cpu.state.update_zn(cpu.state.x);
    false
}

pub(super) fn txs(cpu: &mut Cpu) -> bool {
    cpu.state.sp = cpu.state.x;
    false
}
