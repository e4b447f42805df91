/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK.

Behavior Details
================
- JMP jumps to the resolved address; the indirect form already went through
  the same-page pointer quirk in the resolver.
- JSR pushes the address of its own last byte (PC - 1), high byte first.
- RTS pulls that address and adds one.
- RTI pulls status (Break dropped, Unused forced) and then PC, with no +1.
- BRK is decoded in immediate mode so its padding byte is skipped; the
  pushed return address therefore points two bytes past the opcode. It then
  runs the shared interrupt entry with Break set and vectors through $FFFE.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::cycles::IRQ_VECTOR;
use crate::cpu::execute::enter_interrupt;

pub(super) fn jmp(cpu: &mut Cpu) -> bool {
    cpu.state.pc = cpu.ctx.addr_abs;
    false
}

pub(super) fn jsr(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let ret = cpu.state.pc.wrapping_sub(1);
    cpu.state.push_u16(bus, ret);
    cpu.state.pc = cpu.ctx.addr_abs;
    false
}

pub(super) fn rts(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    cpu.state.pc = cpu.state.pop_u16(bus).wrapping_add(1);
    false
}

pub(super) fn rti(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let p = cpu.state.pop_u8(bus);
    cpu.state.restore_status(p);
    cpu.state.pc = cpu.state.pop_u16(bus);
    false
}

pub(super) fn brk(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    enter_interrupt(cpu, bus, IRQ_VECTOR, true);
    false
}
