/*!
branches.rs - Relative branches (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ).

Cycle Rules
===========
Base cost: 2 cycles.
Taken: +1.
Taken and the target is in a different page from the following
instruction: +2 total.

The penalty is recorded by `execute::branch_if` in the operand context;
branches never claim the addressing-mode page-cross cycle.
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute::branch_if;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

#[inline]
fn on_flag(cpu: &mut Cpu, mask: u8, expect_set: bool) -> bool {
    let taken = cpu.state.is_flag_set(mask) == expect_set;
    branch_if(cpu, taken);
    false
}

pub(super) fn bpl(cpu: &mut Cpu) -> bool {
    on_flag(cpu, NEGATIVE, false)
}

pub(super) fn bmi(cpu: &mut Cpu) -> bool {
    on_flag(cpu, NEGATIVE, true)
}

pub(super) fn bvc(cpu: &mut Cpu) -> bool {
    on_flag(cpu, OVERFLOW, false)
}

pub(super) fn bvs(cpu: &mut Cpu) -> bool {
    on_flag(cpu, OVERFLOW, true)
}

pub(super) fn bcc(cpu: &mut Cpu) -> bool {
    on_flag(cpu, CARRY, false)
}

pub(super) fn bcs(cpu: &mut Cpu) -> bool {
    on_flag(cpu, CARRY, true)
}

pub(super) fn bne(cpu: &mut Cpu) -> bool {
    on_flag(cpu, ZERO, false)
}

pub(super) fn beq(cpu: &mut Cpu) -> bool {
    on_flag(cpu, ZERO, true)
}
