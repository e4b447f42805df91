/*!
dispatch - Operation handlers grouped by family, and the single `execute`
match that routes a decoded `Operation` to its handler.

Return Contract
===============
Every handler returns its page-cross eligibility bit:
- true  => the instruction pays +1 cycle when the addressing mode crossed a page
- false => the addressing-mode crossing is ignored

Branches add their own cycles through `OperandContext::extra_cycles` and
return false.

Families
========
arithmetic    ADC SBC INC DEC INX INY DEX DEY
logical       AND ORA EOR BIT
load_store    LDA LDX LDY STA STX STY TAX TAY TXA TYA TSX TXS
compare       CMP CPX CPY
branches      BPL BMI BVC BVS BCC BCS BNE BEQ
rmw           ASL LSR ROL ROR
control_flow  JMP JSR RTS RTI BRK
misc          CLC SEC CLI SEI CLD SED CLV PHA PLA PHP PLP NOP, illegal slots
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::table::Operation;

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod load_store;
mod logical;
mod misc;
mod rmw;

/// Run the handler for `op` against the already-resolved operand context.
pub(crate) fn execute(op: Operation, cpu: &mut Cpu, bus: &mut Bus) -> bool {
    use Operation::*;
    match op {
        Adc => arithmetic::adc(cpu, bus),
        Sbc => arithmetic::sbc(cpu, bus),
        Inc => arithmetic::inc(cpu, bus),
        Dec => arithmetic::dec(cpu, bus),
        Inx => arithmetic::inx(cpu),
        Iny => arithmetic::iny(cpu),
        Dex => arithmetic::dex(cpu),
        Dey => arithmetic::dey(cpu),

        And => logical::and(cpu, bus),
        Ora => logical::ora(cpu, bus),
        Eor => logical::eor(cpu, bus),
        Bit => logical::bit(cpu, bus),

        Lda => load_store::lda(cpu, bus),
        Ldx => load_store::ldx(cpu, bus),
        Ldy => load_store::ldy(cpu, bus),
        Sta => load_store::sta(cpu, bus),
        Stx => load_store::stx(cpu, bus),
        Sty => load_store::sty(cpu, bus),
        Tax => load_store::tax(cpu),
        Tay => load_store::tay(cpu),
        Txa => load_store::txa(cpu),
        Tya => load_store::tya(cpu),
        Tsx => load_store::tsx(cpu),
        Txs => load_store::txs(cpu),

        Cmp => compare::cmp(cpu, bus),
        Cpx => compare::cpx(cpu, bus),
        Cpy => compare::cpy(cpu, bus),

        Bpl => branches::bpl(cpu),
        Bmi => branches::bmi(cpu),
        Bvc => branches::bvc(cpu),
        Bvs => branches::bvs(cpu),
        Bcc => branches::bcc(cpu),
        Bcs => branches::bcs(cpu),
        Bne => branches::bne(cpu),
        Beq => branches::beq(cpu),

        Asl => rmw::asl(cpu, bus),
        Lsr => rmw::lsr(cpu, bus),
        Rol => rmw::rol(cpu, bus),
        Ror => rmw::ror(cpu, bus),

        Jmp => control_flow::jmp(cpu),
        Jsr => control_flow::jsr(cpu, bus),
        Rts => control_flow::rts(cpu, bus),
        Rti => control_flow::rti(cpu, bus),
        Brk => control_flow::brk(cpu, bus),

        Clc => misc::clc(cpu),
        Sec => misc::sec(cpu),
        Cli => misc::cli(cpu),
        Sei => misc::sei(cpu),
        Cld => misc::cld(cpu),
        Sed => misc::sed(cpu),
        Clv => misc::clv(cpu),
        Pha => misc::pha(cpu, bus),
        Pla => misc::pla(cpu, bus),
        Php => misc::php(cpu, bus),
        Plp => misc::plp(cpu, bus),
        Nop => misc::nop(),
        Illegal => misc::illegal(cpu),
    }
}
