/*!
table.rs - Static 256-entry opcode table.

Design
------
Three parallel arrays indexed by opcode value:
- `OPS`    : the `Operation` executed by the dispatcher
- `MODES`  : the `AddrMode` resolved before the operation runs
- `CYCLES` : base cycle cost, before page-cross and branch adjustments

Every slot is populated. Opcodes outside the documented instruction set
decode to `Operation::Illegal`, paired with the addressing mode the silicon
uses for that slot so the right number of operand bytes is consumed.
Undocumented NOP variants (`$04`, `$1C`, `$80`, ...) decode to `Nop` with
their real addressing modes. `$EB` (an undocumented SBC alias on silicon)
is treated as an immediate-mode `Nop`.
*/

/// Operation kinds, one per documented mnemonic plus `Illegal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Illegal,
}

impl Operation {
    /// Three-letter assembler mnemonic; `???` for illegal slots.
    pub fn mnemonic(self) -> &'static str {
        use Operation::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Illegal => "???",
        }
    }
}

/// The twelve 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrMode {
    /// Implied / accumulator.
    Imp,
    /// Immediate `#$nn`.
    Imm,
    /// Zero page `$nn`.
    Zp0,
    /// Zero page,X (wraps in page 0).
    Zpx,
    /// Zero page,Y (wraps in page 0).
    Zpy,
    /// Relative branch displacement.
    Rel,
    /// Absolute `$nnnn`.
    Abs,
    /// Absolute,X.
    Abx,
    /// Absolute,Y.
    Aby,
    /// Indirect `($nnnn)`, JMP only.
    Ind,
    /// Indexed indirect `($nn,X)`.
    Izx,
    /// Indirect indexed `($nn),Y`.
    Izy,
}

impl AddrMode {
    /// Operand bytes following the opcode.
    pub fn operand_len(self) -> u16 {
        match self {
            AddrMode::Imp => 0,
            AddrMode::Imm
            | AddrMode::Zp0
            | AddrMode::Zpx
            | AddrMode::Zpy
            | AddrMode::Rel
            | AddrMode::Izx
            | AddrMode::Izy => 1,
            AddrMode::Abs | AddrMode::Abx | AddrMode::Aby | AddrMode::Ind => 2,
        }
    }
}

/// Decoded view of one opcode slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub operation: Operation,
    pub mode: AddrMode,
    pub cycles: u8,
}

impl Instruction {
    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }

    /// Total encoded length including the opcode byte.
    #[inline]
    pub fn len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

/// Decode an opcode. Total over 0..=255.
#[inline]
pub fn lookup(opcode: u8) -> Instruction {
    let i = opcode as usize;
    Instruction {
        opcode,
        operation: OPS[i],
        mode: MODES[i],
        cycles: CYCLES[i],
    }
}

use AddrMode::{Abs, Abx, Aby, Imm, Imp, Ind, Izx, Izy, Rel, Zp0, Zpx, Zpy};
use Operation::{Illegal as Xxx, *};

#[rustfmt::skip]
static OPS: [Operation; 256] = [
//  x0   x1   x2   x3   x4   x5   x6   x7   x8   x9   xA   xB   xC   xD   xE   xF
    Brk, Ora, Xxx, Xxx, Nop, Ora, Asl, Xxx, Php, Ora, Asl, Xxx, Nop, Ora, Asl, Xxx, // 0x
    Bpl, Ora, Xxx, Xxx, Nop, Ora, Asl, Xxx, Clc, Ora, Nop, Xxx, Nop, Ora, Asl, Xxx, // 1x
    Jsr, And, Xxx, Xxx, Bit, And, Rol, Xxx, Plp, And, Rol, Xxx, Bit, And, Rol, Xxx, // 2x
    Bmi, And, Xxx, Xxx, Nop, And, Rol, Xxx, Sec, And, Nop, Xxx, Nop, And, Rol, Xxx, // 3x
    Rti, Eor, Xxx, Xxx, Nop, Eor, Lsr, Xxx, Pha, Eor, Lsr, Xxx, Jmp, Eor, Lsr, Xxx, // 4x
    Bvc, Eor, Xxx, Xxx, Nop, Eor, Lsr, Xxx, Cli, Eor, Nop, Xxx, Nop, Eor, Lsr, Xxx, // 5x
    Rts, Adc, Xxx, Xxx, Nop, Adc, Ror, Xxx, Pla, Adc, Ror, Xxx, Jmp, Adc, Ror, Xxx, // 6x
    Bvs, Adc, Xxx, Xxx, Nop, Adc, Ror, Xxx, Sei, Adc, Nop, Xxx, Nop, Adc, Ror, Xxx, // 7x
    Nop, Sta, Nop, Xxx, Sty, Sta, Stx, Xxx, Dey, Nop, Txa, Xxx, Sty, Sta, Stx, Xxx, // 8x
    Bcc, Sta, Xxx, Xxx, Sty, Sta, Stx, Xxx, Tya, Sta, Txs, Xxx, Xxx, Sta, Xxx, Xxx, // 9x
    Ldy, Lda, Ldx, Xxx, Ldy, Lda, Ldx, Xxx, Tay, Lda, Tax, Xxx, Ldy, Lda, Ldx, Xxx, // Ax
    Bcs, Lda, Xxx, Xxx, Ldy, Lda, Ldx, Xxx, Clv, Lda, Tsx, Xxx, Ldy, Lda, Ldx, Xxx, // Bx
    Cpy, Cmp, Nop, Xxx, Cpy, Cmp, Dec, Xxx, Iny, Cmp, Dex, Xxx, Cpy, Cmp, Dec, Xxx, // Cx
    Bne, Cmp, Xxx, Xxx, Nop, Cmp, Dec, Xxx, Cld, Cmp, Nop, Xxx, Nop, Cmp, Dec, Xxx, // Dx
    Cpx, Sbc, Nop, Xxx, Cpx, Sbc, Inc, Xxx, Inx, Sbc, Nop, Nop, Cpx, Sbc, Inc, Xxx, // Ex
    Beq, Sbc, Xxx, Xxx, Nop, Sbc, Inc, Xxx, Sed, Sbc, Nop, Xxx, Nop, Sbc, Inc, Xxx, // Fx
];

#[rustfmt::skip]
static MODES: [AddrMode; 256] = [
//  x0   x1   x2   x3   x4   x5   x6   x7   x8   x9   xA   xB   xC   xD   xE   xF
    Imm, Izx, Imp, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // 0x
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpx, Zpx, Imp, Aby, Imp, Aby, Abx, Abx, Abx, Abx, // 1x
    Abs, Izx, Imp, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // 2x
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpx, Zpx, Imp, Aby, Imp, Aby, Abx, Abx, Abx, Abx, // 3x
    Imp, Izx, Imp, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // 4x
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpx, Zpx, Imp, Aby, Imp, Aby, Abx, Abx, Abx, Abx, // 5x
    Imp, Izx, Imp, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Ind, Abs, Abs, Abs, // 6x
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpx, Zpx, Imp, Aby, Imp, Aby, Abx, Abx, Abx, Abx, // 7x
    Imm, Izx, Imm, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // 8x
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpy, Zpy, Imp, Aby, Imp, Aby, Abx, Abx, Aby, Aby, // 9x
    Imm, Izx, Imm, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // Ax
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpy, Zpy, Imp, Aby, Imp, Aby, Abx, Abx, Aby, Aby, // Bx
    Imm, Izx, Imm, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // Cx
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpx, Zpx, Imp, Aby, Imp, Aby, Abx, Abx, Abx, Abx, // Dx
    Imm, Izx, Imm, Izx, Zp0, Zp0, Zp0, Zp0, Imp, Imm, Imp, Imm, Abs, Abs, Abs, Abs, // Ex
    Rel, Izy, Imp, Izy, Zpx, Zpx, Zpx, Zpx, Imp, Aby, Imp, Aby, Abx, Abx, Abx, Abx, // Fx
];

#[rustfmt::skip]
static CYCLES: [u8; 256] = [
//  x0 x1 x2 x3 x4 x5 x6 x7 x8 x9 xA xB xC xD xE xF
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, // 0x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 1x
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, // 2x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 3x
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, // 4x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 5x
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6, // 6x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 7x
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 8x
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 9x
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // Ax
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, // Bx
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // Cx
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // Dx
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // Ex
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // Fx
];
