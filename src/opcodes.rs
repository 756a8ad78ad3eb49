//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for instruction decoding.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Decoded as [`Operation::Illegal`]
//!
//! Each entry pairs an [`Operation`] tag with an [`AddressingMode`], the base cycle
//! cost, and whether an index page-cross adds a cycle. The dispatcher matches
//! exhaustively on the operation tag.

use std::fmt;

use crate::addressing::AddressingMode;

/// Operation performed by an opcode, independent of its addressing mode.
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
    /// Undocumented opcode, executed as a one-byte no-op.
    Illegal,
}

impl Operation {
    /// Three-letter assembler mnemonic ("???" for illegal opcodes).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use sim6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation tag dispatched by the CPU.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Whether an index page-cross adds one cycle (reads on AbsoluteX,
    /// AbsoluteY and IndirectY).
    pub page_penalty: bool,
}

impl OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "???" for illegal opcodes).
    pub const fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// Illegal opcodes always report 1: only their opcode byte is consumed.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }

    /// Returns true for undocumented opcodes.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.operation, Operation::Illegal)
    }
}

const fn op(
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        operation,
        addressing_mode,
        base_cycles,
        page_penalty: false,
    }
}

const fn paged(
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        operation,
        addressing_mode,
        base_cycles,
        page_penalty: true,
    }
}

/// Undocumented opcodes consume only their opcode byte and the minimum instruction
/// time of 2 cycles.
const ILLEGAL: OpcodeMetadata = op(Operation::Illegal, AddressingMode::Implicit, 2);

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use sim6502::{Operation, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic(), "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.operation, Operation::Illegal);
/// assert_eq!(illegal.size_bytes(), 1);
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ op(Operation::Brk, AddressingMode::Implicit, 7),
    /* 0x01 */ op(Operation::Ora, AddressingMode::IndirectX, 6),
    /* 0x02 */ ILLEGAL,
    /* 0x03 */ ILLEGAL,
    /* 0x04 */ ILLEGAL,
    /* 0x05 */ op(Operation::Ora, AddressingMode::ZeroPage, 3),
    /* 0x06 */ op(Operation::Asl, AddressingMode::ZeroPage, 5),
    /* 0x07 */ ILLEGAL,
    /* 0x08 */ op(Operation::Php, AddressingMode::Implicit, 3),
    /* 0x09 */ op(Operation::Ora, AddressingMode::Immediate, 2),
    /* 0x0A */ op(Operation::Asl, AddressingMode::Accumulator, 2),
    /* 0x0B */ ILLEGAL,
    /* 0x0C */ ILLEGAL,
    /* 0x0D */ op(Operation::Ora, AddressingMode::Absolute, 4),
    /* 0x0E */ op(Operation::Asl, AddressingMode::Absolute, 6),
    /* 0x0F */ ILLEGAL,
    /* 0x10 */ op(Operation::Bpl, AddressingMode::Relative, 2),
    /* 0x11 */ paged(Operation::Ora, AddressingMode::IndirectY, 5),
    /* 0x12 */ ILLEGAL,
    /* 0x13 */ ILLEGAL,
    /* 0x14 */ ILLEGAL,
    /* 0x15 */ op(Operation::Ora, AddressingMode::ZeroPageX, 4),
    /* 0x16 */ op(Operation::Asl, AddressingMode::ZeroPageX, 6),
    /* 0x17 */ ILLEGAL,
    /* 0x18 */ op(Operation::Clc, AddressingMode::Implicit, 2),
    /* 0x19 */ paged(Operation::Ora, AddressingMode::AbsoluteY, 4),
    /* 0x1A */ ILLEGAL,
    /* 0x1B */ ILLEGAL,
    /* 0x1C */ ILLEGAL,
    /* 0x1D */ paged(Operation::Ora, AddressingMode::AbsoluteX, 4),
    /* 0x1E */ op(Operation::Asl, AddressingMode::AbsoluteX, 7),
    /* 0x1F */ ILLEGAL,
    /* 0x20 */ op(Operation::Jsr, AddressingMode::Absolute, 6),
    /* 0x21 */ op(Operation::And, AddressingMode::IndirectX, 6),
    /* 0x22 */ ILLEGAL,
    /* 0x23 */ ILLEGAL,
    /* 0x24 */ op(Operation::Bit, AddressingMode::ZeroPage, 3),
    /* 0x25 */ op(Operation::And, AddressingMode::ZeroPage, 3),
    /* 0x26 */ op(Operation::Rol, AddressingMode::ZeroPage, 5),
    /* 0x27 */ ILLEGAL,
    /* 0x28 */ op(Operation::Plp, AddressingMode::Implicit, 4),
    /* 0x29 */ op(Operation::And, AddressingMode::Immediate, 2),
    /* 0x2A */ op(Operation::Rol, AddressingMode::Accumulator, 2),
    /* 0x2B */ ILLEGAL,
    /* 0x2C */ op(Operation::Bit, AddressingMode::Absolute, 4),
    /* 0x2D */ op(Operation::And, AddressingMode::Absolute, 4),
    /* 0x2E */ op(Operation::Rol, AddressingMode::Absolute, 6),
    /* 0x2F */ ILLEGAL,
    /* 0x30 */ op(Operation::Bmi, AddressingMode::Relative, 2),
    /* 0x31 */ paged(Operation::And, AddressingMode::IndirectY, 5),
    /* 0x32 */ ILLEGAL,
    /* 0x33 */ ILLEGAL,
    /* 0x34 */ ILLEGAL,
    /* 0x35 */ op(Operation::And, AddressingMode::ZeroPageX, 4),
    /* 0x36 */ op(Operation::Rol, AddressingMode::ZeroPageX, 6),
    /* 0x37 */ ILLEGAL,
    /* 0x38 */ op(Operation::Sec, AddressingMode::Implicit, 2),
    /* 0x39 */ paged(Operation::And, AddressingMode::AbsoluteY, 4),
    /* 0x3A */ ILLEGAL,
    /* 0x3B */ ILLEGAL,
    /* 0x3C */ ILLEGAL,
    /* 0x3D */ paged(Operation::And, AddressingMode::AbsoluteX, 4),
    /* 0x3E */ op(Operation::Rol, AddressingMode::AbsoluteX, 7),
    /* 0x3F */ ILLEGAL,
    /* 0x40 */ op(Operation::Rti, AddressingMode::Implicit, 6),
    /* 0x41 */ op(Operation::Eor, AddressingMode::IndirectX, 6),
    /* 0x42 */ ILLEGAL,
    /* 0x43 */ ILLEGAL,
    /* 0x44 */ ILLEGAL,
    /* 0x45 */ op(Operation::Eor, AddressingMode::ZeroPage, 3),
    /* 0x46 */ op(Operation::Lsr, AddressingMode::ZeroPage, 5),
    /* 0x47 */ ILLEGAL,
    /* 0x48 */ op(Operation::Pha, AddressingMode::Implicit, 3),
    /* 0x49 */ op(Operation::Eor, AddressingMode::Immediate, 2),
    /* 0x4A */ op(Operation::Lsr, AddressingMode::Accumulator, 2),
    /* 0x4B */ ILLEGAL,
    /* 0x4C */ op(Operation::Jmp, AddressingMode::Absolute, 3),
    /* 0x4D */ op(Operation::Eor, AddressingMode::Absolute, 4),
    /* 0x4E */ op(Operation::Lsr, AddressingMode::Absolute, 6),
    /* 0x4F */ ILLEGAL,
    /* 0x50 */ op(Operation::Bvc, AddressingMode::Relative, 2),
    /* 0x51 */ paged(Operation::Eor, AddressingMode::IndirectY, 5),
    /* 0x52 */ ILLEGAL,
    /* 0x53 */ ILLEGAL,
    /* 0x54 */ ILLEGAL,
    /* 0x55 */ op(Operation::Eor, AddressingMode::ZeroPageX, 4),
    /* 0x56 */ op(Operation::Lsr, AddressingMode::ZeroPageX, 6),
    /* 0x57 */ ILLEGAL,
    /* 0x58 */ op(Operation::Cli, AddressingMode::Implicit, 2),
    /* 0x59 */ paged(Operation::Eor, AddressingMode::AbsoluteY, 4),
    /* 0x5A */ ILLEGAL,
    /* 0x5B */ ILLEGAL,
    /* 0x5C */ ILLEGAL,
    /* 0x5D */ paged(Operation::Eor, AddressingMode::AbsoluteX, 4),
    /* 0x5E */ op(Operation::Lsr, AddressingMode::AbsoluteX, 7),
    /* 0x5F */ ILLEGAL,
    /* 0x60 */ op(Operation::Rts, AddressingMode::Implicit, 6),
    /* 0x61 */ op(Operation::Adc, AddressingMode::IndirectX, 6),
    /* 0x62 */ ILLEGAL,
    /* 0x63 */ ILLEGAL,
    /* 0x64 */ ILLEGAL,
    /* 0x65 */ op(Operation::Adc, AddressingMode::ZeroPage, 3),
    /* 0x66 */ op(Operation::Ror, AddressingMode::ZeroPage, 5),
    /* 0x67 */ ILLEGAL,
    /* 0x68 */ op(Operation::Pla, AddressingMode::Implicit, 4),
    /* 0x69 */ op(Operation::Adc, AddressingMode::Immediate, 2),
    /* 0x6A */ op(Operation::Ror, AddressingMode::Accumulator, 2),
    /* 0x6B */ ILLEGAL,
    /* 0x6C */ op(Operation::Jmp, AddressingMode::Indirect, 5),
    /* 0x6D */ op(Operation::Adc, AddressingMode::Absolute, 4),
    /* 0x6E */ op(Operation::Ror, AddressingMode::Absolute, 6),
    /* 0x6F */ ILLEGAL,
    /* 0x70 */ op(Operation::Bvs, AddressingMode::Relative, 2),
    /* 0x71 */ paged(Operation::Adc, AddressingMode::IndirectY, 5),
    /* 0x72 */ ILLEGAL,
    /* 0x73 */ ILLEGAL,
    /* 0x74 */ ILLEGAL,
    /* 0x75 */ op(Operation::Adc, AddressingMode::ZeroPageX, 4),
    /* 0x76 */ op(Operation::Ror, AddressingMode::ZeroPageX, 6),
    /* 0x77 */ ILLEGAL,
    /* 0x78 */ op(Operation::Sei, AddressingMode::Implicit, 2),
    /* 0x79 */ paged(Operation::Adc, AddressingMode::AbsoluteY, 4),
    /* 0x7A */ ILLEGAL,
    /* 0x7B */ ILLEGAL,
    /* 0x7C */ ILLEGAL,
    /* 0x7D */ paged(Operation::Adc, AddressingMode::AbsoluteX, 4),
    /* 0x7E */ op(Operation::Ror, AddressingMode::AbsoluteX, 7),
    /* 0x7F */ ILLEGAL,
    /* 0x80 */ ILLEGAL,
    /* 0x81 */ op(Operation::Sta, AddressingMode::IndirectX, 6),
    /* 0x82 */ ILLEGAL,
    /* 0x83 */ ILLEGAL,
    /* 0x84 */ op(Operation::Sty, AddressingMode::ZeroPage, 3),
    /* 0x85 */ op(Operation::Sta, AddressingMode::ZeroPage, 3),
    /* 0x86 */ op(Operation::Stx, AddressingMode::ZeroPage, 3),
    /* 0x87 */ ILLEGAL,
    /* 0x88 */ op(Operation::Dey, AddressingMode::Implicit, 2),
    /* 0x89 */ ILLEGAL,
    /* 0x8A */ op(Operation::Txa, AddressingMode::Implicit, 2),
    /* 0x8B */ ILLEGAL,
    /* 0x8C */ op(Operation::Sty, AddressingMode::Absolute, 4),
    /* 0x8D */ op(Operation::Sta, AddressingMode::Absolute, 4),
    /* 0x8E */ op(Operation::Stx, AddressingMode::Absolute, 4),
    /* 0x8F */ ILLEGAL,
    /* 0x90 */ op(Operation::Bcc, AddressingMode::Relative, 2),
    /* 0x91 */ op(Operation::Sta, AddressingMode::IndirectY, 6),
    /* 0x92 */ ILLEGAL,
    /* 0x93 */ ILLEGAL,
    /* 0x94 */ op(Operation::Sty, AddressingMode::ZeroPageX, 4),
    /* 0x95 */ op(Operation::Sta, AddressingMode::ZeroPageX, 4),
    /* 0x96 */ op(Operation::Stx, AddressingMode::ZeroPageY, 4),
    /* 0x97 */ ILLEGAL,
    /* 0x98 */ op(Operation::Tya, AddressingMode::Implicit, 2),
    /* 0x99 */ op(Operation::Sta, AddressingMode::AbsoluteY, 5),
    /* 0x9A */ op(Operation::Txs, AddressingMode::Implicit, 2),
    /* 0x9B */ ILLEGAL,
    /* 0x9C */ ILLEGAL,
    /* 0x9D */ op(Operation::Sta, AddressingMode::AbsoluteX, 5),
    /* 0x9E */ ILLEGAL,
    /* 0x9F */ ILLEGAL,
    /* 0xA0 */ op(Operation::Ldy, AddressingMode::Immediate, 2),
    /* 0xA1 */ op(Operation::Lda, AddressingMode::IndirectX, 6),
    /* 0xA2 */ op(Operation::Ldx, AddressingMode::Immediate, 2),
    /* 0xA3 */ ILLEGAL,
    /* 0xA4 */ op(Operation::Ldy, AddressingMode::ZeroPage, 3),
    /* 0xA5 */ op(Operation::Lda, AddressingMode::ZeroPage, 3),
    /* 0xA6 */ op(Operation::Ldx, AddressingMode::ZeroPage, 3),
    /* 0xA7 */ ILLEGAL,
    /* 0xA8 */ op(Operation::Tay, AddressingMode::Implicit, 2),
    /* 0xA9 */ op(Operation::Lda, AddressingMode::Immediate, 2),
    /* 0xAA */ op(Operation::Tax, AddressingMode::Implicit, 2),
    /* 0xAB */ ILLEGAL,
    /* 0xAC */ op(Operation::Ldy, AddressingMode::Absolute, 4),
    /* 0xAD */ op(Operation::Lda, AddressingMode::Absolute, 4),
    /* 0xAE */ op(Operation::Ldx, AddressingMode::Absolute, 4),
    /* 0xAF */ ILLEGAL,
    /* 0xB0 */ op(Operation::Bcs, AddressingMode::Relative, 2),
    /* 0xB1 */ paged(Operation::Lda, AddressingMode::IndirectY, 5),
    /* 0xB2 */ ILLEGAL,
    /* 0xB3 */ ILLEGAL,
    /* 0xB4 */ op(Operation::Ldy, AddressingMode::ZeroPageX, 4),
    /* 0xB5 */ op(Operation::Lda, AddressingMode::ZeroPageX, 4),
    /* 0xB6 */ op(Operation::Ldx, AddressingMode::ZeroPageY, 4),
    /* 0xB7 */ ILLEGAL,
    /* 0xB8 */ op(Operation::Clv, AddressingMode::Implicit, 2),
    /* 0xB9 */ paged(Operation::Lda, AddressingMode::AbsoluteY, 4),
    /* 0xBA */ op(Operation::Tsx, AddressingMode::Implicit, 2),
    /* 0xBB */ ILLEGAL,
    /* 0xBC */ paged(Operation::Ldy, AddressingMode::AbsoluteX, 4),
    /* 0xBD */ paged(Operation::Lda, AddressingMode::AbsoluteX, 4),
    /* 0xBE */ paged(Operation::Ldx, AddressingMode::AbsoluteY, 4),
    /* 0xBF */ ILLEGAL,
    /* 0xC0 */ op(Operation::Cpy, AddressingMode::Immediate, 2),
    /* 0xC1 */ op(Operation::Cmp, AddressingMode::IndirectX, 6),
    /* 0xC2 */ ILLEGAL,
    /* 0xC3 */ ILLEGAL,
    /* 0xC4 */ op(Operation::Cpy, AddressingMode::ZeroPage, 3),
    /* 0xC5 */ op(Operation::Cmp, AddressingMode::ZeroPage, 3),
    /* 0xC6 */ op(Operation::Dec, AddressingMode::ZeroPage, 5),
    /* 0xC7 */ ILLEGAL,
    /* 0xC8 */ op(Operation::Iny, AddressingMode::Implicit, 2),
    /* 0xC9 */ op(Operation::Cmp, AddressingMode::Immediate, 2),
    /* 0xCA */ op(Operation::Dex, AddressingMode::Implicit, 2),
    /* 0xCB */ ILLEGAL,
    /* 0xCC */ op(Operation::Cpy, AddressingMode::Absolute, 4),
    /* 0xCD */ op(Operation::Cmp, AddressingMode::Absolute, 4),
    /* 0xCE */ op(Operation::Dec, AddressingMode::Absolute, 6),
    /* 0xCF */ ILLEGAL,
    /* 0xD0 */ op(Operation::Bne, AddressingMode::Relative, 2),
    /* 0xD1 */ paged(Operation::Cmp, AddressingMode::IndirectY, 5),
    /* 0xD2 */ ILLEGAL,
    /* 0xD3 */ ILLEGAL,
    /* 0xD4 */ ILLEGAL,
    /* 0xD5 */ op(Operation::Cmp, AddressingMode::ZeroPageX, 4),
    /* 0xD6 */ op(Operation::Dec, AddressingMode::ZeroPageX, 6),
    /* 0xD7 */ ILLEGAL,
    /* 0xD8 */ op(Operation::Cld, AddressingMode::Implicit, 2),
    /* 0xD9 */ paged(Operation::Cmp, AddressingMode::AbsoluteY, 4),
    /* 0xDA */ ILLEGAL,
    /* 0xDB */ ILLEGAL,
    /* 0xDC */ ILLEGAL,
    /* 0xDD */ paged(Operation::Cmp, AddressingMode::AbsoluteX, 4),
    /* 0xDE */ op(Operation::Dec, AddressingMode::AbsoluteX, 7),
    /* 0xDF */ ILLEGAL,
    /* 0xE0 */ op(Operation::Cpx, AddressingMode::Immediate, 2),
    /* 0xE1 */ op(Operation::Sbc, AddressingMode::IndirectX, 6),
    /* 0xE2 */ ILLEGAL,
    /* 0xE3 */ ILLEGAL,
    /* 0xE4 */ op(Operation::Cpx, AddressingMode::ZeroPage, 3),
    /* 0xE5 */ op(Operation::Sbc, AddressingMode::ZeroPage, 3),
    /* 0xE6 */ op(Operation::Inc, AddressingMode::ZeroPage, 5),
    /* 0xE7 */ ILLEGAL,
    /* 0xE8 */ op(Operation::Inx, AddressingMode::Implicit, 2),
    /* 0xE9 */ op(Operation::Sbc, AddressingMode::Immediate, 2),
    /* 0xEA */ op(Operation::Nop, AddressingMode::Implicit, 2),
    /* 0xEB */ ILLEGAL,
    /* 0xEC */ op(Operation::Cpx, AddressingMode::Absolute, 4),
    /* 0xED */ op(Operation::Sbc, AddressingMode::Absolute, 4),
    /* 0xEE */ op(Operation::Inc, AddressingMode::Absolute, 6),
    /* 0xEF */ ILLEGAL,
    /* 0xF0 */ op(Operation::Beq, AddressingMode::Relative, 2),
    /* 0xF1 */ paged(Operation::Sbc, AddressingMode::IndirectY, 5),
    /* 0xF2 */ ILLEGAL,
    /* 0xF3 */ ILLEGAL,
    /* 0xF4 */ ILLEGAL,
    /* 0xF5 */ op(Operation::Sbc, AddressingMode::ZeroPageX, 4),
    /* 0xF6 */ op(Operation::Inc, AddressingMode::ZeroPageX, 6),
    /* 0xF7 */ ILLEGAL,
    /* 0xF8 */ op(Operation::Sed, AddressingMode::Implicit, 2),
    /* 0xF9 */ paged(Operation::Sbc, AddressingMode::AbsoluteY, 4),
    /* 0xFA */ ILLEGAL,
    /* 0xFB */ ILLEGAL,
    /* 0xFC */ ILLEGAL,
    /* 0xFD */ paged(Operation::Sbc, AddressingMode::AbsoluteX, 4),
    /* 0xFE */ op(Operation::Inc, AddressingMode::AbsoluteX, 7),
    /* 0xFF */ ILLEGAL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| !m.is_illegal()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_reserved_columns_are_illegal() {
        for opcode in 0..=255u8 {
            let low = opcode & 0x0F;
            if opcode & 0x03 == 0x03 || (low == 0x02 && opcode != 0xA2) {
                assert!(
                    OPCODE_TABLE[opcode as usize].is_illegal(),
                    "Opcode 0x{:02X} should be illegal",
                    opcode
                );
            }
        }
    }

    #[test]
    fn test_page_penalty_only_on_indexed_modes() {
        for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
            if metadata.page_penalty {
                assert!(
                    matches!(
                        metadata.addressing_mode,
                        AddressingMode::AbsoluteX
                            | AddressingMode::AbsoluteY
                            | AddressingMode::IndirectY
                    ),
                    "Opcode 0x{:02X} has a page penalty on {:?}",
                    opcode,
                    metadata.addressing_mode
                );
            }
        }
    }

    #[test]
    fn test_display_uses_mnemonic() {
        assert_eq!(Operation::Jsr.to_string(), "JSR");
        assert_eq!(Operation::Illegal.to_string(), "???");
    }
}
