//! # Instruction Table
//!
//! The documented NMOS 6502 instruction set: 151 opcodes across 56 mnemonics.
//!
//! Each entry carries the mnemonic, addressing mode, total size, base cycle
//! cost and the rule for extra cycles. Timing is metadata only; nothing in this
//! crate executes instructions.
//!
//! The 256-slot [`OPCODE_TABLE`] is derived from [`INSTRUCTIONS`] at compile
//! time. Building it rejects duplicate opcodes and entries whose size disagrees
//! with their addressing mode, so a bad table fails the build rather than a
//! lookup.

use crate::addressing::AddressingMode;

/// When an instruction costs more than its base cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraCycles {
    /// Always exactly `base_cycles`.
    Never,

    /// +1 cycle if indexing crosses a page boundary.
    PageCrossed,

    /// +1 cycle if the branch is taken, +1 more if it lands on another page.
    BranchTaken,
}

/// A single instruction table entry.
///
/// # Examples
///
/// ```
/// use dis6502::{lookup, AddressingMode, ExtraCycles};
///
/// let lda = lookup(0xA9).unwrap();
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda.size, 2);
/// assert_eq!(lda.base_cycles, 2);
/// assert_eq!(lda.extra_cycles, ExtraCycles::Never);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Three-letter mnemonic (e.g. "LDA").
    pub mnemonic: &'static str,

    /// Opcode byte value.
    pub opcode: u8,

    /// Total size in bytes including the opcode (1-3).
    pub size: u8,

    /// Base cycle cost before any extra cycles.
    pub base_cycles: u8,

    /// Addressing mode, which fixes the operand length and rendering.
    pub addressing_mode: AddressingMode,

    /// Rule for cycles added on top of `base_cycles`.
    pub extra_cycles: ExtraCycles,
}

impl Instruction {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(&self) -> u8 {
        self.size - 1
    }
}

const fn op(
    opcode: u8,
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    size: u8,
    extra_cycles: ExtraCycles,
) -> Instruction {
    Instruction {
        mnemonic,
        opcode,
        size,
        base_cycles,
        addressing_mode,
        extra_cycles,
    }
}

/// Every documented NMOS 6502 instruction, in opcode order.
pub const INSTRUCTIONS: [Instruction; 151] = {
    use AddressingMode::*;
    use ExtraCycles::*;

    [
        op(0x00, "BRK", Implied, 7, 1, Never),
        op(0x01, "ORA", IndirectX, 6, 2, Never),
        op(0x05, "ORA", ZeroPage, 3, 2, Never),
        op(0x06, "ASL", ZeroPage, 5, 2, Never),
        op(0x08, "PHP", Implied, 3, 1, Never),
        op(0x09, "ORA", Immediate, 2, 2, Never),
        op(0x0A, "ASL", Accumulator, 2, 1, Never),
        op(0x0D, "ORA", Absolute, 4, 3, Never),
        op(0x0E, "ASL", Absolute, 6, 3, Never),
        op(0x10, "BPL", Relative, 2, 2, BranchTaken),
        op(0x11, "ORA", IndirectY, 5, 2, PageCrossed),
        op(0x15, "ORA", ZeroPageX, 4, 2, Never),
        op(0x16, "ASL", ZeroPageX, 6, 2, Never),
        op(0x18, "CLC", Implied, 2, 1, Never),
        op(0x19, "ORA", AbsoluteY, 4, 3, PageCrossed),
        op(0x1D, "ORA", AbsoluteX, 4, 3, PageCrossed),
        op(0x1E, "ASL", AbsoluteX, 7, 3, Never),
        op(0x20, "JSR", Absolute, 6, 3, Never),
        op(0x21, "AND", IndirectX, 6, 2, Never),
        op(0x24, "BIT", ZeroPage, 3, 2, Never),
        op(0x25, "AND", ZeroPage, 3, 2, Never),
        op(0x26, "ROL", ZeroPage, 5, 2, Never),
        op(0x28, "PLP", Implied, 4, 1, Never),
        op(0x29, "AND", Immediate, 2, 2, Never),
        op(0x2A, "ROL", Accumulator, 2, 1, Never),
        op(0x2C, "BIT", Absolute, 4, 3, Never),
        op(0x2D, "AND", Absolute, 4, 3, Never),
        op(0x2E, "ROL", Absolute, 6, 3, Never),
        op(0x30, "BMI", Relative, 2, 2, BranchTaken),
        op(0x31, "AND", IndirectY, 5, 2, PageCrossed),
        op(0x35, "AND", ZeroPageX, 4, 2, Never),
        op(0x36, "ROL", ZeroPageX, 6, 2, Never),
        op(0x38, "SEC", Implied, 2, 1, Never),
        op(0x39, "AND", AbsoluteY, 4, 3, PageCrossed),
        op(0x3D, "AND", AbsoluteX, 4, 3, PageCrossed),
        op(0x3E, "ROL", AbsoluteX, 7, 3, Never),
        op(0x40, "RTI", Implied, 6, 1, Never),
        op(0x41, "EOR", IndirectX, 6, 2, Never),
        op(0x45, "EOR", ZeroPage, 3, 2, Never),
        op(0x46, "LSR", ZeroPage, 5, 2, Never),
        op(0x48, "PHA", Implied, 3, 1, Never),
        op(0x49, "EOR", Immediate, 2, 2, Never),
        op(0x4A, "LSR", Accumulator, 2, 1, Never),
        op(0x4C, "JMP", Absolute, 3, 3, Never),
        op(0x4D, "EOR", Absolute, 4, 3, Never),
        op(0x4E, "LSR", Absolute, 6, 3, Never),
        op(0x50, "BVC", Relative, 2, 2, BranchTaken),
        op(0x51, "EOR", IndirectY, 5, 2, PageCrossed),
        op(0x55, "EOR", ZeroPageX, 4, 2, Never),
        op(0x56, "LSR", ZeroPageX, 6, 2, Never),
        op(0x58, "CLI", Implied, 2, 1, Never),
        op(0x59, "EOR", AbsoluteY, 4, 3, PageCrossed),
        op(0x5D, "EOR", AbsoluteX, 4, 3, PageCrossed),
        op(0x5E, "LSR", AbsoluteX, 7, 3, Never),
        op(0x60, "RTS", Implied, 6, 1, Never),
        op(0x61, "ADC", IndirectX, 6, 2, Never),
        op(0x65, "ADC", ZeroPage, 3, 2, Never),
        op(0x66, "ROR", ZeroPage, 5, 2, Never),
        op(0x68, "PLA", Implied, 4, 1, Never),
        op(0x69, "ADC", Immediate, 2, 2, Never),
        op(0x6A, "ROR", Accumulator, 2, 1, Never),
        op(0x6C, "JMP", Indirect, 5, 3, Never),
        op(0x6D, "ADC", Absolute, 4, 3, Never),
        op(0x6E, "ROR", Absolute, 6, 3, Never),
        op(0x70, "BVS", Relative, 2, 2, BranchTaken),
        op(0x71, "ADC", IndirectY, 5, 2, PageCrossed),
        op(0x75, "ADC", ZeroPageX, 4, 2, Never),
        op(0x76, "ROR", ZeroPageX, 6, 2, Never),
        op(0x78, "SEI", Implied, 2, 1, Never),
        op(0x79, "ADC", AbsoluteY, 4, 3, PageCrossed),
        op(0x7D, "ADC", AbsoluteX, 4, 3, PageCrossed),
        op(0x7E, "ROR", AbsoluteX, 7, 3, Never),
        op(0x81, "STA", IndirectX, 6, 2, Never),
        op(0x84, "STY", ZeroPage, 3, 2, Never),
        op(0x85, "STA", ZeroPage, 3, 2, Never),
        op(0x86, "STX", ZeroPage, 3, 2, Never),
        op(0x88, "DEY", Implied, 2, 1, Never),
        op(0x8A, "TXA", Implied, 2, 1, Never),
        op(0x8C, "STY", Absolute, 4, 3, Never),
        op(0x8D, "STA", Absolute, 4, 3, Never),
        op(0x8E, "STX", Absolute, 4, 3, Never),
        op(0x90, "BCC", Relative, 2, 2, BranchTaken),
        op(0x91, "STA", IndirectY, 6, 2, Never),
        op(0x94, "STY", ZeroPageX, 4, 2, Never),
        op(0x95, "STA", ZeroPageX, 4, 2, Never),
        op(0x96, "STX", ZeroPageY, 4, 2, Never),
        op(0x98, "TYA", Implied, 2, 1, Never),
        op(0x99, "STA", AbsoluteY, 5, 3, Never),
        op(0x9A, "TXS", Implied, 2, 1, Never),
        op(0x9D, "STA", AbsoluteX, 5, 3, Never),
        op(0xA0, "LDY", Immediate, 2, 2, Never),
        op(0xA1, "LDA", IndirectX, 6, 2, Never),
        op(0xA2, "LDX", Immediate, 2, 2, Never),
        op(0xA4, "LDY", ZeroPage, 3, 2, Never),
        op(0xA5, "LDA", ZeroPage, 3, 2, Never),
        op(0xA6, "LDX", ZeroPage, 3, 2, Never),
        op(0xA8, "TAY", Implied, 2, 1, Never),
        op(0xA9, "LDA", Immediate, 2, 2, Never),
        op(0xAA, "TAX", Implied, 2, 1, Never),
        op(0xAC, "LDY", Absolute, 4, 3, Never),
        op(0xAD, "LDA", Absolute, 4, 3, Never),
        op(0xAE, "LDX", Absolute, 4, 3, Never),
        op(0xB0, "BCS", Relative, 2, 2, BranchTaken),
        op(0xB1, "LDA", IndirectY, 5, 2, PageCrossed),
        op(0xB4, "LDY", ZeroPageX, 4, 2, Never),
        op(0xB5, "LDA", ZeroPageX, 4, 2, Never),
        op(0xB6, "LDX", ZeroPageY, 4, 2, Never),
        op(0xB8, "CLV", Implied, 2, 1, Never),
        op(0xB9, "LDA", AbsoluteY, 4, 3, PageCrossed),
        op(0xBA, "TSX", Implied, 2, 1, Never),
        op(0xBC, "LDY", AbsoluteX, 4, 3, PageCrossed),
        op(0xBD, "LDA", AbsoluteX, 4, 3, PageCrossed),
        op(0xBE, "LDX", AbsoluteY, 4, 3, PageCrossed),
        op(0xC0, "CPY", Immediate, 2, 2, Never),
        op(0xC1, "CMP", IndirectX, 6, 2, Never),
        op(0xC4, "CPY", ZeroPage, 3, 2, Never),
        op(0xC5, "CMP", ZeroPage, 3, 2, Never),
        op(0xC6, "DEC", ZeroPage, 5, 2, Never),
        op(0xC8, "INY", Implied, 2, 1, Never),
        op(0xC9, "CMP", Immediate, 2, 2, Never),
        op(0xCA, "DEX", Implied, 2, 1, Never),
        op(0xCC, "CPY", Absolute, 4, 3, Never),
        op(0xCD, "CMP", Absolute, 4, 3, Never),
        op(0xCE, "DEC", Absolute, 6, 3, Never),
        op(0xD0, "BNE", Relative, 2, 2, BranchTaken),
        op(0xD1, "CMP", IndirectY, 5, 2, PageCrossed),
        op(0xD5, "CMP", ZeroPageX, 4, 2, Never),
        op(0xD6, "DEC", ZeroPageX, 6, 2, Never),
        op(0xD8, "CLD", Implied, 2, 1, Never),
        op(0xD9, "CMP", AbsoluteY, 4, 3, PageCrossed),
        op(0xDD, "CMP", AbsoluteX, 4, 3, PageCrossed),
        op(0xDE, "DEC", AbsoluteX, 7, 3, Never),
        op(0xE0, "CPX", Immediate, 2, 2, Never),
        op(0xE1, "SBC", IndirectX, 6, 2, Never),
        op(0xE4, "CPX", ZeroPage, 3, 2, Never),
        op(0xE5, "SBC", ZeroPage, 3, 2, Never),
        op(0xE6, "INC", ZeroPage, 5, 2, Never),
        op(0xE8, "INX", Implied, 2, 1, Never),
        op(0xE9, "SBC", Immediate, 2, 2, Never),
        op(0xEA, "NOP", Implied, 2, 1, Never),
        op(0xEC, "CPX", Absolute, 4, 3, Never),
        op(0xED, "SBC", Absolute, 4, 3, Never),
        op(0xEE, "INC", Absolute, 6, 3, Never),
        op(0xF0, "BEQ", Relative, 2, 2, BranchTaken),
        op(0xF1, "SBC", IndirectY, 5, 2, PageCrossed),
        op(0xF5, "SBC", ZeroPageX, 4, 2, Never),
        op(0xF6, "INC", ZeroPageX, 6, 2, Never),
        op(0xF8, "SED", Implied, 2, 1, Never),
        op(0xF9, "SBC", AbsoluteY, 4, 3, PageCrossed),
        op(0xFD, "SBC", AbsoluteX, 4, 3, PageCrossed),
        op(0xFE, "INC", AbsoluteX, 7, 3, Never),
    ]
};

const fn build_table(entries: &[Instruction]) -> [Option<Instruction>; 256] {
    let mut table: [Option<Instruction>; 256] = [None; 256];
    let mut i = 0;

    while i < entries.len() {
        let entry = entries[i];

        if table[entry.opcode as usize].is_some() {
            panic!("duplicate opcode in instruction table");
        }
        if entry.size != entry.addressing_mode.operand_len() + 1 {
            panic!("instruction size does not match its addressing mode");
        }

        table[entry.opcode as usize] = Some(entry);
        i += 1;
    }

    table
}

/// Opcode-indexed lookup table. `None` slots are undefined opcodes.
pub static OPCODE_TABLE: [Option<Instruction>; 256] = build_table(&INSTRUCTIONS);

/// Look up the instruction for an opcode byte.
///
/// Returns `None` for the 105 undefined (illegal) opcodes. That is not an
/// error; the decoder renders such bytes as `???`.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static Instruction> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_count() {
        let defined = OPCODE_TABLE.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(defined, 151);
    }

    #[test]
    fn test_slots_match_opcode() {
        for (index, slot) in OPCODE_TABLE.iter().enumerate() {
            if let Some(instr) = slot {
                assert_eq!(instr.opcode as usize, index);
            }
        }
    }

    #[test]
    fn test_lookup_undefined() {
        assert!(lookup(0x02).is_none());
        assert!(lookup(0xFF).is_none());
    }

    #[test]
    fn test_lookup_jmp_indirect() {
        let jmp = lookup(0x6C).unwrap();
        assert_eq!(jmp.mnemonic, "JMP");
        assert_eq!(jmp.addressing_mode, AddressingMode::Indirect);
        assert_eq!(jmp.size, 3);
        assert_eq!(jmp.base_cycles, 5);
    }

    #[test]
    fn test_extra_cycle_rules() {
        assert_eq!(lookup(0xD0).unwrap().extra_cycles, ExtraCycles::BranchTaken);
        assert_eq!(lookup(0xBD).unwrap().extra_cycles, ExtraCycles::PageCrossed);
        assert_eq!(lookup(0xB1).unwrap().extra_cycles, ExtraCycles::PageCrossed);
        // Stores and read-modify-write always pay the indexed penalty up front
        assert_eq!(lookup(0x9D).unwrap().extra_cycles, ExtraCycles::Never);
        assert_eq!(lookup(0xFE).unwrap().extra_cycles, ExtraCycles::Never);
    }
}
