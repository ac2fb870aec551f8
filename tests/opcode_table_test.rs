//! Opcode table validation tests
//!
//! Verifies that the instruction table is complete and consistent.

use std::collections::HashSet;

use dis6502::{lookup, AddressingMode, ExtraCycles, INSTRUCTIONS, OPCODE_TABLE};

#[test]
fn test_at_most_one_entry_per_opcode() {
    for opcode in 0..=255u8 {
        let matches = INSTRUCTIONS.iter().filter(|i| i.opcode == opcode).count();
        assert!(
            matches <= 1,
            "Opcode 0x{:02X} has {} table entries",
            opcode,
            matches
        );
    }
}

#[test]
fn test_table_slots_mirror_instruction_list() {
    for opcode in 0..=255u8 {
        let listed = INSTRUCTIONS.iter().find(|i| i.opcode == opcode);
        assert_eq!(
            OPCODE_TABLE[opcode as usize].as_ref(),
            listed,
            "Slot 0x{:02X} disagrees with the instruction list",
            opcode
        );
        assert_eq!(lookup(opcode), listed);
    }
}

#[test]
fn test_size_matches_addressing_mode() {
    for instr in INSTRUCTIONS.iter() {
        let expected_size = match instr.addressing_mode {
            AddressingMode::Implied | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        };

        assert_eq!(
            instr.size, expected_size,
            "Opcode 0x{:02X} ({}) size mismatch: mode {:?} expects {} bytes, got {}",
            instr.opcode, instr.mnemonic, instr.addressing_mode, expected_size, instr.size
        );
        assert_eq!(instr.operand_len(), instr.addressing_mode.operand_len());
    }
}

#[test]
fn test_documented_opcodes_have_nonzero_cycles() {
    for instr in INSTRUCTIONS.iter() {
        assert!(
            (2..=7).contains(&instr.base_cycles),
            "Opcode 0x{:02X} ({}) has {} cycles",
            instr.opcode,
            instr.mnemonic,
            instr.base_cycles
        );
    }
}

#[test]
fn test_undefined_opcode_count() {
    let undefined = (0..=255u8).filter(|&op| lookup(op).is_none()).count();
    assert_eq!(undefined, 105);
}

#[test]
fn test_known_opcodes() {
    let brk = lookup(0x00).unwrap();
    assert_eq!(brk.mnemonic, "BRK");
    assert_eq!(brk.base_cycles, 7);
    assert_eq!(brk.size, 1);

    let asl_a = lookup(0x0A).unwrap();
    assert_eq!(asl_a.mnemonic, "ASL");
    assert_eq!(asl_a.addressing_mode, AddressingMode::Accumulator);

    let stx_zpy = lookup(0x96).unwrap();
    assert_eq!(stx_zpy.mnemonic, "STX");
    assert_eq!(stx_zpy.addressing_mode, AddressingMode::ZeroPageY);

    let sta_zpx = lookup(0x95).unwrap();
    assert_eq!(sta_zpx.mnemonic, "STA");
    assert_eq!(sta_zpx.addressing_mode, AddressingMode::ZeroPageX);

    let jmp_ind = lookup(0x6C).unwrap();
    assert_eq!(jmp_ind.mnemonic, "JMP");
    assert_eq!(jmp_ind.base_cycles, 5);
    assert_eq!(jmp_ind.size, 3);
}

#[test]
fn test_branches_take_extra_cycles_when_taken() {
    for instr in INSTRUCTIONS.iter() {
        let is_branch = instr.addressing_mode == AddressingMode::Relative;
        assert_eq!(
            instr.extra_cycles == ExtraCycles::BranchTaken,
            is_branch,
            "Opcode 0x{:02X} ({})",
            instr.opcode,
            instr.mnemonic
        );
    }
}

#[test]
fn test_page_cross_only_on_indexed_modes() {
    for instr in INSTRUCTIONS.iter() {
        if instr.extra_cycles == ExtraCycles::PageCrossed {
            assert!(matches!(
                instr.addressing_mode,
                AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
            ));
        }
    }
}

#[test]
fn test_instruction_variety() {
    let mnemonics: HashSet<&str> = INSTRUCTIONS.iter().map(|i| i.mnemonic).collect();
    assert_eq!(mnemonics.len(), 56);

    let modes: HashSet<AddressingMode> = INSTRUCTIONS.iter().map(|i| i.addressing_mode).collect();
    assert_eq!(modes.len(), 13);
}
