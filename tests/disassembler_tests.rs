//! Integration tests for the 6502 disassembler

use std::collections::HashMap;

use dis6502::{
    decode, disassemble, disassemble_bytes, Annotations, Column, DecodeBound, DisassemblyError,
    OutOfBounds, OutputOptions, SliceSource,
};

fn listing(bytes: &[u8], origin: u16, bound: DecodeBound, options: &OutputOptions) -> String {
    disassemble_bytes(bytes, origin, bound, options, &Annotations::none()).unwrap()
}

#[test]
fn test_single_instruction_disassembly() {
    let decoded = decode(SliceSource::new(&[0xA9, 0x05]), 0x0000, DecodeBound::Bytes(2)).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].address(), 0x0000);
    assert_eq!(decoded[0].bytes(), &[0xA9, 0x05]);
    assert_eq!(decoded[0].text(), "LDA #$05");
}

#[test]
fn test_multi_instruction_disassembly() {
    let bytes = &[
        0xA9, 0x42,       // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0x4C, 0x00, 0x80, // JMP $8000
    ];

    let text = listing(bytes, 0x8000, DecodeBound::Instructions(3), &OutputOptions::default());

    assert_eq!(
        text,
        "8000:    A9 42       LDA #$42\n\
         8002:    8D 00 80    STA $8000\n\
         8005:    4C 00 80    JMP $8000"
    );
}

#[test]
fn test_every_addressing_mode_renders() {
    let bytes = &[
        0xEA,             // NOP
        0x4A,             // LSR A
        0x69, 0x0A,       // ADC #$0A
        0xA5, 0x80,       // LDA $80
        0xB5, 0x80,       // LDA $80,X
        0xB6, 0x80,       // LDX $80,Y
        0xD0, 0xFE,       // BNE *-2
        0xAD, 0x00, 0xD0, // LDA $D000
        0xBD, 0x00, 0xD0, // LDA $D000,X
        0xB9, 0x00, 0x02, // LDA $0200,Y
        0x6C, 0xFC, 0xFF, // JMP ($FFFC)
        0xA1, 0x40,       // LDA ($40,X)
        0xB1, 0x40,       // LDA ($40),Y
        0x10, 0x05,       // BPL *+5
    ];

    let decoded = decode(SliceSource::new(bytes), 0x0000, DecodeBound::Bytes(bytes.len())).unwrap();
    let texts: Vec<&str> = decoded.iter().map(|i| i.text()).collect();

    assert_eq!(
        texts,
        vec![
            "NOP",
            "LSR A",
            "ADC #$0A",
            "LDA $80",
            "LDA $80,X",
            "LDX $80,Y",
            "BNE *-2",
            "LDA $D000",
            "LDA $D000,X",
            "LDA $0200,Y",
            "JMP ($FFFC)",
            "LDA ($40,X)",
            "LDA ($40),Y",
            "BPL *+5",
        ]
    );
}

#[test]
fn test_undefined_opcode_continues() {
    let bytes = &[
        0xA9, 0x42, // LDA #$42
        0xFF,       // undefined
        0xEA,       // NOP
    ];

    let decoded = decode(SliceSource::new(bytes), 0x0000, DecodeBound::Bytes(4)).unwrap();

    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[1].address(), 0x0002);
    assert_eq!(decoded[1].text(), "???");
    assert_eq!(decoded[1].bytes(), &[0xFF]);
    assert_eq!(decoded[2].text(), "NOP");
}

#[test]
fn test_single_undefined_instruction_bound() {
    let decoded = decode(SliceSource::new(&[0x02, 0xEA]), 0x0000, DecodeBound::Instructions(1)).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].text(), "???");
}

#[test]
fn test_vector_bytes_are_data() {
    // Every byte here is a valid opcode, none may be decoded as one
    let bytes = &[0x4C, 0x00, 0xA9, 0x20, 0x60, 0xEA];

    let text = listing(
        bytes,
        0xFFFA,
        DecodeBound::Bytes(6),
        &OutputOptions::with_columns([Column::Address, Column::Disassembly, Column::Comment]),
    );

    assert_eq!(
        text,
        "FFFA:    .byte $4C    ; NMI vector (LSB)\n\
         FFFB:    .byte $00    ; NMI vector (MSB)\n\
         FFFC:    .byte $A9    ; RESET vector (LSB)\n\
         FFFD:    .byte $20    ; RESET vector (MSB)\n\
         FFFE:    .byte $60    ; IRQ vector (LSB)\n\
         FFFF:    .byte $EA    ; IRQ vector (MSB)"
    );
}

#[test]
fn test_truncation_consumes_only_opcode() {
    let mut source = SliceSource::new(&[0xA9, 0x05, 0xEA]);
    let decoded = decode(&mut source, 0x0000, DecodeBound::Bytes(1)).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].text(), "???");
    assert_eq!(decoded[0].bytes(), &[0xA9]);
    assert_eq!(source.position(), 1);
    assert_eq!(source.remaining(), &[0x05, 0xEA]);
}

#[test]
fn test_exhaustion_is_all_or_nothing() {
    // NOP, then STA abs with only one operand byte left
    let result = disassemble(
        SliceSource::new(&[0xEA, 0x8D, 0x00]),
        0x0000,
        DecodeBound::Instructions(2),
        &OutputOptions::default(),
        &Annotations::none(),
    );

    assert_eq!(
        result,
        Err(DisassemblyError::OutOfBounds(OutOfBounds { offset: 3 }))
    );
}

#[test]
fn test_invalid_bound_reads_nothing() {
    let mut source = SliceSource::new(&[0xEA]);

    let result = disassemble(
        &mut source,
        0x0000,
        DecodeBound::Instructions(0),
        &OutputOptions::default(),
        &Annotations::none(),
    );

    assert_eq!(result, Err(DisassemblyError::InvalidBound));
    assert_eq!(source.position(), 0);
}

#[test]
fn test_label_column_requires_content() {
    let empty_labels = HashMap::from([(0x0000, String::new())]);
    let options = OutputOptions::with_columns([Column::Label, Column::Disassembly]);

    let text = disassemble_bytes(
        &[0xEA, 0xEA],
        0x0000,
        DecodeBound::Bytes(2),
        &options,
        &Annotations::none().with_labels(&empty_labels),
    )
    .unwrap();

    assert_eq!(text, "NOP\nNOP");
}

#[test]
fn test_labels_and_comments_aligned() {
    let labels = HashMap::from([(0x0200, "LOOP".to_string())]);
    let comments = HashMap::from([
        (0x0200, "Count down.".to_string()),
        (0x0201, "Again.".to_string()),
    ]);

    let text = disassemble_bytes(
        &[0xCA, 0xD0, 0xFD, 0x60],
        0x0200,
        DecodeBound::Bytes(4),
        &OutputOptions::default().separator("  "),
        &Annotations::new(&labels, &comments),
    )
    .unwrap();

    assert_eq!(
        text,
        "0200:  CA     LOOP  DEX      ; Count down.\n\
         0201:  D0 FD        BNE *-3  ; Again.\n\
         0203:  60           RTS"
    );
}

#[test]
fn test_bytes_column_alignment() {
    let options = OutputOptions::with_columns([Column::Bytes, Column::Disassembly]).separator(" | ");

    let text = listing(&[0xA9, 0x05, 0xEA], 0x0000, DecodeBound::Bytes(3), &options);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "A9 05 | LDA #$05");
    assert_eq!(lines[1], "EA    | NOP");
}

#[test]
fn test_annotations_are_not_mutated() {
    let labels = HashMap::from([(0x0000, "START".to_string())]);
    let before = labels.clone();

    let _ = disassemble_bytes(
        &[0xEA],
        0x0000,
        DecodeBound::Bytes(1),
        &OutputOptions::default(),
        &Annotations::none().with_labels(&labels),
    )
    .unwrap();

    assert_eq!(labels, before);
}
