//! Basic disassembler usage example

use std::collections::HashMap;

use dis6502::{disassemble_bytes, Annotations, DecodeBound, DisassemblyError, OutputOptions};

fn main() -> Result<(), DisassemblyError> {
    env_logger::init();

    // Example machine code bytes
    let code = &[
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0x4C, 0x00, 0x80, // JMP $8000
    ];

    let labels = HashMap::from([(0x8000, "START".to_string())]);
    let comments = HashMap::from([(0x8005, "Forever.".to_string())]);

    let listing = disassemble_bytes(
        code,
        0x8000,
        DecodeBound::Bytes(code.len()),
        &OutputOptions::default(),
        &Annotations::new(&labels, &comments),
    )?;

    println!("Disassembled code:");
    println!("{}", listing);
    Ok(())
}
