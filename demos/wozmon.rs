//! Apple-1 Wozmon listing driven by a TOML config
//!
//! Run with `RUST_LOG=debug` to see decode progress.

use dis6502::{disassemble_bytes, Annotations, DecodeBound, ListingConfig, OutputOptions};

const CONFIG: &str = include_str!("../tests/fixtures/wozmon.toml");

const GETLINE: [u8; 59] = [
    0xD8, 0x58, 0xA0, 0x7F, 0x8C, 0x12, 0xD0, 0xA9, 0xA7, 0x8D, 0x11, 0xD0, 0x8D, 0x13, 0xD0,
    0xC9, 0xDF, 0xF0, 0x13, 0xC9, 0x9B, 0xF0, 0x03, 0xC8, 0x10, 0x0F, 0xA9, 0xDC, 0x20, 0xEF,
    0xFF, 0xA9, 0x8D, 0x20, 0xEF, 0xFF, 0xA0, 0x01, 0x88, 0x30, 0xF6, 0xAD, 0x11, 0xD0, 0x10,
    0xFB, 0xAD, 0x10, 0xD0, 0x99, 0x00, 0x02, 0x20, 0xEF, 0xFF, 0xC9, 0x8D, 0xD0, 0xD4,
];

const VECTORS: [u8; 6] = [0x00, 0x0F, 0x00, 0xFF, 0x00, 0x00];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ListingConfig::from_toml_str(CONFIG)?;

    println!(";-------------------------------------------------------------------------------");
    println!("; Wozmon");
    println!(";-------------------------------------------------------------------------------");
    println!("{}", config.disassemble(&GETLINE)?);
    println!("...");
    println!(
        "{}",
        disassemble_bytes(
            &VECTORS,
            0xFFFA,
            DecodeBound::Bytes(VECTORS.len()),
            &OutputOptions::default().separator("  "),
            &Annotations::none(),
        )?
    );

    Ok(())
}
