//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences, origins and bounds to the
//! disassembler to find edge cases and crashes in decoding and formatting.

#![no_main]

use arbitrary::Arbitrary;
use dis6502::{
    annotate, decode, format_listing, Annotations, Column, DecodeBound, OutputOptions, SliceSource,
};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    origin: u16,
    instructions: Option<u8>,
    columns: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.is_empty() || input.bytes.len() > 65536 {
        return;
    }

    let bound = match input.instructions {
        Some(count) if count > 0 => DecodeBound::Instructions(count as usize),
        _ => DecodeBound::Bytes(input.bytes.len()),
    };

    let decoded = match decode(SliceSource::new(&input.bytes), input.origin, bound) {
        Ok(decoded) => decoded,
        Err(_) => {
            // Only an instruction bound may outrun the source
            assert!(matches!(bound, DecodeBound::Instructions(_)));
            return;
        }
    };

    // Verify invariants
    let mut total_size: usize = 0;
    let mut expected_address = input.origin as u32;

    for instr in &decoded {
        assert_eq!(instr.address(), expected_address);
        assert!(!instr.bytes().is_empty() && instr.bytes().len() <= 3);

        total_size += instr.bytes().len();
        expected_address += instr.bytes().len() as u32;
    }

    if let DecodeBound::Bytes(window) = bound {
        assert_eq!(total_size, window);
    }

    let columns = input
        .columns
        .iter()
        .map(|&c| Column::ALL[c as usize % Column::ALL.len()]);
    let options = OutputOptions::with_columns(columns);
    let annotated = annotate(decoded, &Annotations::none());
    let text = format_listing(&annotated, &options);

    assert_eq!(text.split('\n').count(), annotated.len());
});
