//! # 6502 Disassembler
//!
//! A table-driven NMOS 6502 disassembler for reverse-engineering firmware
//! images. It decodes a byte stream into assembly text, annotates each line
//! with its address, raw bytes, an optional label and an optional comment, and
//! renders the run as column-aligned text.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use dis6502::{disassemble_bytes, Annotations, DecodeBound, OutputOptions};
//!
//! let code = [0xD8, 0x58, 0xA0, 0x7F];
//! let labels = HashMap::from([(0xFF00, "RESET".to_string())]);
//!
//! let listing = disassemble_bytes(
//!     &code,
//!     0xFF00,
//!     DecodeBound::Bytes(code.len()),
//!     &OutputOptions::default(),
//!     &Annotations::none().with_labels(&labels),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     listing,
//!     "FF00:    D8       RESET    CLD\n\
//!      FF01:    58                CLI\n\
//!      FF02:    A0 7F             LDY #$7F"
//! );
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: all opcode metadata lives in one compile-time
//!   checked table
//! - **One-way data flow**: byte source, decoder, annotator, formatter
//! - **All-or-nothing runs**: a run either produces a full listing or an error
//!
//! ## Modules
//!
//! - `addressing` - Addressing modes and operand rendering
//! - `opcodes` - Instruction table
//! - `source` - Sequential byte sources
//! - `memory` - MemoryBus trait for reading from device memory maps
//! - `disassembler` - Decode engine, annotator and formatter
//! - `config` - TOML listing configuration

pub mod addressing;
pub mod config;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod source;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{ConfigError, ListingConfig};
pub use disassembler::{
    annotate, decode, disassemble, disassemble_bytes, format_instruction, format_listing,
    Annotations, Column, DecodeBound, DecodedInstruction, OutputOptions,
};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, ExtraCycles, Instruction, INSTRUCTIONS, OPCODE_TABLE};
pub use source::{BusSource, ByteSource, OutOfBounds, SliceSource};

use thiserror::Error;

/// Errors that abort a disassembly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisassemblyError {
    /// The decode bound was zero, missing, or set twice.
    #[error("decode bound must be exactly one positive byte or instruction count")]
    InvalidBound,

    /// The byte source ran out while a decode step needed another byte.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}
