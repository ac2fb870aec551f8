//! 6502 Disassembler Module
//!
//! Converts a byte stream into an annotated, column-aligned assembly listing.
//!
//! Data flows one way through three stages:
//!
//! 1. [`decoder`] walks the byte source from an origin address and produces
//!    [`DecodedInstruction`]s until the [`DecodeBound`] is met.
//! 2. [`annotator`] overlays caller-supplied labels and comments.
//! 3. [`formatter`] renders the whole run as aligned text.
//!
//! [`disassemble`] runs all three in sequence.

pub mod annotator;
pub mod decoder;
pub mod formatter;

use crate::opcodes::Instruction;
use crate::source::{ByteSource, SliceSource};
use crate::DisassemblyError;

pub use annotator::{annotate, Annotations};
pub use decoder::decode;
pub use formatter::{format_instruction, format_listing, Column, OutputOptions};

/// Text emitted for an undefined or truncated opcode.
pub const UNDEFINED: &str = "???";

/// When a decode run stops.
///
/// Counts must be positive; [`DecodeBound::validate`] rejects zero before any
/// byte is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeBound {
    /// Stop once at least this many bytes have been consumed. Also acts as a
    /// window: an instruction that would extend past it is not decoded.
    Bytes(usize),

    /// Stop after exactly this many decoded instructions.
    Instructions(usize),
}

impl DecodeBound {
    /// Build a bound from two optional counts, exactly one of which must be set
    /// and non-zero.
    ///
    /// ```
    /// use dis6502::{DecodeBound, DisassemblyError};
    ///
    /// assert_eq!(DecodeBound::from_counts(Some(4), None), Ok(DecodeBound::Bytes(4)));
    /// assert_eq!(DecodeBound::from_counts(None, None), Err(DisassemblyError::InvalidBound));
    /// assert_eq!(DecodeBound::from_counts(Some(1), Some(1)), Err(DisassemblyError::InvalidBound));
    /// ```
    pub fn from_counts(
        bytes: Option<usize>,
        instructions: Option<usize>,
    ) -> Result<Self, DisassemblyError> {
        let bound = match (bytes, instructions) {
            (Some(count), None) => DecodeBound::Bytes(count),
            (None, Some(count)) => DecodeBound::Instructions(count),
            _ => return Err(DisassemblyError::InvalidBound),
        };
        bound.validate()?;
        Ok(bound)
    }

    /// Reject zero counts.
    pub fn validate(&self) -> Result<(), DisassemblyError> {
        match *self {
            DecodeBound::Bytes(0) | DecodeBound::Instructions(0) => {
                Err(DisassemblyError::InvalidBound)
            }
            _ => Ok(()),
        }
    }

    /// The byte window, if this bound declares one.
    pub fn byte_window(&self) -> Option<usize> {
        match *self {
            DecodeBound::Bytes(count) => Some(count),
            DecodeBound::Instructions(_) => None,
        }
    }
}

/// A single decoded line of the listing.
///
/// Immutable once built; the annotator produces a new value carrying the
/// label and comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    address: u32,
    bytes: Vec<u8>,
    text: String,
    instruction: Option<&'static Instruction>,
    label: Option<String>,
    comment: Option<String>,
}

impl DecodedInstruction {
    pub(crate) fn decoded(address: u32, bytes: Vec<u8>, instruction: &'static Instruction) -> Self {
        let operand = instruction.addressing_mode.format_operand(&bytes[1..]);
        let text = if operand.is_empty() {
            instruction.mnemonic.to_string()
        } else {
            format!("{} {}", instruction.mnemonic, operand)
        };

        Self {
            address,
            bytes,
            text,
            instruction: Some(instruction),
            label: None,
            comment: None,
        }
    }

    pub(crate) fn undefined(address: u32, opcode: u8) -> Self {
        Self {
            address,
            bytes: vec![opcode],
            text: UNDEFINED.to_string(),
            instruction: None,
            label: None,
            comment: None,
        }
    }

    pub(crate) fn data_byte(address: u32, value: u8, comment: &str) -> Self {
        Self {
            address,
            bytes: vec![value],
            text: format!(".byte ${:02X}", value),
            instruction: None,
            label: None,
            comment: Some(comment.to_string()),
        }
    }

    pub(crate) fn with_annotations(mut self, label: Option<String>, comment: Option<String>) -> Self {
        if label.is_some() {
            self.label = label;
        }
        if self.comment.is_none() {
            self.comment = comment;
        }
        self
    }

    /// Address of the first byte. May exceed 0xFFFF when a run walks off the
    /// top of memory.
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Raw bytes consumed, opcode first.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Rendered mnemonic and operand, `???`, or a `.byte` directive.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Table entry this line was decoded from, if any.
    pub fn instruction(&self) -> Option<&'static Instruction> {
        self.instruction
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// True for undefined opcodes and for opcodes truncated by the byte window.
    pub fn is_undefined(&self) -> bool {
        self.instruction.is_none() && self.text == UNDEFINED
    }
}

/// Decode, annotate and format a run in one call.
///
/// Either the whole listing is returned or nothing is: a source that runs dry
/// mid-run yields [`DisassemblyError::OutOfBounds`].
///
/// ```
/// use dis6502::{disassemble, Annotations, DecodeBound, OutputOptions, SliceSource};
///
/// let source = SliceSource::new(&[0xA9, 0x05, 0xEA]);
/// let listing = disassemble(
///     source,
///     0x0000,
///     DecodeBound::Bytes(3),
///     &OutputOptions::default(),
///     &Annotations::none(),
/// )
/// .unwrap();
///
/// assert_eq!(listing, "0000:    A9 05    LDA #$05\n0002:    EA       NOP");
/// ```
pub fn disassemble<S: ByteSource>(
    source: S,
    origin: u16,
    bound: DecodeBound,
    options: &OutputOptions,
    annotations: &Annotations<'_>,
) -> Result<String, DisassemblyError> {
    let decoded = decoder::decode(source, origin, bound)?;
    let annotated = annotator::annotate(decoded, annotations);
    Ok(formatter::format_listing(&annotated, options))
}

/// [`disassemble`] over an in-memory buffer.
pub fn disassemble_bytes(
    bytes: &[u8],
    origin: u16,
    bound: DecodeBound,
    options: &OutputOptions,
    annotations: &Annotations<'_>,
) -> Result<String, DisassemblyError> {
    disassemble(SliceSource::new(bytes), origin, bound, options, annotations)
}
