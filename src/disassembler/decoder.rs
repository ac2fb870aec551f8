//! Decode engine for the 6502 disassembler

use log::{debug, trace};

use crate::disassembler::{DecodeBound, DecodedInstruction};
use crate::opcodes::lookup;
use crate::source::{ByteSource, OutOfBounds};
use crate::DisassemblyError;

/// The six bytes at the top of memory hold the NMI, RESET and IRQ vectors.
const VECTORS: [(u32, &str); 6] = [
    (0xFFFA, "NMI vector (LSB)"),
    (0xFFFB, "NMI vector (MSB)"),
    (0xFFFC, "RESET vector (LSB)"),
    (0xFFFD, "RESET vector (MSB)"),
    (0xFFFE, "IRQ vector (LSB)"),
    (0xFFFF, "IRQ vector (MSB)"),
];

/// Comment for a hardware vector byte, or `None` if `address` is ordinary memory.
pub fn vector_comment(address: u32) -> Option<&'static str> {
    VECTORS
        .iter()
        .find(|(vector, _)| *vector == address)
        .map(|(_, comment)| *comment)
}

/// Position of a decode run: where it started and how far it has read.
struct Cursor<S> {
    source: S,
    origin: u32,
    consumed: usize,
}

impl<S: ByteSource> Cursor<S> {
    fn address(&self) -> u32 {
        self.origin.wrapping_add(self.consumed as u32)
    }

    fn read(&mut self) -> Result<u8, OutOfBounds> {
        let byte = self.source.read_byte()?;
        self.consumed += 1;
        Ok(byte)
    }

    /// Decode one line at the current address.
    fn step(&mut self, window: Option<usize>) -> Result<DecodedInstruction, OutOfBounds> {
        let address = self.address();
        let start = self.consumed;

        if let Some(comment) = vector_comment(address) {
            let value = self.read()?;
            return Ok(DecodedInstruction::data_byte(address, value, comment));
        }

        let opcode = self.read()?;

        let Some(instruction) = lookup(opcode) else {
            debug!("undefined opcode ${:02X} at ${:04X}", opcode, address);
            return Ok(DecodedInstruction::undefined(address, opcode));
        };

        // Operand bytes past the window stay unread so the source lines up
        // with the window boundary.
        if let Some(window) = window {
            if start + instruction.size as usize > window {
                debug!(
                    "{} at ${:04X} needs {} bytes, {} left in window",
                    instruction.mnemonic,
                    address,
                    instruction.size,
                    window.saturating_sub(start)
                );
                return Ok(DecodedInstruction::undefined(address, opcode));
            }
        }

        let mut bytes = Vec::with_capacity(instruction.size as usize);
        bytes.push(opcode);
        for _ in 0..instruction.operand_len() {
            bytes.push(self.read()?);
        }

        Ok(DecodedInstruction::decoded(address, bytes, instruction))
    }
}

/// Decode instructions from `source` starting at `origin` until `bound` is met.
///
/// At least one instruction is always decoded. The bound is validated before
/// any byte is read. Any read failure aborts the run and discards whatever was
/// decoded so far.
///
/// # Examples
///
/// ```
/// use dis6502::{decode, DecodeBound, SliceSource};
///
/// let decoded = decode(SliceSource::new(&[0xA9, 0x05]), 0x0000, DecodeBound::Instructions(1)).unwrap();
/// assert_eq!(decoded[0].text(), "LDA #$05");
/// assert_eq!(decoded[0].bytes(), &[0xA9, 0x05]);
/// ```
pub fn decode<S: ByteSource>(
    source: S,
    origin: u16,
    bound: DecodeBound,
) -> Result<Vec<DecodedInstruction>, DisassemblyError> {
    bound.validate()?;
    debug!("decoding from ${:04X} with {:?}", origin, bound);

    let window = bound.byte_window();
    let mut cursor = Cursor {
        source,
        origin: origin as u32,
        consumed: 0,
    };
    let mut instructions = Vec::new();

    loop {
        let instr = cursor.step(window)?;
        trace!("${:04X}: {}", instr.address(), instr.text());
        instructions.push(instr);

        let done = match bound {
            DecodeBound::Instructions(count) => instructions.len() >= count,
            DecodeBound::Bytes(count) => cursor.consumed >= count,
        };
        if done {
            break;
        }
    }

    debug!(
        "decoded {} instructions from {} bytes",
        instructions.len(),
        cursor.consumed
    );
    Ok(instructions)
}
