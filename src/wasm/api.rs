//! WASM API for the 6502 disassembler.
//!
//! Provides JavaScript-callable interfaces for producing listings with labels
//! and comments held on the JavaScript side of the boundary.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::disassembler::{annotate, decode, format_listing, DecodeBound, DecodedInstruction};
use crate::{Annotations, Column, OutputOptions, SliceSource};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One decoded line of a listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u32,
    bytes: Vec<u8>,
    text: String,
    label: Option<String>,
    comment: Option<String>,
}

impl From<&DecodedInstruction> for DisassemblyLine {
    fn from(instr: &DecodedInstruction) -> Self {
        DisassemblyLine {
            address: instr.address(),
            bytes: instr.bytes().to_vec(),
            text: instr.text().to_string(),
            label: instr.label().map(str::to_string),
            comment: instr.comment().map(str::to_string),
        }
    }
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u32 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> Option<String> {
        self.label.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn comment(&self) -> Option<String> {
        self.comment.clone()
    }
}

/// Disassembler with label and comment maps owned by the JavaScript caller
#[wasm_bindgen]
#[derive(Default)]
pub struct Disassembler {
    labels: HashMap<u16, String>,
    comments: HashMap<u16, String>,
    options: OutputOptions,
}

#[wasm_bindgen]
impl Disassembler {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Disassembler {
        Disassembler::default()
    }

    pub fn set_label(&mut self, address: u16, label: String) {
        self.labels.insert(address, label);
    }

    pub fn set_comment(&mut self, address: u16, comment: String) {
        self.comments.insert(address, comment);
    }

    pub fn clear_annotations(&mut self) {
        self.labels.clear();
        self.comments.clear();
    }

    /// Column separator for `listing`
    pub fn set_separator(&mut self, separator: String) {
        self.options.separator = separator;
    }

    /// Show only the named columns ("address", "bytes", "label",
    /// "disassembly", "comment"). An empty list shows all of them.
    pub fn set_columns(&mut self, columns: Vec<String>) -> Result<(), JsError> {
        self.options.columns = columns
            .iter()
            .map(|name| parse_column(name))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Disassemble `bytes` loaded at `origin` into aligned listing text.
    ///
    /// Exactly one of `byte_count` and `instruction_count` must be given.
    pub fn listing(
        &self,
        bytes: &[u8],
        origin: u16,
        byte_count: Option<u32>,
        instruction_count: Option<u32>,
    ) -> Result<String, JsError> {
        let decoded = self.decode_annotated(bytes, origin, byte_count, instruction_count)?;
        Ok(format_listing(&decoded, &self.options))
    }

    /// Disassemble `bytes` into `DisassemblyLine` objects.
    pub fn lines(
        &self,
        bytes: &[u8],
        origin: u16,
        byte_count: Option<u32>,
        instruction_count: Option<u32>,
    ) -> Result<js_sys::Array, JsError> {
        let decoded = self.decode_annotated(bytes, origin, byte_count, instruction_count)?;
        Ok(decoded
            .iter()
            .map(|instr| JsValue::from(DisassemblyLine::from(instr)))
            .collect())
    }
}

impl Disassembler {
    fn decode_annotated(
        &self,
        bytes: &[u8],
        origin: u16,
        byte_count: Option<u32>,
        instruction_count: Option<u32>,
    ) -> Result<Vec<DecodedInstruction>, JsError> {
        let bound = DecodeBound::from_counts(
            byte_count.map(|n| n as usize),
            instruction_count.map(|n| n as usize),
        )?;
        let decoded = decode(SliceSource::new(bytes), origin, bound)?;
        Ok(annotate(
            decoded,
            &Annotations::new(&self.labels, &self.comments),
        ))
    }
}

fn parse_column(name: &str) -> Result<Column, JsError> {
    match name {
        "address" => Ok(Column::Address),
        "bytes" => Ok(Column::Bytes),
        "label" => Ok(Column::Label),
        "disassembly" => Ok(Column::Disassembly),
        "comment" => Ok(Column::Comment),
        other => Err(JsError::new(&format!("unknown column '{}'", other))),
    }
}
