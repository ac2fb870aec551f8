//! Formatting functions for disassembled instructions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::disassembler::DecodedInstruction;

/// Separator placed between columns when none is configured.
pub const DEFAULT_SEPARATOR: &str = "    ";

/// A listing column. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// `FF00:`
    Address,
    /// Raw bytes as space-separated hex pairs.
    Bytes,
    /// Caller-supplied label.
    Label,
    /// Mnemonic and operand.
    Disassembly,
    /// Vector or caller-supplied comment, prefixed with `; `.
    Comment,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Address,
        Column::Bytes,
        Column::Label,
        Column::Disassembly,
        Column::Comment,
    ];
}

/// Options controlling listing output.
///
/// An empty column set means every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub columns: BTreeSet<Column>,
    pub separator: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            columns: BTreeSet::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl OutputOptions {
    /// Only the given columns, default separator.
    pub fn with_columns<I: IntoIterator<Item = Column>>(columns: I) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Whether the caller asked for `column`.
    pub fn requests(&self, column: Column) -> bool {
        self.columns.is_empty() || self.columns.contains(&column)
    }

    /// Columns shown for this run.
    ///
    /// Label and comment columns need both a request and at least one row with
    /// content; the decision holds for every row of the run.
    pub fn visible_columns(&self, instructions: &[DecodedInstruction]) -> Vec<Column> {
        let any_label = instructions.iter().any(|i| i.label().is_some_and(|l| !l.is_empty()));
        let any_comment = instructions
            .iter()
            .any(|i| i.comment().is_some_and(|c| !c.is_empty()));

        Column::ALL
            .into_iter()
            .filter(|&column| self.requests(column))
            .filter(|&column| match column {
                Column::Label => any_label,
                Column::Comment => any_comment,
                _ => true,
            })
            .collect()
    }
}

/// Uppercase hex pairs separated by single spaces.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell(column: Column, instr: &DecodedInstruction) -> String {
    match column {
        Column::Address => format!("{:04X}:", instr.address()),
        Column::Bytes => format_bytes(instr.bytes()),
        Column::Label => instr.label().unwrap_or_default().to_string(),
        Column::Disassembly => instr.text().to_string(),
        Column::Comment => match instr.comment() {
            Some(comment) if !comment.is_empty() => format!("; {}", comment),
            _ => String::new(),
        },
    }
}

/// Format a single instruction as assembly text
///
/// Mnemonic and operand only, e.g. `LDA #$05`.
pub fn format_instruction(instr: &DecodedInstruction) -> String {
    instr.text().to_string()
}

/// Render a run as column-aligned text, one line per instruction.
///
/// Every cell is right-padded to its column's widest cell, cells are joined
/// with the separator, and trailing whitespace is trimmed from each line.
pub fn format_listing(instructions: &[DecodedInstruction], options: &OutputOptions) -> String {
    let columns = options.visible_columns(instructions);

    let rows: Vec<Vec<String>> = instructions
        .iter()
        .map(|instr| columns.iter().map(|&column| cell(column, instr)).collect())
        .collect();

    let mut widths = vec![0usize; columns.len()];
    for row in &rows {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(text, &width)| format!("{:<width$}", text, width = width))
                .collect::<Vec<_>>()
                .join(&options.separator)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
