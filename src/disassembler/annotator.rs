//! Label and comment overlay

use std::collections::HashMap;

use crate::disassembler::DecodedInstruction;

/// Caller-owned label and comment maps, borrowed for the length of a run.
///
/// Maps are keyed by 16-bit address. Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotations<'a> {
    labels: Option<&'a HashMap<u16, String>>,
    comments: Option<&'a HashMap<u16, String>>,
}

impl<'a> Annotations<'a> {
    /// No labels, no comments.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(labels: &'a HashMap<u16, String>, comments: &'a HashMap<u16, String>) -> Self {
        Self {
            labels: Some(labels),
            comments: Some(comments),
        }
    }

    pub fn with_labels(mut self, labels: &'a HashMap<u16, String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_comments(mut self, comments: &'a HashMap<u16, String>) -> Self {
        self.comments = Some(comments);
        self
    }

    /// Label at `address`. Addresses past 0xFFFF never have one.
    pub fn label_at(&self, address: u32) -> Option<&'a str> {
        Self::lookup(self.labels, address)
    }

    /// Comment at `address`. Addresses past 0xFFFF never have one.
    pub fn comment_at(&self, address: u32) -> Option<&'a str> {
        Self::lookup(self.comments, address)
    }

    fn lookup(map: Option<&'a HashMap<u16, String>>, address: u32) -> Option<&'a str> {
        let address = u16::try_from(address).ok()?;
        map?.get(&address)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// Attach labels and comments to each decoded instruction.
///
/// Hardware vector bytes keep their fixed comment; a caller comment at the same
/// address is ignored. Labels always apply.
pub fn annotate(
    instructions: Vec<DecodedInstruction>,
    annotations: &Annotations<'_>,
) -> Vec<DecodedInstruction> {
    instructions
        .into_iter()
        .map(|instr| {
            let address = instr.address();
            let label = annotations.label_at(address).map(str::to_string);
            let comment = annotations.comment_at(address).map(str::to_string);
            instr.with_annotations(label, comment)
        })
        .collect()
}
