//! # Listing Configuration
//!
//! A listing can be described in TOML: where the image is loaded, how much of
//! it to decode, which columns to show, and the symbol maps to overlay.
//!
//! ```toml
//! origin = 0xFF00
//! bytes = 256
//!
//! [output]
//! columns = ["address", "bytes", "label", "disassembly", "comment"]
//! separator = "  "
//!
//! [labels]
//! FF00 = "RESET"
//! "$FF0F" = "NOTCR"
//!
//! [comments]
//! "0xFF00" = "Clear decimal arithmetic mode."
//! ```
//!
//! Address keys are hexadecimal with an optional `$` or `0x` prefix.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::disassembler::{disassemble_bytes, Annotations, DecodeBound, OutputOptions};
use crate::DisassemblyError;

/// Errors loading or applying a [`ListingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error(transparent)]
    Disassembly(#[from] DisassemblyError),
}

/// A complete description of one listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Address of the first byte.
    pub origin: u16,

    /// Byte window; exclusive with `instructions`.
    pub bytes: Option<usize>,

    /// Instruction count; exclusive with `bytes`.
    pub instructions: Option<usize>,

    pub output: OutputOptions,
    pub labels: BTreeMap<String, String>,
    pub comments: BTreeMap<String, String>,
}

impl ListingConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading listing config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn bound(&self) -> Result<DecodeBound, ConfigError> {
        Ok(DecodeBound::from_counts(self.bytes, self.instructions)?)
    }

    pub fn label_map(&self) -> Result<HashMap<u16, String>, ConfigError> {
        address_map(&self.labels)
    }

    pub fn comment_map(&self) -> Result<HashMap<u16, String>, ConfigError> {
        address_map(&self.comments)
    }

    /// Disassemble `image` as described by this config.
    pub fn disassemble(&self, image: &[u8]) -> Result<String, ConfigError> {
        let bound = self.bound()?;
        let labels = self.label_map()?;
        let comments = self.comment_map()?;

        Ok(disassemble_bytes(
            image,
            self.origin,
            bound,
            &self.output,
            &Annotations::new(&labels, &comments),
        )?)
    }
}

/// Parse `FF00`, `$FF00` or `0xFF00`.
pub fn parse_address(text: &str) -> Result<u16, ConfigError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('$')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    u16::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidAddress(text.to_string()))
}

fn address_map(raw: &BTreeMap<String, String>) -> Result<HashMap<u16, String>, ConfigError> {
    raw.iter()
        .map(|(key, value)| Ok((parse_address(key)?, value.clone())))
        .collect()
}
