//! WebAssembly bindings for the disassembler.
//!
//! This module exposes listings and structured decode results to JavaScript,
//! for browser-based firmware viewers.

pub mod api;

pub use api::Disassembler;
