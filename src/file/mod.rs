//! Class file byte access.
//!
//! This module holds the low-level reading layer the decoder is built on:
//!
//! - [`crate::file::parser::Parser`] - Cursor-based, bounds-checked reader over a byte slice
//! - [`crate::file::io`] - Big-endian primitive decoding used by the parser
//!
//! Opening files, mapping them into memory or locating the constant pool inside a class file
//! is left to the caller; a [`Parser`] only needs to be positioned at the first byte of the
//! section it should read.

pub mod io;
pub mod parser;

pub use parser::Parser;
