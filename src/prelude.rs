//! # classpool Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! classpool library. Import it to get the decoder, its entry types and the error types in one
//! line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all classpool operations
pub use crate::Error;

/// The broad category of an error
pub use crate::ErrorKind;

/// The result type used throughout classpool
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The decoded constant pool
pub use crate::ConstantPool;

/// Decoder limits and string handling
pub use crate::DecoderConfig;

/// Low-level byte parsing
pub use crate::Parser;

// ================================================================================================
// Entries
// ================================================================================================

/// Resolved entries and their tag
pub use crate::constpool::{ConstantEntry, ConstantTag};

/// Entry payloads and their shared handles
pub use crate::constpool::{
    ClassInfo, ClassInfoRc, MemberRefInfo, MemberRefInfoRc, NameAndTypeInfo, NameAndTypeInfoRc,
    StringInfo, StringInfoRc, Utf8Info, Utf8InfoRc,
};
