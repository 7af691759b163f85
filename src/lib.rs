// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # classpool
//!
//! A decoder for the constant pool of JVM class files.
//!
//! The constant pool is the symbol table every other part of a class file points into: class
//! and member references, names, descriptors and literal values. `classpool` reads the pool
//! section from a byte buffer, resolves every cross-reference between its entries, and hands
//! out typed, immutable views of the result. It is meant as the foundation of disassemblers,
//! class file inspectors and similar tooling.
//!
//! ## Features
//!
//! - **🔍 Complete tag coverage** - All eleven entry kinds of the classic class file format
//! - **🔗 Fully linked entries** - References are followed once at load time, forward references
//!   included, and shared targets are stored once
//! - **🛡️ Hostile input safe** - Bounds-checked reads, cycle detection and a resolution depth
//!   limit; malformed input yields an [`Error`], never a panic
//! - **📝 Disassembler formatting** - Java-style rendering of literals, floats and doubles
//!
//! ## Quick Start
//!
//! ```rust
//! use classpool::prelude::*;
//!
//! #[rustfmt::skip]
//! let data = [
//!     0x00, 0x07,                                                 // count
//!     0x01, 0x00, 0x10, b'j', b'a', b'v', b'a', b'/', b'l', b'a',
//!     b'n', b'g', b'/', b'O', b'b', b'j', b'e', b'c', b't',       // #1 Utf8
//!     0x07, 0x00, 0x01,                                           // #2 Class
//!     0x01, 0x00, 0x06, b'<', b'i', b'n', b'i', b't', b'>',       // #3 Utf8
//!     0x01, 0x00, 0x03, b'(', b')', b'V',                         // #4 Utf8
//!     0x0C, 0x00, 0x03, 0x00, 0x04,                               // #5 NameAndType
//!     0x0A, 0x00, 0x02, 0x00, 0x05,                               // #6 Methodref
//! ];
//!
//! let pool = ConstantPool::from_bytes(&data)?;
//! let method = pool.get_methodref(6)?;
//!
//! assert_eq!(method.class.name, "java.lang.Object");
//! assert_eq!(method.name_and_type.name.value, "<init>");
//! assert_eq!(method.name_and_type.descriptor.value, "()V");
//! # Ok::<(), classpool::Error>(())
//! ```
//!
//! ## Decoding inside a class file
//!
//! The pool starts right after the magic number and version fields. Position a [`Parser`]
//! there and keep using it for the rest of the file once the pool is decoded:
//!
//! ```rust
//! use classpool::{ConstantPool, DecoderConfig, Parser};
//!
//! #[rustfmt::skip]
//! let class_file = [
//!     0xCA, 0xFE, 0xBA, 0xBE,     // magic
//!     0x00, 0x00, 0x00, 0x34,     // version 52.0
//!     0x00, 0x02,                 // constant_pool_count
//!     0x03, 0x00, 0x00, 0x00, 0x07, // #1 Integer 7
//!     0x00, 0x21,                 // access_flags
//! ];
//!
//! let mut parser = Parser::new(&class_file);
//! parser.seek(8)?;
//! let pool = ConstantPool::decode_with(&mut parser, &DecoderConfig::strict())?;
//!
//! assert_eq!(pool.get_integer(1)?, 7);
//! assert_eq!(parser.read_be::<u16>()?, 0x0021);
//! # Ok::<(), classpool::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result`]. Every [`Error`] maps onto one of four
//! [`ErrorKind`]s (format, reference, type mismatch, structural) via [`Error::kind`]. Decoding
//! is all-or-nothing: a pool with any defect is rejected as a whole.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: pool boundaries at `debug`,
//! individual entries at `trace`, and lossily decoded strings at `warn`. Install any logger
//! implementation to see them.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Low-level byte access: the [`Parser`] cursor and big-endian primitive decoding.
pub mod file;

/// Constant pool decoding, resolution, lookup and rendering.
///
/// See [`ConstantPool`] for the main entry point.
pub mod constpool;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use classpool::prelude::*;
///
/// let pool = ConstantPool::from_bytes(&[0x00, 0x01])?;
/// assert!(pool.is_empty());
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

/// `classpool` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use classpool::{ConstantPool, Result};
///
/// fn class_name(data: &[u8], index: u16) -> Result<String> {
///     let pool = ConstantPool::from_bytes(data)?;
///     Ok(pool.get_class(index)?.name.clone())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `classpool` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use classpool::{ConstantPool, Error};
///
/// match ConstantPool::from_bytes(&[0x00, 0x03, 0x03]) {
///     Ok(_) => println!("Decoded successfully"),
///     Err(Error::OutOfBounds { .. }) => println!("Pool is truncated"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::{Error, ErrorKind};

/// Cursor-based reader over class file bytes.
pub use file::Parser;

pub use constpool::{
    ClassInfo, ClassInfoRc, ConstantEntry, ConstantPool, ConstantTag, DecoderConfig,
    MemberRefInfo, MemberRefInfoRc, NameAndTypeInfo, NameAndTypeInfoRc, StringInfo, StringInfoRc,
    Utf8Info, Utf8InfoRc,
};
pub use constpool::{java_double_to_string, java_float_to_string, string_to_java_literal};
