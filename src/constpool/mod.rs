//! Decoding and resolution of the JVM class file constant pool.
//!
//! The constant pool is the symbol table of a class file: every class name, member reference,
//! descriptor and literal used by the class lives in it and is referred to by a 1-based `u16`
//! index. This module turns the raw pool bytes into a [`ConstantPool`] of typed, fully linked
//! [`ConstantEntry`] values.
//!
//! # Architecture
//!
//! Decoding happens in two passes:
//!
//! 1. **Scan** ([`raw`]) - read the count field and every record into a [`RawEntry`], which keeps
//!    cross-references as plain indices. `Long` and `Double` records claim two slots, the second
//!    of which stays empty.
//! 2. **Resolve** (`resolver`) - follow every index on demand, type-check the target and build
//!    the linked entry. Results are memoized, loops are detected, and nesting is bounded by
//!    [`DecoderConfig::max_resolution_depth`].
//!
//! Once built, the pool is read-only. Lookups go through [`ConstantPool::get`] or one of the
//! typed accessors (`get_class`, `get_methodref`, ...), and the `render_*` helpers produce the
//! textual form of constant values as a disassembler prints them.
//!
//! # Key Components
//!
//! - [`ConstantPool`] - The decoded pool and its accessors
//! - [`ConstantEntry`] - A resolved entry, one variant per tag
//! - [`ConstantTag`] - The tag byte and its properties
//! - [`DecoderConfig`] - Decoder limits and string handling
//! - [`string_to_java_literal`], [`java_float_to_string`], [`java_double_to_string`] - Value
//!   formatting
//!
//! # Example
//!
//! ```rust
//! use classpool::{ConstantPool, Parser};
//!
//! #[rustfmt::skip]
//! let data = [
//!     0x00, 0x05,                                     // count
//!     0x01, 0x00, 0x03, b'F', b'o', b'o',             // #1 Utf8 "Foo"
//!     0x07, 0x00, 0x01,                               // #2 Class #1
//!     0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A, // #3 Long 42 (+#4)
//! ];
//! let mut parser = Parser::new(&data);
//! let pool = ConstantPool::decode(&mut parser)?;
//!
//! assert_eq!(pool.get_class(2)?.name, "Foo");
//! assert_eq!(pool.render_long_double_string(3)?, "42L");
//! assert!(!pool.is_usable(4));
//! # Ok::<(), classpool::Error>(())
//! ```

mod config;
mod entry;
mod pool;
pub mod raw;
mod render;
pub(crate) mod resolver;
mod tag;

pub use config::DecoderConfig;
pub use entry::{
    ClassInfo, ClassInfoRc, ConstantEntry, MemberRefInfo, MemberRefInfoRc, NameAndTypeInfo,
    NameAndTypeInfoRc, StringInfo, StringInfoRc, Utf8Info, Utf8InfoRc,
};
pub use pool::ConstantPool;
pub use raw::RawEntry;
pub use render::{java_double_to_string, java_float_to_string, string_to_java_literal};
pub use tag::ConstantTag;
