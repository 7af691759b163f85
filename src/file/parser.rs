//! Low-level byte stream parser for class file decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor-based binary data
//! parser over a byte slice. It is the sequential reader the constant pool decoder consumes:
//! big-endian primitives, single tag bytes, and the length-prefixed modified UTF-8 records used
//! by `CONSTANT_Utf8` entries.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::seek`] - Move to specific position
//! - [`crate::file::parser::Parser::advance_by`] - Move forward by specified bytes
//! - [`crate::file::parser::Parser::pos`] - Get current position
//!
//! ## Data Access Methods
//! - [`crate::file::parser::Parser::read_be`] - Read primitive types (big-endian)
//! - [`crate::file::parser::Parser::peek_byte`] - Peek at current byte without advancing
//! - [`crate::file::parser::Parser::read_bytes`] - Borrow a run of raw bytes
//! - [`crate::file::parser::Parser::read_prefixed_bytes`] - Borrow a `u16` length-prefixed run
//! - [`crate::file::parser::Parser::read_prefixed_string_mutf8`] - Decode a `u16`
//!   length-prefixed modified UTF-8 string
//!
//! # Usage Examples
//!
//! ```rust
//! use classpool::Parser;
//!
//! let data = [0x00, 0x03, b'F', b'o', b'o', 0x00, 0x2A];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_prefixed_string_mutf8()?, "Foo");
//! assert_eq!(parser.read_be::<u16>()?, 42);
//! assert!(!parser.has_more_data());
//! # Ok::<(), classpool::Error>(())
//! ```

use crate::{
    file::io::{read_be_at, ClassIO},
    Result,
};

/// A cursor over class file bytes.
///
/// `Parser` maintains an internal position and bounds-checks every read, so truncated or
/// malformed input surfaces as [`crate::Error::OutOfBounds`] instead of a panic. Failed reads
/// never move the cursor.
///
/// # Examples
///
/// ```rust
/// use classpool::Parser;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut parser = Parser::new(&data);
///
/// let first = parser.read_be::<u32>()?;
/// assert_eq!(first, 0x01020304);
///
/// parser.seek(6)?;
/// let last_bytes = parser.read_be::<u16>()?;
/// assert_eq!(last_bytes, 0x0708);
/// # Ok::<(), classpool::Error>(())
/// ```
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move the current position to the specified index.
    ///
    /// # Arguments
    /// * `pos` - The position to move the cursor to
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is beyond the data length.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if step > self.data.len() - self.position {
            return Err(out_of_bounds_error!());
        }

        self.position += step;
        Ok(())
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get access to the underlying data buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Peek at the next byte without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is at or beyond the data length.
    pub fn peek_byte(&self) -> Result<u8> {
        match self.data.get(self.position) {
            Some(byte) => Ok(*byte),
            None => Err(out_of_bounds_error!()),
        }
    }

    /// Read a type `T` from the current position in big-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classpool::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// let value: u16 = parser.read_be()?;
    /// assert_eq!(value, 0x0102);
    /// assert_eq!(parser.pos(), 2);
    /// # Ok::<(), classpool::Error>(())
    /// ```
    pub fn read_be<T: ClassIO>(&mut self) -> Result<T> {
        read_be_at::<T>(self.data, &mut self.position)
    }

    /// Borrow the next `length` bytes and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        if length > self.data.len() - self.position {
            return Err(out_of_bounds_error!());
        }

        let bytes = &self.data[self.position..self.position + length];
        self.position += length;
        Ok(bytes)
    }

    /// Borrow a run of bytes prefixed by its big-endian `u16` length.
    ///
    /// This is the raw framing of a `CONSTANT_Utf8` record. If the run is truncated the
    /// cursor is restored to the length prefix.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the prefix or the announced bytes are missing.
    pub fn read_prefixed_bytes(&mut self) -> Result<&'a [u8]> {
        let start = self.position;
        let length = self.read_be::<u16>()?;
        match self.read_bytes(usize::from(length)) {
            Ok(bytes) => Ok(bytes),
            Err(error) => {
                self.position = start;
                Err(error)
            }
        }
    }

    /// Read a `u16` length-prefixed string in the JVM's modified UTF-8 encoding.
    ///
    /// Modified UTF-8 differs from standard UTF-8 in two ways: `U+0000` is encoded as the two
    /// bytes `C0 80`, and supplementary characters are encoded as a pair of three-byte
    /// surrogate sequences. Plain ASCII and BMP text is byte-identical in both encodings.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated or
    /// [`crate::Error::Malformed`] if the bytes are not valid modified UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classpool::Parser;
    ///
    /// // "a\0b" with the NUL in its two-byte form
    /// let data = [0x00, 0x04, b'a', 0xC0, 0x80, b'b'];
    /// let mut parser = Parser::new(&data);
    /// assert_eq!(parser.read_prefixed_string_mutf8()?, "a\0b");
    /// # Ok::<(), classpool::Error>(())
    /// ```
    pub fn read_prefixed_string_mutf8(&mut self) -> Result<String> {
        let start = self.position;
        let bytes = self.read_prefixed_bytes()?;

        match cesu8::from_java_cesu8(bytes) {
            Ok(decoded) => Ok(decoded.into_owned()),
            Err(_) => Err(malformed_error!(
                "Invalid modified UTF-8 string at offset {}-{}",
                start,
                self.position
            )),
        }
    }
}
