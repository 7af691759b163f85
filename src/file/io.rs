//! Low-level byte order and safe reading utilities for class file parsing.
//!
//! Class files store every multi-byte quantity in big-endian byte order. This module provides
//! bounds-checked reads of primitive values from byte buffers in that order, and is the
//! foundation the [`crate::file::parser::Parser`] builds on.
//!
//! # Key Components
//!
//! - [`crate::file::io::ClassIO`] - Trait describing how a primitive is decoded from its
//!   big-endian bytes
//! - [`crate::file::io::read_be`] - Read a value from the start of a buffer
//! - [`crate::file::io::read_be_at`] - Read a value at an offset and advance the offset
//!
//! ## Supported Types
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//! - **Floating point**: `f32`, `f64` (IEEE 754 bit patterns, as stored by the JVM)
//!
//! # Error Handling
//!
//! All functions return [`crate::Result<T>`] and fail with [`crate::Error::OutOfBounds`] if the
//! buffer holds fewer bytes than the requested type needs. Nothing is consumed on failure.

use crate::Result;

/// Trait for type-specific, big-endian binary reads.
///
/// Each implementation names the fixed-size byte array it is decoded from (e.g. `[u8; 4]` for
/// `i32`). All implementations are pure conversions without shared state.
pub trait ClassIO: Sized {
    /// Byte array type this value is decoded from.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_class_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl ClassIO for $ty {
                type Bytes = [u8; $len];

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }
            }
        )*
    };
}

impl_class_io! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

/// Safely reads a value of type `T` in big-endian byte order from the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
///
/// # Examples
///
/// ```rust
/// use classpool::file::io::read_be;
///
/// let data = [0xCA, 0xFE, 0xBA, 0xBE];
/// let magic: u32 = read_be(&data)?;
/// assert_eq!(magic, 0xCAFE_BABE);
/// # Ok::<(), classpool::Error>(())
/// ```
pub fn read_be<T: ClassIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_be_at(data, &mut offset)
}

/// Safely reads a value of type `T` in big-endian byte order at `offset`.
///
/// On success the offset is advanced by the size of `T`; on failure it is left untouched.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain.
///
/// # Examples
///
/// ```rust
/// use classpool::file::io::read_be_at;
///
/// let data = [0x00, 0x01, 0x00, 0x02];
/// let mut offset = 0;
///
/// let first: u16 = read_be_at(&data, &mut offset)?;
/// let second: u16 = read_be_at(&data, &mut offset)?;
/// assert_eq!((first, second, offset), (1, 2, 4));
/// # Ok::<(), classpool::Error>(())
/// ```
pub fn read_be_at<T: ClassIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(out_of_bounds_error!());
    };
    if end > data.len() {
        return Err(out_of_bounds_error!());
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(out_of_bounds_error!());
    };

    *offset = end;

    Ok(T::from_be_bytes(read))
}
