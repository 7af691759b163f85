//! The decoded constant pool and its accessors.

use log::debug;

use crate::{
    constpool::{
        entry::{
            ClassInfoRc, ConstantEntry, MemberRefInfoRc, NameAndTypeInfoRc, StringInfoRc,
            Utf8InfoRc,
        },
        raw,
        resolver::Resolver,
        DecoderConfig,
    },
    file::Parser,
    Error, Result,
};

/// Build the error for an entry that exists but has the wrong variant.
pub(crate) fn type_mismatch(index: u16, expected: &'static str, found: &ConstantEntry) -> Error {
    Error::TypeMismatch {
        index,
        expected,
        found: found.type_name(),
    }
}

/// A fully decoded and resolved constant pool.
///
/// Indices are 1-based, as in the class file. Index 0 and the slot following every `Long` or
/// `Double` exist but are unusable. The pool is immutable once decoded and can be shared
/// between threads freely.
///
/// # Examples
///
/// ```rust
/// use classpool::ConstantPool;
///
/// // #1 = Utf8 "Hello", #2 = String #1
/// let data = [0x00, 0x03, 0x01, 0x00, 0x05, b'H', b'e', b'l', b'l', b'o', 0x08, 0x00, 0x01];
/// let pool = ConstantPool::from_bytes(&data)?;
///
/// assert_eq!(pool.count(), 3);
/// assert_eq!(pool.get_string(2)?.value, "Hello");
/// # Ok::<(), classpool::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantPool {
    entries: Vec<Option<ConstantEntry>>,
    count: u16,
    populated: usize,
}

impl ConstantPool {
    /// Decode the constant pool starting at the parser's current position, using the default
    /// [`DecoderConfig`].
    ///
    /// On success the parser is left on the first byte after the pool. On failure its position
    /// is unspecified.
    ///
    /// # Errors
    /// Returns the first format, reference, type or structural error found. There is no
    /// partially decoded result.
    pub fn decode(parser: &mut Parser) -> Result<Self> {
        Self::decode_with(parser, &DecoderConfig::default())
    }

    /// Decode the constant pool starting at the parser's current position.
    ///
    /// ## Arguments
    /// * 'parser' - Positioned at the `constant_pool_count` field
    /// * 'config' - Decoder limits and string handling
    ///
    /// # Errors
    /// See [`ConstantPool::decode`].
    pub fn decode_with(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let start = parser.pos();
        let raw = raw::scan(parser, config)?;
        debug!(
            "Scanned {} constant pool slots ({:#x}..{:#x})",
            raw.len(),
            start,
            parser.pos()
        );

        let count = u16::try_from(raw.len())
            .map_err(|_| malformed_error!("Constant pool has {} slots", raw.len()))?;
        let entries = Resolver::new(raw, config).resolve_all()?;
        let populated = entries.iter().filter(|entry| entry.is_some()).count();
        debug!("Resolved {} constant pool entries", populated);

        Ok(ConstantPool {
            entries,
            count,
            populated,
        })
    }

    /// Decode a constant pool from a buffer that starts with its count field.
    ///
    /// Bytes after the pool are ignored.
    ///
    /// # Errors
    /// See [`ConstantPool::decode`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut parser = Parser::new(data);
        Self::decode(&mut parser)
    }

    /// The `constant_pool_count` field: one more than the highest valid index.
    #[must_use]
    pub fn count(&self) -> u16 {
        self.count
    }

    /// The number of usable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.populated
    }

    /// True if the pool has no usable entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// True if `index` refers to an entry that can be looked up.
    #[must_use]
    pub fn is_usable(&self, index: u16) -> bool {
        matches!(self.entries.get(usize::from(index)), Some(Some(_)))
    }

    /// Look up the entry at `index`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] for index 0 or anything at or past [`ConstantPool::count`],
    /// and [`Error::UnusableEntry`] for the slot after a `Long` or `Double`.
    pub fn get(&self, index: u16) -> Result<&ConstantEntry> {
        if index == 0 || index >= self.count {
            return Err(Error::InvalidIndex {
                index,
                count: self.count,
            });
        }

        match self.entries.get(usize::from(index)) {
            Some(Some(entry)) => Ok(entry),
            _ => Err(Error::UnusableEntry(index)),
        }
    }

    /// Iterate over the usable entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &ConstantEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let entry = entry.as_ref()?;
                Some((u16::try_from(index).ok()?, entry))
            })
    }

    /// Look up a `Utf8` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_utf8(&self, index: u16) -> Result<&Utf8InfoRc> {
        match self.get(index)? {
            ConstantEntry::Utf8(info) => Ok(info),
            other => Err(type_mismatch(index, "Utf8", other)),
        }
    }

    /// Look up an `Integer` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_integer(&self, index: u16) -> Result<i32> {
        match self.get(index)? {
            ConstantEntry::Integer(value) => Ok(*value),
            other => Err(type_mismatch(index, "Integer", other)),
        }
    }

    /// Look up a `Float` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_float(&self, index: u16) -> Result<f32> {
        match self.get(index)? {
            ConstantEntry::Float(value) => Ok(*value),
            other => Err(type_mismatch(index, "Float", other)),
        }
    }

    /// Look up a `Long` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_long(&self, index: u16) -> Result<i64> {
        match self.get(index)? {
            ConstantEntry::Long(value) => Ok(*value),
            other => Err(type_mismatch(index, "Long", other)),
        }
    }

    /// Look up a `Double` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_double(&self, index: u16) -> Result<f64> {
        match self.get(index)? {
            ConstantEntry::Double(value) => Ok(*value),
            other => Err(type_mismatch(index, "Double", other)),
        }
    }

    /// Look up a `Class` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_class(&self, index: u16) -> Result<&ClassInfoRc> {
        match self.get(index)? {
            ConstantEntry::Class(info) => Ok(info),
            other => Err(type_mismatch(index, "Class", other)),
        }
    }

    /// Look up a `String` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_string(&self, index: u16) -> Result<&StringInfoRc> {
        match self.get(index)? {
            ConstantEntry::String(info) => Ok(info),
            other => Err(type_mismatch(index, "String", other)),
        }
    }

    /// Look up a `Fieldref` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_fieldref(&self, index: u16) -> Result<&MemberRefInfoRc> {
        match self.get(index)? {
            ConstantEntry::Fieldref(info) => Ok(info),
            other => Err(type_mismatch(index, "Fieldref", other)),
        }
    }

    /// Look up a `Methodref` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_methodref(&self, index: u16) -> Result<&MemberRefInfoRc> {
        match self.get(index)? {
            ConstantEntry::Methodref(info) => Ok(info),
            other => Err(type_mismatch(index, "Methodref", other)),
        }
    }

    /// Look up an `InterfaceMethodref` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_interface_methodref(&self, index: u16) -> Result<&MemberRefInfoRc> {
        match self.get(index)? {
            ConstantEntry::InterfaceMethodref(info) => Ok(info),
            other => Err(type_mismatch(index, "InterfaceMethodref", other)),
        }
    }

    /// Look up a `NameAndType` entry.
    ///
    /// # Errors
    /// Fails like [`ConstantPool::get`], or with [`Error::TypeMismatch`] for other variants.
    pub fn get_name_and_type(&self, index: u16) -> Result<&NameAndTypeInfoRc> {
        match self.get(index)? {
            ConstantEntry::NameAndType(info) => Ok(info),
            other => Err(type_mismatch(index, "NameAndType", other)),
        }
    }
}

impl<'a> IntoIterator for &'a ConstantPool {
    type Item = (u16, &'a ConstantEntry);
    type IntoIter = Box<dyn Iterator<Item = (u16, &'a ConstantEntry)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
