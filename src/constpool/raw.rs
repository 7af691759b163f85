//! First pass of constant pool decoding: the raw scan.
//!
//! Every entry is read into a [`RawEntry`] that keeps literal values as-is and cross-references
//! as plain indices. Nothing is resolved here, so the scan is order-independent and forward
//! references need no special treatment; the resolver turns the raw
//! table into typed entries afterwards.

use log::{trace, warn};

use crate::{
    constpool::{ConstantTag, DecoderConfig},
    file::Parser,
    Result,
};

/// An unresolved constant pool entry, exactly as stored in the class file.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEntry {
    /// `CONSTANT_Utf8`: the decoded string
    Utf8(String),
    /// `CONSTANT_Integer`
    Integer(i32),
    /// `CONSTANT_Float`
    Float(f32),
    /// `CONSTANT_Long`
    Long(i64),
    /// `CONSTANT_Double`
    Double(f64),
    /// `CONSTANT_Class`
    Class {
        /// an index of a `Utf8` entry holding the internal (slash separated) name
        name_index: u16,
    },
    /// `CONSTANT_String`
    String {
        /// an index of a `Utf8` entry
        string_index: u16,
    },
    /// `CONSTANT_Fieldref`
    Fieldref {
        /// an index of a `Class` entry
        class_index: u16,
        /// an index of a `NameAndType` entry
        name_and_type_index: u16,
    },
    /// `CONSTANT_Methodref`
    Methodref {
        /// an index of a `Class` entry
        class_index: u16,
        /// an index of a `NameAndType` entry
        name_and_type_index: u16,
    },
    /// `CONSTANT_InterfaceMethodref`
    InterfaceMethodref {
        /// an index of a `Class` entry
        class_index: u16,
        /// an index of a `NameAndType` entry
        name_and_type_index: u16,
    },
    /// `CONSTANT_NameAndType`
    NameAndType {
        /// an index of a `Utf8` entry holding the member name
        name_index: u16,
        /// an index of a `Utf8` entry holding the field or method descriptor
        descriptor_index: u16,
    },
}

impl RawEntry {
    /// Read one entry, tag byte included, from `parser`.
    ///
    /// ## Arguments
    /// * 'parser' - Positioned at the tag byte of the entry
    /// * 'config' - Controls how undecodable `Utf8` records are treated
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for an unknown tag or (with strict strings) an invalid
    /// string record, and [`crate::Error::OutOfBounds`] if the entry is truncated.
    pub fn read(parser: &mut Parser, config: &DecoderConfig) -> Result<Self> {
        let tag = ConstantTag::try_from(parser.read_be::<u8>()?)?;

        Ok(match tag {
            ConstantTag::Utf8 => RawEntry::Utf8(read_utf8(parser, config)?),
            ConstantTag::Integer => RawEntry::Integer(parser.read_be::<i32>()?),
            ConstantTag::Float => RawEntry::Float(parser.read_be::<f32>()?),
            ConstantTag::Long => RawEntry::Long(parser.read_be::<i64>()?),
            ConstantTag::Double => RawEntry::Double(parser.read_be::<f64>()?),
            ConstantTag::Class => RawEntry::Class {
                name_index: parser.read_be::<u16>()?,
            },
            ConstantTag::String => RawEntry::String {
                string_index: parser.read_be::<u16>()?,
            },
            ConstantTag::Fieldref => RawEntry::Fieldref {
                class_index: parser.read_be::<u16>()?,
                name_and_type_index: parser.read_be::<u16>()?,
            },
            ConstantTag::Methodref => RawEntry::Methodref {
                class_index: parser.read_be::<u16>()?,
                name_and_type_index: parser.read_be::<u16>()?,
            },
            ConstantTag::InterfaceMethodref => RawEntry::InterfaceMethodref {
                class_index: parser.read_be::<u16>()?,
                name_and_type_index: parser.read_be::<u16>()?,
            },
            ConstantTag::NameAndType => RawEntry::NameAndType {
                name_index: parser.read_be::<u16>()?,
                descriptor_index: parser.read_be::<u16>()?,
            },
        })
    }

    /// The tag this entry was read with.
    #[must_use]
    pub fn tag(&self) -> ConstantTag {
        match self {
            RawEntry::Utf8(_) => ConstantTag::Utf8,
            RawEntry::Integer(_) => ConstantTag::Integer,
            RawEntry::Float(_) => ConstantTag::Float,
            RawEntry::Long(_) => ConstantTag::Long,
            RawEntry::Double(_) => ConstantTag::Double,
            RawEntry::Class { .. } => ConstantTag::Class,
            RawEntry::String { .. } => ConstantTag::String,
            RawEntry::Fieldref { .. } => ConstantTag::Fieldref,
            RawEntry::Methodref { .. } => ConstantTag::Methodref,
            RawEntry::InterfaceMethodref { .. } => ConstantTag::InterfaceMethodref,
            RawEntry::NameAndType { .. } => ConstantTag::NameAndType,
        }
    }
}

fn read_utf8(parser: &mut Parser, config: &DecoderConfig) -> Result<String> {
    if config.strict_strings {
        return parser.read_prefixed_string_mutf8();
    }

    let offset = parser.pos();
    let bytes = parser.read_prefixed_bytes()?;
    match cesu8::from_java_cesu8(bytes) {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(_) => {
            warn!(
                "Invalid modified UTF-8 string at offset {}, decoding lossily",
                offset
            );
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Read the count field and every entry of a constant pool.
///
/// The returned table has exactly `count` slots. Slot 0 and the slot following each `Long` or
/// `Double` entry stay `None`. A wide entry in the last position simply ends the scan.
///
/// # Errors
/// Propagates the first error of [`RawEntry::read`]; no partial table is returned.
pub(crate) fn scan(parser: &mut Parser, config: &DecoderConfig) -> Result<Vec<Option<RawEntry>>> {
    let count = parser.read_be::<u16>()?;
    let mut entries: Vec<Option<RawEntry>> = vec![None; usize::from(count)];

    let mut index: usize = 1;
    while index < entries.len() {
        let offset = parser.pos();
        let entry = RawEntry::read(parser, config)?;
        let slots = usize::from(entry.tag().slots());
        trace!("cp[{}] @ {:#x}: {:?}", index, offset, entry);

        entries[index] = Some(entry);
        index += slots;
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::PoolBuilder, Error};

    #[test]
    fn read_every_shape() {
        #[rustfmt::skip]
        let data = [
            0x01, 0x00, 0x02, b'h', b'i',                               // Utf8 "hi"
            0x03, 0xFF, 0xFF, 0xFF, 0x85,                               // Integer -123
            0x04, 0x3F, 0xC0, 0x00, 0x00,                               // Float 1.5
            0x05, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,       // Long 1 << 32
            0x06, 0xBF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,       // Double -1.0
            0x07, 0x00, 0x01,                                           // Class #1
            0x08, 0x00, 0x01,                                           // String #1
            0x09, 0x00, 0x06, 0x00, 0x0C,                               // Fieldref
            0x0A, 0x00, 0x06, 0x00, 0x0C,                               // Methodref
            0x0B, 0x00, 0x06, 0x00, 0x0C,                               // InterfaceMethodref
            0x0C, 0x00, 0x01, 0x00, 0x01,                               // NameAndType
        ];
        let config = DecoderConfig::default();
        let mut parser = Parser::new(&data);

        let expected = [
            RawEntry::Utf8("hi".to_string()),
            RawEntry::Integer(-123),
            RawEntry::Float(1.5),
            RawEntry::Long(1 << 32),
            RawEntry::Double(-1.0),
            RawEntry::Class { name_index: 1 },
            RawEntry::String { string_index: 1 },
            RawEntry::Fieldref {
                class_index: 6,
                name_and_type_index: 12,
            },
            RawEntry::Methodref {
                class_index: 6,
                name_and_type_index: 12,
            },
            RawEntry::InterfaceMethodref {
                class_index: 6,
                name_and_type_index: 12,
            },
            RawEntry::NameAndType {
                name_index: 1,
                descriptor_index: 1,
            },
        ];

        for entry in expected {
            assert_eq!(RawEntry::read(&mut parser, &config).unwrap(), entry);
        }
        assert!(!parser.has_more_data());
    }

    #[test]
    fn scan_leaves_wide_slots_empty() {
        let data = PoolBuilder::new()
            .long(7)
            .utf8("after")
            .double(2.5)
            .build();
        let mut parser = Parser::new(&data);

        let entries = scan(&mut parser, &DecoderConfig::default()).unwrap();
        assert_eq!(entries.len(), 6);
        assert!(entries[0].is_none());
        assert_eq!(entries[1], Some(RawEntry::Long(7)));
        assert!(entries[2].is_none());
        assert_eq!(entries[3], Some(RawEntry::Utf8("after".to_string())));
        assert_eq!(entries[4], Some(RawEntry::Double(2.5)));
        assert!(entries[5].is_none());
        assert_eq!(parser.pos(), data.len());
    }

    #[test]
    fn scan_stops_after_last_entry() {
        let mut data = PoolBuilder::new().utf8("x").build();
        data.extend_from_slice(&[0xCA, 0xFE]);
        let mut parser = Parser::new(&data);

        let entries = scan(&mut parser, &DecoderConfig::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(parser.read_be::<u16>().unwrap(), 0xCAFE);
    }

    #[test]
    fn scan_rejects_unknown_tag() {
        let data = PoolBuilder::new().utf8("x").raw_bytes(&[0x02, 0x00]).build();
        let mut parser = Parser::new(&data);

        assert!(matches!(
            scan(&mut parser, &DecoderConfig::default()),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn scan_rejects_truncated_input() {
        // count 3, but only one entry present
        let data = [0x00, 0x03, 0x03, 0x00, 0x00, 0x00, 0x01];
        let mut parser = Parser::new(&data);
        assert!(matches!(
            scan(&mut parser, &DecoderConfig::default()),
            Err(Error::OutOfBounds { .. })
        ));

        let mut parser = Parser::new(&[0x00]);
        assert!(matches!(
            scan(&mut parser, &DecoderConfig::default()),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn lenient_strings() {
        let data = [0x01, 0x00, 0x02, b'a', 0xFF];

        let mut parser = Parser::new(&data);
        assert!(matches!(
            RawEntry::read(&mut parser, &DecoderConfig::strict()),
            Err(Error::Malformed { .. })
        ));

        let mut parser = Parser::new(&data);
        let entry = RawEntry::read(&mut parser, &DecoderConfig::lenient()).unwrap();
        assert_eq!(entry, RawEntry::Utf8("a\u{FFFD}".to_string()));
        assert!(!parser.has_more_data());
    }
}
