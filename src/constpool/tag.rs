use std::fmt;

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// The tag byte that precedes every constant pool entry and selects its shape.
///
/// Only the eleven tags of the classic class file format are known. Any other byte in tag
/// position makes the whole pool undecodable, since the width of the record that follows is
/// unknown and scanning cannot continue.
///
/// | Tag | Variant | Payload |
/// |-----|---------|---------|
/// | 1 | `Utf8` | `u16` length + modified UTF-8 bytes |
/// | 3 | `Integer` | `i32` |
/// | 4 | `Float` | `f32` |
/// | 5 | `Long` | `i64`, occupies two slots |
/// | 6 | `Double` | `f64`, occupies two slots |
/// | 7 | `Class` | `u16` name index |
/// | 8 | `String` | `u16` string index |
/// | 9 | `Fieldref` | `u16` class index, `u16` name-and-type index |
/// | 10 | `Methodref` | `u16` class index, `u16` name-and-type index |
/// | 11 | `InterfaceMethodref` | `u16` class index, `u16` name-and-type index |
/// | 12 | `NameAndType` | `u16` name index, `u16` descriptor index |
///
/// ## Reference
/// * [JVMS §4.4](https://docs.oracle.com/javase/specs/jvms/se8/html/jvms-4.html#jvms-4.4) - The Constant Pool
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount, IntoStaticStr)]
#[repr(u8)]
pub enum ConstantTag {
    /// `CONSTANT_Utf8` (1)
    Utf8 = 1,
    /// `CONSTANT_Integer` (3)
    Integer = 3,
    /// `CONSTANT_Float` (4)
    Float = 4,
    /// `CONSTANT_Long` (5)
    Long = 5,
    /// `CONSTANT_Double` (6)
    Double = 6,
    /// `CONSTANT_Class` (7)
    Class = 7,
    /// `CONSTANT_String` (8)
    String = 8,
    /// `CONSTANT_Fieldref` (9)
    Fieldref = 9,
    /// `CONSTANT_Methodref` (10)
    Methodref = 10,
    /// `CONSTANT_InterfaceMethodref` (11)
    InterfaceMethodref = 11,
    /// `CONSTANT_NameAndType` (12)
    NameAndType = 12,
}

impl ConstantTag {
    /// The raw tag byte as stored in the class file.
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The variant name, e.g. `"Methodref"`. Used in error messages and listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Number of index slots an entry with this tag occupies.
    ///
    /// `Long` and `Double` take two; the second slot is reserved and never addressable.
    #[must_use]
    pub fn slots(self) -> u16 {
        match self {
            ConstantTag::Long | ConstantTag::Double => 2,
            _ => 1,
        }
    }
}

impl TryFrom<u8> for ConstantTag {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => ConstantTag::Utf8,
            3 => ConstantTag::Integer,
            4 => ConstantTag::Float,
            5 => ConstantTag::Long,
            6 => ConstantTag::Double,
            7 => ConstantTag::Class,
            8 => ConstantTag::String,
            9 => ConstantTag::Fieldref,
            10 => ConstantTag::Methodref,
            11 => ConstantTag::InterfaceMethodref,
            12 => ConstantTag::NameAndType,
            _ => return Err(malformed_error!("Invalid cp_info tag - {}", value)),
        })
    }
}

impl fmt::Display for ConstantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
