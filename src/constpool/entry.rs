//! Resolved constant pool entries.
//!
//! These are the typed values a [`crate::ConstantPool`] hands out. Every cross-reference is
//! already followed: a `Methodref` holds its owning class and its name-and-type directly, not
//! their indices. Shared targets are reference counted, so an entry referenced by many others is
//! materialized once.

use std::{fmt, sync::Arc};

use crate::constpool::{
    render::{java_double_to_string, java_float_to_string, string_to_java_literal},
    ConstantTag,
};

/// A reference-counted `Utf8Info`
pub type Utf8InfoRc = Arc<Utf8Info>;
/// A reference-counted `ClassInfo`
pub type ClassInfoRc = Arc<ClassInfo>;
/// A reference-counted `StringInfo`
pub type StringInfoRc = Arc<StringInfo>;
/// A reference-counted `NameAndTypeInfo`
pub type NameAndTypeInfoRc = Arc<NameAndTypeInfo>;
/// A reference-counted `MemberRefInfo`
pub type MemberRefInfoRc = Arc<MemberRefInfo>;

/// `CONSTANT_Utf8`: a decoded string. Names, descriptors and string literal contents all live
/// in entries of this kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Utf8Info {
    /// The decoded text
    pub value: String,
}

/// `CONSTANT_Class`: a class or interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassInfo {
    /// The binary name with `/` package separators replaced by `.`, e.g. `java.lang.Object`.
    /// Array classes keep their descriptor form, e.g. `[Ljava.lang.String;`.
    pub name: String,
}

/// `CONSTANT_String`: a `java.lang.String` literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StringInfo {
    /// The literal's content, unescaped
    pub value: String,
}

/// `CONSTANT_NameAndType`: a member name paired with its descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NameAndTypeInfo {
    /// Field or method name, e.g. `<init>`
    pub name: Utf8InfoRc,
    /// Field or method descriptor, e.g. `(Ljava/lang/String;)V`
    pub descriptor: Utf8InfoRc,
}

/// `CONSTANT_Fieldref`, `CONSTANT_Methodref` or `CONSTANT_InterfaceMethodref`.
///
/// All three share one shape; which one it is follows from the [`ConstantEntry`] variant that
/// holds it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberRefInfo {
    /// The class or interface declaring the member
    pub class: ClassInfoRc,
    /// The member's name and descriptor
    pub name_and_type: NameAndTypeInfoRc,
}

/// A fully resolved constant pool entry, one variant per tag.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantEntry {
    /// `CONSTANT_Utf8` (1)
    Utf8(Utf8InfoRc),
    /// `CONSTANT_Integer` (3)
    Integer(i32),
    /// `CONSTANT_Float` (4)
    Float(f32),
    /// `CONSTANT_Long` (5)
    Long(i64),
    /// `CONSTANT_Double` (6)
    Double(f64),
    /// `CONSTANT_Class` (7)
    Class(ClassInfoRc),
    /// `CONSTANT_String` (8)
    String(StringInfoRc),
    /// `CONSTANT_Fieldref` (9)
    Fieldref(MemberRefInfoRc),
    /// `CONSTANT_Methodref` (10)
    Methodref(MemberRefInfoRc),
    /// `CONSTANT_InterfaceMethodref` (11)
    InterfaceMethodref(MemberRefInfoRc),
    /// `CONSTANT_NameAndType` (12)
    NameAndType(NameAndTypeInfoRc),
}

impl ConstantEntry {
    /// The tag this entry was decoded from.
    #[must_use]
    pub fn tag(&self) -> ConstantTag {
        match self {
            ConstantEntry::Utf8(_) => ConstantTag::Utf8,
            ConstantEntry::Integer(_) => ConstantTag::Integer,
            ConstantEntry::Float(_) => ConstantTag::Float,
            ConstantEntry::Long(_) => ConstantTag::Long,
            ConstantEntry::Double(_) => ConstantTag::Double,
            ConstantEntry::Class(_) => ConstantTag::Class,
            ConstantEntry::String(_) => ConstantTag::String,
            ConstantEntry::Fieldref(_) => ConstantTag::Fieldref,
            ConstantEntry::Methodref(_) => ConstantTag::Methodref,
            ConstantEntry::InterfaceMethodref(_) => ConstantTag::InterfaceMethodref,
            ConstantEntry::NameAndType(_) => ConstantTag::NameAndType,
        }
    }

    /// The variant name, e.g. `"Class"`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }
}

impl fmt::Display for Utf8Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for StringInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&string_to_java_literal(&self.value))
    }
}

impl fmt::Display for NameAndTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.descriptor)
    }
}

impl fmt::Display for MemberRefInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.name_and_type)
    }
}

impl fmt::Display for ConstantEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.type_name())?;
        match self {
            ConstantEntry::Utf8(info) => write!(f, "{info}"),
            ConstantEntry::Integer(value) => write!(f, "{value}"),
            ConstantEntry::Float(value) => f.write_str(&java_float_to_string(*value)),
            ConstantEntry::Long(value) => write!(f, "{value}L"),
            ConstantEntry::Double(value) => write!(f, "{}D", java_double_to_string(*value)),
            ConstantEntry::Class(info) => write!(f, "{info}"),
            ConstantEntry::String(info) => write!(f, "{info}"),
            ConstantEntry::Fieldref(info)
            | ConstantEntry::Methodref(info)
            | ConstantEntry::InterfaceMethodref(info) => write!(f, "{info}"),
            ConstantEntry::NameAndType(info) => write!(f, "{info}"),
        }
    }
}
