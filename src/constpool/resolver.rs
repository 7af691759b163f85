//! Second pass of constant pool decoding: reference resolution.
//!
//! Entries may reference entries with higher indices, so references cannot be followed while
//! scanning. Instead every slot starts out holding its [`RawEntry`] and is resolved on demand:
//! resolving a slot resolves the slots it references first, and the result is memoized so each
//! entry is materialized exactly once no matter how many others point at it.
//!
//! While a slot is being resolved it is marked [`Slot::InProgress`]. Reaching such a slot again
//! means the references form a loop, which the class file format forbids; it is reported as
//! [`Error::CircularReference`] instead of recursing forever.
//!
//! Every followed reference is type-checked against the variant the referencing entry requires
//! (a `Class` needs a `Utf8` name, a `Methodref` needs a `Class` and a `NameAndType`, ...).

use std::sync::Arc;

use log::trace;

use crate::{
    constpool::{
        entry::{
            ClassInfo, ClassInfoRc, ConstantEntry, MemberRefInfo, MemberRefInfoRc,
            NameAndTypeInfo, NameAndTypeInfoRc, StringInfo, Utf8Info, Utf8InfoRc,
        },
        DecoderConfig, RawEntry,
    },
    Error, Result,
};

/// Resolution state of one index.
#[derive(Debug)]
enum Slot {
    /// Index 0, or the reserved slot after a `Long`/`Double`
    Empty,
    /// Scanned but not yet resolved
    Unresolved(RawEntry),
    /// Currently being resolved further up the call stack
    InProgress,
    /// Done
    Resolved(ConstantEntry),
}

/// Turns the raw scan of a pool into fully resolved entries.
pub(crate) struct Resolver<'a> {
    slots: Vec<Slot>,
    count: u16,
    config: &'a DecoderConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the output of [`crate::constpool::raw::scan`].
    pub(crate) fn new(raw: Vec<Option<RawEntry>>, config: &'a DecoderConfig) -> Self {
        let count = u16::try_from(raw.len()).unwrap_or(u16::MAX);
        let slots = raw
            .into_iter()
            .map(|entry| match entry {
                Some(raw) => Slot::Unresolved(raw),
                None => Slot::Empty,
            })
            .collect();

        Resolver {
            slots,
            count,
            config,
        }
    }

    /// Resolve every scanned slot and return the finished table.
    ///
    /// The returned vector has the same length as the raw scan; empty slots stay `None`.
    ///
    /// # Errors
    /// Returns the first reference, type, or structural error encountered. No partial table is
    /// produced.
    pub(crate) fn resolve_all(mut self) -> Result<Vec<Option<ConstantEntry>>> {
        for index in 1..self.count {
            if matches!(self.slots[usize::from(index)], Slot::Unresolved(_)) {
                self.resolve(index, 0)?;
            }
        }

        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Slot::Resolved(entry) => Ok(Some(entry)),
                Slot::Empty => Ok(None),
                Slot::Unresolved(_) | Slot::InProgress => Err(malformed_error!(
                    "Constant pool entry {} was left unresolved",
                    index
                )),
            })
            .collect()
    }

    /// Resolve `index`, reusing a previous result if there is one.
    fn resolve(&mut self, index: u16, depth: usize) -> Result<ConstantEntry> {
        if depth > self.config.max_resolution_depth {
            return Err(Error::RecursionLimit(self.config.max_resolution_depth));
        }

        if index == 0 || index >= self.count {
            return Err(Error::InvalidIndex {
                index,
                count: self.count,
            });
        }

        let position = usize::from(index);
        let raw = match std::mem::replace(&mut self.slots[position], Slot::InProgress) {
            Slot::Unresolved(raw) => raw,
            Slot::Resolved(entry) => {
                self.slots[position] = Slot::Resolved(entry.clone());
                return Ok(entry);
            }
            Slot::Empty => {
                self.slots[position] = Slot::Empty;
                return Err(Error::UnusableEntry(index));
            }
            Slot::InProgress => return Err(Error::CircularReference(index)),
        };

        let entry = self.cook(raw, depth)?;
        trace!("cp[{}] resolved to {}", index, entry);

        self.slots[position] = Slot::Resolved(entry.clone());
        Ok(entry)
    }

    /// Build the typed entry for `raw`, resolving whatever it references.
    fn cook(&mut self, raw: RawEntry, depth: usize) -> Result<ConstantEntry> {
        let depth = depth + 1;

        Ok(match raw {
            RawEntry::Utf8(value) => ConstantEntry::Utf8(Arc::new(Utf8Info { value })),
            RawEntry::Integer(value) => ConstantEntry::Integer(value),
            RawEntry::Float(value) => ConstantEntry::Float(value),
            RawEntry::Long(value) => ConstantEntry::Long(value),
            RawEntry::Double(value) => ConstantEntry::Double(value),
            RawEntry::Class { name_index } => {
                let name = self.resolve_utf8(name_index, depth)?;
                ConstantEntry::Class(Arc::new(ClassInfo {
                    name: name.value.replace('/', "."),
                }))
            }
            RawEntry::String { string_index } => {
                let value = self.resolve_utf8(string_index, depth)?;
                ConstantEntry::String(Arc::new(StringInfo {
                    value: value.value.clone(),
                }))
            }
            RawEntry::Fieldref {
                class_index,
                name_and_type_index,
            } => ConstantEntry::Fieldref(self.member_ref(
                class_index,
                name_and_type_index,
                depth,
            )?),
            RawEntry::Methodref {
                class_index,
                name_and_type_index,
            } => ConstantEntry::Methodref(self.member_ref(
                class_index,
                name_and_type_index,
                depth,
            )?),
            RawEntry::InterfaceMethodref {
                class_index,
                name_and_type_index,
            } => ConstantEntry::InterfaceMethodref(self.member_ref(
                class_index,
                name_and_type_index,
                depth,
            )?),
            RawEntry::NameAndType {
                name_index,
                descriptor_index,
            } => ConstantEntry::NameAndType(Arc::new(NameAndTypeInfo {
                name: self.resolve_utf8(name_index, depth)?,
                descriptor: self.resolve_utf8(descriptor_index, depth)?,
            })),
        })
    }

    fn member_ref(
        &mut self,
        class_index: u16,
        name_and_type_index: u16,
        depth: usize,
    ) -> Result<MemberRefInfoRc> {
        Ok(Arc::new(MemberRefInfo {
            class: self.resolve_class(class_index, depth)?,
            name_and_type: self.resolve_name_and_type(name_and_type_index, depth)?,
        }))
    }

    fn resolve_utf8(&mut self, index: u16, depth: usize) -> Result<Utf8InfoRc> {
        match self.resolve(index, depth)? {
            ConstantEntry::Utf8(info) => Ok(info),
            other => Err(Error::TypeMismatch {
                index,
                expected: "Utf8",
                found: other.type_name(),
            }),
        }
    }

    fn resolve_class(&mut self, index: u16, depth: usize) -> Result<ClassInfoRc> {
        match self.resolve(index, depth)? {
            ConstantEntry::Class(info) => Ok(info),
            other => Err(Error::TypeMismatch {
                index,
                expected: "Class",
                found: other.type_name(),
            }),
        }
    }

    fn resolve_name_and_type(&mut self, index: u16, depth: usize) -> Result<NameAndTypeInfoRc> {
        match self.resolve(index, depth)? {
            ConstantEntry::NameAndType(info) => Ok(info),
            other => Err(Error::TypeMismatch {
                index,
                expected: "NameAndType",
                found: other.type_name(),
            }),
        }
    }
}
