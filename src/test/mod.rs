//! Factories for crafting constant pool byte streams in unit tests.

/// Assembles the bytes of a constant pool section, count field included.
///
/// Each entry method appends one record and returns the builder, so pools read top to bottom
/// in index order. The count field is derived from the slots used unless overridden.
pub struct PoolBuilder {
    body: Vec<u8>,
    slots: u16,
    count: Option<u16>,
}

impl PoolBuilder {
    pub fn new() -> Self {
        PoolBuilder {
            body: Vec::new(),
            slots: 1,
            count: None,
        }
    }

    /// Index the next appended entry will receive.
    pub fn next_index(&self) -> u16 {
        self.slots
    }

    pub fn utf8(mut self, value: &str) -> Self {
        let encoded = cesu8::to_java_cesu8(value);
        self.body.push(1);
        self.body
            .extend_from_slice(&u16::try_from(encoded.len()).unwrap().to_be_bytes());
        self.body.extend_from_slice(&encoded);
        self.slots += 1;
        self
    }

    pub fn integer(mut self, value: i32) -> Self {
        self.body.push(3);
        self.body.extend_from_slice(&value.to_be_bytes());
        self.slots += 1;
        self
    }

    pub fn float(mut self, value: f32) -> Self {
        self.body.push(4);
        self.body.extend_from_slice(&value.to_be_bytes());
        self.slots += 1;
        self
    }

    pub fn long(mut self, value: i64) -> Self {
        self.body.push(5);
        self.body.extend_from_slice(&value.to_be_bytes());
        self.slots += 2;
        self
    }

    pub fn double(mut self, value: f64) -> Self {
        self.body.push(6);
        self.body.extend_from_slice(&value.to_be_bytes());
        self.slots += 2;
        self
    }

    pub fn class(self, name_index: u16) -> Self {
        self.with_indices(7, &[name_index])
    }

    pub fn string(self, string_index: u16) -> Self {
        self.with_indices(8, &[string_index])
    }

    pub fn fieldref(self, class_index: u16, name_and_type_index: u16) -> Self {
        self.with_indices(9, &[class_index, name_and_type_index])
    }

    pub fn methodref(self, class_index: u16, name_and_type_index: u16) -> Self {
        self.with_indices(10, &[class_index, name_and_type_index])
    }

    pub fn interface_methodref(self, class_index: u16, name_and_type_index: u16) -> Self {
        self.with_indices(11, &[class_index, name_and_type_index])
    }

    pub fn name_and_type(self, name_index: u16, descriptor_index: u16) -> Self {
        self.with_indices(12, &[name_index, descriptor_index])
    }

    /// Append arbitrary bytes as if they were a single-slot entry.
    pub fn raw_bytes(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self.slots += 1;
        self
    }

    /// Force the count field instead of deriving it.
    pub fn count(mut self, count: u16) -> Self {
        self.count = Some(count);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let count = self.count.unwrap_or(self.slots);
        let mut data = Vec::with_capacity(self.body.len() + 2);
        data.extend_from_slice(&count.to_be_bytes());
        data.extend_from_slice(&self.body);
        data
    }

    fn with_indices(mut self, tag: u8, indices: &[u16]) -> Self {
        self.body.push(tag);
        for index in indices {
            self.body.extend_from_slice(&index.to_be_bytes());
        }
        self.slots += 1;
        self
    }
}
