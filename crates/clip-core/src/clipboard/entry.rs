use super::TypeTag;

/// A single clipboard history entry: one payload and the format it was
/// captured in. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipEntry {
    type_tag: TypeTag,
    payload: Vec<u8>,
}

impl ClipEntry {
    pub fn new(type_tag: impl Into<TypeTag>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            type_tag: type_tag.into(),
            payload: payload.into(),
        }
    }

    /// Convenience constructor for UTF-8 text entries.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TypeTag::utf8_plain_text(), text.into().into_bytes())
    }

    pub fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn size_bytes(&self) -> usize {
        self.payload.len()
    }

    /// An empty payload means "nothing to capture".
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
