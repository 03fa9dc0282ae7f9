/// The text being edited. There is exactly one per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorDocument {
    content: String,
    /// Number of accepted changes; reported in edit logs.
    revision: u64,
}

impl EditorDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            revision: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the text. Returns false (and keeps the revision) when unchanged.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content == self.content {
            return false;
        }
        self.content = content;
        self.revision += 1;
        true
    }
}
