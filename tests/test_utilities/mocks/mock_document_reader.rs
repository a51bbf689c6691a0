use sbom_enrich::prelude::*;

/// Mock DocumentReader for testing that serves fixed content
pub struct MockDocumentReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockDocumentReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, _source: &DocumentSource) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock document reader failure");
        }
        Ok(self.content.clone())
    }
}
