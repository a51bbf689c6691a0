/// PackageMetadata - descriptive metadata returned by a package registry
///
/// Both fields are independently optional: `None` means the registry
/// returned no data for that field, which is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Free-text package description
    pub description: Option<String>,
    /// SPDX-style license expression, e.g. "MIT OR Apache-2.0"
    pub licenses: Option<String>,
}

impl PackageMetadata {
    pub fn new(description: Option<String>, licenses: Option<String>) -> Self {
        Self {
            description,
            licenses,
        }
    }

    /// Whether the payload carries any usable field at all
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.licenses.is_none()
    }
}
