use crate::error::{LabelError, Result};

/// Per-run label settings.
///
/// Built once from the command line and passed by reference into the
/// layout; nothing reads flags from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    version: String,
    include_outline: bool,
}

impl LabelConfig {
    /// Creates a config, rejecting an empty version string.
    ///
    /// Label text is drawn with the standard PDF fonts, which only cover
    /// WinAnsiEncoding (Latin-1 plus a few symbols). Other characters are
    /// accepted here but cannot be shown; the renderer logs a warning.
    pub fn new(version: impl Into<String>, include_outline: bool) -> Result<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(LabelError::EmptyVersion);
        }
        Ok(Self {
            version,
            include_outline,
        })
    }

    /// Version text as given, without parentheses.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the debug guide circles are drawn.
    pub fn include_outline(&self) -> bool {
        self.include_outline
    }
}
