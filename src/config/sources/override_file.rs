//! Override file source: a flat YAML mapping of setting name to text value.
//!
//! ```yaml
//! backend: s3
//! gc_interval: "60"
//! insecure: true
//! ```
//!
//! Scalars of any YAML kind are kept as their text; coercion happens later
//! against the settings table. Nested mappings or sequences make the document
//! malformed.

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::{Path, PathBuf};

/// Decoded override entries, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideDocument {
    entries: Vec<(String, String)>,
}

impl OverrideDocument {
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode YAML text. Blank text is an empty document.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Decode raw file contents. Bytes that are not UTF-8 make the document malformed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_yaml::Error> {
        let text = std::str::from_utf8(bytes).map_err(<serde_yaml::Error as de::Error>::custom)?;
        Self::parse(text)
    }
}

impl<'de> Deserialize<'de> for OverrideDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = OverrideDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a flat mapping of setting names to scalar values")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OverrideDocument::default())
            }

            // Comment-only documents arrive as a missing value.
            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OverrideDocument::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(OverrideDocument { entries })
            }
        }

        deserializer.deserialize_any(DocumentVisitor)
    }
}

/// Make `path` absolute without touching the filesystem.
///
/// `None` means there is no usable source (e.g. an empty path); the caller
/// falls back to defaults.
pub fn locate(path: &Path) -> Option<PathBuf> {
    std::path::absolute(path)
        .ok()
        .map(|p| dunce::simplified(&p).to_path_buf())
}

/// Read the source's raw bytes; decoding is left to [`OverrideDocument::from_bytes`].
pub fn read(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}
