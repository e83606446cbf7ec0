//! Allow-list of recognized extensions.
//!
//! The default list is embedded at build time from `data/ext.txt`. A list file
//! on disk can replace it (see `config`).

use crate::error::ExtCountError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Newline-delimited list shipped with the binary.
const BUNDLED: &str = include_str!("../data/ext.txt");

/// Immutable set of lowercase, dot-prefixed extensions (e.g. `.png`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    extensions: HashSet<String>,
}

impl AllowList {
    /// Parse the bundled list.
    pub fn bundled() -> Result<Self, ExtCountError> {
        Self::from_reader(BUNDLED.as_bytes())
    }

    /// Parse a list file from disk. Open and read failures (including invalid
    /// UTF-8) are reported as `ResourceLoad` with the path in the message.
    pub fn from_path(path: &Path) -> Result<Self, ExtCountError> {
        let with_path = |e: io::Error| {
            ExtCountError::ResourceLoad(io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        };
        let file = File::open(path).map_err(with_path)?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            ExtCountError::ResourceLoad(inner) => with_path(inner),
            other => other,
        })
    }

    /// Each non-blank line is trimmed and lower-cased. A missing leading dot is
    /// not added, so such a line can never match.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ExtCountError> {
        let mut extensions = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(ExtCountError::ResourceLoad)?;
            let ext = line.trim();
            if ext.is_empty() {
                continue;
            }
            extensions.insert(ext.to_lowercase());
        }
        Ok(Self { extensions })
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.extensions.contains(ext)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    /// Builds a list from already-normalized entries; used by tests and callers
    /// that assemble a list in memory.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            extensions: iter.into_iter().map(Into::into).collect(),
        }
    }
}
