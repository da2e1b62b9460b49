//! Thread article retrieval.
//!
//! A thread's content path `P` maps to the resource
//! `assets/data/threads/<P>.md` under the site root. Sources resolve that
//! locator to raw text; `fetch_thread_content` applies the processing step.

use crate::catalog::ContentPath;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONTENT_PREFIX: &str = "assets/data/threads";
pub const CONTENT_SUFFIX: &str = ".md";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content path '{0}' does not stay inside the content tree")]
    InvalidPath(String),
    #[error("content not found at {locator}")]
    NotFound { locator: String },
    #[error("reading {locator}")]
    Io {
        locator: String,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    /// True when the resource is absent (as opposed to unreadable).
    pub fn is_missing(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

/// Where raw article text comes from.
pub trait ContentSource {
    /// Read the resource at `locator` (already validated, `/`-separated).
    fn fetch_raw(&self, locator: &str) -> Result<String, ContentError>;
}

/// Resolve a content path to its resource locator.
pub fn content_locator(path: &ContentPath) -> Result<String, ContentError> {
    let raw = path.as_str();
    if raw.is_empty()
        || raw.starts_with('/')
        || raw.contains('\\')
        || raw
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(ContentError::InvalidPath(raw.to_string()));
    }
    Ok(format!("{CONTENT_PREFIX}/{raw}{CONTENT_SUFFIX}"))
}

/// Fetch and process the article behind `path`.
///
/// Whitespace-only resources count as missing.
pub fn fetch_thread_content<S>(source: &S, path: &ContentPath) -> Result<String, ContentError>
where
    S: ContentSource + ?Sized,
{
    let locator = content_locator(path)?;
    debug!(%locator, "fetching thread content");
    let raw = source.fetch_raw(&locator)?;
    let processed = process_markdown(&raw);
    if processed.is_empty() {
        return Err(ContentError::NotFound { locator });
    }
    Ok(processed)
}

/// Trim surrounding whitespace and rejoin lines with `\n`.
///
/// Line content, including indentation, is kept verbatim.
pub fn process_markdown(content: &str) -> String {
    content.trim().lines().collect::<Vec<_>>().join("\n")
}

/// Reads resources from a directory on disk.
#[derive(Clone, Debug)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsContentSource {
    fn fetch_raw(&self, locator: &str) -> Result<String, ContentError> {
        let path = locator
            .split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ContentError::NotFound {
                locator: locator.to_string(),
            }),
            Err(source) => Err(ContentError::Io {
                locator: locator.to_string(),
                source,
            }),
        }
    }
}

/// In-memory resources keyed by locator.
#[derive(Clone, Debug, Default)]
pub struct MemoryContentSource {
    files: BTreeMap<String, String>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the article for `content_path`.
    pub fn insert(&mut self, content_path: &str, text: impl Into<String>) -> &mut Self {
        self.files.insert(
            format!("{CONTENT_PREFIX}/{content_path}{CONTENT_SUFFIX}"),
            text.into(),
        );
        self
    }
}

impl ContentSource for MemoryContentSource {
    fn fetch_raw(&self, locator: &str) -> Result<String, ContentError> {
        self.files
            .get(locator)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                locator: locator.to_string(),
            })
    }
}
