//! Deciding which files and archive entries become documents.

use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::CorpusError;

/// Include pattern used when none are configured.
pub const DEFAULT_INCLUDE: &str = "**/*.txt";

/// Documents above this size are skipped unless configured otherwise.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Archive metadata directory written by macOS.
const MACOS_METADATA_DIR: &str = "__MACOSX";

/// Include/exclude globs plus the fixed skip rules for metadata and binaries.
///
/// Paths are matched relative to the source root.
#[derive(Debug, Clone)]
pub struct DocumentFilter {
    /// A path must match at least one of these.
    include: GlobSet,
    /// A path matching any of these is skipped.
    exclude: GlobSet,
    /// Size cap for a single document.
    max_document_bytes: u64,
}

impl Default for DocumentFilter {
    fn default() -> Self {
        let mut include = GlobSetBuilder::new();
        if let Ok(glob) = Glob::new(DEFAULT_INCLUDE) {
            include.add(glob);
        }
        Self {
            include: include.build().unwrap_or_else(|_| GlobSet::empty()),
            exclude: GlobSet::empty(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl DocumentFilter {
    /// Compiles include and exclude patterns.
    pub fn new<S: AsRef<str>>(
        include: &[S],
        exclude: &[S],
        max_document_bytes: u64,
    ) -> Result<Self, CorpusError> {
        Ok(Self {
            include: compile_set(include)?,
            exclude: compile_set(exclude)?,
            max_document_bytes,
        })
    }

    /// Returns the size cap for a single document.
    pub fn max_document_bytes(&self) -> u64 {
        self.max_document_bytes
    }

    /// Checks whether a relative path should be loaded.
    pub fn accepts(&self, rel_path: &Path) -> bool {
        if is_metadata(rel_path) || is_binary_file(rel_path) {
            return false;
        }
        self.include.is_match(rel_path) && !self.exclude.is_match(rel_path)
    }

    /// Checks whether a document of `size` bytes is within the cap.
    pub fn within_limit(&self, size: u64) -> bool {
        size <= self.max_document_bytes
    }
}

/// Compiles a list of globs into a set.
fn compile_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, CorpusError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|source| CorpusError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| CorpusError::InvalidPattern {
        pattern: "<combined patterns>".to_string(),
        source,
    })
}

/// True for hidden components (`.DS_Store`, `.git`, ...) and `__MACOSX`.
pub(crate) fn is_metadata(rel_path: &Path) -> bool {
    rel_path.components().any(|component| match component {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|s| s.starts_with('.') || s == MACOS_METADATA_DIR),
        _ => false,
    })
}

/// Checks if a file is likely binary based on extension.
fn is_binary_file(path: &Path) -> bool {
    const BINARY_EXTENSIONS: &[&str] = &[
        // Images
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "tif", "psd", "heic",
        // Audio and video
        "mp3", "wav", "flac", "ogg", "m4a", "mp4", "avi", "mkv", "mov", "webm",
        // Archives
        "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "iso", "dmg",
        // Executables and objects
        "exe", "dll", "so", "dylib", "bin", "class", "pyc", "o", "a", "wasm",
        // Office and fonts
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "ttf", "otf", "woff", "woff2",
        // Databases
        "db", "sqlite", "sqlite3",
    ];

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
