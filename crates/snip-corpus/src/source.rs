//! Document sources: directory trees, zip archives, and single files.

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

use snip_excerpt::Document;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{CorpusError, DocumentFilter, filter::is_metadata};

/// Produces the documents of a corpus.
pub trait DocumentSource {
    /// Loads every accepted document.
    fn documents(&self) -> Result<Vec<Document>, CorpusError>;
}

/// Opens the right source for `path`: an archive for `.zip` files, a tree
/// walk for directories, and a single document for any other file.
pub fn open_source(
    path: &Path,
    filter: DocumentFilter,
) -> Result<Box<dyn DocumentSource>, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_dir() {
        Ok(Box::new(DirectorySource::new(path, filter)))
    } else if is_zip(path) {
        Ok(Box::new(ZipSource::new(path, filter)))
    } else {
        Ok(Box::new(FileSource::new(path, filter.max_document_bytes())))
    }
}

/// Checks for a `.zip` extension, ignoring case.
fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Decodes bytes as UTF-8, replacing invalid sequences.
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Joins path components with `/` so ids are stable across platforms.
fn path_id(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walks a directory tree.
///
/// Document ids are paths relative to the root; results are sorted by id.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// Directory to walk.
    root: PathBuf,
    /// Which files to load.
    filter: DocumentFilter,
}

impl DirectorySource {
    /// Creates a source for the tree under `root`.
    pub fn new(root: impl Into<PathBuf>, filter: DocumentFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Result<Vec<Document>, CorpusError> {
        if !self.root.is_dir() {
            return Err(CorpusError::NotFound {
                path: self.root.clone(),
            });
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(rel_path) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if !self.filter.accepts(rel_path) {
                continue;
            }

            let id = path_id(rel_path);
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if !self.filter.within_limit(size) {
                warn!(
                    id = %id,
                    size,
                    limit = self.filter.max_document_bytes(),
                    "skipping oversized document"
                );
                continue;
            }

            let bytes = fs::read(entry.path()).map_err(|source| CorpusError::ReadFile {
                path: entry.path().to_path_buf(),
                source,
            })?;
            documents.push(Document::new(id, decode(&bytes)));
        }

        documents.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(root = %self.root.display(), count = documents.len(), "loaded directory");
        Ok(documents)
    }
}

/// Reads entries from a zip archive.
///
/// Document ids are entry names; results keep archive order.
#[derive(Debug, Clone)]
pub struct ZipSource {
    /// Path to the archive.
    path: PathBuf,
    /// Which entries to load.
    filter: DocumentFilter,
}

impl ZipSource {
    /// Creates a source for the archive at `path`.
    pub fn new(path: impl Into<PathBuf>, filter: DocumentFilter) -> Self {
        Self {
            path: path.into(),
            filter,
        }
    }

    /// Maps a zip error to a corpus error for this archive.
    fn archive_error(&self, source: zip::result::ZipError) -> CorpusError {
        CorpusError::Archive {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentSource for ZipSource {
    fn documents(&self) -> Result<Vec<Document>, CorpusError> {
        let file = File::open(&self.path).map_err(|source| CorpusError::ReadFile {
            path: self.path.clone(),
            source,
        })?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| self.archive_error(e))?;

        let limit = self.filter.max_document_bytes();
        let mut documents = Vec::new();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).map_err(|e| self.archive_error(e))?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            // Entries escaping the archive root are never loaded.
            let Some(rel_path) = entry.enclosed_name() else {
                warn!(entry = %name, "skipping unsafe archive entry");
                continue;
            };
            if !self.filter.accepts(&rel_path) {
                continue;
            }
            if !self.filter.within_limit(entry.size()) {
                warn!(entry = %name, size = entry.size(), limit, "skipping oversized document");
                continue;
            }

            let mut bytes = Vec::new();
            entry
                .take(limit.saturating_add(1))
                .read_to_end(&mut bytes)
                .map_err(|source| CorpusError::ReadEntry {
                    path: self.path.clone(),
                    entry: name.clone(),
                    source,
                })?;
            if !self.filter.within_limit(bytes.len() as u64) {
                warn!(entry = %name, limit, "skipping oversized document");
                continue;
            }
            documents.push(Document::new(name, decode(&bytes)));
        }

        debug!(archive = %self.path.display(), count = documents.len(), "loaded archive");
        Ok(documents)
    }
}

/// A single file named directly.
///
/// The id is the file name. Include patterns do not apply; the size cap does.
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Path to the file.
    path: PathBuf,
    /// Size cap in bytes.
    max_document_bytes: u64,
}

impl FileSource {
    /// Creates a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>, max_document_bytes: u64) -> Self {
        Self {
            path: path.into(),
            max_document_bytes,
        }
    }
}

impl DocumentSource for FileSource {
    fn documents(&self) -> Result<Vec<Document>, CorpusError> {
        let read_error = |source| CorpusError::ReadFile {
            path: self.path.clone(),
            source,
        };
        let size = fs::metadata(&self.path).map_err(read_error)?.len();
        let id = self.path.file_name().map_or_else(
            || path_id(&self.path),
            |name| name.to_string_lossy().into_owned(),
        );
        if size > self.max_document_bytes || is_metadata(Path::new(&id)) {
            warn!(id = %id, size, "skipping document");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(read_error)?;
        Ok(vec![Document::new(id, decode(&bytes))])
    }
}
