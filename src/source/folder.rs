//! Plain-text documents read from a folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::{DocumentSource, SourceDocument};
use crate::config::IndexConfig;
use crate::error::{Result, ShabdaError};

/// Reads every file in a folder (not recursively) whose extension is
/// accepted by the configuration.
///
/// Documents are ordered by file name and identified by it. File contents
/// are decoded as UTF-8, replacing invalid sequences. A file that cannot be
/// read is logged and delivered with empty text; a directory entry that
/// cannot be listed is logged and skipped.
#[derive(Debug, Clone)]
pub struct FolderSource {
    root: PathBuf,
    config: IndexConfig,
}

impl FolderSource {
    pub fn new<P: Into<PathBuf>>(root: P, config: &IndexConfig) -> Self {
        FolderSource {
            root: root.into(),
            config: config.clone(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.accepts_extension(ext))
    }

    fn read_text(path: &Path) -> String {
        match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Accepted regular files among `entries`, sorted by file name.
    ///
    /// An entry that cannot be listed is logged and skipped.
    fn accepted_files<I>(&self, entries: I) -> Vec<(String, PathBuf)>
    where
        I: IntoIterator<Item = io::Result<PathBuf>>,
    {
        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Failed to list an entry of {}: {}", self.root.display(), e);
                    continue;
                }
            };
            if !path.is_file() || !self.accepts(&path) {
                debug!("Skipping {}", path.display());
                continue;
            }
            let Some(id) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
                continue;
            };
            files.push((id, path));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        files
    }
}

impl DocumentSource for FolderSource {
    fn documents(&self) -> Result<Vec<SourceDocument>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            ShabdaError::source(format!("cannot read folder {}: {}", self.root.display(), e))
        })?;

        Ok(self
            .accepted_files(entries.map(|entry| entry.map(|entry| entry.path())))
            .into_iter()
            .map(|(id, path)| {
                let text = Self::read_text(&path);
                SourceDocument { id, text }
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "folder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_accepted_files_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "सीता").unwrap();
        fs::write(dir.path().join("a.TXT"), "राम").unwrap();
        fs::write(dir.path().join("c.pdf"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let source = FolderSource::new(dir.path(), &IndexConfig::default());
        let documents = source.documents().unwrap();

        assert_eq!(
            documents,
            vec![
                SourceDocument::new("a.TXT", "राम"),
                SourceDocument::new("b.txt", "सीता"),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        let mut bytes = "राम ".as_bytes().to_vec();
        bytes.push(0xFF);
        fs::write(dir.path().join("a.txt"), bytes).unwrap();

        let source = FolderSource::new(dir.path(), &IndexConfig::default());
        let documents = source.documents().unwrap();

        assert_eq!(documents[0].text, "राम \u{FFFD}");
    }

    #[test]
    fn test_unlistable_entry_is_skipped() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "राम").unwrap();
        fs::write(&b, "सीता").unwrap();

        let source = FolderSource::new(dir.path(), &IndexConfig::default());
        let files = source.accepted_files(vec![
            Ok(b.clone()),
            Err(io::Error::other("entry vanished")),
            Ok(a.clone()),
        ]);

        assert_eq!(
            files,
            vec![("a.txt".to_string(), a), ("b.txt".to_string(), b)]
        );
    }

    #[test]
    fn test_missing_folder_is_a_source_error() {
        let dir = TempDir::new().unwrap();
        let source = FolderSource::new(dir.path().join("missing"), &IndexConfig::default());

        assert!(matches!(source.documents(), Err(ShabdaError::Source(_))));
    }

    #[test]
    fn test_configured_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "राम").unwrap();
        fs::write(dir.path().join("b.txt"), "सीता").unwrap();

        let config = IndexConfig {
            extensions: vec!["md".to_string()],
            ..IndexConfig::default()
        };
        let documents = FolderSource::new(dir.path(), &config).documents().unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "a.md");
    }
}
