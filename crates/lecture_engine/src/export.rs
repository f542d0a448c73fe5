use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lecture_logging::lecture_info;
use tempfile::NamedTempFile;

use crate::filename::sanitize_filename;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create export directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Saves strings as `.txt` files in one export directory.
///
/// Contents are written byte-for-byte through a temp file in the same
/// directory, then renamed over the target: a reader sees either the previous
/// export or the new one, never a partial file. Only the filename is cleaned
/// up, and an existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct TextExporter {
    dir: PathBuf,
}

impl TextExporter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn export(&self, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
        self.prepare_dir()?;
        let target = self.dir.join(sanitize_filename(filename));
        let write_err = |source: io::Error| ExportError::Write {
            path: target.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file_mut().sync_all().map_err(write_err)?;
        tmp.persist(&target).map_err(|err| write_err(err.error))?;

        lecture_info!("Exported {} bytes to {:?}", content.len(), target);
        Ok(target)
    }

    fn prepare_dir(&self) -> Result<(), ExportError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ExportError::NotADirectory(self.dir.clone())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(&self.dir)
                .map_err(|source| ExportError::CreateDir {
                    path: self.dir.clone(),
                    source,
                }),
            Err(source) => Err(ExportError::CreateDir {
                path: self.dir.clone(),
                source,
            }),
        }
    }
}
