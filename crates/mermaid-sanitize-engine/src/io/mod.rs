use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {path}")]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("File is not valid UTF-8: {path}: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse classification of [`IoError`] for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    IoFailure,
    Decode,
}

impl ErrorKind {
    /// Kinds that are reported to the user rather than treated as a crash.
    pub fn is_handled(self) -> bool {
        matches!(self, ErrorKind::FileNotFound | ErrorKind::IoFailure)
    }
}

impl IoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IoError::NotFound { .. } => ErrorKind::FileNotFound,
            IoError::InvalidUtf8 { .. } => ErrorKind::Decode,
            IoError::Write { .. } => ErrorKind::IoFailure,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            IoError::NotFound { path, .. }
            | IoError::InvalidUtf8 { path, .. }
            | IoError::Write { path, .. } => path,
        }
    }
}

/// How a sanitized document replaces the original file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a temporary file next to the target and rename it over the
    /// original. The original survives a failed write. Falls back to
    /// [`WriteMode::InPlace`] when the directory refuses the temp file or
    /// the target belongs to another owner, and fails wherever an in-place
    /// write would be refused.
    #[default]
    Atomic,
    /// Truncate the target and write into it. A failed write can leave the
    /// file empty or partially written.
    InPlace,
}

/// Read a whole document as UTF-8 text.
///
/// Any failure to open or read the file is reported as [`IoError::NotFound`];
/// the file is never touched on this path.
pub fn read_document(path: &Path) -> Result<String, IoError> {
    let bytes = fs::read(path).map_err(|source| IoError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| IoError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path` byte for byte, replacing what was there.
pub fn write_document(path: &Path, content: &str, mode: WriteMode) -> Result<(), IoError> {
    let result = match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::InPlace => fs::write(path, content),
    };

    result.map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    // Write through symlinks rather than replacing them.
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    // The rename must not succeed where a plain write would be refused.
    let existing = match OpenOptions::new().write(true).open(&target) {
        Ok(file) => Some(file.metadata()?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = match tempfile::Builder::new()
        .prefix(".mermaid-sanitize-")
        .tempfile_in(dir)
    {
        Ok(temp) => temp,
        Err(e) => {
            log::debug!("no temp file in {}: {e}, writing in place", dir.display());
            return fs::write(&target, content);
        }
    };

    if let Some(metadata) = &existing {
        if !same_owner(metadata, &temp.as_file().metadata()?) {
            log::debug!("{} has another owner, writing in place", target.display());
            drop(temp);
            return fs::write(&target, content);
        }
        // Temp files are created owner-only; keep the original's mode instead.
        fs::set_permissions(temp.path(), metadata.permissions())?;
    }

    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn same_owner(a: &fs::Metadata, b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.uid() == b.uid() && a.gid() == b.gid()
}

#[cfg(not(unix))]
fn same_owner(_: &fs::Metadata, _: &fs::Metadata) -> bool {
    true
}
