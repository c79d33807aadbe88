//! The sanitize pipeline: load, strip emoji, quote labels, persist.

use crate::emoji::strip_emoji;
use crate::io::{IoError, WriteMode, read_document, write_document};
use crate::labels::{Delimiter, quote_labels};
use std::path::{Path, PathBuf};

pub use crate::io::ErrorKind;

pub type SanitizeError = IoError;

/// Which passes run and how the result is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    pub strip_emoji: bool,
    pub quote_square: bool,
    pub quote_curly: bool,
    pub write_mode: WriteMode,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            strip_emoji: true,
            quote_square: true,
            quote_curly: true,
            write_mode: WriteMode::default(),
        }
    }
}

/// How much each pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassCounts {
    pub emoji_removed: usize,
    pub square_quoted: usize,
    pub curly_quoted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub text: String,
    pub counts: PassCounts,
}

/// Outcome of a successful [`Sanitizer::sanitize_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeReport {
    pub path: PathBuf,
    pub counts: PassCounts,
    /// Whether the written content differs from what was read.
    pub changed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    options: SanitizeOptions,
}

impl Sanitizer {
    pub fn new(options: SanitizeOptions) -> Self {
        Self { options }
    }

    /// Run the enabled passes in order: emoji, square labels, curly labels.
    pub fn sanitize_str(&self, content: &str) -> Sanitized {
        let mut text = content.to_string();
        let mut counts = PassCounts::default();

        if self.options.strip_emoji {
            let stripped = strip_emoji(&text);
            counts.emoji_removed = stripped.removed;
            text = stripped.text;
        }

        if self.options.quote_square {
            let quoted = quote_labels(&text, Delimiter::Square);
            counts.square_quoted = quoted.quoted;
            text = quoted.text;
        }

        if self.options.quote_curly {
            let quoted = quote_labels(&text, Delimiter::Curly);
            counts.curly_quoted = quoted.quoted;
            text = quoted.text;
        }

        log::debug!(
            "removed {} emoji, quoted {} square and {} curly labels",
            counts.emoji_removed,
            counts.square_quoted,
            counts.curly_quoted
        );

        Sanitized { text, counts }
    }

    /// Sanitize the file at `path` in place.
    ///
    /// A load failure never touches the file. The file is rewritten even
    /// when nothing changed.
    pub fn sanitize_file(&self, path: &Path) -> Result<SanitizeReport, SanitizeError> {
        let original = read_document(path)?;
        let sanitized = self.sanitize_str(&original);
        let changed = sanitized.text != original;

        write_document(path, &sanitized.text, self.options.write_mode)?;
        log::info!("wrote {} (changed: {changed})", path.display());

        Ok(SanitizeReport {
            path: path.to_path_buf(),
            counts: sanitized.counts,
            changed,
        })
    }
}

/// Sanitize `path` with every pass enabled and an atomic write.
pub fn sanitize(path: &Path) -> Result<SanitizeReport, SanitizeError> {
    Sanitizer::default().sanitize_file(path)
}
