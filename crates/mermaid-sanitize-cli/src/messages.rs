use mermaid_sanitize_config::Locale;
use mermaid_sanitize_engine::IoError;
use std::path::Path;

/// User-facing text, printed to standard output.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn usage(&self, program: &str) -> String {
        match self.locale {
            Locale::En => format!("Usage: {program} <file>"),
            Locale::Ja => format!("使い方: {program} <ファイル名>"),
        }
    }

    pub fn not_found(&self, path: &Path) -> String {
        let path = path.display();
        match self.locale {
            Locale::En => format!("Error: file '{path}' not found."),
            Locale::Ja => format!("エラー: ファイル '{path}' が見つかりません。"),
        }
    }

    pub fn write_failed(&self, detail: &dyn std::error::Error) -> String {
        match self.locale {
            Locale::En => format!("Error: failed to write file: {detail}"),
            Locale::Ja => format!("エラー: ファイルの書き込みに失敗しました: {detail}"),
        }
    }

    pub fn done(&self, path: &Path) -> String {
        let path = path.display();
        match self.locale {
            Locale::En => format!("Sanitized '{path}'."),
            Locale::Ja => format!("ファイル '{path}' の整形が完了しました。"),
        }
    }

    /// Message for an error the run reports instead of failing on.
    pub fn failure(&self, err: &IoError) -> String {
        match err {
            IoError::Write { source, .. } => self.write_failed(source),
            other => self.not_found(other.path()),
        }
    }
}
