//! Error types for the conversion pipeline

use std::path::PathBuf;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range of a line inside the config file
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum Img2SvgError {
    /// Image or config file is missing or unreadable
    #[error("cannot read '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not a recognizable image
    #[error("cannot decode image '{}': {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    /// A config line has the wrong number of fields or a bad coordinate
    #[error("{}:{line}: {message}", path.display())]
    MalformedConfig {
        path: PathBuf,
        line: usize,
        span: Span,
        message: String,
    },

    /// Output file could not be written
    #[error("cannot write '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Style file is unreadable or holds invalid values
    #[error("invalid style '{}': {message}", path.display())]
    Style { path: PathBuf, message: String },
}

impl Img2SvgError {
    /// Process exit status for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            Img2SvgError::FileAccess { .. } => 3,
            Img2SvgError::ImageDecode { .. } => 4,
            Img2SvgError::MalformedConfig { .. } => 5,
            Img2SvgError::FileWrite { .. } => 6,
            Img2SvgError::Style { .. } => 7,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// `source` is the text of the config file; only malformed config errors
    /// carry a span into it; every other kind falls back to its message.
    /// Spans are byte offsets, so earlier lines may hold any UTF-8 text.
    pub fn report(&self, source: &str) -> String {
        let Img2SvgError::MalformedConfig {
            path,
            line,
            span,
            message,
        } = self
        else {
            return self.to_string();
        };

        let filename = path.display().to_string();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename.as_str(), span.start)
            .with_message(format!("malformed region in {filename} on line {line}"))
            .with_label(
                Label::new((filename.as_str(), span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .with_note("expected: x<TAB>y<TAB>rx<TAB>ry<TAB>title<TAB>href")
            .with_config(
                Config::default()
                    .with_color(false)
                    .with_index_type(IndexType::Byte),
            )
            .finish()
            .write((filename.as_str(), Source::from(source)), &mut buf);

        match (written, String::from_utf8(buf)) {
            (Ok(()), Ok(text)) => text,
            _ => self.to_string(),
        }
    }
}
