use std::fmt;
use std::ops::Range;

/// All errors produced by the folio compiler.
#[derive(Debug)]
pub struct FolioError {
    pub kind: ErrorKind,
    pub span: Option<Range<usize>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Lexer encountered an unrecognized character/sequence.
    #[error("unrecognized token: {0}")]
    UnrecognizedToken(String),
    /// Parser expected one thing, got another.
    #[error("expected {expected}, got {got}")]
    UnexpectedToken { expected: String, got: String },
    /// Parser reached end of input unexpectedly.
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String },
    /// A `style:` value that names no known preset.
    #[error("unknown style preset '{0}' (expected gradient-1 .. gradient-4)")]
    UnknownPreset(String),
    /// A block is missing a property it cannot do without.
    #[error("{block} is missing required property '{field}'")]
    MissingField { block: String, field: String },
    /// Strict mode: warnings were promoted to errors.
    #[error("{} warning(s) treated as errors: {}", .0.len(), .0.join("; "))]
    Strict(Vec<String>),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// General message.
    #[error("{0}")]
    Message(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(span) = &self.span {
            write!(f, " (at byte {}..{})", span.start, span.end)?;
        }

        Ok(())
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e),
            ErrorKind::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ErrorKind> for FolioError {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, span: None }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e).into()
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        ErrorKind::Json(e).into()
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

/// Shorthand constructors.
impl FolioError {
    pub fn unexpected_token(expected: &str, got: &str, span: Range<usize>) -> Self {
        Self {
            kind: ErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                got: got.to_string(),
            },
            span: Some(span),
        }
    }

    pub fn unexpected_eof(expected: &str) -> Self {
        ErrorKind::UnexpectedEof {
            expected: expected.to_string(),
        }
        .into()
    }

    pub fn unknown_preset(name: &str, span: Option<Range<usize>>) -> Self {
        Self {
            kind: ErrorKind::UnknownPreset(name.to_string()),
            span,
        }
    }

    pub fn missing_field(block: &str, field: &str, span: Option<Range<usize>>) -> Self {
        Self {
            kind: ErrorKind::MissingField {
                block: block.to_string(),
                field: field.to_string(),
            },
            span,
        }
    }

    /// General parse/lowering error with a message.
    pub fn parse(msg: &str) -> Self {
        ErrorKind::Message(msg.to_string()).into()
    }

    /// Same as [`FolioError::parse`] but pointing at a source location.
    pub fn at(msg: &str, span: Range<usize>) -> Self {
        Self {
            kind: ErrorKind::Message(msg.to_string()),
            span: Some(span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_span() {
        let err = FolioError::unexpected_token("'{'", "string", 4..9);
        assert_eq!(err.to_string(), "expected '{', got string (at byte 4..9)");
    }

    #[test]
    fn strict_lists_every_warning() {
        let err: FolioError = ErrorKind::Strict(vec!["a".into(), "b".into()]).into();
        assert_eq!(err.to_string(), "2 warning(s) treated as errors: a; b");
    }
}
