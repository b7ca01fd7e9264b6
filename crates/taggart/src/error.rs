//! Error types for tag rendering.

use thiserror::Error;

/// Errors that can occur when rendering tags from dynamic input.
///
/// The typed API ([`Attr`](crate::Attr), the generated tag methods) cannot
/// fail. Only the entry points that accept loosely-typed input return this.
#[derive(Debug, Error)]
pub enum TagError {
    /// An attribute contribution that is neither a literal fragment nor a mapping.
    #[error("unsupported attribute contribution kind: {kind}")]
    UnsupportedAttribute { kind: &'static str },

    /// Tag name not present in the catalog.
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    /// Substitution pattern failed to compile.
    #[error("invalid substitution pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Substitution was selected without a replacement or callback.
    #[error("substitution requires a replacement or a callback")]
    MissingReplacement,

    /// Substitution replacement of a kind that cannot replace text.
    #[error("unsupported substitution replacement kind: {kind}")]
    InvalidReplacement { kind: &'static str },

    /// Translation list with a range whose start sorts after its end.
    #[error("invalid range \"{start}-{end}\" in translation list")]
    InvalidRange { start: char, end: char },

    /// Text that does not name an end-tag mode.
    #[error("invalid end-tag mode '{0}', expected 'closed', 'open' or 'auto'")]
    InvalidEndTagMode(String),
}

/// Result type for tag operations.
pub type Result<T> = std::result::Result<T, TagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TagError::UnsupportedAttribute { kind: "number" };
        assert_eq!(
            err.to_string(),
            "unsupported attribute contribution kind: number"
        );
    }

    #[test]
    fn test_from_regex_error() {
        let re_err = regex::Regex::new("(").unwrap_err();
        let err: TagError = re_err.into();
        assert!(matches!(err, TagError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("invalid substitution pattern"));
    }
}
