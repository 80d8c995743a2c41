use thiserror::Error;

/// Failure modes of the JWW decoder.
///
/// Every variant carries the byte offset at which the failure was detected.
/// A decode stops at the first error; there is no partial document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwwError {
    #[error("unexpected end of input at offset {offset} ({needed} more bytes required)")]
    UnexpectedEnd { offset: usize, needed: usize },

    #[error("invalid header at offset {offset}: {reason}")]
    InvalidHeader { offset: usize, reason: String },

    #[error("unknown entity tag {tag:?} at offset {offset}")]
    UnknownEntityTag { offset: usize, tag: String },

    /// Raised for structurally malformed string length prefixes only.
    /// Undecodable Shift-JIS content is replaced with U+FFFD instead.
    #[error("malformed string length prefix {len} at offset {offset}")]
    InvalidTextEncoding { offset: usize, len: usize },

    #[error("invalid entity at offset {offset}: {reason}")]
    InvalidEntity { offset: usize, reason: String },

    #[error("block insertion at offset {offset} references missing definition {number}")]
    MissingBlockDefinition { number: i32, offset: usize },

    #[error("embedded image {index} at offset {offset} declares {file_size} bytes past end of input")]
    InvalidImageTrailer {
        offset: usize,
        index: i32,
        file_size: i64,
    },

    /// Block definitions do not nest and every opened definition must be
    /// closed before the stream ends.
    #[error("unbalanced block definition at offset {offset}")]
    UnbalancedBlockDefinition { offset: usize },

    #[error("{what} limit exceeded at offset {offset}")]
    LimitExceeded { offset: usize, what: &'static str },
}

impl JwwError {
    /// Byte offset into the input at which the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEnd { offset, .. }
            | Self::InvalidHeader { offset, .. }
            | Self::UnknownEntityTag { offset, .. }
            | Self::InvalidTextEncoding { offset, .. }
            | Self::InvalidEntity { offset, .. }
            | Self::MissingBlockDefinition { offset, .. }
            | Self::InvalidImageTrailer { offset, .. }
            | Self::UnbalancedBlockDefinition { offset }
            | Self::LimitExceeded { offset, .. } => *offset,
        }
    }
}
