use std::{io, num::ParseIntError};

use thiserror::Error;

/// Failure of a whole deserialize call. No document is produced.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("File at location {path} is not a .obj file")]
    UnsupportedExtension { path: String },

    #[error("Failed to open {path}: {source}")]
    SourceNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FailedToRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The parser broke one of its own invariants; this is a bug, not bad input.
    #[error("Internal consistency error at line {line}: {detail}")]
    InternalInconsistency {
        line: usize,
        #[source]
        detail: InternalInconsistency,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalInconsistency {
    #[error("extracted {extracted} floats out of {expected} fields")]
    FloatCountMismatch { expected: usize, extracted: usize },

    #[error("extracted {extracted} indices out of {expected} sub-fields")]
    IndexCountMismatch { expected: usize, extracted: usize },

    #[error("extracted {extracted} vertex references out of {expected} fields")]
    VertexReferenceCountMismatch { expected: usize, extracted: usize },
}

/// Why a single statement was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("\"{keyword}\" expects {expected} components, found {found}")]
    WrongComponentCount {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("\"{0}\" is not a valid decimal number")]
    InvalidFloatComponent(String),

    #[error("invalid index in face: {0}")]
    InvalidSubComponentInFace(ParseIntError),

    #[error("face should have exactly 3 vertex references, found {0}")]
    WrongVertexReferenceCount(usize),

    #[error("vertex reference \"{token}\" has {found} sub-fields")]
    WrongSubComponentCount { token: String, found: usize },

    #[error(transparent)]
    Internal(#[from] InternalInconsistency),
}

/// A statement left out of the document, recorded when
/// [`ParseOptions::collect_diagnostics`](super::ParseOptions) is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStatement {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub reason: StatementError,
}
