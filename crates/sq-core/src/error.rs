//! Engine-wide error types
//!
//! One taxonomy shared by every crate in the workspace. All variants are
//! fatal to the enclosing call and propagate unmodified to the caller;
//! nothing is retried internally. Pagination anomalies are deliberately
//! absent here: the runner logs and absorbs them.

use thiserror::Error;

/// Standard Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type for all query-engine operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// A required identifier or argument was empty, whitespace, or zero.
    /// Raised before any network call is made.
    #[error("missing mandatory parameter {name}: {reason}")]
    MissingParam { name: &'static str, reason: String },

    /// A property name used in select/where/sort/group has no entry in the
    /// property table of this resource type.
    #[error("unknown property {name:?} for resource type {resource}")]
    UnknownProperty {
        resource: &'static str,
        name: String,
    },

    /// The (preset, property) pair has no predicate mapping.
    #[error("preset {preset} cannot be used with property {property}: {reason}")]
    UnsupportedPreset {
        preset: String,
        property: String,
        reason: String,
    },

    /// Supplied arguments do not fit the preset's declared signature.
    #[error("invalid arguments for preset {preset}: {reason}")]
    InvalidArgs { preset: String, reason: String },

    /// The query API was misused: a second where clause, a re-run, an
    /// ambiguous combination of meta-parameters.
    #[error("query usage error: {0}")]
    Usage(String),

    /// A pre-fetched subset element could not be read as the expected
    /// resource kind.
    #[error("failed to parse subset element: {0}")]
    Parse(String),

    /// An error surfaced by the remote listing call. Never retried.
    #[error("cloud API error: {0}")]
    Api(#[from] ApiError),
}

/// Errors raised by the cloud collaborator (listing and get-by-id calls)
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("remote rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}
