use std::error::Error as _;
use thiserror::Error;

use crate::resolvers::ResolveError;

/// Failures that can happen while answering a single sub-query.
///
/// Empty input, empty result sets and degenerate splits are not errors;
/// they are rendered as placeholders and never reach this type.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("resolver '{resolver}' failed")]
    Resolver {
        resolver: String,
        #[source]
        source: ResolveError,
    },

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("query did not complete within {timeout_ms}ms")]
    DeadlineExceeded { timeout_ms: u64 },

    #[error("internal error: {0}")]
    Internal(String),
}

impl QueryError {
    /// Full failure text, including every underlying cause, for the
    /// diagnostic block shown to the caller.
    pub fn detail(&self) -> String {
        let mut detail = format!("QueryError: {self}");
        let mut source = self.source();
        while let Some(cause) = source {
            detail.push_str("\n  caused by: ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}
