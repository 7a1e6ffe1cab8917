//! Banner error types.

use thiserror::Error;

/// Everything that can go wrong while inserting or refreshing the banner.
///
/// All variants collapse to the same user-visible outcome: the banner keeps
/// showing whatever it already shows, and the failure is only logged.
#[derive(Debug, Error)]
pub enum BannerError {
    #[error("document is not available")]
    NoDocument,

    #[error("no insertion point for the banner")]
    NoInsertionPoint,

    #[error("missing banner element #{0}")]
    MissingElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("credentials endpoint returned status {0}")]
    Status(u16),

    #[error("unexpected credentials payload: {0}")]
    Parse(String),
}
