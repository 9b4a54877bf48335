use thiserror::Error;

/// Failure taxonomy for catalog lookups. All variants are folded into the
/// `error` field of a published view state at the controller boundary; none
/// propagate to the presentation layer as raised faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Product not found")]
    NotFound,
    #[error("{message}")]
    Source { message: String },
}

impl CatalogError {
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}
