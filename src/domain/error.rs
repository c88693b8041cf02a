//! Error types shared by the editor, its ports and its adapters

use thiserror::Error;

use super::product::{ProductField, ProductId};

/// A route segment that is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid product identifier: '{0}'")]
pub struct InvalidProductId(pub String);

/// Errors raised while applying a field change to the draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Numeric input that cannot be read as a number
    #[error("Field '{field}' expects a number, got '{input}'")]
    NotANumber { field: ProductField, input: String },

    /// Input name that does not match any draft field
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    /// Inputs are disabled while a load or save is outstanding
    #[error("Editor is busy")]
    Busy,
}

/// Errors reported by a [`ProductService`](super::ports::ProductService)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No product with this identifier
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Backend answered with a non-success status
    #[error("Backend responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Request never got an answer
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be read as a product
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
