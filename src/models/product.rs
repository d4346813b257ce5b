//! Product wire model
//!
//! The shape exchanged over HTTP and returned by the service layer.

use serde::{Deserialize, Serialize};

/// A product as seen by API clients.
///
/// The id is chosen by the caller and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Product {
    /// Creates a new Product
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
