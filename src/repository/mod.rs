//! Repository layer for book storage

pub mod books;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Book;

/// Main repository struct holding the in-memory book table
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct Repository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl Repository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
