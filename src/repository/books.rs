//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

impl Repository {
    /// List all books ordered by id
    pub async fn books_list(&self) -> Vec<Book> {
        let mut books = self.books.read().await.clone();
        // Stable: books sharing an id stay in insertion order
        books.sort_by_key(|book| book.id);
        books
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i32) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a book, assigning the next id when none was supplied.
    ///
    /// A non-zero id is stored as given, even when another book already holds it.
    pub async fn books_create(&self, mut book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if book.id == 0 {
            book.id = books
                .iter()
                .map(|b| b.id)
                .max()
                .unwrap_or(0)
                .checked_add(1)
                .ok_or_else(|| AppError::BadRequest("No id available".to_string()))?;
        }
        books.push(book.clone());
        Ok(book)
    }

    /// Overwrite the mutable fields of a book
    pub async fn books_update(&self, id: i32, fields: &BookFields) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        book.apply(fields);
        Ok(book.clone())
    }

    /// Delete book
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        books.remove(index);
        Ok(())
    }

    pub async fn books_is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}
