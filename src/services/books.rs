//! Book catalog service

use crate::{
    error::AppResult,
    models::book::{seed_books, Book, BookFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    pub async fn create(&self, book: Book) -> AppResult<Book> {
        let book = self.repository.books_create(book).await?;
        tracing::info!("Created book id={}", book.id);
        Ok(book)
    }

    pub async fn update(&self, id: i32, fields: &BookFields) -> AppResult<Book> {
        let book = self.repository.books_update(id, fields).await?;
        tracing::info!("Updated book id={}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// Insert the initial catalog when the store holds no book yet
    pub async fn seed_if_empty(&self) -> AppResult<usize> {
        if !self.repository.books_is_empty().await {
            return Ok(0);
        }
        let books = seed_books();
        let count = books.len();
        for book in books {
            self.repository.books_create(book).await?;
        }
        tracing::info!("Seeded {} books", count);
        Ok(count)
    }
}
