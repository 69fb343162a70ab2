//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
///
/// Every field is optional on input; a zero `id` asks the store to assign one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub publisher: String,
    /// Publication year
    pub year: i32,
}

/// Mutable fields of a book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub author: String,
    pub title: String,
    pub publisher: String,
    pub year: i32,
}

impl From<Book> for BookFields {
    /// Drops the id; updates never change it
    fn from(book: Book) -> Self {
        Self {
            author: book.author,
            title: book.title,
            publisher: book.publisher,
            year: book.year,
        }
    }
}

impl Book {
    /// Overwrite everything but the id
    pub fn apply(&mut self, fields: &BookFields) {
        self.author = fields.author.clone();
        self.title = fields.title.clone();
        self.publisher = fields.publisher.clone();
        self.year = fields.year;
    }
}

/// Records inserted into an empty store at startup
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            author: "LEDUR, Cleverson Lopes".to_string(),
            title: "Programação Back End II".to_string(),
            publisher: "SAGAH".to_string(),
            year: 2019,
        },
        Book {
            id: 2,
            author: "FREITAS, Pedro H. Chagas [et al.]".to_string(),
            title: "Programação Back End III".to_string(),
            publisher: "SAGAH".to_string(),
            year: 2021,
        },
        Book {
            id: 3,
            author: "DEITEL, Paul J.".to_string(),
            title: "Ajax, RICH Internet Applications e desenvolvimento Web para programadores"
                .to_string(),
            publisher: "Pearson Prentice Hall".to_string(),
            year: 2008,
        },
    ]
}
