//! Data models for the books server

pub mod book;
pub mod principal;

pub use book::{Book, BookFields};
pub use principal::Principal;
