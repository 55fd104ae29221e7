pub mod service;

use async_trait::async_trait;
use std::collections::BTreeMap;
use crate::books::dto::{BookDto, Reviews};
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_all_books(&self) -> LibraryResult<BTreeMap<String, BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_reviews(&self, isbn: &str) -> LibraryResult<Reviews>;
}
