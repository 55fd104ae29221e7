pub mod http_catalog;

use async_trait::async_trait;
use std::collections::BTreeMap;
use crate::books::dto::{BookDto, Reviews};
use crate::core::library::{LibraryError, LibraryResult};

// RemoteCatalog is an upstream catalog the query service consults before its own store
#[async_trait]
pub(crate) trait RemoteCatalog: Sync + Send {
    async fn fetch_all_books(&self) -> LibraryResult<BTreeMap<String, BookDto>>;
    async fn fetch_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn fetch_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn fetch_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn fetch_reviews(&self, isbn: &str) -> LibraryResult<Reviews>;
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LibraryError::serialization(
                format!("remote catalog body {:?}", err).as_str())
        } else {
            let reason = err.status().map(|s| s.as_u16().to_string());
            LibraryError::unavailable(
                format!("remote catalog request {:?}", err).as_str(), reason, err.is_timeout() || err.is_connect())
        }
    }
}
