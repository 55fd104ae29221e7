use std::collections::BTreeMap;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::books::dto::{BookDto, Reviews};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::remote::RemoteCatalog;

// HttpRemoteCatalog talks to a bookshop-compatible catalog over HTTP:
// GET /booksdata, /isbn/{isbn}, /author/{author}, /title/{title} and /review/{isbn}
#[derive(Debug, Clone)]
pub(crate) struct HttpRemoteCatalog {
    client: Client,
    base_url: Url,
}

impl HttpRemoteCatalog {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| LibraryError::validation(
            format!("invalid remote catalog url {:?}: {}", base_url, err).as_str(), None))?;
        if base_url.cannot_be_a_base() {
            return Err(LibraryError::validation(
                format!("remote catalog url {:?} cannot be a base", base_url.as_str()).as_str(), None));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> LibraryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LibraryError::validation("remote catalog url cannot be a base", None))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, segments: &[&str]) -> LibraryResult<T> {
        let url = self.endpoint(segments)?;
        debug!("fetching {}", url);
        let res = self.client.get(url.clone()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(LibraryError::unavailable(
                format!("remote catalog returned {} for {}", status, url).as_str(),
                Some(status.as_u16().to_string()), status.is_server_error()));
        }
        Ok(res.json::<T>().await?)
    }
}

fn non_empty<T>(records: Vec<T>, what: &str) -> LibraryResult<Vec<T>> {
    if records.is_empty() {
        Err(LibraryError::not_found(format!("remote catalog has no {}", what).as_str()))
    } else {
        Ok(records)
    }
}

#[async_trait]
impl RemoteCatalog for HttpRemoteCatalog {
    async fn fetch_all_books(&self) -> LibraryResult<BTreeMap<String, BookDto>> {
        let books: BTreeMap<String, BookDto> = self.fetch(&["booksdata"]).await?;
        Ok(books.into_iter().map(|(isbn, book)| {
            let book = book.keyed(isbn.as_str());
            (isbn, book)
        }).collect())
    }

    async fn fetch_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book: BookDto = self.fetch(&["isbn", isbn]).await?;
        Ok(book.keyed(isbn))
    }

    async fn fetch_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        non_empty(self.fetch(&["author", author]).await?, "books for author")
    }

    async fn fetch_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        non_empty(self.fetch(&["title", title]).await?, "books for title")
    }

    async fn fetch_reviews(&self, isbn: &str) -> LibraryResult<Reviews> {
        self.fetch(&["review", isbn]).await
    }
}
