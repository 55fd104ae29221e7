use std::collections::{BTreeMap, HashMap};
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, Reviews};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::fallback::resolve;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::remote::RemoteCatalog;

pub(crate) const BOOK_NOT_FOUND: &str = "The provided book does not exist";
pub(crate) const AUTHOR_NOT_FOUND: &str = "The provided author does not exist";
pub(crate) const TITLE_NOT_FOUND: &str = "The provided book title does not exist";
pub(crate) const REVIEWS_NOT_FOUND: &str = "Book or reviews not found";

// CatalogServiceImpl answers every query from the remote catalog when one is configured and
// falls back to the local book repository, which is the source of truth.
pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    remote_catalog: Option<Box<dyn RemoteCatalog>>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>,
                      remote_catalog: Option<Box<dyn RemoteCatalog>>) -> Self {
        Self {
            book_repository,
            remote_catalog,
        }
    }

    async fn local_all_books(&self) -> LibraryResult<BTreeMap<String, BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(|b| (b.isbn.to_string(), BookDto::from(b))).collect())
    }

    async fn local_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        match self.book_repository.get(isbn).await {
            Ok(book) => Ok(BookDto::from(&book)),
            Err(LibraryError::NotFound { .. }) => Err(LibraryError::not_found(BOOK_NOT_FOUND)),
            Err(err) => Err(err),
        }
    }

    async fn local_books_by(&self, field: &str, value: &str, missing: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(
            &HashMap::from([(field.to_string(), value.to_string())])).await?;
        if res.is_empty() {
            return Err(LibraryError::not_found(missing));
        }
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn local_reviews(&self, isbn: &str) -> LibraryResult<Reviews> {
        match self.book_repository.get(isbn).await {
            Ok(BookEntity { reviews: Some(reviews), .. }) => Ok(reviews),
            Ok(_) | Err(LibraryError::NotFound { .. }) => Err(LibraryError::not_found(REVIEWS_NOT_FOUND)),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_all_books(&self) -> LibraryResult<BTreeMap<String, BookDto>> {
        resolve("find_all_books",
                self.remote_catalog.as_ref().map(|r| r.fetch_all_books()),
                self.local_all_books()).await
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        resolve("find_book_by_isbn",
                self.remote_catalog.as_ref().map(|r| r.fetch_book_by_isbn(isbn)),
                self.local_book_by_isbn(isbn)).await
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        resolve("find_books_by_author",
                self.remote_catalog.as_ref().map(|r| r.fetch_books_by_author(author)),
                self.local_books_by("author", author, AUTHOR_NOT_FOUND)).await
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        resolve("find_books_by_title",
                self.remote_catalog.as_ref().map(|r| r.fetch_books_by_title(title)),
                self.local_books_by("title", title, TITLE_NOT_FOUND)).await
    }

    async fn find_reviews(&self, isbn: &str) -> LibraryResult<Reviews> {
        resolve("find_reviews",
                self.remote_catalog.as_ref().map(|r| r.fetch_reviews(isbn)),
                self.local_reviews(isbn)).await
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}
