use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// BookCriteria selects the field matched exactly against the catalog
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BookCriteria {
    Author(String),
    Title(String),
}

#[derive(Debug)]
pub(crate) struct FindBooksCommandRequest {
    pub(crate) criteria: BookCriteria,
}

impl FindBooksCommandRequest {
    pub fn by_author(author: &str) -> Self {
        Self {
            criteria: BookCriteria::Author(author.to_string()),
        }
    }

    pub fn by_title(title: &str) -> Self {
        Self {
            criteria: BookCriteria::Title(title.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    async fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let res = match &req.criteria {
            BookCriteria::Author(author) => self.catalog_service.find_books_by_author(author.as_str()).await,
            BookCriteria::Title(title) => self.catalog_service.find_books_by_title(title.as_str()).await,
        };
        res.map_err(CommandError::from).map(FindBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<FindBooksCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should create service");
                FindBooksCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_find_books_by_author() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(FindBooksCommandRequest::by_author("Dante Alighieri")).await.expect("should find books");
        assert_eq!(1, res.books.len());
        assert_eq!("The Divine Comedy", res.books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_run_find_books_by_title() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(FindBooksCommandRequest::by_title("Le Père Goriot")).await.expect("should find books");
        assert_eq!(1, res.books.len());
        assert_eq!("9", res.books[0].isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_find_books_without_match() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(FindBooksCommandRequest::by_title("the divine comedy")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        let res = cmd.execute(FindBooksCommandRequest::by_author("Dante")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
