use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct GetBooksCommandRequest {}

// books are keyed by isbn in the response body
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetBooksCommandResponse {
    pub books: BTreeMap<String, BookDto>,
}

impl GetBooksCommandResponse {
    pub fn new(books: BTreeMap<String, BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<GetBooksCommandRequest, GetBooksCommandResponse> for GetBooksCommand {
    async fn execute(&self, _req: GetBooksCommandRequest) -> Result<GetBooksCommandResponse, CommandError> {
        self.catalog_service.find_all_books()
            .await.map_err(CommandError::from).map(GetBooksCommandResponse::new)
    }
}
