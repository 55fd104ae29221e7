use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Json;
use axum::body::HttpBody;
use axum::{BoxError, Router};
use serde::{Deserialize, Serialize};
use crate::catalog;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::users;
use crate::users::domain::UserService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) users: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>, users: Arc<dyn UserService>) -> AppState {
        AppState {
            catalog,
            users,
        }
    }

    // build wires the services from configuration; the catalog and user list live as long as the state
    pub async fn build(config: &Configuration) -> LibraryResult<AppState> {
        let catalog = catalog::factory::create_catalog_service(config).await?;
        let users = users::factory::create_user_service(config).await;
        Ok(AppState::new(catalog, users))
    }
}

pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .merge(users::controller::routes())
        .merge(catalog::controller::routes())
        .with_state(state)
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<MessageResponse>);

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(MessageResponse::new(format!("{}", err).as_str())))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::DuplicateKey { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(MessageResponse::new(err.message())))
    }
}
