use axum::{
    body::HttpBody,
    BoxError,
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use crate::catalog::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest, FindBooksCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_books_cmd::{GetBooksCommand, GetBooksCommandRequest, GetBooksCommandResponse};
use crate::catalog::command::get_reviews_cmd::{GetReviewsCommand, GetReviewsCommandRequest, GetReviewsCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

pub(crate) fn routes<B>() -> Router<AppState, B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/", get(find_all_books))
        .route("/isbn/:isbn", get(find_book_by_isbn))
        .route("/author/:author", get(find_books_by_author))
        .route("/title/:title", get(find_books_by_title))
        .route("/review/:isbn", get(find_reviews))
}

pub(crate) async fn find_all_books(
    State(state): State<AppState>) -> Result<Json<GetBooksCommandResponse>, ServerError> {
    let res = GetBooksCommand::new(state.catalog).execute(GetBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn.as_str());
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<FindBooksCommandResponse>, ServerError> {
    let req = FindBooksCommandRequest::by_author(author.as_str());
    let res = FindBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<FindBooksCommandResponse>, ServerError> {
    let req = FindBooksCommandRequest::by_title(title.as_str());
    let res = FindBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetReviewsCommandResponse>, ServerError> {
    let req = GetReviewsCommandRequest::new(isbn.as_str());
    let res = GetReviewsCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::controller::{AppState, build_router};
    use crate::core::domain::Configuration;
    use crate::users::factory::create_user_service;

    async fn app() -> Router {
        let state = AppState::build(&Configuration::new("test")).await.expect("should build state");
        build_router(state)
    }

    async fn app_with(books: &[BookEntity]) -> Router {
        let repo = create_book_repository(books).await.expect("should create repository");
        let users = create_user_service(&Configuration::new("test")).await;
        build_router(AppState::new(Arc::new(CatalogServiceImpl::new(repo, None)), users))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        get_from(app().await, uri).await
    }

    async fn get_from(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("should build request"))
            .await
            .expect("should respond");
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        (status, serde_json::from_slice(&body).expect("should be json"))
    }

    #[tokio::test]
    async fn test_should_list_all_books() {
        let (status, body) = get("/").await;
        assert_eq!(StatusCode::OK, status);
        let books = body.as_object().expect("should be keyed by isbn");
        assert_eq!(10, books.len());
        assert_eq!("Things Fall Apart", books["1"]["title"]);
    }

    #[tokio::test]
    async fn test_should_get_book_by_isbn() {
        let (status, body) = get("/isbn/3").await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"isbn": "3", "title": "The Divine Comedy", "author": "Dante Alighieri", "reviews": {}}), body);

        let (status, body) = get("/isbn/99").await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"message": "The provided book does not exist"}), body);
    }

    #[tokio::test]
    async fn test_should_get_books_by_author() {
        let (status, body) = get("/author/Jane%20Austen").await;
        assert_eq!(StatusCode::OK, status);
        let books = body.as_array().expect("should be an array");
        assert_eq!(1, books.len());
        assert_eq!("8", books[0]["isbn"]);

        let (status, body) = get("/author/jane%20austen").await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"message": "The provided author does not exist"}), body);
    }

    #[tokio::test]
    async fn test_should_get_books_by_title() {
        let (status, body) = get("/title/Fairy%20tales").await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Hans Christian Andersen", body[0]["author"]);

        let (status, body) = get("/title/Z").await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"message": "The provided book title does not exist"}), body);
    }

    #[tokio::test]
    async fn test_should_get_reviews() {
        let (status, body) = get("/review/1").await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({}), body);

        let (status, body) = get("/review/99").await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"message": "Book or reviews not found"}), body);
    }

    #[tokio::test]
    async fn test_should_not_find_reviews_without_reviews_field() {
        let books = [
            BookEntity::new("1", "T", "A").with_review("r1", "good"),
            BookEntity::new("2", "U", "B").without_reviews(),
        ];
        let (status, body) = get_from(app_with(&books).await, "/review/1").await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"r1": "good"}), body);

        let (status, body) = get_from(app_with(&books).await, "/review/2").await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"message": "Book or reviews not found"}), body);

        let (status, body) = get_from(app_with(&books).await, "/isbn/2").await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"isbn": "2", "title": "U", "author": "B"}), body);
    }
}
