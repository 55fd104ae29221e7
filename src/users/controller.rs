use axum::{
    body::{Bytes, HttpBody},
    BoxError,
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::users::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest, RegisterUserCommandResponse};

pub(crate) fn routes<B>() -> Router<AppState, B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/register", post(register_user))
}

// the body is parsed by hand so that any malformed payload is a plain 400
pub(crate) async fn register_user(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<RegisterUserCommandResponse>, ServerError> {
    let req: RegisterUserCommandRequest = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    let res = RegisterUserCommand::new(state.users).execute(req).await?;
    Ok(Json(res))
}
