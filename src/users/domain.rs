pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::users::dto::UserDto;

#[async_trait]
pub(crate) trait UserService: Sync + Send {
    async fn register(&self, user: &UserDto) -> LibraryResult<UserDto>;
    async fn is_registered(&self, username: &str) -> LibraryResult<bool>;
}
