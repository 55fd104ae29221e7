use std::collections::HashMap;
use async_trait::async_trait;
use tracing::warn;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, USER_REGISTERED};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::users::domain::UserService;
use crate::users::domain::model::UserEntity;
use crate::users::dto::UserDto;
use crate::users::repository::UserRepository;

pub(crate) const USER_EXISTS: &str = "User already exists!";

pub(crate) struct UserServiceImpl {
    stage: String,
    user_repository: Box<dyn UserRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl UserServiceImpl {
    pub(crate) fn new(config: &Configuration, user_repository: Box<dyn UserRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            stage: config.stage.to_string(),
            user_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, user: &UserDto) -> LibraryResult<UserDto> {
        if self.is_registered(user.username.as_str()).await? {
            return Err(LibraryError::duplicate_key(USER_EXISTS));
        }
        let event = DomainEvent::new(
            USER_REGISTERED, "users", user.username.as_str(),
            &HashMap::from([("stage".to_string(), self.stage.to_string())]), user)?;
        // a concurrent registration can still win between the check and the insert
        match self.user_repository.create(&UserEntity::from(user)).await {
            Err(LibraryError::DuplicateKey { .. }) => return Err(LibraryError::duplicate_key(USER_EXISTS)),
            other => other.map(|_| ())?,
        }
        // the user is stored at this point, so a lost event must not fail the registration
        if let Err(err) = self.events_publisher.publish(&event).await {
            warn!("failed to publish {} for {}: {}", event.name, event.key, err);
        }
        Ok(user.clone())
    }

    async fn is_registered(&self, username: &str) -> LibraryResult<bool> {
        match self.user_repository.get(username).await {
            Ok(_) => Ok(true),
            Err(LibraryError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> Self {
        Self {
            username: other.username.to_string(),
            password: other.password.to_string(),
            registered_at: other.registered_at,
        }
    }
}

impl From<&UserDto> for UserEntity {
    fn from(other: &UserDto) -> Self {
        Self {
            username: other.username.to_string(),
            password: other.password.to_string(),
            registered_at: other.registered_at,
        }
    }
}
