use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};
use crate::users::domain::UserService;
use crate::users::dto::UserDto;

pub(crate) const CREDENTIALS_REQUIRED: &str = "Username and password required.";
pub(crate) const USER_REGISTERED: &str = "User successfully registered. Now you can login";

pub(crate) struct RegisterUserCommand {
    user_service: Arc<dyn UserService>,
}

impl RegisterUserCommand {
    pub(crate) fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

// fields are optional here so a missing one is reported as a bad request rather than a parse error
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegisterUserCommandRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterUserCommandRequest {
    #[cfg(test)]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    pub fn build_user(&self) -> LibraryResult<UserDto> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);
        match (present(&self.username), present(&self.password)) {
            (Some(username), Some(password)) => Ok(UserDto::new(username.as_str(), password.as_str())),
            _ => Err(LibraryError::validation(CREDENTIALS_REQUIRED, None)),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterUserCommandResponse {
    pub message: String,
}

impl RegisterUserCommandResponse {
    pub fn new() -> Self {
        Self {
            message: USER_REGISTERED.to_string(),
        }
    }
}

#[async_trait]
impl Command<RegisterUserCommandRequest, RegisterUserCommandResponse> for RegisterUserCommand {
    async fn execute(&self, req: RegisterUserCommandRequest) -> Result<RegisterUserCommandResponse, CommandError> {
        let user = req.build_user()?;
        self.user_service.register(&user).await.map_err(CommandError::from).map(|_| RegisterUserCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::users::command::register_user_cmd::{CREDENTIALS_REQUIRED, RegisterUserCommand, RegisterUserCommandRequest, USER_REGISTERED};
    use crate::users::factory;

    async fn command() -> RegisterUserCommand {
        RegisterUserCommand::new(factory::create_user_service(&Configuration::new("test")).await)
    }

    #[tokio::test]
    async fn test_should_run_register_user() {
        let cmd = command().await;
        let res = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await.expect("should register user");
        assert_eq!(USER_REGISTERED, res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_register_twice() {
        let cmd = command().await;
        let _ = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await.expect("should register user");
        let res = cmd.execute(RegisterUserCommandRequest::new("alice", "other")).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_register_without_credentials() {
        let cmd = command().await;
        let requests = [
            RegisterUserCommandRequest::default(),
            RegisterUserCommandRequest { username: Some("bob".to_string()), password: None },
            RegisterUserCommandRequest { username: None, password: Some("pw".to_string()) },
            RegisterUserCommandRequest::new("bob", ""),
            RegisterUserCommandRequest::new("", "pw"),
        ];
        for req in requests {
            match cmd.execute(req).await {
                Err(CommandError::Validation { message, .. }) => assert_eq!(CREDENTIALS_REQUIRED, message.as_str()),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }
}
