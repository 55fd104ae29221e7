use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// UserDto carries a user across the service boundary; the password never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct UserDto {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(with = "serializer")]
    pub registered_at: NaiveDateTime,
}

impl UserDto {
    pub(crate) fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            registered_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for UserDto {
    fn id(&self) -> String {
        self.username.to_string()
    }
}
