use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::repository::Queryable;
use crate::utils::date::serializer;

// UserEntity is a registered shop user. The password is kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserEntity {
    pub username: String,
    pub password: String,
    #[serde(with = "serializer")]
    pub registered_at: NaiveDateTime,
}

impl UserEntity {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            registered_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for UserEntity {
    fn id(&self) -> String {
        self.username.to_string()
    }
}

impl Queryable for UserEntity {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(self.username.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::repository::Queryable;
    use crate::users::domain::model::UserEntity;

    #[tokio::test]
    async fn test_should_build_user() {
        let user = UserEntity::new("alice", "secret");
        assert_eq!("alice", user.id().as_str());
        assert_eq!(Some("alice"), user.field("username"));
        assert_eq!(None, user.field("password"));
    }
}
