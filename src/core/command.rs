use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
    },
}

impl CommandError {
    // message is what gets reported back to the HTTP caller
    pub fn message(&self) -> &str {
        match self {
            CommandError::DuplicateKey { message } => message,
            CommandError::NotFound { message } => message,
            CommandError::Runtime { message } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message } => message,
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::CurrentlyUnavailable { message, .. } => {
                CommandError::Runtime { message }
            }
            LibraryError::Validation { message, .. } => {
                CommandError::Validation { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, .. } => {
                CommandError::Runtime { message }
            }
        }
    }
}
