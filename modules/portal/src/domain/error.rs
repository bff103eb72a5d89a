use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no access code, credential, or guest match for the supplied login")]
    AuthorizationFailed,

    #[error("account '{name}' is blocked")]
    AccountBlocked { name: String },

    #[error("name must be at least {min_name} characters and password at least {min_password}")]
    CredentialsTooShort { min_name: usize, min_password: usize },

    #[error("name '{name}' is already registered")]
    NameTaken { name: String },

    #[error("not allowed to {action}")]
    Forbidden { action: &'static str },

    #[error("image embedding failed: {message}")]
    Image { message: String },
}

impl DomainError {
    pub fn account_blocked(name: impl Into<String>) -> Self {
        Self::AccountBlocked { name: name.into() }
    }

    pub fn credentials_too_short(min_name: usize, min_password: usize) -> Self {
        Self::CredentialsTooShort {
            min_name,
            min_password,
        }
    }

    pub fn name_taken(name: impl Into<String>) -> Self {
        Self::NameTaken { name: name.into() }
    }

    pub fn forbidden(action: &'static str) -> Self {
        Self::Forbidden { action }
    }

    pub fn image(message: impl Into<String>) -> Self {
        Self::Image {
            message: message.into(),
        }
    }
}
