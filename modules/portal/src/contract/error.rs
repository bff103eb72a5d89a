use thiserror::Error;

use crate::domain::error::DomainError;

/// Errors safe to expose to embedders of the portal.
///
/// Every variant is non-fatal: the originating form stays editable and the
/// action can be resubmitted. [`PortalError::user_message`] carries the
/// short localized text shown inline next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("authentication failed")]
    Authentication,

    #[error("account is blocked")]
    Blocked,

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("internal error")]
    Internal,
}

impl PortalError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Localized inline text for the login/registration forms.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Authentication => "ОШИБКА АВТОРИЗАЦИИ.",
            Self::Blocked => "АККАУНТ ЗАБЛОКИРОВАН.",
            Self::Validation { message } => message,
            Self::Internal => "ВНУТРЕННЯЯ ОШИБКА.",
        }
    }
}

impl From<DomainError> for PortalError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AuthorizationFailed => Self::Authentication,
            DomainError::AccountBlocked { .. } => Self::Blocked,
            DomainError::CredentialsTooShort { .. } => {
                Self::validation("КОРОТКИЙ НИК/ПАРОЛЬ.")
            }
            DomainError::NameTaken { .. } => Self::validation("НИК ЗАНЯТ."),
            DomainError::Forbidden { .. } => Self::validation("НЕДОСТАТОЧНО ПРАВ."),
            DomainError::Image { .. } => Self::Internal,
        }
    }
}
