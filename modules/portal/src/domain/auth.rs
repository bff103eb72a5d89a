//! Login, registration, and session persistence.
//!
//! Resolution order on login is fixed: access code, then registered
//! credentials, then the guest marker. A privileged code must never be
//! shadowed by a same-named registered account, which is why the code
//! lookup runs first.

use std::collections::HashMap;
use std::sync::Arc;

use portal_store::{KvStore, KvStoreExt};
use tracing::{debug, info, instrument};

use crate::config::PortalConfig;
use crate::contract::model::{User, UserRole, GUEST_ID};
use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;
use crate::infra::keys;

/// What the login form submits. Any subset of fields may be filled.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub name: String,
    pub password: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub password: String,
}

pub struct AuthService {
    store: Arc<dyn KvStore>,
    config: PortalConfig,
    ids: IdGenerator,
}

impl AuthService {
    pub fn new(store: Arc<dyn KvStore>, config: PortalConfig) -> Self {
        Self {
            store,
            config,
            ids: IdGenerator::new('u'),
        }
    }

    /// Resolve a login attempt into an authenticated user.
    ///
    /// Non-guest logins are written to the session key so the session
    /// survives a reload; guest sessions are deliberately not persisted.
    #[instrument(name = "portal.auth.login", skip_all, fields(name = %credentials.name))]
    pub fn login(&self, credentials: &Credentials) -> Result<User, DomainError> {
        if !credentials.code.is_empty() {
            if let Some(profile) = self.config.access_codes.get(&credentials.code) {
                let user = User {
                    id: credentials.code.clone(),
                    name: profile.name.clone(),
                    role: profile.role,
                    email: format!("{}@rampage.hq", profile.name),
                    avatar: profile.avatar.clone(),
                    password: None,
                    is_blocked: None,
                    has_access_code: Some(true),
                };
                let user = self.with_avatar_override(user);
                self.persist_session(&user);
                info!(role = ?user.role, "access code accepted");
                return Ok(user);
            }
        }

        let registered: Vec<User> = self
            .store
            .get_json(keys::REGISTERED_USERS)
            .unwrap_or_default();
        if let Some(found) = registered.iter().find(|u| {
            u.name == credentials.name
                && u.password.as_deref() == Some(credentials.password.as_str())
        }) {
            if found.blocked() {
                return Err(DomainError::account_blocked(&found.name));
            }
            let user = self.with_avatar_override(found.clone());
            self.persist_session(&user);
            info!("credentials accepted");
            return Ok(user);
        }

        if self.is_guest_login(credentials) {
            debug!("falling back to ephemeral guest session");
            return Ok(guest_user());
        }

        Err(DomainError::AuthorizationFailed)
    }

    /// Create a Member account and log it in immediately.
    #[instrument(name = "portal.auth.register", skip_all, fields(name = %registration.name))]
    pub fn register(&self, registration: &Registration) -> Result<User, DomainError> {
        if registration.name.chars().count() < self.config.min_name_len
            || registration.password.chars().count() < self.config.min_password_len
        {
            return Err(DomainError::credentials_too_short(
                self.config.min_name_len,
                self.config.min_password_len,
            ));
        }

        let mut registered: Vec<User> = self
            .store
            .get_json(keys::REGISTERED_USERS)
            .unwrap_or_default();
        if registered.iter().any(|u| u.name == registration.name) {
            return Err(DomainError::name_taken(&registration.name));
        }

        let user = User {
            id: self.ids.next(),
            name: registration.name.clone(),
            role: UserRole::Member,
            email: format!("{}@rampage.net", registration.name),
            avatar: member_avatar(&registration.name),
            password: Some(registration.password.clone()),
            is_blocked: None,
            has_access_code: Some(false),
        };
        registered.push(user.clone());
        self.store.set_json(keys::REGISTERED_USERS, &registered);
        self.persist_session(&user);
        info!(id = %user.id, "registered new member");
        Ok(user)
    }

    /// Restore the persisted session, if any. Guests are never persisted,
    /// so a guest session never comes back from here.
    pub fn restore_session(&self) -> Option<User> {
        let user: User = self.store.get_json(keys::CURRENT_USER)?;
        Some(self.with_avatar_override(user))
    }

    pub fn logout(&self) {
        self.store.remove(keys::CURRENT_USER);
    }

    /// Merge the avatar override recorded from prior profile edits, keyed
    /// by the stable user id. Keeps an avatar change visible across both
    /// access paths (code and credentials) to the same identity.
    fn with_avatar_override(&self, mut user: User) -> User {
        let overrides: HashMap<String, String> = self
            .store
            .get_json(keys::AVATAR_OVERRIDES)
            .unwrap_or_default();
        if let Some(avatar) = overrides.get(&user.id) {
            user.avatar = avatar.clone();
        }
        user
    }

    fn persist_session(&self, user: &User) {
        self.store.set_json(keys::CURRENT_USER, user);
    }

    fn is_guest_login(&self, credentials: &Credentials) -> bool {
        credentials.name.to_uppercase() == self.config.guest_marker
            || (credentials.name.is_empty() && credentials.code.is_empty())
    }
}

fn guest_user() -> User {
    User {
        id: GUEST_ID.to_string(),
        name: "Анонимный Гость".to_string(),
        role: UserRole::Viewer,
        email: "guest@rampage.hq".to_string(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Guest".to_string(),
        password: None,
        is_blocked: None,
        has_access_code: Some(false),
    }
}

fn member_avatar(name: &str) -> String {
    format!("https://api.dicebear.com/7.x/pixel-art/svg?seed={name}")
}
