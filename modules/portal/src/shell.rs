//! Session shell: the state machine an embedding UI drives.
//!
//! The shell owns the authenticated user and the active navigation tab,
//! and is the only component that transitions between the unauthenticated
//! and authenticated states. Feature services receive the user by value
//! per call; the one write-back is the settings page's avatar change,
//! applied through [`SessionShell::apply_profile_update`].

use portal_store::KvStore;
use std::sync::Arc;

use crate::config::PortalConfig;
use crate::contract::error::PortalError;
use crate::contract::model::User;
use crate::domain::auth::{AuthService, Credentials, Registration};

/// Navigation tabs of the authenticated shell. Business and Vault are
/// navigable but have no feature service behind them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Business,
    Vault,
    Market,
    Rent,
    Users,
    Settings,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Business => "business",
            Tab::Vault => "vault",
            Tab::Market => "market",
            Tab::Rent => "rent",
            Tab::Users => "users",
            Tab::Settings => "settings",
        }
    }
}

pub struct SessionShell {
    auth: AuthService,
    user: Option<User>,
    active_tab: Tab,
}

impl SessionShell {
    /// Fresh shell in the unauthenticated state.
    pub fn new(store: Arc<dyn KvStore>, config: PortalConfig) -> Self {
        Self {
            auth: AuthService::new(store, config),
            user: None,
            active_tab: Tab::Home,
        }
    }

    /// Shell restored from the persisted session, if one exists. Guest
    /// sessions are never persisted, so they never come back here.
    pub fn open(store: Arc<dyn KvStore>, config: PortalConfig) -> Self {
        let mut shell = Self::new(store, config);
        shell.user = shell.auth.restore_session();
        shell
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Resolve a login attempt; on success the shell lands on Home.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&User, PortalError> {
        let user = self.auth.login(credentials)?;
        self.active_tab = Tab::Home;
        Ok(&*self.user.insert(user))
    }

    /// Register and log the new member in immediately.
    pub fn register(&mut self, registration: &Registration) -> Result<&User, PortalError> {
        let user = self.auth.register(registration)?;
        self.active_tab = Tab::Home;
        Ok(&*self.user.insert(user))
    }

    /// Clear the persisted session and return to the login screen.
    pub fn sign_out(&mut self) {
        self.auth.logout();
        self.user = None;
        self.active_tab = Tab::Home;
    }

    /// Write-back hook for the settings page: adopt the updated user
    /// record if it belongs to the current session.
    pub fn apply_profile_update(&mut self, updated: User) {
        if self
            .user
            .as_ref()
            .is_some_and(|current| current.id == updated.id)
        {
            self.user = Some(updated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_store::MemoryStore;

    fn shell() -> SessionShell {
        SessionShell::new(Arc::new(MemoryStore::new()), PortalConfig::default())
    }

    #[test]
    fn starts_unauthenticated_on_home() {
        let shell = shell();
        assert!(!shell.is_authenticated());
        assert_eq!(shell.active_tab(), Tab::Home);
    }

    #[test]
    fn failed_login_keeps_state() {
        let mut shell = shell();
        let err = shell
            .login(&Credentials {
                name: "Nobody".into(),
                password: "wrong".into(),
                code: String::new(),
            })
            .unwrap_err();
        assert_eq!(err, PortalError::Authentication);
        assert!(!shell.is_authenticated());
    }

    #[test]
    fn tab_switching_renders_one_view_at_a_time() {
        let mut shell = shell();
        shell
            .login(&Credentials::default())
            .expect("guest login with empty form");
        shell.set_active_tab(Tab::Rent);
        assert_eq!(shell.active_tab().as_str(), "rent");
    }

    #[test]
    fn profile_update_for_another_identity_is_ignored() {
        let mut shell = shell();
        shell
            .register(&Registration {
                name: "Raven".into(),
                password: "wolf1".into(),
            })
            .expect("register");
        let mut stranger = shell.current_user().expect("user").clone();
        stranger.id = "someone_else".into();
        stranger.avatar = "data:image/png;base64,AAAA".into();
        shell.apply_profile_update(stranger);
        assert_ne!(
            shell.current_user().expect("user").avatar,
            "data:image/png;base64,AAAA"
        );
    }
}
