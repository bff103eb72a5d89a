//! Profile page operations: avatar replacement and the free-text personal
//! note.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use portal_store::{KvStore, KvStoreExt};
use tracing::{info, instrument};

use crate::contract::model::User;
use crate::domain::error::DomainError;
use crate::domain::ports::ImageReader;
use crate::infra::keys;

pub struct ProfileService {
    store: Arc<dyn KvStore>,
    images: Arc<dyn ImageReader>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KvStore>, images: Arc<dyn ImageReader>) -> Self {
        Self { store, images }
    }

    /// Replace the user's avatar with an embedded copy of a local image.
    ///
    /// Three writes keep every access path to this identity in sync: the
    /// override map (merged on future logins), the session snapshot, and
    /// the registered-users record. Overrides are keyed by the stable user
    /// id. Guest sessions skip the session write so they stay ephemeral.
    #[instrument(name = "portal.profile.change_avatar", skip_all, fields(user = %user.id))]
    pub fn change_avatar(&self, user: &User, image: &Path) -> Result<User, DomainError> {
        let data_url = self
            .images
            .read_data_url(image)
            .map_err(|err| DomainError::image(err.to_string()))?;

        let mut updated = user.clone();
        updated.avatar = data_url.clone();

        let mut overrides: HashMap<String, String> = self
            .store
            .get_json(keys::AVATAR_OVERRIDES)
            .unwrap_or_default();
        overrides.insert(user.id.clone(), data_url.clone());
        self.store.set_json(keys::AVATAR_OVERRIDES, &overrides);

        if !user.is_guest() {
            self.store.set_json(keys::CURRENT_USER, &updated);
        }

        let mut registered: Vec<User> = self
            .store
            .get_json(keys::REGISTERED_USERS)
            .unwrap_or_default();
        let mut touched = false;
        for record in &mut registered {
            if record.id == user.id {
                record.avatar = data_url.clone();
                touched = true;
            }
        }
        if touched {
            self.store.set_json(keys::REGISTERED_USERS, &registered);
        }

        info!("avatar replaced");
        Ok(updated)
    }

    /// Free-text personal note, stored as plain text.
    pub fn self_note(&self, user: &User) -> String {
        self.store
            .get_raw(&keys::self_notes_of(&user.id))
            .unwrap_or_default()
    }

    pub fn save_self_note(&self, user: &User, text: &str) {
        self.store
            .set_raw(&keys::self_notes_of(&user.id), text.to_string());
    }
}
