//! User directory: the registered-users collection plus each viewer's
//! private annotation layer over it.

use std::collections::HashMap;
use std::sync::Arc;

use portal_store::{KvStore, KvStoreExt};
use tracing::{info, instrument};

use crate::contract::model::{User, UserNote};
use crate::domain::policy::{can_perform, Action};
use crate::domain::ports::ConfirmPrompt;
use crate::infra::keys;

pub struct DirectoryService {
    store: Arc<dyn KvStore>,
    confirm: Arc<dyn ConfirmPrompt>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn KvStore>, confirm: Arc<dyn ConfirmPrompt>) -> Self {
        Self { store, confirm }
    }

    pub fn list(&self) -> Vec<User> {
        self.store
            .get_json(keys::REGISTERED_USERS)
            .unwrap_or_default()
    }

    /// Flip the block flag on a registered user. A caller without staff
    /// rank is a silent no-op. Returns whether a record changed.
    #[instrument(name = "portal.directory.toggle_block", skip_all, fields(target = %target_id))]
    pub fn toggle_block(&self, actor: &User, target_id: &str) -> bool {
        if !can_perform(actor, Action::BlockUser) {
            return false;
        }
        let mut users = self.list();
        let mut changed = false;
        for user in &mut users {
            if user.id == target_id {
                user.is_blocked = Some(!user.blocked());
                changed = true;
            }
        }
        if changed {
            self.store.set_json(keys::REGISTERED_USERS, &users);
            info!("toggled block flag");
        }
        changed
    }

    /// Remove a registered user after confirmation. An active session for
    /// the deleted user is not invalidated here. Returns whether a record
    /// was removed.
    #[instrument(name = "portal.directory.delete_user", skip_all, fields(target = %target_id))]
    pub fn delete_user(&self, actor: &User, target_id: &str) -> bool {
        if !can_perform(actor, Action::DeleteUser) {
            return false;
        }
        if !self
            .confirm
            .confirm("ВЫ УВЕРЕНЫ, ЧТО ХОТИТЕ УДАЛИТЬ ДАННОГО ПОЛЬЗОВАТЕЛЯ?")
        {
            return false;
        }
        let mut users = self.list();
        let before = users.len();
        users.retain(|user| user.id != target_id);
        if users.len() == before {
            return false;
        }
        self.store.set_json(keys::REGISTERED_USERS, &users);
        info!("deleted user");
        true
    }

    /// The viewer's own note about `target_id`, if any. Notes are visible
    /// only to their author.
    pub fn note(&self, viewer: &User, target_id: &str) -> Option<String> {
        let notes: HashMap<String, String> = self
            .store
            .get_json(&keys::notes_of(&viewer.id))
            .unwrap_or_default();
        notes.get(target_id).cloned()
    }

    /// Every annotation the viewer keeps, materialized from the stored
    /// map, ordered by target id.
    pub fn notes(&self, viewer: &User) -> Vec<UserNote> {
        let notes: HashMap<String, String> = self
            .store
            .get_json(&keys::notes_of(&viewer.id))
            .unwrap_or_default();
        let mut all: Vec<UserNote> = notes
            .into_iter()
            .map(|(target_user_id, content)| UserNote {
                target_user_id,
                content,
            })
            .collect();
        all.sort_by(|a, b| a.target_user_id.cmp(&b.target_user_id));
        all
    }

    pub fn save_note(&self, viewer: &User, target_id: &str, text: &str) {
        if !can_perform(viewer, Action::AnnotateUser) {
            return;
        }
        let mut notes: HashMap<String, String> = self
            .store
            .get_json(&keys::notes_of(&viewer.id))
            .unwrap_or_default();
        notes.insert(target_id.to_string(), text.to_string());
        self.store.set_json(&keys::notes_of(&viewer.id), &notes);
    }
}
