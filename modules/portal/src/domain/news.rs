//! News feed: publication and deletion are reserved for access-code
//! holders; everyone may read.

use std::sync::Arc;

use portal_store::{KvStore, KvStoreExt};
use tracing::{info, instrument};

use crate::clock;
use crate::contract::model::{NewsEntry, User};
use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::policy::{can_perform, Action};
use crate::domain::ports::ConfirmPrompt;
use crate::infra::keys;

#[derive(Debug, Clone, Default)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

pub struct NewsService {
    store: Arc<dyn KvStore>,
    confirm: Arc<dyn ConfirmPrompt>,
    ids: IdGenerator,
}

impl NewsService {
    pub fn new(store: Arc<dyn KvStore>, confirm: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            store,
            confirm,
            ids: IdGenerator::new('n'),
        }
    }

    /// Feed in stored order, newest first.
    pub fn list(&self) -> Vec<NewsEntry> {
        self.store.get_json(keys::NEWS_FEED).unwrap_or_default()
    }

    #[instrument(name = "portal.news.publish", skip_all, fields(author = %user.name))]
    pub fn publish(&self, user: &User, draft: NewsDraft) -> Result<NewsEntry, DomainError> {
        if !can_perform(user, Action::PublishNews) {
            return Err(DomainError::forbidden("publish news"));
        }
        let entry = NewsEntry {
            id: self.ids.next(),
            title: draft.title,
            content: draft.content,
            author: user.name.clone(),
            date: clock::event_timestamp(),
            image_url: draft.image_url,
        };
        let mut feed = self.list();
        feed.insert(0, entry.clone());
        self.store.set_json(keys::NEWS_FEED, &feed);
        info!(id = %entry.id, "published news entry");
        Ok(entry)
    }

    /// Delete after interactive confirmation. Returns whether an entry was
    /// actually removed.
    #[instrument(name = "portal.news.delete", skip_all, fields(entry = %id))]
    pub fn delete(&self, user: &User, id: &str) -> Result<bool, DomainError> {
        if !can_perform(user, Action::DeleteNews) {
            return Err(DomainError::forbidden("delete news"));
        }
        if !self.confirm.confirm("Удалить эту новость?") {
            return Ok(false);
        }
        let mut feed = self.list();
        let before = feed.len();
        feed.retain(|entry| entry.id != id);
        if feed.len() == before {
            return Ok(false);
        }
        self.store.set_json(keys::NEWS_FEED, &feed);
        info!("deleted news entry");
        Ok(true)
    }
}
