//! Marketplace and rental boards: two independent collections with the
//! same behaviour, partitioned by [`ListingKind`].

use std::sync::Arc;

use portal_store::{KvStore, KvStoreExt};
use tracing::{info, instrument};

use crate::clock;
use crate::contract::model::{ListingKind, MarketplaceEntry, User};
use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::policy::{can_perform, Action};
use crate::domain::ports::ConfirmPrompt;
use crate::infra::keys;

#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image_url: Option<String>,
}

pub struct MarketService {
    store: Arc<dyn KvStore>,
    confirm: Arc<dyn ConfirmPrompt>,
    ids: IdGenerator,
}

impl MarketService {
    pub fn new(store: Arc<dyn KvStore>, confirm: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            store,
            confirm,
            ids: IdGenerator::new('m'),
        }
    }

    /// Board contents in stored order, newest first.
    pub fn list(&self, kind: ListingKind) -> Vec<MarketplaceEntry> {
        self.store.get_json(&keys::listings(kind)).unwrap_or_default()
    }

    /// Any authenticated user, guests included, may post a listing.
    #[instrument(name = "portal.market.create", skip_all, fields(seller = %user.name, kind = kind.as_str()))]
    pub fn create(
        &self,
        user: &User,
        kind: ListingKind,
        draft: ListingDraft,
    ) -> Result<MarketplaceEntry, DomainError> {
        if !can_perform(user, Action::CreateListing) {
            return Err(DomainError::forbidden("create listing"));
        }
        let entry = MarketplaceEntry {
            id: self.ids.next(),
            title: draft.title,
            price: draft.price,
            description: draft.description,
            seller: user.name.clone(),
            date: clock::event_date(),
            kind,
            image_url: draft.image_url,
        };
        let mut items = self.list(kind);
        items.insert(0, entry.clone());
        self.store.set_json(&keys::listings(kind), &items);
        info!(id = %entry.id, "created listing");
        Ok(entry)
    }

    /// Delete a listing. Without staff rank or a seller-name match this is
    /// a silent no-op: the collection is untouched and no confirmation
    /// prompt is shown. Returns whether an entry was removed.
    #[instrument(name = "portal.market.delete", skip_all, fields(entry = %id, kind = kind.as_str()))]
    pub fn delete(&self, user: &User, kind: ListingKind, id: &str) -> bool {
        let mut items = self.list(kind);
        let Some(entry) = items.iter().find(|item| item.id == id) else {
            return false;
        };
        if !can_perform(
            user,
            Action::DeleteListing {
                seller: &entry.seller,
            },
        ) {
            return false;
        }
        if !self.confirm.confirm("Удалить это объявление?") {
            return false;
        }
        items.retain(|item| item.id != id);
        self.store.set_json(&keys::listings(kind), &items);
        info!("deleted listing");
        true
    }
}
