use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::items::dto::NewReturnItem;
use crate::storage::{keys, KeyValueStore};

/// One proof-of-activity record in a user's collection.
///
/// `deleted_at` is set exactly when `is_deleted` is true; only
/// `soft_delete` and `restore` touch the pair, always together. Field
/// names persist in camelCase to stay readable by existing collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    pub id: Uuid,
    /// Owning user, by value; never validated against the user directory.
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(with = "crate::items::iso_date")]
    pub date: Date,
    pub is_deleted: bool,
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<OffsetDateTime>,
}

/// Every operation is a read-modify-write of the user's whole collection
/// under one key. There is no concurrent-writer protocol: with two active
/// writers the second write wins.
impl ReturnItem {
    /// Every item the user owns, soft-deleted ones included.
    pub fn list(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Vec<ReturnItem>> {
        match store.get(&keys::items(user_id))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Items not in the trash.
    pub fn list_active(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Vec<ReturnItem>> {
        Ok(Self::list(store, user_id)?
            .into_iter()
            .filter(|i| !i.is_deleted)
            .collect())
    }

    /// The trash: soft-deleted items pending restore or permanent removal.
    pub fn list_trashed(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Vec<ReturnItem>> {
        Ok(Self::list(store, user_id)?
            .into_iter()
            .filter(|i| i.is_deleted)
            .collect())
    }

    pub fn create(
        store: &dyn KeyValueStore,
        user_id: Uuid,
        draft: NewReturnItem,
    ) -> Result<ReturnItem> {
        let mut items = Self::list(store, user_id)?;
        let item = ReturnItem {
            id: Uuid::new_v4(),
            user_id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            date: draft.date,
            is_deleted: false,
            deleted_at: None,
        };
        items.push(item.clone());
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, item_id = %item.id, "item created");
        Ok(item)
    }

    /// Full field replacement of the record with the same id.
    pub fn update(store: &dyn KeyValueStore, user_id: Uuid, updated: &ReturnItem) -> Result<()> {
        let mut items = Self::list(store, user_id)?;
        let slot = items
            .iter_mut()
            .find(|i| i.id == updated.id)
            .ok_or(Error::NotFound)?;
        *slot = updated.clone();
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, item_id = %updated.id, "item updated");
        Ok(())
    }

    /// Move an item to the trash, stamping the deletion time.
    pub fn soft_delete(store: &dyn KeyValueStore, user_id: Uuid, item_id: Uuid) -> Result<()> {
        let mut items = Self::list(store, user_id)?;
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(Error::NotFound)?;
        item.is_deleted = true;
        item.deleted_at = Some(OffsetDateTime::now_utc());
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, item_id = %item_id, "item moved to trash");
        Ok(())
    }

    /// Bring an item back from the trash.
    pub fn restore(store: &dyn KeyValueStore, user_id: Uuid, item_id: Uuid) -> Result<()> {
        let mut items = Self::list(store, user_id)?;
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(Error::NotFound)?;
        item.is_deleted = false;
        item.deleted_at = None;
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, item_id = %item_id, "item restored");
        Ok(())
    }

    /// Remove a record for good, trashed or not.
    pub fn hard_delete(store: &dyn KeyValueStore, user_id: Uuid, item_id: Uuid) -> Result<()> {
        let mut items = Self::list(store, user_id)?;
        let position = items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(Error::NotFound)?;
        items.remove(position);
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, item_id = %item_id, "item permanently deleted");
        Ok(())
    }

    /// Clear the deletion flag and timestamp on everything in the trash.
    pub fn restore_all(store: &dyn KeyValueStore, user_id: Uuid) -> Result<()> {
        let mut items = Self::list(store, user_id)?;
        let mut restored = 0usize;
        for item in items.iter_mut().filter(|i| i.is_deleted) {
            item.is_deleted = false;
            item.deleted_at = None;
            restored += 1;
        }
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, restored, "trash restored");
        Ok(())
    }

    /// Drop exactly the soft-deleted items; active items keep their order.
    pub fn empty_trash(store: &dyn KeyValueStore, user_id: Uuid) -> Result<()> {
        let mut items = Self::list(store, user_id)?;
        let before = items.len();
        items.retain(|i| !i.is_deleted);
        let removed = before - items.len();
        save_all(store, user_id, &items)?;

        info!(user_id = %user_id, removed, "trash emptied");
        Ok(())
    }
}

// Serialize first, persist second: a serialization failure never reaches
// the store, and a rejected write leaves the old collection persisted.
fn save_all(store: &dyn KeyValueStore, user_id: Uuid, items: &[ReturnItem]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.set(&keys::items(user_id), &raw)
}
