use std::collections::BTreeSet;
use std::future::Future;
use std::rc::Rc;

use crate::api::{ApiClient, ApiError, FavoriteEntry};
use crate::state::channel::{StateChannel, SubscriptionId};
use crate::utils::storage;

pub const FAVORITES_KEY: &str = "favorites";

/// Locally-fast, eventually-consistent mirror of the user's favorited
/// destination ids. Reads are synchronous against the in-memory set;
/// mutations are optimistic and reconciled with the remote store.
#[derive(Clone)]
pub struct FavoritesStore {
    api: Rc<ApiClient>,
    channel: StateChannel<BTreeSet<i64>>,
}

impl FavoritesStore {
    /// Starts from the persisted mirror so a reload shows favorites before
    /// the remote fetch lands. A corrupted mirror is discarded.
    pub fn new(api: Rc<ApiClient>) -> Self {
        let store = Self {
            api,
            channel: StateChannel::new(BTreeSet::new()),
        };
        store.load_cached();
        store
    }

    fn load_cached(&self) {
        let Some(raw) = storage::get_item(FAVORITES_KEY) else {
            return;
        };
        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(ids) => self.channel.publish(ids.into_iter().collect()),
            Err(error) => {
                log::warn!("Discarding corrupted favorites cache: {}", error);
                storage::remove_item(FAVORITES_KEY);
            }
        }
    }

    fn persist(ids: &BTreeSet<i64>) {
        let ids: Vec<i64> = ids.iter().copied().collect();
        match serde_json::to_string(&ids) {
            Ok(raw) => {
                if let Err(error) = storage::set_item(FAVORITES_KEY, &raw) {
                    log::warn!("Failed to mirror favorites: {}", error);
                }
            }
            Err(error) => log::warn!("Failed to encode favorites: {}", error),
        }
    }

    fn commit(&self, ids: BTreeSet<i64>) {
        Self::persist(&ids);
        self.channel.publish(ids);
    }

    /// Wholesale replacement, normalizing whatever shape the remote store
    /// answered with into the id set.
    pub fn set_favorites(&self, entries: &[FavoriteEntry]) {
        let ids: BTreeSet<i64> = entries
            .iter()
            .filter_map(FavoriteEntry::destination_id)
            .collect();
        self.commit(ids);
    }

    /// Full fetch from the remote store, typically right after login or when
    /// a favorites-consuming page mounts.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let entries = self.api.get_favorites().await?;
        self.set_favorites(&entries);
        Ok(())
    }

    /// Optimistic toggle. The set is mutated, mirrored, and broadcast in the
    /// synchronous prefix, before the returned future ever runs; awaiting it
    /// settles the remote side, and a failure restores the snapshot and
    /// broadcasts again. The failure itself is absorbed here and logged.
    ///
    /// Overlapping toggles on one id are not serialized: a stale ack arriving
    /// after a later mutation can reapply the older state.
    pub fn toggle_favorite(&self, destination_id: i64) -> impl Future<Output = ()> {
        let snapshot = self.channel.get();
        let adding = !snapshot.contains(&destination_id);
        let mut next = snapshot.clone();
        if adding {
            next.insert(destination_id);
        } else {
            next.remove(&destination_id);
        }
        self.commit(next);

        let store = self.clone();
        async move {
            let result = if adding {
                store.api.add_favorite(destination_id).await.map(|_| ())
            } else {
                store.api.remove_favorite(destination_id).await
            };
            if let Err(error) = result {
                log::warn!(
                    "Favorite toggle for {} failed, rolling back: {}",
                    destination_id,
                    error
                );
                store.commit(snapshot);
            }
        }
    }

    /// Wipes the remote store too, with the same optimistic protocol as
    /// `toggle_favorite`. Not the logout path; see `clear_favorites`.
    pub fn clear_all(&self) -> impl Future<Output = ()> {
        let snapshot = self.channel.get();
        self.commit(BTreeSet::new());

        let store = self.clone();
        async move {
            if let Err(error) = store.api.clear_favorites().await {
                log::warn!("Bulk favorite clear failed, rolling back: {}", error);
                store.commit(snapshot);
            }
        }
    }

    /// Local-only: empties the in-memory set and the persisted mirror, never
    /// the remote store. Used on logout.
    pub fn clear_favorites(&self) {
        storage::remove_item(FAVORITES_KEY);
        self.channel.publish(BTreeSet::new());
    }

    pub fn is_favorite(&self, destination_id: i64) -> bool {
        self.channel.with(|ids| ids.contains(&destination_id))
    }

    pub fn favorites_count(&self) -> usize {
        self.channel.with(BTreeSet::len)
    }

    pub fn snapshot(&self) -> BTreeSet<i64> {
        self.channel.get()
    }

    /// Every broadcast carries the full current set, not a diff.
    pub fn subscribe(&self, observer: impl Fn(&BTreeSet<i64>) + 'static) -> SubscriptionId {
        self.channel.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.channel.unsubscribe(id)
    }
}
