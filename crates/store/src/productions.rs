//! Canonical in-memory production collection.

use playbill_core::types::Id;
use playbill_core::Production;
use tokio::sync::RwLock;

/// Errors for operations referencing ids the store does not, or already
/// does, hold. These signal a flow or environment bug, not user error;
/// callers log them rather than surfacing them.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// `add` would introduce a second record with the same id.
    #[error("production {0} is already in the store")]
    Duplicate(Id),

    /// `update` or `remove` referenced an id the store does not hold.
    #[error("production {0} is not in the store")]
    NotFound(Id),
}

/// Ordered, id-unique collection of productions.
///
/// Insertion order is preserved across every operation: `update`
/// replaces in place and `remove` leaves the relative order of the
/// remaining items untouched.
pub struct ProductionStore {
    items: RwLock<Vec<Production>>,
}

impl ProductionStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Replace the whole collection after a successful list fetch.
    ///
    /// Server order is preserved. Should the server ever repeat an id,
    /// the first occurrence wins and the duplicate is dropped with a
    /// warning so the uniqueness invariant survives. Returns the number
    /// of records now held.
    pub async fn replace_all(&self, items: Vec<Production>) -> usize {
        let mut deduped: Vec<Production> = Vec::with_capacity(items.len());
        for item in items {
            if deduped.iter().any(|p| p.id == item.id) {
                tracing::warn!(id = item.id, "Dropping duplicate production from list response");
                continue;
            }
            deduped.push(item);
        }
        let count = deduped.len();
        *self.items.write().await = deduped;
        count
    }

    /// Append a newly created production.
    pub async fn add(&self, item: Production) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if items.iter().any(|p| p.id == item.id) {
            return Err(StoreError::Duplicate(item.id));
        }
        items.push(item);
        Ok(())
    }

    /// Replace an existing production in place, keeping its position.
    pub async fn update(&self, item: Production) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|p| p.id == item.id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(StoreError::NotFound(item.id)),
        }
    }

    /// Remove a production by id, returning the removed record.
    pub async fn remove(&self, id: Id) -> Result<Production, StoreError> {
        let mut items = self.items.write().await;
        match items.iter().position(|p| p.id == id) {
            Some(index) => Ok(items.remove(index)),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Snapshot of the current collection, in order.
    pub async fn all(&self) -> Vec<Production> {
        self.items.read().await.clone()
    }

    /// A single production by id.
    pub async fn get(&self, id: Id) -> Option<Production> {
        self.items.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for ProductionStore {
    fn default() -> Self {
        Self::new()
    }
}
