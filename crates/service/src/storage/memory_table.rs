use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// In-process table keyed by a store-assigned integer id.
///
/// Rows are kept in id order so listings are stable. Ids are handed out
/// from a counter that only grows, so an id is never reused.
pub struct MemoryTable<V> {
    inner: RwLock<TableState<V>>,
}

struct TableState<V> {
    rows: BTreeMap<i32, V>,
    last_id: i32,
}

impl<V: Clone> Default for MemoryTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> MemoryTable<V> {
    pub fn new() -> Self {
        Self { inner: RwLock::new(TableState { rows: BTreeMap::new(), last_id: 0 }) }
    }

    /// Insert or overwrite a row.
    ///
    /// `id` pointing at an existing row overwrites it in place; otherwise a
    /// fresh id is allocated. `build` receives the final id.
    pub async fn save<F>(&self, id: Option<i32>, build: F) -> Result<V, ServiceError>
    where
        F: FnOnce(i32) -> V,
    {
        let mut state = self.inner.write().await;
        let id = match id {
            Some(id) if state.rows.contains_key(&id) => id,
            _ => {
                let next = state
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| ServiceError::Db("id space exhausted".into()))?;
                state.last_id = next;
                next
            }
        };
        let row = build(id);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Get row by id.
    pub async fn get(&self, id: i32) -> Option<V> {
        let state = self.inner.read().await;
        state.rows.get(&id).cloned()
    }

    /// All rows in id order.
    pub async fn list(&self) -> Vec<V> {
        let state = self.inner.read().await;
        state.rows.values().cloned().collect()
    }

    /// Rows matching `pred`, in id order.
    pub async fn list_where<P>(&self, pred: P) -> Vec<V>
    where
        P: Fn(&V) -> bool,
    {
        let state = self.inner.read().await;
        state.rows.values().filter(|v| pred(v)).cloned().collect()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_table_assigns_and_overwrites() -> Result<(), anyhow::Error> {
        let table = MemoryTable::<(i32, &'static str)>::new();
        assert!(table.is_empty().await);

        let a = table.save(None, |id| (id, "a")).await?;
        let b = table.save(None, |id| (id, "b")).await?;
        assert_eq!((a.0, b.0), (1, 2));

        // existing id overwrites in place
        let a2 = table.save(Some(1), |id| (id, "a2")).await?;
        assert_eq!(a2, (1, "a2"));
        assert_eq!(table.len().await, 2);
        assert_eq!(table.get(1).await, Some((1, "a2")));

        // unknown id gets a fresh one
        let c = table.save(Some(42), |id| (id, "c")).await?;
        assert_eq!(c.0, 3);
        assert_eq!(table.get(42).await, None);

        let odd = table.list_where(|(id, _)| id % 2 == 1).await;
        assert_eq!(odd, vec![(1, "a2"), (3, "c")]);
        assert_eq!(table.list().await.len(), 3);
        Ok(())
    }
}
