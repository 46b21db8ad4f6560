//! In-memory author collection

use crate::{
    describe_sort, sort_records, Author, AuthorCollection, AuthorRecord, SortKey, StoreError,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Author collection held in process memory, in insertion order
#[derive(Debug)]
pub struct MemoryAuthorCollection {
    records: RwLock<Vec<AuthorRecord>>,
    next_id: AtomicU64,
}

impl Default for MemoryAuthorCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorCollection {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a collection pre-populated with `authors`, ids assigned in order
    pub fn with_authors(authors: Vec<Author>) -> Self {
        let records: Vec<AuthorRecord> = authors
            .into_iter()
            .enumerate()
            .map(|(index, author)| AuthorRecord {
                id: index as u64 + 1,
                author,
            })
            .collect();
        let next_id = records.len() as u64 + 1;

        Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(next_id),
        }
    }
}

#[async_trait]
impl AuthorCollection for MemoryAuthorCollection {
    async fn find_all(&self, sort: &[SortKey]) -> Result<Vec<AuthorRecord>, StoreError> {
        let mut records = self.records.read().await.clone();
        sort_records(&mut records, sort);

        tracing::debug!(
            "Loaded {} authors from memory sorted by {}",
            records.len(),
            describe_sort(sort)
        );
        Ok(records)
    }

    async fn insert(&self, author: Author) -> Result<AuthorRecord, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = AuthorRecord { id, author };

        self.records.write().await.push(record.clone());

        Ok(record)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().await.len())
    }
}
