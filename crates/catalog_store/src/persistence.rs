//! Persistence layer for authors using fjall database

use crate::{
    describe_sort, sort_records, Author, AuthorCollection, AuthorId, AuthorRecord, SortKey,
    StoreError,
};
use async_trait::async_trait;
use fjall::{Config, Keyspace, Partition, PartitionCreateOptions, PersistMode};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

const AUTHORS_PARTITION: &str = "authors";

/// Database storage for authors.
///
/// Keys are big-endian ids so iteration yields insertion order; values are
/// the author encoded as JSON.
pub struct FjallAuthorCollection {
    keyspace: Keyspace,
    partition: Partition,
    next_id: AtomicU64,
}

impl std::fmt::Debug for FjallAuthorCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FjallAuthorCollection")
            .field("partition", &AUTHORS_PARTITION)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl FjallAuthorCollection {
    /// Open or create an author database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let keyspace = Config::new(path)
            .open()
            .map_err(|e| StoreError::Storage(format!("Failed to open database: {}", e)))?;

        let partition = keyspace
            .open_partition(AUTHORS_PARTITION, PartitionCreateOptions::default())
            .map_err(|e| StoreError::Storage(format!("Failed to open partition: {}", e)))?;

        let next_id = match partition
            .last_key_value()
            .map_err(|e| StoreError::Storage(format!("Failed to read last key: {}", e)))?
        {
            Some((key, _)) => decode_id(&key)? + 1,
            None => 1,
        };

        tracing::debug!("Opened author partition, next id {}", next_id);

        Ok(Self {
            keyspace,
            partition,
            next_id: AtomicU64::new(next_id),
        })
    }
}

fn read_all(partition: &Partition) -> Result<Vec<AuthorRecord>, StoreError> {
    let mut records = Vec::new();

    for item in partition.iter() {
        let (key_bytes, value_bytes) = item.map_err(|e| {
            StoreError::Storage(format!("Failed to iterate partition: {}", e))
        })?;

        let id = decode_id(&key_bytes)?;
        let author: Author = serde_json::from_slice(&value_bytes).map_err(|e| {
            StoreError::Encoding(format!("Invalid stored author {}: {}", id, e))
        })?;

        records.push(AuthorRecord { id, author });
    }

    Ok(records)
}

fn decode_id(key: &[u8]) -> Result<AuthorId, StoreError> {
    let bytes: [u8; 8] = key
        .try_into()
        .map_err(|_| StoreError::Encoding(format!("Invalid author key length: {}", key.len())))?;
    Ok(AuthorId::from_be_bytes(bytes))
}

/// Run fjall I/O on the blocking thread pool
async fn run_blocking<T, F>(task: F) -> Result<T, StoreError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| StoreError::Unavailable(format!("Storage task failed: {}", e)))?
}

#[async_trait]
impl AuthorCollection for FjallAuthorCollection {
    async fn find_all(&self, sort: &[SortKey]) -> Result<Vec<AuthorRecord>, StoreError> {
        let partition = self.partition.clone();
        let sort = sort.to_vec();

        run_blocking(move || {
            let mut records = read_all(&partition)?;
            sort_records(&mut records, &sort);

            tracing::debug!(
                "Loaded {} authors from storage sorted by {}",
                records.len(),
                describe_sort(&sort)
            );
            Ok(records)
        })
        .await
    }

    async fn insert(&self, author: Author) -> Result<AuthorRecord, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let value_bytes = serde_json::to_vec(&author)?;
        let keyspace = self.keyspace.clone();
        let partition = self.partition.clone();

        run_blocking(move || {
            partition
                .insert(id.to_be_bytes().to_vec(), value_bytes)
                .map_err(|e| StoreError::Storage(format!("Failed to insert author: {}", e)))?;

            keyspace
                .persist(PersistMode::SyncAll)
                .map_err(|e| StoreError::Storage(format!("Failed to persist author: {}", e)))
        })
        .await?;

        Ok(AuthorRecord { id, author })
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let partition = self.partition.clone();

        run_blocking(move || {
            let mut count = 0;
            for item in partition.iter() {
                item?;
                count += 1;
            }
            Ok(count)
        })
        .await
    }
}
