//! Core data structures and storage for the library catalog

pub mod errors;
pub mod memory;
pub mod persistence;
pub mod seed;
pub mod sort;


use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use errors::StoreError;
pub use memory::MemoryAuthorCollection;
pub use persistence::FjallAuthorCollection;
pub use sort::{describe_sort, sort_records, AuthorField, SortDirection, SortKey};

// Re-export dependencies for external use
pub use chrono;
pub use fjall;

/// Identifier assigned to an author by the collection that stores it
pub type AuthorId = u64;

/// Author of one or more books in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Given name, may be empty
    pub first_name: String,
    /// Family name, used as the listing sort key
    pub family_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: NaiveDate,
}

/// Author together with its store-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: AuthorId,
    pub author: Author,
}

impl Author {
    /// Create a new author
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        date_of_birth: NaiveDate,
        date_of_death: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
            date_of_birth,
            date_of_death,
        }
    }
}

/// Read access to the stored authors, plus the inserts needed for seeding
#[async_trait]
pub trait AuthorCollection: std::fmt::Debug {
    /// Fetch every author, ordered by `sort` (first key is the primary key)
    async fn find_all(&self, sort: &[SortKey]) -> Result<Vec<AuthorRecord>, StoreError>;

    /// Store a new author and return it with its assigned id
    async fn insert(&self, author: Author) -> Result<AuthorRecord, StoreError>;

    /// Number of stored authors
    async fn count(&self) -> Result<usize, StoreError>;
}

pub type AuthorCollectionArc = Arc<dyn AuthorCollection + Send + Sync>;
