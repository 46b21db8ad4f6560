//! Demo data for a fresh catalog

use crate::{Author, AuthorCollection, StoreError};
use chrono::NaiveDate;

const DEMO_AUTHORS: &[(&str, &str, (i32, u32, u32), (i32, u32, u32))] = &[
    ("Jane", "Austen", (1775, 12, 16), (1817, 7, 18)),
    ("Amitav", "Ghosh", (1835, 11, 30), (1910, 4, 21)),
    ("Rabindranath", "Tagore", (1812, 2, 7), (1870, 6, 9)),
    ("Isaac", "Asimov", (1920, 1, 2), (1992, 4, 6)),
];

/// Authors used to populate an empty catalog
pub fn demo_authors() -> Vec<Author> {
    DEMO_AUTHORS
        .iter()
        .filter_map(|(first, family, born, died)| {
            let date_of_birth = NaiveDate::from_ymd_opt(born.0, born.1, born.2)?;
            let date_of_death = NaiveDate::from_ymd_opt(died.0, died.1, died.2)?;
            Some(Author::new(*first, *family, date_of_birth, date_of_death))
        })
        .collect()
}

/// Insert the demo authors when the collection holds none.
/// Returns the number of authors inserted.
pub async fn seed_if_empty<C>(collection: &C) -> Result<usize, StoreError>
where
    C: AuthorCollection + ?Sized,
{
    let existing = collection.count().await?;
    if existing > 0 {
        tracing::debug!("Collection already holds {} authors, skipping seed", existing);
        return Ok(0);
    }

    let authors = demo_authors();
    let inserted = authors.len();
    for author in authors {
        collection.insert(author).await?;
    }

    tracing::info!("Seeded {} demo authors", inserted);
    Ok(inserted)
}
