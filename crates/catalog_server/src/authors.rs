//! Author list page: lookup, formatting and the response handler

use async_trait::async_trait;
use catalog_store::{Author, AuthorCollection, AuthorField, SortKey, StoreError};

use crate::{
    error::AppResult,
    sink::{ResponseBody, ResponseSink},
    AppState,
};

/// Message written when there is nothing to list
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Sort used by the author list page
pub fn author_list_sort() -> [SortKey; 1] {
    [SortKey::ascending(AuthorField::FamilyName)]
}

/// Render an author as `"<family>, <first> : <birth year> - <death year>"`.
///
/// An empty first name blanks the whole name segment, family name included,
/// giving `" : <birth year> - <death year>"`.
pub fn format_author(author: &Author) -> String {
    let full_name = if author.first_name.is_empty() {
        String::new()
    } else {
        format!("{}, {}", author.family_name, author.first_name)
    };

    format!(
        "{} : {} - {}",
        full_name,
        author.date_of_birth.format("%Y"),
        author.date_of_death.format("%Y")
    )
}

/// Fetch all authors sorted by family name and format them for display
pub async fn try_author_list<C>(collection: &C) -> Result<Vec<String>, StoreError>
where
    C: AuthorCollection + ?Sized,
{
    let records = collection.find_all(&author_list_sort()).await?;

    Ok(records
        .iter()
        .map(|record| format_author(&record.author))
        .collect())
}

/// Same as [`try_author_list`], but a failed query yields an empty list
pub async fn get_author_list<C>(collection: &C) -> Vec<String>
where
    C: AuthorCollection + ?Sized,
{
    match try_author_list(collection).await {
        Ok(authors) => {
            tracing::debug!("Formatted {} authors", authors.len());
            authors
        }
        Err(e) => {
            tracing::warn!("Failed to fetch author list: {}", e);
            Vec::new()
        }
    }
}

/// Source of the formatted author list consumed by [`show_all_authors`]
#[async_trait]
pub trait AuthorListing {
    async fn author_list(&self) -> AppResult<Vec<String>>;
}

#[async_trait]
impl AuthorListing for AppState {
    async fn author_list(&self) -> AppResult<Vec<String>> {
        Ok(get_author_list(self.authors.as_ref()).await)
    }
}

/// Write the author list to `response`, or [`NO_AUTHORS_FOUND`] when the
/// list is empty or could not be produced. Sends exactly one body.
pub async fn show_all_authors<L, S>(listing: &L, response: &mut S)
where
    L: AuthorListing + Sync + ?Sized,
    S: ResponseSink + Send + ?Sized,
{
    let body = match listing.author_list().await {
        Ok(authors) if !authors.is_empty() => {
            tracing::info!("Sending {} authors", authors.len());
            ResponseBody::List(authors)
        }
        Ok(_) => {
            tracing::info!("No authors to send");
            ResponseBody::from(NO_AUTHORS_FOUND)
        }
        Err(e) => {
            tracing::warn!("Author lookup failed: {}", e);
            ResponseBody::from(NO_AUTHORS_FOUND)
        }
    };

    response.send(body);
}
