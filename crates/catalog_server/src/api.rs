use axum::extract::State;

use crate::{authors::show_all_authors, sink::BufferedResponse, AppState};

// Basic handler that responds with a static string
pub async fn root() -> &'static str {
    "Hello, Library Catalog!"
}

// List all authors sorted by family name
#[axum::debug_handler]
pub async fn list_authors(State(state): State<AppState>) -> BufferedResponse {
    tracing::debug!("Listing all authors");

    let mut response = BufferedResponse::new();
    show_all_authors(&state, &mut response).await;
    response
}
