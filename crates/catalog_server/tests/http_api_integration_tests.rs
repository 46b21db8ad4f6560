// HTTP API integration tests for catalog_server endpoints

#[cfg(test)]
mod http_api_tests {
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
        Router,
    };
    use catalog_server::{build_router, AppState, NO_AUTHORS_FOUND};
    use catalog_store::{
        chrono::NaiveDate, seed::seed_if_empty, Author, AuthorCollection, AuthorRecord,
        FjallAuthorCollection, MemoryAuthorCollection, SortKey, StoreError,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    #[derive(Debug)]
    struct UnavailableCollection;

    #[async_trait]
    impl AuthorCollection for UnavailableCollection {
        async fn find_all(&self, _sort: &[SortKey]) -> Result<Vec<AuthorRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn insert(&self, _author: Author) -> Result<AuthorRecord, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn count(&self) -> Result<usize, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn author(first: &str, family: &str, born: i32, died: i32) -> Author {
        Author::new(
            first,
            family,
            NaiveDate::from_ymd_opt(born, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(died, 6, 1).unwrap(),
        )
    }

    fn app_with(collection: impl AuthorCollection + Send + Sync + 'static) -> Router {
        build_router(AppState::new(Arc::new(collection)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let (status, _, body) = get(app_with(MemoryAuthorCollection::new()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, Library Catalog!");
    }

    #[tokio::test]
    async fn test_authors_endpoint_returns_sorted_json() {
        let app = app_with(MemoryAuthorCollection::with_authors(vec![
            author("Rabindranath", "Tagore", 1861, 1941),
            author("", "Homer", 800, 701),
            author("Jane", "Austen", 1775, 1817),
        ]));

        let (status, content_type, body) = get(app, "/authors").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let authors: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(
            authors,
            vec![
                "Austen, Jane : 1775 - 1817".to_string(),
                " : 0800 - 0701".to_string(),
                "Tagore, Rabindranath : 1861 - 1941".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_authors_endpoint_empty_collection() {
        let (status, content_type, body) =
            get(app_with(MemoryAuthorCollection::new()), "/authors").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(body, NO_AUTHORS_FOUND);
    }

    #[tokio::test]
    async fn test_authors_endpoint_store_failure() {
        let (status, _, body) = get(app_with(UnavailableCollection), "/authors").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "No authors found");
    }

    #[tokio::test]
    async fn test_authors_endpoint_with_seeded_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let collection = FjallAuthorCollection::open(temp_dir.path()).unwrap();
        seed_if_empty(&collection).await.unwrap();

        let app = app_with(collection);
        let (first_status, _, first_body) = get(app.clone(), "/authors").await;
        let (second_status, _, second_body) = get(app, "/authors").await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first_body, second_body);

        let authors: Vec<String> = serde_json::from_str(&first_body).unwrap();
        assert_eq!(
            authors,
            vec![
                "Asimov, Isaac : 1920 - 1992".to_string(),
                "Austen, Jane : 1775 - 1817".to_string(),
                "Ghosh, Amitav : 1835 - 1910".to_string(),
                "Tagore, Rabindranath : 1812 - 1870".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let app = app_with(MemoryAuthorCollection::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/authors")
                    .header("Origin", "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _, _) = get(app_with(MemoryAuthorCollection::new()), "/books").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
