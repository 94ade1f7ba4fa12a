//! Router integration tests for the Journal API
//!
//! These drive the full axum router with in-memory repositories and the real
//! lexicon analyzer, covering the request flow:
//! 1. Submit an entry through one of the two forms
//! 2. Get redirected to the list page
//! 3. See the entry listed and view it on its own page
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
        Router,
    };
    use tower::ServiceExt;

    use crate::adapters::LexiconSentimentAnalyzer;
    use crate::app::EntryService;
    use crate::domain::entities::Sentiment;
    use crate::domain::ports::{EntryRepository, SentimentAnalyzer};
    use crate::test_utils::{
        test_entry, test_entry_with, FailingSentimentAnalyzer, InMemoryEntryRepository,
    };
    use crate::{build_router, AppState};

    fn app_with<ER, SA>(repo: Arc<ER>, analyzer: SA) -> Router
    where
        ER: EntryRepository + 'static,
        SA: SentimentAnalyzer + 'static,
    {
        let entry_service = Arc::new(EntryService::new(repo, Arc::new(analyzer)));
        build_router(AppState { entry_service })
    }

    fn test_app(repo: Arc<InMemoryEntryRepository>) -> Router {
        app_with(repo, LexiconSentimentAnalyzer::new().unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn get_json(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_redirects_home(response: &Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_app(Arc::new(InMemoryEntryRepository::new()));

        let response = send(&app, get("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn home_lists_stored_entries() {
        let repo = Arc::new(
            InMemoryEntryRepository::new()
                .with_entry(test_entry_with("Monday", "Busy", Sentiment::Neutral))
                .with_entry(test_entry_with("Tuesday", "Calm", Sentiment::Positive)),
        );
        let app = test_app(repo);

        let response = send(&app, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        let monday = html.find("Monday").unwrap();
        let tuesday = html.find("Tuesday").unwrap();
        assert!(monday < tuesday);
    }

    #[tokio::test]
    async fn home_returns_json_when_asked() {
        let entry = test_entry();
        let repo = Arc::new(InMemoryEntryRepository::new().with_entry(entry.clone()));
        let app = test_app(repo);

        let response = send(&app, get_json("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], entry.id.to_string());
        assert_eq!(items[0]["sentiment"], "Neutral");
    }

    #[tokio::test]
    async fn new_entry_form_renders() {
        let app = test_app(Arc::new(InMemoryEntryRepository::new()));

        let response = send(&app, get("/new")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("action=\"/new\""));
    }

    #[tokio::test]
    async fn submitting_new_entry_classifies_and_lists_it() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        let response = send(&app, post_form("/new", "title=Good+day&content=I+am+happy")).await;
        assert_redirects_home(&response);

        let stored = repo.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Good day");
        assert_eq!(stored[0].content, "I am happy");
        assert_eq!(stored[0].sentiment, Sentiment::Positive);

        let html = body_text(send(&app, get("/")).await).await;
        assert!(html.contains("Good day"));
    }

    #[tokio::test]
    async fn new_entry_form_ignores_submitted_sentiment() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        let response = send(
            &app,
            post_form("/new", "title=Bad&content=awful+day&sentiment=Positive"),
        )
        .await;
        assert_redirects_home(&response);

        assert_eq!(repo.all()[0].sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn quick_add_stores_submitted_sentiment_as_given() {
        // Manual override path: the label is persisted even though the
        // content on its own would classify as Positive.
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        let response = send(&app, post_form("/", "title=T&content=C&sentiment=Negative")).await;
        assert_redirects_home(&response);

        let response = send(
            &app,
            post_form("/", "title=T2&content=I+am+happy&sentiment=Negative"),
        )
        .await;
        assert_redirects_home(&response);

        let stored = repo.all();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title, "T");
        assert_eq!(stored[0].content, "C");
        assert_eq!(stored[0].sentiment, Sentiment::Negative);
        assert_eq!(stored[1].sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn quick_add_without_sentiment_classifies() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        send(&app, post_form("/", "title=T&content=what+a+wonderful+day")).await;
        send(&app, post_form("/", "title=T&content=so+sad&sentiment=")).await;

        let stored = repo.all();
        assert_eq!(stored[0].sentiment, Sentiment::Positive);
        assert_eq!(stored[1].sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn quick_add_rejects_unknown_sentiment() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        let response = send(&app, post_form("/", "title=T&content=C&sentiment=Ecstatic")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.entry_count(), 0);
    }

    #[tokio::test]
    async fn missing_form_fields_are_bad_requests() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        for (uri, body) in [
            ("/new", "title=Only+a+title"),
            ("/new", "content=Only+content"),
            ("/", "content=No+title&sentiment=Neutral"),
            ("/", ""),
        ] {
            let response = send(&app, post_form(uri, body)).await;
            assert_eq!(
                response.status(),
                StatusCode::BAD_REQUEST,
                "{} with body {:?}",
                uri,
                body
            );
        }

        assert_eq!(repo.entry_count(), 0);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        let response = send(&app, post_form("/new", "title=+++&content=hello")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.entry_count(), 0);
    }

    #[tokio::test]
    async fn non_form_body_is_a_bad_request() {
        let app = test_app(Arc::new(InMemoryEntryRepository::new()));

        let request = Request::builder()
            .method("POST")
            .uri("/new")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title":"T","content":"C"}"#))
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn entry_page_shows_created_entry() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = test_app(repo.clone());

        send(&app, post_form("/new", "title=Walk&content=Lovely+evening")).await;
        let id = repo.all()[0].id;

        let response = send(&app, get(&format!("/entry/{}", id))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Walk</h1>"));
        assert!(html.contains("Lovely evening"));

        let response = send(&app, get_json(&format!("/entry/{}", id))).await;
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["title"], "Walk");
        assert_eq!(json["content"], "Lovely evening");
        assert_eq!(json["sentiment"], "Positive");
    }

    #[tokio::test]
    async fn unknown_entry_is_not_found() {
        let app = test_app(Arc::new(InMemoryEntryRepository::new().with_entry(test_entry())));

        let response = send(
            &app,
            get("/entry/00000000-0000-0000-0000-000000000000"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, get("/entry/not-an-id")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn analyzer_failure_is_a_server_error() {
        let repo = Arc::new(InMemoryEntryRepository::new());
        let app = app_with(repo.clone(), FailingSentimentAnalyzer);

        let response = send(&app, post_form("/new", "title=T&content=C")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(repo.entry_count(), 0);
    }
}
