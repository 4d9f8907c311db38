// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use chronicle_core::application::{
    ports::events::ArticleEventPublisher, services::ApplicationServices,
};
use chronicle_core::domain::article::{
    Article, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use chronicle_core::domain::workflow::ArticleState;
use chronicle_core::infrastructure::{
    events::HistoryEventPublisher,
    repositories::{InMemoryArticleRepository, InMemoryStateHistoryRepository},
    util::RegexSlugGenerator,
};
use chronicle_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::fixed_clock;

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<InMemoryArticleRepository>,
    pub history: Arc<InMemoryStateHistoryRepository>,
}

/// Services over fresh in-memory stores, a fixed clock and `events`.
pub fn build_services(events: Arc<dyn ArticleEventPublisher>) -> TestContext {
    let repo = Arc::new(InMemoryArticleRepository::new());
    build_services_with_write(Arc::clone(&repo) as Arc<dyn ArticleWriteRepository>, repo, events)
}

/// Same as [`build_services`] but lets the test substitute the write side.
pub fn build_services_with_write(
    write: Arc<dyn ArticleWriteRepository>,
    repo: Arc<InMemoryArticleRepository>,
    events: Arc<dyn ArticleEventPublisher>,
) -> TestContext {
    let history = Arc::new(InMemoryStateHistoryRepository::new());
    let services = Arc::new(ApplicationServices::new(
        write,
        Arc::clone(&repo) as _,
        Arc::clone(&history) as _,
        events,
        Arc::new(fixed_clock()),
        Arc::new(RegexSlugGenerator::new().expect("slug regexes compile")),
    ));
    TestContext {
        services,
        repo,
        history,
    }
}

/// Stores `article` as-is, including a non-draft state.
pub async fn seed(repo: &InMemoryArticleRepository, article: Article) -> Article {
    let draft = repo
        .insert(NewArticle {
            id: article.id,
            title: article.title.clone(),
            slug: article.slug.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone(),
            cover_image: article.cover_image.clone(),
            author_id: article.author_id.clone(),
            created_at: article.created_at,
        })
        .await
        .expect("seed insert");
    if article.state == ArticleState::Draft {
        return draft;
    }
    repo.update(ArticleUpdate::lifecycle(&article, draft.updated_at))
        .await
        .expect("seed update")
}

/// Router over in-memory stores with the history-recording publisher.
pub fn make_test_router(cron_key: Option<&str>) -> (axum::Router, TestContext) {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let history = Arc::new(InMemoryStateHistoryRepository::new());
    let events = Arc::new(HistoryEventPublisher::new(Arc::clone(&history) as _));
    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&repo) as _,
        Arc::clone(&repo) as _,
        Arc::clone(&history) as _,
        events,
        Arc::new(fixed_clock()),
        Arc::new(RegexSlugGenerator::new().expect("slug regexes compile")),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        cron_key: cron_key.map(Arc::from),
        allowed_origins: vec!["http://localhost:3000".to_string()].into(),
    };
    (
        build_router(state),
        TestContext {
            services,
            repo,
            history,
        },
    )
}

/// Sends one request and returns the status with the JSON body (`Null` when empty).
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    json: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = match json {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected JSON body")
    };
    (status, value)
}

/// Asserts the `{ error, message }` body produced for failed requests.
pub fn assert_error_body(body: &Value, expected_error: &str) {
    let err_field = body.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {body}");
    assert!(!msg_field.is_empty(), "expected non-empty message in {body}");
}
