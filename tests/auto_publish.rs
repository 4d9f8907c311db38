// tests/auto_publish.rs
use std::sync::Arc;

use chrono::Duration;
use chronicle_core::domain::{
    article::ArticleReadRepository,
    workflow::{ArticleEvent, ArticleState},
};
use chronicle_core::infrastructure::repositories::InMemoryArticleRepository;

mod support;

use support::{
    ArticleBuilder, FailingPublisher, FlakyArticleWrite, RecordingPublisher, build_services,
    build_services_with_write, fixed_now, seed,
};

#[tokio::test]
async fn publishes_only_due_articles() {
    let publisher = Arc::new(RecordingPublisher::default());
    let ctx = build_services(publisher.clone());
    let now = fixed_now();

    let overdue = seed(&ctx.repo, ArticleBuilder::new().scheduled(now - Duration::hours(1)).build()).await;
    let exactly_due = seed(&ctx.repo, ArticleBuilder::new().scheduled(now).build()).await;
    let future = seed(&ctx.repo, ArticleBuilder::new().scheduled(now + Duration::hours(1)).build()).await;

    let published = ctx
        .services
        .article_commands
        .auto_publish_due(Some(now))
        .await
        .unwrap();
    assert_eq!(published, 2);

    for id in [overdue.id, exactly_due.id] {
        let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.state, ArticleState::Published);
        assert_eq!(stored.scheduled_at, None);
        assert_eq!(stored.published_at, Some(now));
    }
    let untouched = ctx.repo.find_by_id(future.id).await.unwrap().unwrap();
    assert_eq!(untouched.state, ArticleState::Scheduled);

    let records = publisher.records();
    assert_eq!(records.len(), 2);
    for (_, record) in &records {
        assert_eq!(record.event, ArticleEvent::AutoPublish);
        assert_eq!(record.from, ArticleState::Scheduled);
        assert!(record.triggered_by.is_none(), "sweep is system-triggered");
    }
}

#[tokio::test]
async fn second_sweep_finds_nothing() {
    let ctx = build_services(Arc::new(RecordingPublisher::default()));
    let now = fixed_now();
    seed(&ctx.repo, ArticleBuilder::new().scheduled(now - Duration::minutes(5)).build()).await;

    let commands = &ctx.services.article_commands;
    assert_eq!(commands.auto_publish_due(Some(now)).await.unwrap(), 1);
    assert_eq!(commands.auto_publish_due(Some(now)).await.unwrap(), 0);
}

#[tokio::test]
async fn empty_store_publishes_nothing() {
    let publisher = Arc::new(RecordingPublisher::default());
    let ctx = build_services(publisher.clone());

    let published = ctx
        .services
        .article_commands
        .auto_publish_due(None)
        .await
        .unwrap();
    assert_eq!(published, 0);
    assert_eq!(publisher.count(), 0);
}

#[tokio::test]
async fn failing_item_does_not_stop_the_sweep() {
    let now = fixed_now();
    let repo = Arc::new(InMemoryArticleRepository::new());
    let broken = seed(&repo, ArticleBuilder::new().scheduled(now - Duration::hours(2)).build()).await;
    let healthy = seed(&repo, ArticleBuilder::new().scheduled(now - Duration::hours(1)).build()).await;

    let publisher = Arc::new(RecordingPublisher::default());
    let write = Arc::new(FlakyArticleWrite::new(Arc::clone(&repo), [broken.id]));
    let ctx = build_services_with_write(write, Arc::clone(&repo), publisher.clone());

    let published = ctx
        .services
        .article_commands
        .auto_publish_due(Some(now))
        .await
        .unwrap();
    assert_eq!(published, 1);

    let broken_now = repo.find_by_id(broken.id).await.unwrap().unwrap();
    assert_eq!(broken_now.state, ArticleState::Scheduled);
    let healthy_now = repo.find_by_id(healthy.id).await.unwrap().unwrap();
    assert_eq!(healthy_now.state, ArticleState::Published);
    assert_eq!(publisher.count(), 1);
}

#[tokio::test]
async fn notification_failure_still_counts_published_article() {
    let publisher = Arc::new(FailingPublisher::default());
    let ctx = build_services(publisher.clone());
    let now = fixed_now();
    let article = seed(&ctx.repo, ArticleBuilder::new().scheduled(now - Duration::hours(1)).build()).await;

    let published = ctx
        .services
        .article_commands
        .auto_publish_due(Some(now))
        .await
        .unwrap();

    assert_eq!(published, 1);
    assert_eq!(publisher.attempts(), 1);
    let stored = ctx.repo.find_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(stored.state, ArticleState::Published);
}

#[tokio::test]
async fn reference_time_defaults_to_clock() {
    let ctx = build_services(Arc::new(RecordingPublisher::default()));
    let now = fixed_now();
    seed(&ctx.repo, ArticleBuilder::new().scheduled(now - Duration::seconds(1)).build()).await;
    seed(&ctx.repo, ArticleBuilder::new().scheduled(now + Duration::seconds(1)).build()).await;

    let published = ctx
        .services
        .article_commands
        .auto_publish_due(None)
        .await
        .unwrap();
    assert_eq!(published, 1);
}
