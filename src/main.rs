use chronicle_core::application::{
    ports::{ClockPort, EventPublisherPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use chronicle_core::config::AppConfig;
use chronicle_core::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, StateHistoryRepository,
};
use chronicle_core::infrastructure::{
    database,
    events::HistoryEventPublisher,
    repositories::{
        InMemoryArticleRepository, InMemoryStateHistoryRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresStateHistoryRepository,
    },
    scheduler,
    time::SystemClock,
    util::RegexSlugGenerator,
};
use chronicle_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::{signal, sync::watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

struct Storage {
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
    history: Arc<dyn StateHistoryRepository>,
    pool: Option<PgPool>,
}

async fn open_storage(config: &AppConfig) -> Result<Storage> {
    let Some(url) = config.database_url() else {
        tracing::warn!("DATABASE_URL not set, using in-memory storage");
        let articles = Arc::new(InMemoryArticleRepository::new());
        return Ok(Storage {
            write: articles.clone(),
            read: articles,
            history: Arc::new(InMemoryStateHistoryRepository::new()),
            pool: None,
        });
    };

    let pool = database::init_pool(url).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("connected to postgres, migrations applied");

    Ok(Storage {
        write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        history: Arc::new(PostgresStateHistoryRepository::new(pool.clone())),
        pool: Some(pool),
    })
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let storage = open_storage(&config).await?;

    let events: Arc<EventPublisherPort> =
        Arc::new(HistoryEventPublisher::new(Arc::clone(&storage.history)));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(RegexSlugGenerator::new()?);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&storage.write),
        Arc::clone(&storage.read),
        Arc::clone(&storage.history),
        events,
        clock,
        slugger,
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let ticker = config.auto_publish_interval().map(|every| {
        scheduler::spawn_auto_publish(
            Arc::clone(&services.article_commands),
            every,
            shutdown_rx.clone(),
        )
    });

    let state = HttpState {
        services: Arc::clone(&services),
        cron_key: config.cron_api_key().map(Arc::from),
        allowed_origins: config.allowed_origins().into(),
    };
    if state.cron_key.is_none() {
        tracing::warn!("CRON_API_KEY not set, auto-publish endpoint is unauthenticated");
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tx.send(true).ok();
    if let Some(ticker) = ticker {
        ticker.await.ok();
    }
    if let Some(pool) = storage.pool {
        pool.close().await;
        tracing::info!("database pool closed");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
