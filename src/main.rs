use anyhow::Context;
use energy_tips::catalog::store::CatalogStore;
use energy_tips::chatbot::responder::QueryResponder;
use energy_tips::chatbot::stopwords::StopwordSet;
use energy_tips::config::{Config, USAGE};
use energy_tips::routes::router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::from_env_and_args()?;

    // 1. Catalog:
    let catalog = CatalogStore::load_csv(&config.catalog_path).with_context(|| {
        format!(
            "cannot serve recommendations without a catalog ({})",
            config.catalog_path.display()
        )
    })?;
    tracing::info!(
        "Loaded {} recommendations for {} appliances from {}",
        catalog.all_records().len(),
        catalog.appliance_names().len(),
        config.catalog_path.display()
    );
    let catalog = Arc::new(catalog);

    // 2. Chatbot:
    let stopwords = StopwordSet::spanish().with_extra(&config.extra_stopwords);
    tracing::info!(
        "Chatbot ready: {} stopwords ({} configured), threshold {}",
        stopwords.len(),
        config.extra_stopwords.len(),
        config.threshold
    );
    let responder =
        Arc::new(QueryResponder::new(catalog.clone(), stopwords).with_threshold(config.threshold));

    // 3. HTTP Router:
    let app = router(catalog, responder);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
