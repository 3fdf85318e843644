use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_records::domain::customer::{CustomerRepository, CustomerService};
use customer_records::metrics::Metrics;
use customer_records::persistence::{InMemoryCustomerRepository, PostgresCustomerRepository};
use customer_records::utils::RetryConfig;
use customer_records::{http, AppConfig, StorageKind};

fn init_tracing(json: bool) {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,customer_records=debug"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .init();
    }
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn CustomerRepository>> {
    match config.storage {
        StorageKind::Memory => {
            tracing::warn!("Using in-memory storage; customers are lost on restart");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        }
        StorageKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("database_url is required for postgres storage"))?;

            let repository = PostgresCustomerRepository::connect(
                url,
                config.max_connections,
                RetryConfig::with_max_attempts(config.connect_attempts),
            )
            .await?;
            repository.initialize().await?;

            Ok(Arc::new(repository))
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    init_tracing(config.log_json);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        anyhow::bail!(e);
    }

    tracing::info!("🚀 Starting customer records service");
    tracing::debug!(storage = ?config.storage, port = config.port, "Loaded configuration");

    let metrics = Arc::new(Metrics::new()?);
    let repository = build_repository(&config).await?;
    let service = web::Data::new(CustomerService::new(repository, metrics.clone()));
    let metrics = web::Data::new(metrics);

    let (host, port) = config.listen_addr();
    tracing::info!("📡 Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(metrics.clone())
            .configure(http::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    tracing::info!("👋 Customer records service stopped");
    Ok(())
}
