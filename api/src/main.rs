use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use pc_api::app::{create_app, AppState};
use pc_core::repositories::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryProductRepository, ProductRepository,
};
use pc_core::services::product::{ImageStorageConfig, ProductService};
use pc_core::services::token::{TokenClaimsService, TokenServiceConfig};
use pc_infra::database::{DatabasePool, MySqlCategoryRepository, MySqlProductRepository};
use pc_infra::LocalImageWriter;
use pc_shared::config::{AppConfig, Environment, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, the environment-specific file first
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    )
    .format_timestamp(config.logging.timestamp.then_some(env_logger::TimestampPrecision::Seconds))
    .init();

    info!("Starting product catalog API ({})", config.environment);

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("JWT_SECRET not set, using the development secret");
    }

    let token_config = TokenServiceConfig::from_jwt_config(&config.jwt)
        .context("invalid JWT_ALGORITHMS")?;
    let token_service =
        Arc::new(TokenClaimsService::new(token_config).context("invalid JWT_SECRET")?);

    match config.database.backend {
        StoreBackend::Memory => {
            warn!("Using the in-memory catalog store; data is lost on shutdown");
            let categories =
                InMemoryCategoryRepository::with_names(config.database.seed_categories.clone());
            serve(
                &config,
                Arc::new(InMemoryProductRepository::new()),
                Arc::new(categories),
                token_service,
            )
            .await
        }
        StoreBackend::Mysql => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("failed to connect to MySQL")?;
            if config.database.run_migrations {
                pool.run_migrations().await?;
            }

            let result = serve(
                &config,
                Arc::new(MySqlProductRepository::new(pool.get_pool())),
                Arc::new(MySqlCategoryRepository::new(pool.get_pool())),
                token_service,
            )
            .await;

            pool.close().await;
            result
        }
    }
}

async fn serve<P, C>(
    config: &AppConfig,
    products: Arc<P>,
    categories: Arc<C>,
    token_service: Arc<TokenClaimsService>,
) -> anyhow::Result<()>
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    let storage = ImageStorageConfig::from(&config.storage);
    info!("Product images are written to {}", storage.directory.display());

    let product_service = Arc::new(ProductService::new(
        products,
        categories,
        Arc::new(LocalImageWriter::new()),
        storage,
    ));
    let state = web::Data::new(AppState::new(
        product_service,
        token_service,
        config.server.max_payload_size,
    ));

    let cors = config.cors.clone();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
