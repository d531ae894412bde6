//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the CLI
//! commands. Services are generic over repository traits, but AppState
//! pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use comanda_core::menu::cache::MenuCache;
use comanda_core::order::service::OrderService;
use comanda_infra::config::{load_app_config, resolve_data_dir};
use comanda_infra::sqlite::order::SqliteOrderRepository;
use comanda_infra::sqlite::pool::DatabasePool;
use comanda_types::config::AppConfig;

/// Concrete type alias for the order service pinned to SQLite.
pub type ConcreteOrderService = OrderService<SqliteOrderRepository>;

/// Shared application state holding all services.
pub struct AppState {
    pub order_service: Arc<ConcreteOrderService>,
    pub menu_cache: MenuCache,
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_app_config(&data_dir).await;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("comanda.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let order_repo = SqliteOrderRepository::new(db_pool.clone());
        let order_service = OrderService::new(order_repo);

        let menu_cache = MenuCache::new(&config.menu_path);

        tracing::debug!(data_dir = %data_dir.display(), "application state initialized");

        Ok(Self {
            order_service: Arc::new(order_service),
            menu_cache,
            config,
            data_dir,
            db_pool,
        })
    }
}
