//! # Shoezshop Storefront Library
//!
//! Application layer of the storefront: configuration, logging, per-concern
//! state and the command functions the UI shell invokes.
//!
//! ## Module Organization
//! ```text
//! shoez_storefront/
//! ├── lib.rs          ◄─── You are here (bootstrap & run)
//! ├── config.rs       ◄─── storefront.toml + SHOEZ_* overrides
//! ├── error.rs        ◄─── ApiError returned by commands
//! ├── state/          ◄─── One state type per concern
//! └── commands/       ◄─── checkout, cart, products, rating, language, admin
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Initialize Logging ───► tracing-subscriber, RUST_LOG overrides      │
//! │                                                                         │
//! │  2. Load Configuration ───► defaults < storefront.toml < SHOEZ_*        │
//! │                                                                         │
//! │  3. Open Local Storage ───► SQLite (WAL), run migrations                │
//! │                                                                         │
//! │  4. Build Catalog Client ─► reqwest with configured timeout             │
//! │                                                                         │
//! │  5. Initialize State ─────► Db, Checkout, Rating, Language, Admin,      │
//! │                             Catalog, Config                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use shoez_catalog::{HttpProductSource, ProductCatalog, ProductSource};
use shoez_core::rating::ReviewRatings;
use shoez_core::voucher::VoucherBook;
use shoez_db::{Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::StorefrontConfig;
use error::ApiResult;
use state::{
    AdminState, CatalogState, CheckoutState, ConfigState, DbState, LanguageState, RatingState,
};

/// Every state object of a running storefront.
#[derive(Debug)]
pub struct Storefront {
    pub config: ConfigState,
    pub db: DbState,
    pub catalog: CatalogState,
    pub checkout: CheckoutState,
    pub ratings: RatingState,
    pub language: LanguageState,
    pub admin: AdminState,
}

impl Storefront {
    /// Opens storage and the catalog client described by `config`.
    pub async fn bootstrap(config: StorefrontConfig) -> ApiResult<Self> {
        let db_path = config.database_path()?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        info!("Database connected and migrations applied");

        let source = HttpProductSource::from_config(&config.catalog)?;
        info!(endpoint = %source.endpoint(), "Catalog client ready");

        Ok(Self::from_parts(config, db, Arc::new(source)))
    }

    /// Assembles state from already-opened parts.
    pub fn from_parts(
        config: StorefrontConfig,
        db: Database,
        source: Arc<dyn ProductSource>,
    ) -> Self {
        let language = LanguageState::new(config.store.default_language);
        Storefront {
            db: DbState::new(db),
            catalog: CatalogState::new(ProductCatalog::new(source)),
            checkout: CheckoutState::new(VoucherBook::standard()),
            ratings: RatingState::new(ReviewRatings::new()),
            language,
            admin: AdminState::new(),
            config: ConfigState::new(config),
        }
    }

    pub async fn shutdown(&self) {
        self.db.inner().close().await;
        info!("Storefront stopped");
    }
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shoez_core=trace` - Trace one crate
/// - Default: `info,shoez=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shoez=debug,sqlx=warn"));

    // A second call (tests, embedding shells) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Headless run: boots the storefront, mounts the checkout from the
/// persisted cart and prints what the page would render.
pub async fn run(config_path: Option<PathBuf>) -> ApiResult<()> {
    init_tracing();
    info!("Starting Shoezshop storefront");

    let config = StorefrontConfig::load_or_default(config_path);
    let storefront = Storefront::bootstrap(config).await?;

    let view =
        commands::checkout::mount_checkout(&storefront.db, &storefront.language, &storefront.checkout)
            .await?;

    let store = storefront.config.inner();
    info!(
        store = %store.store.name,
        lines = view.lines.len(),
        total = %store.format_currency(view.running_total),
        "Checkout ready"
    );

    let json = serde_json::to_string_pretty(&view)
        .map_err(|e| error::ApiError::internal(e.to_string()))?;
    println!("{json}");

    storefront.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use shoez_catalog::StaticProductSource;
    use shoez_core::i18n::Language;
    use shoez_core::Money;

    async fn storefront(language: Language) -> Storefront {
        let mut config = StorefrontConfig::default();
        config.store.default_language = language;
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Storefront::from_parts(
            config,
            db,
            Arc::new(StaticProductSource::new(vec![
                commands::test_support::catalog_product("Air Runner", "sneakers"),
                commands::test_support::catalog_product("Court Classic", "sneakers"),
            ])),
        )
    }

    #[tokio::test]
    async fn test_product_page_to_checkout() {
        let app = storefront(Language::En).await;

        let related = commands::products::related_products(&app.catalog, "sneakers").await;
        assert_eq!(related.len(), 2);

        commands::cart::add_to_cart(
            &app.db,
            commands::cart::AddToCartRequest {
                name: related[0].product_name.clone(),
                price: Money::from_cents(5000),
                image: related[0].image.clone(),
                quantity: Some(2),
            },
        )
        .await
        .unwrap();

        let view = commands::checkout::mount_checkout(&app.db, &app.language, &app.checkout)
            .await
            .unwrap();
        assert_eq!(view.running_total, Money::from_cents(10000));

        let view = commands::checkout::apply_voucher(&app.checkout, "GIFT100").unwrap();
        assert_eq!(view.running_total, Money::zero());
        assert_eq!(
            view.success_message.as_deref(),
            Some("Voucher applied successfully!")
        );

        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_default_language_from_config() {
        let app = storefront(Language::Fr).await;
        assert_eq!(commands::language::get_language(&app.language), Language::Fr);
        assert_eq!(commands::language::translate(&app.language, "products"), "Produits");
    }

    #[tokio::test]
    async fn test_bootstrap_with_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.storage.database_path = Some(dir.path().join("shoez.db"));

        let app = Storefront::bootstrap(config).await.unwrap();
        assert!(app.db.inner().health_check().await);
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_bad_catalog_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.storage.database_path = Some(dir.path().join("shoez.db"));
        config.catalog.endpoint = "ftp://example.com/products".to_string();

        let err = Storefront::bootstrap(config).await.unwrap_err();
        assert_eq!(err.code, error::ErrorCode::CatalogError);
    }
}
