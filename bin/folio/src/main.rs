//! # Folio Binary
//!
//! The entry point that assembles the application based on compile-time
//! features: SQLite store, Argon2 auth, local asset storage.

use actix_web::{web, App, HttpServer};
use folio_api::handlers::AppState;
use folio_api::middleware;
use folio_core::SessionGate;

// Feature-gated imports: swap implementations without touching the wiring
#[cfg(feature = "db-sqlite")]
use folio_db_sqlite::SqlitePortfolioRepo;

#[cfg(feature = "storage-local")]
use folio_storage_local::LocalAssetStore;

#[cfg(feature = "auth-simple")]
use folio_auth_simple::PasswordAuth;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let db_url = env_or("FOLIO_DB_URL", "sqlite:portfolio.db");
    let assets_dir = env_or("FOLIO_ASSETS_DIR", "./data/assets");
    let resume_file = env_or("FOLIO_RESUME_FILE", "resume.pdf");
    let bind = env_or("FOLIO_BIND", "127.0.0.1:8080");

    // 1. Initialize Auth Implementation
    #[cfg(feature = "auth-simple")]
    let auth = PasswordAuth::new();

    // 2. Initialize Database Implementation (idempotent schema + admin seed)
    #[cfg(feature = "db-sqlite")]
    let repo = SqlitePortfolioRepo::connect(&db_url, &auth)
        .await
        .expect("Failed to init SQLite store");

    // 3. Initialize Asset Storage Implementation
    #[cfg(feature = "storage-local")]
    let assets = LocalAssetStore::new(assets_dir.into());

    // 4. Wrap in AppState (dynamic dispatch keeps the wiring plugin-agnostic)
    let state = web::Data::new(AppState {
        repo: Box::new(repo),
        assets: Box::new(assets),
        auth: Box::new(auth),
        session: SessionGate::new(),
        resume_file,
    });

    log::info!("folio starting on http://{bind}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::request_logger())
            .wrap(middleware::cors_policy())
            .configure(folio_api::configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
