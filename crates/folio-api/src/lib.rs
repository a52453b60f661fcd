//! # folio-api
//!
//! The web routing and orchestration layer for Folio.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

/// Configures the JSON routes for the portfolio.
///
/// # Developer Note
/// We use a scoped configuration to allow the main binary to mount
/// the API under different paths if needed (e.g., /api/v1/).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Session
            .route("/login", web::post().to(handlers::login))
            .route("/logout", web::post().to(handlers::logout))
            // Profile (singleton)
            .route("/profile", web::get().to(handlers::get_profile))
            .route("/profile", web::put().to(handlers::update_profile))
            // Skills (upsert-by-name)
            .route("/skills", web::get().to(handlers::get_skills))
            .route("/skills", web::put().to(handlers::upsert_skill))
            .route("/skills/{name}", web::delete().to(handlers::delete_skill))
            // Projects
            .route("/projects", web::get().to(handlers::get_projects))
            .route("/projects", web::post().to(handlers::add_project))
            .route("/projects/{id}", web::put().to(handlers::update_project))
            .route("/projects/{id}", web::delete().to(handlers::delete_project))
            // Testimonials
            .route("/testimonials", web::get().to(handlers::get_testimonials))
            .route("/testimonials", web::post().to(handlers::add_testimonial))
            .route("/testimonials/{id}", web::put().to(handlers::update_testimonial))
            .route("/testimonials/{id}", web::delete().to(handlers::delete_testimonial))
            // Timeline
            .route("/timeline", web::get().to(handlers::get_timeline))
            .route("/timeline", web::post().to(handlers::add_timeline_entry))
            .route("/timeline/{id}", web::put().to(handlers::update_timeline_entry))
            .route("/timeline/{id}", web::delete().to(handlers::delete_timeline_entry))
            // Blog posts
            .route("/posts", web::get().to(handlers::get_posts))
            .route("/posts", web::post().to(handlers::add_post))
            .route("/posts/{id}", web::get().to(handlers::get_post))
            .route("/posts/{id}", web::put().to(handlers::update_post))
            .route("/posts/{id}", web::delete().to(handlers::delete_post))
            // Contact messages
            .route("/contact", web::post().to(handlers::submit_contact))
            .route("/contacts", web::get().to(handlers::get_contacts))
            .route("/contacts/{id}/reply", web::post().to(handlers::save_reply))
            // Dashboard
            .route("/stats", web::get().to(handlers::stats))
            // Binary assets
            .route("/resume", web::get().to(handlers::resume))
            .route("/assets", web::post().to(handlers::upload_asset))
            .route("/assets/{id}", web::get().to(handlers::get_asset)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::AppState;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use folio_auth_simple::PasswordAuth;
    use folio_core::SessionGate;
    use folio_db_sqlite::SqlitePortfolioRepo;
    use folio_storage_local::LocalAssetStore;
    use serde_json::json;

    async fn test_state(assets_root: &std::path::Path) -> web::Data<AppState> {
        let auth = PasswordAuth::new();
        let repo = SqlitePortfolioRepo::connect("sqlite::memory:", &auth)
            .await
            .expect("in-memory store");
        web::Data::new(AppState {
            repo: Box::new(repo),
            assets: Box::new(LocalAssetStore::new(assets_root.to_path_buf())),
            auth: Box::new(auth),
            session: SessionGate::new(),
            resume_file: "resume.pdf".to_string(),
        })
    }

    #[actix_web::test]
    async fn test_admin_routes_are_gated() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(configure_routes))
                .await;

        // Locked out before login.
        let req = test::TestRequest::get().uri("/api/contacts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // Wrong password keeps the gate shut.
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "admin", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // Seeded credential opens the session.
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "admin", "password": "admin123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/contacts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // Logout closes it again.
        let req = test::TestRequest::post().uri("/api/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/contacts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_contact_form_presence_checks() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(configure_routes))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "jane@example.com", "message": " " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "jane@example.com", "message": "Hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_public_reads_and_missing_post() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(configure_routes))
                .await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let profile: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(profile["name"], "TUYISENGE Eric");

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let skills: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(skills.as_array().unwrap().len(), 7);

        let req = test::TestRequest::get().uri("/api/posts/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_missing_resume_answers_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path()).await;
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(configure_routes))
                .await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
