//! # folio-api Handlers
//!
//! This module coordinates the flow between HTTP requests and core traits.
//! Every read handler fetches fresh from the repository; there is no
//! server-side cache of collections, so a caller always sees the store as
//! it is. Business-rule validation (presence checks, skill level range)
//! happens here, not in the store.

use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use folio_core::models::{
    ContactDraft, PostDraft, Profile, ProjectDraft, TestimonialDraft, TimelineEntryDraft,
};
use folio_core::traits::{AssetStore, AuthProvider, PortfolioRepo};
use folio_core::{AppError, SessionGate};
use serde::Deserialize;
use serde_json::json;

/// State shared across all actix workers. The session gate is the single
/// logical admin session for this process.
pub struct AppState {
    pub repo: Box<dyn PortfolioRepo>,
    pub assets: Box<dyn AssetStore>,
    pub auth: Box<dyn AuthProvider>,
    pub session: SessionGate,
    /// Fixed asset name of the downloadable resume.
    pub resume_file: String,
}

type ApiResult = Result<HttpResponse, ApiError>;

fn require_admin(state: &AppState) -> Result<(), ApiError> {
    if state.session.is_logged_in() {
        Ok(())
    } else {
        Err(AppError::Unauthorized("admin session required".into()).into())
    }
}

fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!("{name} must not be empty")).into());
        }
    }
    Ok(())
}

/// Maps the repository's "nothing matched" result to a 404.
fn found_or_404(matched: bool, kind: &str, id: impl std::fmt::Display) -> ApiResult {
    if matched {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(kind.into(), id.to_string()).into())
    }
}

// ── Session ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login(state: web::Data<AppState>, form: web::Json<LoginForm>) -> ApiResult {
    let credential = state.repo.get_credential(&form.username).await?;
    let ok = state.session.login(
        &form.username,
        &form.password,
        credential.as_ref(),
        state.auth.as_ref(),
    );
    if ok {
        log::info!("admin session opened");
        Ok(HttpResponse::Ok().json(json!({ "logged_in": true })))
    } else {
        // The generic message is deliberate; which field was wrong is not
        // disclosed.
        Err(AppError::Unauthorized("invalid username or password".into()).into())
    }
}

pub async fn logout(state: web::Data<AppState>) -> ApiResult {
    state.session.logout();
    Ok(HttpResponse::NoContent().finish())
}

// ── Profile ─────────────────────────────────────────────────────────────────

pub async fn get_profile(state: web::Data<AppState>) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.repo.get_profile().await?))
}

pub async fn update_profile(
    state: web::Data<AppState>,
    profile: web::Json<Profile>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("name", &profile.name), ("email", &profile.email)])?;
    let matched = state.repo.update_profile(&profile).await?;
    found_or_404(matched, "profile", profile.id)
}

// ── Skills ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillForm {
    pub skill: String,
    pub level: i64,
}

pub async fn get_skills(state: web::Data<AppState>) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.repo.get_skills().await?))
}

pub async fn upsert_skill(state: web::Data<AppState>, form: web::Json<SkillForm>) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("skill", &form.skill)])?;
    if !(0..=100).contains(&form.level) {
        return Err(AppError::ValidationError("level must be between 0 and 100".into()).into());
    }
    state.repo.upsert_skill(&form.skill, form.level).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_skill(state: web::Data<AppState>, name: web::Path<String>) -> ApiResult {
    require_admin(&state)?;
    let matched = state.repo.delete_skill(&name).await?;
    found_or_404(matched, "skill", &*name)
}

// ── Projects ────────────────────────────────────────────────────────────────

pub async fn get_projects(state: web::Data<AppState>) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.repo.get_projects().await?))
}

pub async fn add_project(
    state: web::Data<AppState>,
    draft: web::Json<ProjectDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("title", &draft.title), ("description", &draft.description)])?;
    state.repo.add_project(&draft).await?;
    Ok(HttpResponse::Created().finish())
}

pub async fn update_project(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    draft: web::Json<ProjectDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("title", &draft.title), ("description", &draft.description)])?;
    let matched = state.repo.update_project(*id, &draft).await?;
    found_or_404(matched, "project", *id)
}

pub async fn delete_project(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult {
    require_admin(&state)?;
    let matched = state.repo.delete_project(*id).await?;
    found_or_404(matched, "project", *id)
}

// ── Testimonials ────────────────────────────────────────────────────────────

pub async fn get_testimonials(state: web::Data<AppState>) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.repo.get_testimonials().await?))
}

pub async fn add_testimonial(
    state: web::Data<AppState>,
    draft: web::Json<TestimonialDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("text", &draft.text), ("author", &draft.author)])?;
    state.repo.add_testimonial(&draft).await?;
    Ok(HttpResponse::Created().finish())
}

pub async fn update_testimonial(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    draft: web::Json<TestimonialDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("text", &draft.text), ("author", &draft.author)])?;
    let matched = state.repo.update_testimonial(*id, &draft).await?;
    found_or_404(matched, "testimonial", *id)
}

pub async fn delete_testimonial(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult {
    require_admin(&state)?;
    let matched = state.repo.delete_testimonial(*id).await?;
    found_or_404(matched, "testimonial", *id)
}

// ── Timeline ────────────────────────────────────────────────────────────────

pub async fn get_timeline(state: web::Data<AppState>) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.repo.get_timeline().await?))
}

pub async fn add_timeline_entry(
    state: web::Data<AppState>,
    draft: web::Json<TimelineEntryDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("year", &draft.year), ("title", &draft.title)])?;
    state.repo.add_timeline_entry(&draft).await?;
    Ok(HttpResponse::Created().finish())
}

pub async fn update_timeline_entry(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    draft: web::Json<TimelineEntryDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("year", &draft.year), ("title", &draft.title)])?;
    let matched = state.repo.update_timeline_entry(*id, &draft).await?;
    found_or_404(matched, "timeline entry", *id)
}

pub async fn delete_timeline_entry(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult {
    require_admin(&state)?;
    let matched = state.repo.delete_timeline_entry(*id).await?;
    found_or_404(matched, "timeline entry", *id)
}

// ── Posts ───────────────────────────────────────────────────────────────────

pub async fn get_posts(state: web::Data<AppState>) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.repo.get_posts().await?))
}

pub async fn get_post(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult {
    match state.repo.get_post(*id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("post".into(), id.to_string()).into()),
    }
}

pub async fn add_post(state: web::Data<AppState>, draft: web::Json<PostDraft>) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("title", &draft.title), ("content", &draft.content)])?;
    state.repo.add_post(&draft).await?;
    Ok(HttpResponse::Created().finish())
}

pub async fn update_post(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    draft: web::Json<PostDraft>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("title", &draft.title), ("content", &draft.content)])?;
    let matched = state.repo.update_post(*id, &draft).await?;
    found_or_404(matched, "post", *id)
}

pub async fn delete_post(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult {
    require_admin(&state)?;
    let matched = state.repo.delete_post(*id).await?;
    found_or_404(matched, "post", *id)
}

// ── Contact messages ────────────────────────────────────────────────────────

pub async fn submit_contact(
    state: web::Data<AppState>,
    draft: web::Json<ContactDraft>,
) -> ApiResult {
    require_fields(&[
        ("name", &draft.name),
        ("email", &draft.email),
        ("message", &draft.message),
    ])?;
    state.repo.add_contact(&draft).await?;
    Ok(HttpResponse::Created().finish())
}

pub async fn get_contacts(state: web::Data<AppState>) -> ApiResult {
    require_admin(&state)?;
    Ok(HttpResponse::Ok().json(state.repo.get_contacts().await?))
}

#[derive(Debug, Deserialize)]
pub struct ReplyForm {
    pub reply: String,
}

pub async fn save_reply(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<ReplyForm>,
) -> ApiResult {
    require_admin(&state)?;
    require_fields(&[("reply", &form.reply)])?;
    let matched = state.repo.save_reply(*id, &form.reply).await?;
    found_or_404(matched, "contact message", *id)
}

// ── Dashboard stats ─────────────────────────────────────────────────────────

pub async fn stats(state: web::Data<AppState>) -> ApiResult {
    require_admin(&state)?;
    let repo = &state.repo;
    Ok(HttpResponse::Ok().json(json!({
        "projects": repo.get_projects().await?.len(),
        "posts": repo.get_posts().await?.len(),
        "testimonials": repo.get_testimonials().await?.len(),
        "timeline": repo.get_timeline().await?.len(),
        "skills": repo.get_skills().await?.len(),
        "contacts": repo.get_contacts().await?.len(),
    })))
}

// ── Binary assets ───────────────────────────────────────────────────────────

/// Streams the resume PDF. A missing file answers 404 so the presentation
/// layer can skip the download control.
pub async fn resume(state: web::Data<AppState>) -> ApiResult {
    let data = state.assets.read(&state.resume_file).await?;
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .body(data))
}

pub async fn get_asset(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult {
    let data = state.assets.read(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type("application/octet-stream")
        .body(data))
}

/// Stores uploaded bytes (e.g., a profile picture) and returns the asset
/// id to record on the profile.
pub async fn upload_asset(state: web::Data<AppState>, body: web::Bytes) -> ApiResult {
    require_admin(&state)?;
    if body.is_empty() {
        return Err(AppError::ValidationError("upload must not be empty".into()).into());
    }
    let id = state.assets.save(body.to_vec()).await?;
    Ok(HttpResponse::Created().json(json!({ "id": id })))
}
