//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use crate::models::{
    ContactDraft, ContactMessage, Credential, Post, PostDraft, Profile, Project, ProjectDraft,
    Skill, Testimonial, TestimonialDraft, TimelineEntry, TimelineEntryDraft,
};
use async_trait::async_trait;

/// Data persistence contract for every portfolio record kind.
///
/// Each call is one self-contained store round trip (or the short fixed
/// insert-then-read sequence used for default-seeding); no connection is
/// held across calls and no batching happens here.
///
/// Mutations keyed by id (`update_*`, `delete_*`, `save_reply`) return
/// `Ok(true)` when a row matched and `Ok(false)` when nothing did, so
/// callers can distinguish "updated" from "nothing matched" without a
/// missing id being treated as a failure.
#[async_trait]
pub trait PortfolioRepo: Send + Sync {
    // Profile (singleton; default-seeded on first empty read)
    async fn get_profile(&self) -> anyhow::Result<Profile>;
    async fn update_profile(&self, profile: &Profile) -> anyhow::Result<bool>;

    // Skills (unique by name; default-seeded)
    async fn get_skills(&self) -> anyhow::Result<Vec<Skill>>;
    async fn upsert_skill(&self, name: &str, level: i64) -> anyhow::Result<()>;
    async fn delete_skill(&self, name: &str) -> anyhow::Result<bool>;

    // Projects (default-seeded)
    async fn get_projects(&self) -> anyhow::Result<Vec<Project>>;
    async fn add_project(&self, draft: &ProjectDraft) -> anyhow::Result<()>;
    async fn update_project(&self, id: i64, draft: &ProjectDraft) -> anyhow::Result<bool>;
    async fn delete_project(&self, id: i64) -> anyhow::Result<bool>;

    // Testimonials (default-seeded)
    async fn get_testimonials(&self) -> anyhow::Result<Vec<Testimonial>>;
    async fn add_testimonial(&self, draft: &TestimonialDraft) -> anyhow::Result<()>;
    async fn update_testimonial(&self, id: i64, draft: &TestimonialDraft)
        -> anyhow::Result<bool>;
    async fn delete_testimonial(&self, id: i64) -> anyhow::Result<bool>;

    // Timeline (default-seeded)
    async fn get_timeline(&self) -> anyhow::Result<Vec<TimelineEntry>>;
    async fn add_timeline_entry(&self, draft: &TimelineEntryDraft) -> anyhow::Result<()>;
    async fn update_timeline_entry(
        &self,
        id: i64,
        draft: &TimelineEntryDraft,
    ) -> anyhow::Result<bool>;
    async fn delete_timeline_entry(&self, id: i64) -> anyhow::Result<bool>;

    // Posts (created_at descending; empty is a valid terminal state)
    async fn get_posts(&self) -> anyhow::Result<Vec<Post>>;
    async fn get_post(&self, id: i64) -> anyhow::Result<Option<Post>>;
    async fn add_post(&self, draft: &PostDraft) -> anyhow::Result<()>;
    async fn update_post(&self, id: i64, draft: &PostDraft) -> anyhow::Result<bool>;
    async fn delete_post(&self, id: i64) -> anyhow::Result<bool>;

    // Contact messages (created_at descending; never seeded)
    async fn get_contacts(&self) -> anyhow::Result<Vec<ContactMessage>>;
    async fn add_contact(&self, draft: &ContactDraft) -> anyhow::Result<()>;
    /// Sets `reply_text` and flips `replied` true in one statement. A second
    /// reply overwrites the text; `replied` stays true.
    async fn save_reply(&self, id: i64, reply: &str) -> anyhow::Result<bool>;

    // Credentials (seeded once at store init)
    async fn get_credential(&self, username: &str) -> anyhow::Result<Option<Credential>>;
}

/// Password hashing contract. Verification failure is a normal `false`,
/// never an error.
pub trait AuthProvider: Send + Sync {
    fn hash_password(&self, password: &str) -> anyhow::Result<String>;
    fn verify_password(&self, password: &str, hash: &str) -> bool;
}

/// Opaque binary asset contract (resume PDF, uploaded pictures). The core
/// never interprets asset content; it only streams bytes back unchanged.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Reads a stored asset. A missing file is a distinguishable
    /// [`AppError::NotFound`](crate::error::AppError::NotFound), not a crash.
    async fn read(&self, name: &str) -> crate::error::Result<Vec<u8>>;

    /// Stores raw bytes and returns the asset id to reference them by.
    async fn save(&self, data: Vec<u8>) -> crate::error::Result<String>;
}
