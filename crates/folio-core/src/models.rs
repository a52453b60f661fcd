//! # Domain Models
//!
//! These structs represent the core entities of Folio. Every record kind is
//! flat and keyed by the store's auto-incrementing integer id; the `*Draft`
//! types carry the caller-supplied fields for add/update operations, where
//! the id is either assigned by the store or passed separately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored admin credential. The password is kept only as a PHC hash string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// The owner's profile. Singleton: exactly one logical row, id 1 by
/// convention, lazily created with defaults on first read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub university: String,
    pub field: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Asset id/path of the uploaded picture, served by the asset store.
    pub profile_pic: Option<String>,
}

/// A named skill with a 0-100 proficiency level. Names are unique, which
/// is what makes upsert-by-name possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub skill: String,
    pub level: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    /// Project category ("Group Project", "Individual Project", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub description: String,
    pub link: String,
    /// Raw image bytes; round-trips through the store unchanged.
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub description: String,
    pub link: String,
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialDraft {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: i64,
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntryDraft {
    pub year: String,
    pub title: String,
    pub description: String,
}

/// A blog post. Ordered by `created_at` descending; never default-seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image: Option<Vec<u8>>,
}

/// A visitor message. `replied` flips true exactly once, when the owner
/// records a reply; there is no path back to unreplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub replied: bool,
    pub reply_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}
