//! # folio-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite relational
//! model and the `folio-core` domain models. Initialization is idempotent:
//! every table is created only if absent and the admin credential is seeded
//! only once. The collections with documented defaults (profile, skills,
//! projects, testimonials, timeline) are lazily seeded on their first empty
//! read; posts and contact messages are never seeded.

use async_trait::async_trait;
use chrono::Utc;
use folio_core::defaults;
use folio_core::models::{
    ContactDraft, ContactMessage, Credential, Post, PostDraft, Profile, Project, ProjectDraft,
    Skill, Testimonial, TestimonialDraft, TimelineEntry, TimelineEntryDraft,
};
use folio_core::traits::{AuthProvider, PortfolioRepo};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;

/// One `CREATE TABLE IF NOT EXISTS` per record kind; no migration
/// mechanism exists beyond this.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE,
        password TEXT)",
    "CREATE TABLE IF NOT EXISTS profile (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        location TEXT,
        phone TEXT,
        university TEXT,
        field TEXT,
        bio TEXT,
        email TEXT,
        github TEXT,
        linkedin TEXT,
        profile_pic TEXT)",
    "CREATE TABLE IF NOT EXISTS skills (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        skill TEXT UNIQUE,
        level INTEGER)",
    "CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        type TEXT,
        year TEXT,
        description TEXT,
        link TEXT,
        image BLOB)",
    "CREATE TABLE IF NOT EXISTS testimonials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT,
        author TEXT)",
    "CREATE TABLE IF NOT EXISTS timeline (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        year TEXT,
        title TEXT,
        description TEXT)",
    "CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        content TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        image BLOB)",
    "CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        message TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        replied INTEGER DEFAULT 0,
        reply_text TEXT)",
];

pub struct SqlitePortfolioRepo {
    pool: SqlitePool,
}

impl SqlitePortfolioRepo {
    /// Opens (creating if missing) the store at `url` and runs the
    /// idempotent schema/credential initialization.
    pub async fn connect(url: &str, auth: &dyn AuthProvider) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // One connection is enough for a single-operator deployment; SQLite's
        // own locking handles the rest. It also keeps `sqlite::memory:`
        // databases coherent across calls.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let repo = Self { pool };
        repo.init(auth).await?;
        Ok(repo)
    }

    async fn init(&self, auth: &dyn AuthProvider) -> anyhow::Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        self.seed_admin(auth).await
    }

    /// Seeds the `admin` credential if no row with that username exists.
    /// A duplicate seed attempt is silently ignored, never fatal.
    async fn seed_admin(&self, auth: &dyn AuthProvider) -> anyhow::Result<()> {
        let existing = sqlx::query("SELECT id FROM users WHERE username = ?")
            .bind(defaults::DEFAULT_ADMIN_USER)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Ok(());
        }
        let hash = auth.hash_password(defaults::DEFAULT_ADMIN_PASSWORD)?;
        sqlx::query(
            "INSERT INTO users (username, password) VALUES (?, ?) ON CONFLICT(username) DO NOTHING",
        )
        .bind(defaults::DEFAULT_ADMIN_USER)
        .bind(hash)
        .execute(&self.pool)
        .await?;
        log::info!("seeded default admin credential");
        Ok(())
    }
}

fn profile_from_row(row: &SqliteRow) -> Profile {
    Profile {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
        phone: row.get("phone"),
        university: row.get("university"),
        field: row.get("field"),
        bio: row.get("bio"),
        email: row.get("email"),
        github: row.get("github"),
        linkedin: row.get("linkedin"),
        profile_pic: row.get("profile_pic"),
    }
}

fn skill_from_row(row: &SqliteRow) -> Skill {
    Skill {
        id: row.get("id"),
        skill: row.get("skill"),
        level: row.get("level"),
    }
}

fn project_from_row(row: &SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        title: row.get("title"),
        kind: row.get("type"),
        year: row.get("year"),
        description: row.get("description"),
        link: row.get("link"),
        image: row.get("image"),
    }
}

fn testimonial_from_row(row: &SqliteRow) -> Testimonial {
    Testimonial {
        id: row.get("id"),
        text: row.get("text"),
        author: row.get("author"),
    }
}

fn timeline_from_row(row: &SqliteRow) -> TimelineEntry {
    TimelineEntry {
        id: row.get("id"),
        year: row.get("year"),
        title: row.get("title"),
        description: row.get("description"),
    }
}

fn post_from_row(row: &SqliteRow) -> Post {
    Post {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        image: row.get("image"),
    }
}

fn contact_from_row(row: &SqliteRow) -> ContactMessage {
    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        message: row.get("message"),
        created_at: row.get("created_at"),
        replied: row.get("replied"),
        reply_text: row.get("reply_text"),
    }
}

#[async_trait]
impl PortfolioRepo for SqlitePortfolioRepo {
    /// Returns the singleton profile, inserting the default owner row
    /// first if the table is still empty.
    async fn get_profile(&self) -> anyhow::Result<Profile> {
        let row = sqlx::query(
            "SELECT id, name, location, phone, university, field, bio, email, github, linkedin, \
             profile_pic FROM profile LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            return Ok(profile_from_row(&row));
        }

        log::info!("profile table empty; seeding default owner profile");
        let p = defaults::default_profile();
        sqlx::query(
            "INSERT INTO profile (name, location, phone, university, field, bio, email, github, \
             linkedin, profile_pic) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&p.name)
        .bind(&p.location)
        .bind(&p.phone)
        .bind(&p.university)
        .bind(&p.field)
        .bind(&p.bio)
        .bind(&p.email)
        .bind(&p.github)
        .bind(&p.linkedin)
        .bind(&p.profile_pic)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            "SELECT id, name, location, phone, university, field, bio, email, github, linkedin, \
             profile_pic FROM profile LIMIT 1",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(profile_from_row(&row))
    }

    /// Full-row replace keyed on the profile's id.
    async fn update_profile(&self, profile: &Profile) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE profile SET name = ?, location = ?, phone = ?, university = ?, field = ?, \
             bio = ?, email = ?, github = ?, linkedin = ?, profile_pic = ? WHERE id = ?",
        )
        .bind(&profile.name)
        .bind(&profile.location)
        .bind(&profile.phone)
        .bind(&profile.university)
        .bind(&profile.field)
        .bind(&profile.bio)
        .bind(&profile.email)
        .bind(&profile.github)
        .bind(&profile.linkedin)
        .bind(&profile.profile_pic)
        .bind(profile.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_skills(&self) -> anyhow::Result<Vec<Skill>> {
        let rows = sqlx::query("SELECT id, skill, level FROM skills ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        if !rows.is_empty() {
            return Ok(rows.iter().map(skill_from_row).collect());
        }

        log::info!("skills table empty; seeding default skill set");
        let mut tx = self.pool.begin().await?;
        for (name, level) in defaults::DEFAULT_SKILLS.iter().copied() {
            sqlx::query("INSERT INTO skills (skill, level) VALUES (?, ?)")
                .bind(name)
                .bind(level)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        let rows = sqlx::query("SELECT id, skill, level FROM skills ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(skill_from_row).collect())
    }

    /// Insert-or-update keyed by the unique skill name. A native conflict
    /// clause replaces the original catch-the-constraint-violation dance.
    async fn upsert_skill(&self, name: &str, level: i64) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO skills (skill, level) VALUES (?, ?) \
             ON CONFLICT(skill) DO UPDATE SET level = excluded.level",
        )
        .bind(name)
        .bind(level)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_skill(&self, name: &str) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE skill = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_projects(&self) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, title, type, year, description, link, image FROM projects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        if !rows.is_empty() {
            return Ok(rows.iter().map(project_from_row).collect());
        }

        log::info!("projects table empty; seeding default projects");
        let mut tx = self.pool.begin().await?;
        for draft in defaults::default_projects() {
            sqlx::query(
                "INSERT INTO projects (title, type, year, description, link, image) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&draft.title)
            .bind(&draft.kind)
            .bind(&draft.year)
            .bind(&draft.description)
            .bind(&draft.link)
            .bind(draft.image.as_deref())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        let rows = sqlx::query(
            "SELECT id, title, type, year, description, link, image FROM projects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(project_from_row).collect())
    }

    async fn add_project(&self, draft: &ProjectDraft) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO projects (title, type, year, description, link, image) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&draft.title)
        .bind(&draft.kind)
        .bind(&draft.year)
        .bind(&draft.description)
        .bind(&draft.link)
        .bind(draft.image.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_project(&self, id: i64, draft: &ProjectDraft) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE projects SET title = ?, type = ?, year = ?, description = ?, link = ?, \
             image = ? WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.kind)
        .bind(&draft.year)
        .bind(&draft.description)
        .bind(&draft.link)
        .bind(draft.image.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_project(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_testimonials(&self) -> anyhow::Result<Vec<Testimonial>> {
        let rows = sqlx::query("SELECT id, text, author FROM testimonials ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        if !rows.is_empty() {
            return Ok(rows.iter().map(testimonial_from_row).collect());
        }

        log::info!("testimonials table empty; seeding default testimonials");
        let mut tx = self.pool.begin().await?;
        for draft in defaults::default_testimonials() {
            sqlx::query("INSERT INTO testimonials (text, author) VALUES (?, ?)")
                .bind(&draft.text)
                .bind(&draft.author)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        let rows = sqlx::query("SELECT id, text, author FROM testimonials ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(testimonial_from_row).collect())
    }

    async fn add_testimonial(&self, draft: &TestimonialDraft) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO testimonials (text, author) VALUES (?, ?)")
            .bind(&draft.text)
            .bind(&draft.author)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_testimonial(
        &self,
        id: i64,
        draft: &TestimonialDraft,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query("UPDATE testimonials SET text = ?, author = ? WHERE id = ?")
            .bind(&draft.text)
            .bind(&draft.author)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_testimonial(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_timeline(&self) -> anyhow::Result<Vec<TimelineEntry>> {
        let rows = sqlx::query("SELECT id, year, title, description FROM timeline ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        if !rows.is_empty() {
            return Ok(rows.iter().map(timeline_from_row).collect());
        }

        log::info!("timeline table empty; seeding default timeline");
        let mut tx = self.pool.begin().await?;
        for draft in defaults::default_timeline() {
            sqlx::query("INSERT INTO timeline (year, title, description) VALUES (?, ?, ?)")
                .bind(&draft.year)
                .bind(&draft.title)
                .bind(&draft.description)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        let rows = sqlx::query("SELECT id, year, title, description FROM timeline ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(timeline_from_row).collect())
    }

    async fn add_timeline_entry(&self, draft: &TimelineEntryDraft) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO timeline (year, title, description) VALUES (?, ?, ?)")
            .bind(&draft.year)
            .bind(&draft.title)
            .bind(&draft.description)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_timeline_entry(
        &self,
        id: i64,
        draft: &TimelineEntryDraft,
    ) -> anyhow::Result<bool> {
        let result =
            sqlx::query("UPDATE timeline SET year = ?, title = ?, description = ? WHERE id = ?")
                .bind(&draft.year)
                .bind(&draft.title)
                .bind(&draft.description)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_timeline_entry(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM timeline WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_posts(&self) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query(
            "SELECT id, title, content, created_at, image FROM posts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(post_from_row).collect())
    }

    async fn get_post(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query("SELECT id, title, content, created_at, image FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(post_from_row))
    }

    /// `created_at` is written here rather than left to the column default
    /// so the stored format round-trips deterministically.
    async fn add_post(&self, draft: &PostDraft) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO posts (title, content, created_at, image) VALUES (?, ?, ?, ?)")
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(Utc::now())
            .bind(draft.image.as_deref())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> anyhow::Result<bool> {
        let result = sqlx::query("UPDATE posts SET title = ?, content = ?, image = ? WHERE id = ?")
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(draft.image.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_post(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_contacts(&self) -> anyhow::Result<Vec<ContactMessage>> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, created_at, replied, reply_text FROM contacts \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(contact_from_row).collect())
    }

    async fn add_contact(&self, draft: &ContactDraft) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO contacts (name, email, message, created_at) VALUES (?, ?, ?, ?)")
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(&draft.message)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn save_reply(&self, id: i64, reply: &str) -> anyhow::Result<bool> {
        let result = sqlx::query("UPDATE contacts SET replied = 1, reply_text = ? WHERE id = ?")
            .bind(reply)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_credential(&self, username: &str) -> anyhow::Result<Option<Credential>> {
        let row = sqlx::query("SELECT id, username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| Credential {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_auth_simple::PasswordAuth;
    use folio_core::models::{ContactDraft, PostDraft, ProjectDraft};

    async fn memory_repo() -> SqlitePortfolioRepo {
        SqlitePortfolioRepo::connect("sqlite::memory:", &PasswordAuth::new())
            .await
            .expect("in-memory store")
    }

    #[tokio::test]
    async fn test_default_seeds_run_once() {
        let repo = memory_repo().await;

        let skills = repo.get_skills().await.unwrap();
        assert_eq!(skills.len(), defaults::DEFAULT_SKILLS.len());
        let again = repo.get_skills().await.unwrap();
        assert_eq!(skills, again);

        let projects = repo.get_projects().await.unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(repo.get_projects().await.unwrap(), projects);

        let testimonials = repo.get_testimonials().await.unwrap();
        assert_eq!(testimonials.len(), 2);
        assert_eq!(repo.get_testimonials().await.unwrap(), testimonials);

        let timeline = repo.get_timeline().await.unwrap();
        assert_eq!(timeline.len(), 4);
        assert_eq!(repo.get_timeline().await.unwrap(), timeline);

        let profile = repo.get_profile().await.unwrap();
        assert_eq!(profile.name, "TUYISENGE Eric");
        assert_eq!(repo.get_profile().await.unwrap(), profile);
    }

    #[tokio::test]
    async fn test_posts_and_contacts_never_seed() {
        let repo = memory_repo().await;
        assert!(repo.get_posts().await.unwrap().is_empty());
        assert!(repo.get_contacts().await.unwrap().is_empty());
        // Still empty on a second read.
        assert!(repo.get_posts().await.unwrap().is_empty());
        assert!(repo.get_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_skill_upsert_keeps_single_row() {
        let repo = memory_repo().await;
        repo.get_skills().await.unwrap(); // trigger the default seed first

        repo.upsert_skill("X", 10).await.unwrap();
        repo.upsert_skill("X", 90).await.unwrap();

        let skills = repo.get_skills().await.unwrap();
        let xs: Vec<_> = skills.iter().filter(|s| s.skill == "X").collect();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].level, 90);
    }

    #[tokio::test]
    async fn test_delete_skill_by_name() {
        let repo = memory_repo().await;
        repo.upsert_skill("Rust", 50).await.unwrap();
        assert!(repo.delete_skill("Rust").await.unwrap());
        assert!(!repo.delete_skill("Rust").await.unwrap());
    }

    #[tokio::test]
    async fn test_project_round_trip() {
        let repo = memory_repo().await;
        let before = repo.get_projects().await.unwrap();

        let draft = ProjectDraft {
            title: "Folio itself".into(),
            kind: "Individual Project".into(),
            year: "Year 3".into(),
            description: "A portfolio web application".into(),
            link: "https://example.com/folio".into(),
            image: Some(vec![0xde, 0xad, 0xbe, 0xef]),
        };
        repo.add_project(&draft).await.unwrap();

        let after = repo.get_projects().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);

        let added: Vec<_> = after.iter().filter(|p| p.title == draft.title).collect();
        assert_eq!(added.len(), 1);
        let added = added[0];
        assert_eq!(added.kind, draft.kind);
        assert_eq!(added.year, draft.year);
        assert_eq!(added.description, draft.description);
        assert_eq!(added.link, draft.link);
        assert_eq!(added.image, draft.image);

        let ids: std::collections::HashSet<_> = after.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), after.len());
    }

    #[tokio::test]
    async fn test_update_missing_project_reports_no_match() {
        let repo = memory_repo().await;
        let draft = ProjectDraft {
            title: "Ghost".into(),
            kind: "Individual Project".into(),
            year: "Year 1".into(),
            description: "Never stored".into(),
            link: String::new(),
            image: None,
        };
        assert!(!repo.update_project(9999, &draft).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_quiet_noop() {
        let repo = memory_repo().await;
        repo.add_post(&PostDraft {
            title: "First".into(),
            content: "body".into(),
            image: None,
        })
        .await
        .unwrap();

        assert!(!repo.delete_post(9999).await.unwrap());
        assert_eq!(repo.get_posts().await.unwrap().len(), 1);

        let id = repo.get_posts().await.unwrap()[0].id;
        assert!(repo.delete_post(id).await.unwrap());
        assert!(!repo.delete_post(id).await.unwrap());
        assert!(repo.get_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_posts_come_back_newest_first() {
        let repo = memory_repo().await;
        repo.add_post(&PostDraft {
            title: "older".into(),
            content: "a".into(),
            image: Some(vec![1, 2, 3]),
        })
        .await
        .unwrap();
        repo.add_post(&PostDraft {
            title: "newer".into(),
            content: "b".into(),
            image: None,
        })
        .await
        .unwrap();

        let posts = repo.get_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "newer");
        assert_eq!(posts[1].title, "older");
        assert_eq!(posts[1].image, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_reply_is_final() {
        let repo = memory_repo().await;
        repo.add_contact(&ContactDraft {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            message: "Hi there".into(),
        })
        .await
        .unwrap();

        let id = repo.get_contacts().await.unwrap()[0].id;
        assert!(repo.save_reply(id, "thanks").await.unwrap());

        let message = &repo.get_contacts().await.unwrap()[0];
        assert!(message.replied);
        assert_eq!(message.reply_text.as_deref(), Some("thanks"));

        // A second reply overwrites the text; replied stays true.
        assert!(repo.save_reply(id, "other").await.unwrap());
        let message = &repo.get_contacts().await.unwrap()[0];
        assert!(message.replied);
        assert_eq!(message.reply_text.as_deref(), Some("other"));

        assert!(!repo.save_reply(9999, "nobody").await.unwrap());
    }

    #[tokio::test]
    async fn test_authenticate_against_fresh_seed() {
        let auth = PasswordAuth::new();
        let repo = SqlitePortfolioRepo::connect("sqlite::memory:", &auth)
            .await
            .unwrap();

        let cred = repo.get_credential("admin").await.unwrap().expect("seeded");
        assert!(auth.verify_password("admin123", &cred.password_hash));
        assert!(!auth.verify_password("wrong", &cred.password_hash));
        assert!(repo.get_credential("nouser").await.unwrap().is_none());

        // Re-running init against the same store must not fail on the
        // already-seeded username.
        repo.init(&auth).await.unwrap();
        assert_eq!(
            repo.get_credential("admin").await.unwrap().unwrap().id,
            cred.id
        );
    }

    #[tokio::test]
    async fn test_profile_update_round_trip() {
        let repo = memory_repo().await;
        let mut profile = repo.get_profile().await.unwrap();
        assert_eq!(profile.name, "TUYISENGE Eric");

        profile.name = "A. B.".into();
        profile.bio = "Updated bio".into();
        profile.profile_pic = Some("abc123".into());
        assert!(repo.update_profile(&profile).await.unwrap());

        let fetched = repo.get_profile().await.unwrap();
        assert_eq!(fetched, profile);
    }
}
