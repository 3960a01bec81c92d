// src/modules/media/application/ports/outgoing/media_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::media::application::domain::entities::{MediaKind, MediaRecord};
use crate::modules::media::application::domain::value_objects::Author;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateMediaData {
    pub kind: MediaKind,

    /// Unique across audio and video.
    pub slug: String,

    pub title: String,

    pub author: Author,

    /// `None` => PUBLISH
    pub status: Option<i32>,

    pub description: Option<String>,
    pub notes: Option<String>,
    pub publish_on: Option<DateTime<Utc>>,
    pub duration: i32,
    pub upload_url: Option<String>,
    pub url: Option<String>,
}

impl CreateMediaData {
    pub fn new(kind: MediaKind, slug: &str, title: &str, author: Author) -> Self {
        Self {
            kind,
            slug: slug.to_string(),
            title: title.to_string(),
            author,
            status: None,
            description: None,
            notes: None,
            publish_on: None,
            duration: 0,
            upload_url: None,
            url: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaRepositoryError {
    #[error("Media not found")]
    NotFound,

    /// Unique slug violated at INSERT/UPDATE time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// A counter column (`duration`, `views`) was negative.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (media table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn create_media(&self, data: CreateMediaData)
        -> Result<MediaRecord, MediaRepositoryError>;

    async fn find_by_id(&self, media_id: i32) -> Result<MediaRecord, MediaRepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<MediaRecord, MediaRepositoryError>;

    /// Newest first. `None` lists both kinds.
    async fn list_media(
        &self,
        kind: Option<MediaKind>,
    ) -> Result<Vec<MediaRecord>, MediaRepositoryError>;

    /// Writes every column of the record in one UPDATE, author and rating
    /// columns included. Associations are not touched.
    async fn save_media(&self, record: &MediaRecord) -> Result<MediaRecord, MediaRepositoryError>;

    /// Hard delete. Tag and comment links go with it (FK cascade).
    async fn delete_media(&self, media_id: i32) -> Result<(), MediaRepositoryError>;
}
