use async_trait::async_trait;

use crate::modules::tag::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaTagRepositoryError {
    #[error("Media not found")]
    MediaNotFound,

    #[error("Tag not found")]
    TagNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (media_tags table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MediaTagRepository: Send + Sync {
    async fn get_media_tags(&self, media_id: i32) -> Result<Vec<Tag>, MediaTagRepositoryError>;

    /// Replace all tag links for a media record in one transaction:
    /// - delete existing links
    /// - insert (media_id, tag_id) for each id
    async fn set_media_tags(
        &self,
        media_id: i32,
        tag_ids: Vec<i32>,
    ) -> Result<(), MediaTagRepositoryError>;
}
