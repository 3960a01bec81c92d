use async_trait::async_trait;

use crate::modules::tag::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Resolve each name to its existing tag (matched by slug) or create it.
    /// Output order follows input order; names sharing a slug resolve to the
    /// same tag once.
    async fn fetch_and_create_tags(&self, names: Vec<String>)
        -> Result<Vec<Tag>, TagRepositoryError>;
}
