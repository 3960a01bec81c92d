pub mod media;
pub mod media_comments;
pub mod media_tags;
