use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owning-context discriminator written to `comments.type` when a comment is
/// attached to a media record.
pub const MEDIA_COMMENT_TYPE: &str = "media";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub comment_type: Option<String>,
    pub subject: Option<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub status: i32,
    pub author_name: String,
    pub author_email: Option<String>,
    pub author_ip: i64,
    pub body: String,
}
