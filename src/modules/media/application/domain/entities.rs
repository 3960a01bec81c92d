use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::comment::application::domain::entities::Comment;
use crate::modules::media::application::domain::status::{
    self, validate_status, StatusError, StatusFlag, PUBLISH,
};
use crate::modules::media::application::domain::value_objects::{
    Author, AuthorMut, Rating, RatingMut,
};
use crate::modules::tag::application::domain::entities::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Discriminator stored in `media.type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(MediaKind::Audio),
            "video" => Ok(MediaKind::Video),
            other => Err(format!("Unknown media type: {other}")),
        }
    }
}

/// An audio or video item.
///
/// Author and rating live in flat fields, mirroring the row; [`Author`] and
/// [`Rating`] are views assembled from them on demand. `status` can only be
/// changed through the validating setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    pub id: i32,
    pub kind: MediaKind,
    pub slug: String,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub publish_on: Option<DateTime<Utc>>,
    status: i32,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub duration: i32,
    pub views: i32,
    pub upload_url: Option<String>,
    pub url: Option<String>,
    pub author_name: String,
    pub author_email: String,
    pub rating_sum: i32,
    pub rating_votes: i32,
    pub tags: Vec<Tag>,
    pub comments: Vec<Comment>,
}

impl MediaRecord {
    /// A fresh, unsaved record with defaults applied (status PUBLISH, zero
    /// counters). `id` stays 0 until the row is inserted.
    pub fn new(
        kind: MediaKind,
        slug: impl Into<String>,
        title: impl Into<String>,
        author: Author,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            kind,
            slug: slug.into(),
            created_on: now,
            modified_on: now,
            publish_on: None,
            status: PUBLISH,
            title: title.into(),
            description: None,
            notes: None,
            duration: 0,
            views: 0,
            upload_url: None,
            url: None,
            author_name: author.name,
            author_email: author.email,
            rating_sum: 0,
            rating_votes: 0,
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn new_audio(slug: impl Into<String>, title: impl Into<String>, author: Author) -> Self {
        Self::new(MediaKind::Audio, slug, title, author)
    }

    pub fn new_video(slug: impl Into<String>, title: impl Into<String>, author: Author) -> Self {
        Self::new(MediaKind::Video, slug, title, author)
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    /// Rejects anything outside `0..=max_status()`; the stored value is left
    /// untouched on error.
    pub fn set_status(&mut self, value: i32) -> Result<(), StatusError> {
        self.status = validate_status(value)?;
        Ok(())
    }

    pub fn has_status(&self, code: i32) -> bool {
        self.status & code > 0
    }

    pub fn add_status(&mut self, code: i32) -> Result<(), StatusError> {
        self.set_status(self.status | code)
    }

    pub fn remove_status(&mut self, code: i32) -> Result<(), StatusError> {
        self.set_status(self.status & !code)
    }

    /// Every registered status, flagged when its bit is set.
    pub fn statuses(&self) -> Vec<StatusFlag> {
        status::flags_for(self.status)
    }

    pub fn author(&self) -> Author {
        Author::new(self.author_name.clone(), self.author_email.clone())
    }

    pub fn set_author(&mut self, author: Author) {
        self.author_name = author.name;
        self.author_email = author.email;
    }

    pub fn author_mut(&mut self) -> AuthorMut<'_> {
        AuthorMut {
            name: &mut self.author_name,
            email: &mut self.author_email,
        }
    }

    pub fn rating(&self) -> Rating {
        Rating::new(self.rating_sum, self.rating_votes)
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.rating_sum = rating.sum;
        self.rating_votes = rating.votes;
    }

    pub fn rating_mut(&mut self) -> RatingMut<'_> {
        RatingMut {
            sum: &mut self.rating_sum,
            votes: &mut self.rating_votes,
        }
    }

    /// Replaces the whole tag collection.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    pub(crate) fn with_stored_status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }
}

impl fmt::Display for MediaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MediaKind::Audio => write!(f, "<Audio: {}>", self.slug),
            MediaKind::Video => write!(f, "<Video: {}>", self.slug),
        }
    }
}
