use chrono::Utc;

use crate::modules::comment::adapter::outgoing::sea_orm_entity as comments;
use crate::modules::comment::application::domain::entities::MEDIA_COMMENT_TYPE;
use crate::modules::media::adapter::outgoing::sea_orm_entity::media::{self, MediaType};
use crate::modules::media::application::domain::entities::{MediaKind, MediaRecord};
use crate::modules::media::application::domain::status::PUBLISH;
use crate::modules::media::application::domain::value_objects::Author;
use crate::modules::tag::application::domain::entities::Tag;

pub fn media_model(id: i32, kind: MediaType, slug: &str) -> media::Model {
    let now = Utc::now().fixed_offset();

    media::Model {
        id,
        kind,
        slug: slug.to_string(),
        created_on: now,
        modified_on: now,
        publish_on: None,
        status: PUBLISH,
        title: "Test media".to_string(),
        description: Some("A test media description".to_string()),
        notes: None,
        duration: 95,
        views: 0,
        upload_url: None,
        url: Some("https://cdn.example.com/media.mp4".to_string()),
        author_name: "Ann".to_string(),
        author_email: "ann@example.com".to_string(),
        rating_sum: 0,
        rating_votes: 0,
    }
}

pub fn comment_model(id: i32, body: &str) -> comments::Model {
    let now = Utc::now().fixed_offset();

    comments::Model {
        id,
        comment_type: Some(MEDIA_COMMENT_TYPE.to_string()),
        subject: Some("Re: media".to_string()),
        created_on: now,
        modified_on: now,
        status: 0,
        author_name: "Bob".to_string(),
        author_email: Some("bob@example.com".to_string()),
        author_ip: 0,
        body: body.to_string(),
    }
}

pub fn sample_record(id: i32, kind: MediaKind, slug: &str) -> MediaRecord {
    let mut record = MediaRecord::new(kind, slug, "Test media", Author::new("Ann", "ann@example.com"));
    record.id = id;
    record
}

pub fn sample_tag(id: i32, name: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        slug: name.to_lowercase(),
    }
}
