use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::media::adapter::outgoing::sea_orm_entity::media::{
    self, ActiveModel, Column, Entity, MediaType, NEGATIVE_COUNTER,
};
use crate::modules::media::application::domain::entities::{MediaKind, MediaRecord};
use crate::modules::media::application::domain::status::{validate_status, PUBLISH};
use crate::modules::media::application::domain::value_objects::Author;
use crate::modules::media::application::ports::outgoing::{
    CreateMediaData, MediaRepository, MediaRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct MediaRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaRepository for MediaRepositoryPostgres {
    async fn create_media(
        &self,
        data: CreateMediaData,
    ) -> Result<MediaRecord, MediaRepositoryError> {
        let status = validate_status(data.status.unwrap_or(PUBLISH))
            .map_err(|e| MediaRepositoryError::InvalidStatus(e.to_string()))?;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            kind: Set(MediaType::from(data.kind)),
            slug: Set(data.slug),
            created_on: Set(now),
            modified_on: Set(now),
            publish_on: Set(data.publish_on.map(|d| d.fixed_offset())),
            status: Set(status),
            title: Set(data.title),
            description: Set(data.description),
            notes: Set(data.notes),
            duration: Set(data.duration),
            views: Set(0),
            upload_url: Set(data.upload_url),
            url: Set(data.url),
            author_name: Set(data.author.name),
            author_email: Set(data.author.email),
            rating_sum: Set(0),
            rating_votes: Set(0),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;

        info!(media_id = inserted.id, slug = %inserted.slug, "Media created");

        Ok(model_to_record(inserted))
    }

    async fn find_by_id(&self, media_id: i32) -> Result<MediaRecord, MediaRepositoryError> {
        Entity::find_by_id(media_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .ok_or(MediaRepositoryError::NotFound)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<MediaRecord, MediaRepositoryError> {
        Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .ok_or(MediaRepositoryError::NotFound)
    }

    async fn list_media(
        &self,
        kind: Option<MediaKind>,
    ) -> Result<Vec<MediaRecord>, MediaRepositoryError> {
        let mut query = Entity::find();

        if let Some(kind) = kind {
            query = query.filter(Column::Kind.eq(MediaType::from(kind)));
        }

        let models = query
            .order_by_desc(Column::CreatedOn)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn save_media(&self, record: &MediaRecord) -> Result<MediaRecord, MediaRepositoryError> {
        validate_status(record.status())
            .map_err(|e| MediaRepositoryError::InvalidStatus(e.to_string()))?;

        // created_on is immutable; modified_on is refreshed on update
        let model = ActiveModel {
            id: Set(record.id),
            kind: Set(MediaType::from(record.kind)),
            slug: Set(record.slug.clone()),
            publish_on: Set(record.publish_on.map(|d| d.fixed_offset())),
            status: Set(record.status()),
            title: Set(record.title.clone()),
            description: Set(record.description.clone()),
            notes: Set(record.notes.clone()),
            duration: Set(record.duration),
            views: Set(record.views),
            upload_url: Set(record.upload_url.clone()),
            url: Set(record.url.clone()),
            author_name: Set(record.author_name.clone()),
            author_email: Set(record.author_email.clone()),
            rating_sum: Set(record.rating_sum),
            rating_votes: Set(record.rating_votes),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => MediaRepositoryError::NotFound,
            other => map_write_err(other),
        })?;

        let mut saved = model_to_record(updated);
        saved.tags = record.tags.clone();
        saved.comments = record.comments.clone();

        Ok(saved)
    }

    async fn delete_media(&self, media_id: i32) -> Result<(), MediaRepositoryError> {
        let res = Entity::delete_by_id(media_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            warn!(media_id, "Delete requested for missing media");
            return Err(MediaRepositoryError::NotFound);
        }

        info!(media_id, "Media deleted");
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Instantiates the right kind from the stored discriminator. Associations
/// are loaded separately.
pub(crate) fn model_to_record(model: media::Model) -> MediaRecord {
    let author = Author::new(model.author_name, model.author_email);
    let mut record = MediaRecord::new(model.kind.into(), model.slug, model.title, author)
        .with_stored_status(model.status);

    record.id = model.id;
    record.created_on = model.created_on.into();
    record.modified_on = model.modified_on.into();
    record.publish_on = model.publish_on.map(Into::into);
    record.description = model.description;
    record.notes = model.notes;
    record.duration = model.duration;
    record.views = model.views;
    record.upload_url = model.upload_url;
    record.url = model.url;
    record.rating_sum = model.rating_sum;
    record.rating_votes = model.rating_votes;

    record
}

fn is_slug_violation(e: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        return detail.to_lowercase().contains("slug");
    }

    let msg = e.to_string().to_lowercase();
    (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
}

fn map_write_err(e: DbErr) -> MediaRepositoryError {
    if is_slug_violation(&e) {
        return MediaRepositoryError::SlugAlreadyExists;
    }
    if let DbErr::Custom(msg) = &e {
        if msg.starts_with("Status ") {
            return MediaRepositoryError::InvalidStatus(msg.clone());
        }
        if msg.contains(NEGATIVE_COUNTER) {
            return MediaRepositoryError::InvalidValue(msg.clone());
        }
    }
    map_db_err(e)
}

fn map_db_err(e: DbErr) -> MediaRepositoryError {
    MediaRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
