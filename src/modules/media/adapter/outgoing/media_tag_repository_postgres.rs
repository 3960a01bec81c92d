use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::modules::media::adapter::outgoing::sea_orm_entity::{media, media_tags};
use crate::modules::media::application::ports::outgoing::{
    MediaTagRepository, MediaTagRepositoryError,
};
use crate::modules::tag::adapter::outgoing::sea_orm_entity as tags;
use crate::modules::tag::application::domain::entities::Tag;

#[derive(Clone)]
pub struct MediaTagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaTagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MediaTagRepositoryError {
        MediaTagRepositoryError::DatabaseError(e.to_string())
    }

    fn map_link_err(e: DbErr) -> MediaTagRepositoryError {
        if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = e.sql_err() {
            return MediaTagRepositoryError::TagNotFound;
        }
        let msg = e.to_string().to_lowercase();
        if msg.contains("foreign key") && msg.contains("tag") {
            return MediaTagRepositoryError::TagNotFound;
        }
        Self::map_db_err(e)
    }

    async fn load_media<C>(conn: &C, media_id: i32) -> Result<media::Model, MediaTagRepositoryError>
    where
        C: ConnectionTrait,
    {
        media::Entity::find_by_id(media_id)
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(MediaTagRepositoryError::MediaNotFound)
    }
}

#[async_trait]
impl MediaTagRepository for MediaTagRepositoryPostgres {
    async fn get_media_tags(&self, media_id: i32) -> Result<Vec<Tag>, MediaTagRepositoryError> {
        let media = Self::load_media(&*self.db, media_id).await?;

        let found = media
            .find_related(tags::Entity)
            .order_by_asc(tags::Column::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(found.iter().map(|m| m.to_domain()).collect())
    }

    async fn set_media_tags(
        &self,
        media_id: i32,
        tag_ids: Vec<i32>,
    ) -> Result<(), MediaTagRepositoryError> {
        let mut seen = HashSet::new();
        let tag_ids: Vec<i32> = tag_ids.into_iter().filter(|id| seen.insert(*id)).collect();

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::load_media(&txn, media_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        // Replace, never merge
        if let Err(e) = media_tags::Entity::delete_many()
            .filter(media_tags::Column::MediaId.eq(media_id))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        if !tag_ids.is_empty() {
            let links = tag_ids.iter().map(|tag_id| media_tags::ActiveModel {
                media_id: Set(media_id),
                tag_id: Set(*tag_id),
            });

            if let Err(e) = media_tags::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await
            {
                let _ = txn.rollback().await;
                return Err(Self::map_link_err(e));
            }
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        info!(media_id, tag_count = tag_ids.len(), "Media tags replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::adapter::outgoing::sea_orm_entity::media::MediaType;
    use crate::tests::support::media_test_fixtures::media_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn tag_model(id: i32, name: &str) -> tags::Model {
        tags::Model {
            id,
            name: name.to_string(),
            slug: name.to_string(),
        }
    }

    // =====================================================
    // get_media_tags
    // =====================================================

    #[tokio::test]
    async fn test_get_media_tags_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![media_model(1, MediaType::Video, "intro")]])
            .append_query_results(vec![vec![tag_model(1, "bar"), tag_model(2, "foo")]])
            .into_connection();

        let repo = MediaTagRepositoryPostgres::new(Arc::new(db));
        let found = repo.get_media_tags(1).await.unwrap();

        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["bar", "foo"]);
    }

    #[tokio::test]
    async fn test_get_media_tags_media_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<media::Model>::new()])
            .into_connection();

        let repo = MediaTagRepositoryPostgres::new(Arc::new(db));
        let res = repo.get_media_tags(1).await;

        assert!(matches!(res, Err(MediaTagRepositoryError::MediaNotFound)));
    }

    // =====================================================
    // set_media_tags
    // =====================================================

    #[tokio::test]
    async fn test_set_media_tags_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // media exists
            .append_query_results(vec![vec![media_model(1, MediaType::Video, "intro")]])
            // clear
            .append_exec_results([ok_exec(3)])
            // insert links
            .append_exec_results([ok_exec(2)])
            .into_connection();

        let repo = MediaTagRepositoryPostgres::new(Arc::new(db));
        let res = repo.set_media_tags(1, vec![10, 11, 10]).await;

        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_set_media_tags_empty_only_clears() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![media_model(1, MediaType::Audio, "song")]])
            .append_exec_results([ok_exec(2)])
            .into_connection();

        let repo = MediaTagRepositoryPostgres::new(Arc::new(db));
        assert!(repo.set_media_tags(1, Vec::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_set_media_tags_media_not_found_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<media::Model>::new()])
            .into_connection();

        let repo = MediaTagRepositoryPostgres::new(Arc::new(db));
        let res = repo.set_media_tags(1, vec![1]).await;

        assert!(matches!(res, Err(MediaTagRepositoryError::MediaNotFound)));
    }

    #[tokio::test]
    async fn test_set_media_tags_unknown_tag() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![media_model(1, MediaType::Video, "intro")]])
            .append_exec_results([ok_exec(0)])
            .append_exec_errors([DbErr::Custom(
                "insert violates foreign key constraint \"fk_media_tags_tag_id\"".to_string(),
            )])
            .into_connection();

        let repo = MediaTagRepositoryPostgres::new(Arc::new(db));
        let res = repo.set_media_tags(1, vec![404]).await;

        assert!(matches!(res, Err(MediaTagRepositoryError::TagNotFound)));
    }
}
