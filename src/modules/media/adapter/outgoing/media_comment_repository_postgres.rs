use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::comment::adapter::outgoing::sea_orm_entity as comments;
use crate::modules::comment::application::domain::entities::{Comment, MEDIA_COMMENT_TYPE};
use crate::modules::media::adapter::outgoing::sea_orm_entity::{media, media_comments};
use crate::modules::media::application::ports::outgoing::{
    MediaCommentRepository, MediaCommentRepositoryError,
};

#[derive(Clone)]
pub struct MediaCommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaCommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MediaCommentRepositoryError {
        MediaCommentRepositoryError::DatabaseError(e.to_string())
    }

    /// The link table has a unique index on comment_id, so a second link for
    /// the same comment surfaces as a unique violation.
    fn map_link_err(e: DbErr) -> MediaCommentRepositoryError {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
            return MediaCommentRepositoryError::CommentAlreadyAttached;
        }
        let msg = e.to_string().to_lowercase();
        if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
            return MediaCommentRepositoryError::CommentAlreadyAttached;
        }
        Self::map_db_err(e)
    }

    async fn load_media<C>(
        conn: &C,
        media_id: i32,
    ) -> Result<media::Model, MediaCommentRepositoryError>
    where
        C: ConnectionTrait,
    {
        media::Entity::find_by_id(media_id)
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(MediaCommentRepositoryError::MediaNotFound)
    }

    /// Stamp the owning context on the comment. Zero rows means no such comment.
    async fn stamp_comment_type<C>(conn: &C, comment_id: i32) -> Result<(), MediaCommentRepositoryError>
    where
        C: ConnectionTrait,
    {
        let res = comments::Entity::update_many()
            .col_expr(comments::Column::CommentType, Expr::value(MEDIA_COMMENT_TYPE))
            .filter(comments::Column::Id.eq(comment_id))
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        if res.rows_affected == 0 {
            return Err(MediaCommentRepositoryError::CommentNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MediaCommentRepository for MediaCommentRepositoryPostgres {
    async fn get_media_comments(
        &self,
        media_id: i32,
    ) -> Result<Vec<Comment>, MediaCommentRepositoryError> {
        let media = Self::load_media(&*self.db, media_id).await?;

        let found = media
            .find_related(comments::Entity)
            .order_by_asc(comments::Column::CreatedOn)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(found.iter().map(|m| m.to_domain()).collect())
    }

    async fn attach_comment(
        &self,
        media_id: i32,
        comment_id: i32,
    ) -> Result<(), MediaCommentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::load_media(&txn, media_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        if let Err(e) = Self::stamp_comment_type(&txn, comment_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        let link = media_comments::ActiveModel {
            media_id: Set(media_id),
            comment_id: Set(comment_id),
        };

        if let Err(e) = link.insert(&txn).await {
            let _ = txn.rollback().await;
            let err = Self::map_link_err(e);
            if matches!(err, MediaCommentRepositoryError::CommentAlreadyAttached) {
                warn!(media_id, comment_id, "Comment already attached to a media record");
            }
            return Err(err);
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        info!(media_id, comment_id, "Comment attached to media");
        Ok(())
    }

    async fn detach_comment(
        &self,
        media_id: i32,
        comment_id: i32,
    ) -> Result<(), MediaCommentRepositoryError> {
        let res = media_comments::Entity::delete_many()
            .filter(media_comments::Column::MediaId.eq(media_id))
            .filter(media_comments::Column::CommentId.eq(comment_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if res.rows_affected == 0 {
            return Err(MediaCommentRepositoryError::CommentNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::adapter::outgoing::sea_orm_entity::media::MediaType;
    use crate::tests::support::media_test_fixtures::{comment_model, media_model};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn link(media_id: i32, comment_id: i32) -> media_comments::Model {
        media_comments::Model {
            media_id,
            comment_id,
        }
    }

    // =====================================================
    // attach_comment
    // =====================================================

    #[tokio::test]
    async fn test_attach_comment_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // media exists
            .append_query_results(vec![vec![media_model(1, MediaType::Video, "intro")]])
            // comments.type = 'media'
            .append_exec_results([ok_exec(1)])
            // insert link ... returning
            .append_query_results(vec![vec![link(1, 7)]])
            .into_connection();

        let repo = MediaCommentRepositoryPostgres::new(Arc::new(db));
        assert!(repo.attach_comment(1, 7).await.is_ok());
    }

    #[tokio::test]
    async fn test_attach_comment_to_second_media_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![media_model(2, MediaType::Audio, "other")]])
            .append_exec_results([ok_exec(1)])
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"media_comments_comment_id_key\""
                    .to_string(),
            )])
            .into_connection();

        let repo = MediaCommentRepositoryPostgres::new(Arc::new(db));
        let res = repo.attach_comment(2, 7).await;

        assert!(matches!(
            res,
            Err(MediaCommentRepositoryError::CommentAlreadyAttached)
        ));
    }

    #[tokio::test]
    async fn test_attach_comment_unknown_comment() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![media_model(1, MediaType::Video, "intro")]])
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = MediaCommentRepositoryPostgres::new(Arc::new(db));
        let res = repo.attach_comment(1, 404).await;

        assert!(matches!(
            res,
            Err(MediaCommentRepositoryError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn test_attach_comment_unknown_media() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<media::Model>::new()])
            .into_connection();

        let repo = MediaCommentRepositoryPostgres::new(Arc::new(db));
        let res = repo.attach_comment(404, 1).await;

        assert!(matches!(res, Err(MediaCommentRepositoryError::MediaNotFound)));
    }

    // =====================================================
    // get_media_comments / detach_comment
    // =====================================================

    #[tokio::test]
    async fn test_get_media_comments_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![media_model(1, MediaType::Video, "intro")]])
            .append_query_results(vec![vec![comment_model(7, "Nice clip")]])
            .into_connection();

        let repo = MediaCommentRepositoryPostgres::new(Arc::new(db));
        let found = repo.get_media_comments(1).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "Nice clip");
        assert_eq!(found[0].comment_type.as_deref(), Some(MEDIA_COMMENT_TYPE));
    }

    #[tokio::test]
    async fn test_detach_comment_missing_link() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = MediaCommentRepositoryPostgres::new(Arc::new(db));
        let res = repo.detach_comment(1, 7).await;

        assert!(matches!(
            res,
            Err(MediaCommentRepositoryError::CommentNotFound)
        ));
    }
}
