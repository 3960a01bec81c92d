//! # Media Table Migration
//!
//! Audio and video records share the `media` table; `type` holds the kind
//! (`audio` / `video`). Author and rating are stored as flat column pairs
//! (`author_name`/`author_email`, `rating_sum`/`rating_votes`), never as rows
//! of their own.
//!
//! `status` is a bitmask of the registered status codes (1, 2, 4, 8, 16), so
//! any value in `0..=31` is legal. The check constraints on `status`,
//! `duration` and `views` mirror the checks done before every write.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(media_table())
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing by kind
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_type
                ON media (type);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_publish_on
                ON media (publish_on DESC);
                "#,
            )
            .await?;

        // =====================================================
        // modified_on trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_media_modified_on
                BEFORE UPDATE ON media
                FOR EACH ROW
                EXECUTE FUNCTION update_modified_on_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_media_modified_on ON media;
                DROP INDEX IF EXISTS idx_media_type;
                DROP INDEX IF EXISTS idx_media_publish_on;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

fn media_table() -> TableCreateStatement {
    Table::create()
        .table(Media::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Media::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        // Discriminator
        .col(ColumnDef::new(Media::Type).string_len(10).not_null())
        // Unique across audio and video
        .col(
            ColumnDef::new(Media::Slug)
                .string_len(50)
                .not_null()
                .unique_key(),
        )
        // =========================================
        // Timestamps
        // =========================================
        .col(
            ColumnDef::new(Media::CreatedOn)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Media::ModifiedOn)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(ColumnDef::new(Media::PublishOn).timestamp_with_time_zone().null())
        // 2 = PUBLISH
        .col(
            ColumnDef::new(Media::Status)
                .integer()
                .not_null()
                .default(2)
                .check(Expr::col(Media::Status).between(0, 31)),
        )
        // =========================================
        // Content
        // =========================================
        .col(ColumnDef::new(Media::Title).string_len(50).not_null())
        .col(ColumnDef::new(Media::Description).text().null())
        .col(ColumnDef::new(Media::Notes).text().null())
        .col(
            ColumnDef::new(Media::Duration)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(Media::Duration).gte(0)),
        )
        .col(
            ColumnDef::new(Media::Views)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(Media::Views).gte(0)),
        )
        .col(ColumnDef::new(Media::UploadUrl).string_len(255).null())
        .col(ColumnDef::new(Media::Url).string_len(255).null())
        // =========================================
        // Author (composite)
        // =========================================
        .col(ColumnDef::new(Media::AuthorName).string_len(50).not_null())
        .col(ColumnDef::new(Media::AuthorEmail).string_len(255).not_null())
        // =========================================
        // Rating (composite)
        // =========================================
        .col(
            ColumnDef::new(Media::RatingSum)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Media::RatingVotes)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Type,
    Slug,
    CreatedOn,
    ModifiedOn,
    PublishOn,
    Status,
    Title,
    Description,
    Notes,
    Duration,
    Views,
    UploadUrl,
    Url,
    AuthorName,
    AuthorEmail,
    RatingSum,
    RatingVotes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_table_enforces_slug_and_counter_constraints() {
        let sql = media_table().to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#""slug" varchar(50) NOT NULL UNIQUE"#), "{sql}");
        assert!(sql.contains(r#"CHECK ("status" BETWEEN 0 AND 31)"#), "{sql}");
        assert!(sql.contains(r#"CHECK ("duration" >= 0)"#), "{sql}");
        assert!(sql.contains(r#"CHECK ("views" >= 0)"#), "{sql}");
    }

    #[test]
    fn media_timestamps_carry_time_zone() {
        let sql = media_table().to_string(PostgresQueryBuilder);

        for column in ["created_on", "modified_on", "publish_on"] {
            let expected = format!(r#""{column}" timestamp with time zone"#);
            assert!(sql.contains(&expected), "{sql}");
        }
    }
}
