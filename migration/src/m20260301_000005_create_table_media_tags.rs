use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create media_tags join table
        // =====================================================
        manager
            .create_table(media_tags_table())
            .await?;

        // Fast lookup: all media for a tag
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_tags_tag_id
                ON media_tags (tag_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_media_tags_tag_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(MediaTags::Table).to_owned())
            .await
    }
}

fn media_tags_table() -> TableCreateStatement {
    Table::create()
        .table(MediaTags::Table)
        .if_not_exists()
        .col(ColumnDef::new(MediaTags::MediaId).integer().not_null())
        .col(ColumnDef::new(MediaTags::TagId).integer().not_null())
        // Composite primary key
        .primary_key(
            Index::create()
                .col(MediaTags::MediaId)
                .col(MediaTags::TagId),
        )
        // FK → media
        .foreign_key(
            ForeignKey::create()
                .name("fk_media_tags_media_id")
                .from(MediaTags::Table, MediaTags::MediaId)
                .to(Media::Table, Media::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        // FK → tags
        .foreign_key(
            ForeignKey::create()
                .name("fk_media_tags_tag_id")
                .from(MediaTags::Table, MediaTags::TagId)
                .to(Tags::Table, Tags::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum MediaTags {
    Table,
    MediaId,
    TagId,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
}
