use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create media_comments join table
        // =====================================================
        manager
            .create_table(media_comments_table())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaComments::Table).to_owned())
            .await
    }
}

fn media_comments_table() -> TableCreateStatement {
    Table::create()
        .table(MediaComments::Table)
        .if_not_exists()
        .col(ColumnDef::new(MediaComments::MediaId).integer().not_null())
        // A comment belongs to at most one media record
        .col(
            ColumnDef::new(MediaComments::CommentId)
                .integer()
                .not_null()
                .unique_key(),
        )
        .primary_key(
            Index::create()
                .col(MediaComments::MediaId)
                .col(MediaComments::CommentId),
        )
        // FK → media
        .foreign_key(
            ForeignKey::create()
                .name("fk_media_comments_media_id")
                .from(MediaComments::Table, MediaComments::MediaId)
                .to(Media::Table, Media::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        // FK → comments
        .foreign_key(
            ForeignKey::create()
                .name("fk_media_comments_comment_id")
                .from(MediaComments::Table, MediaComments::CommentId)
                .to(Comments::Table, Comments::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum MediaComments {
    Table,
    MediaId,
    CommentId,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
}
