use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Owning context, stamped when the comment is attached
                    .col(ColumnDef::new(Comments::Type).string_len(15).null())
                    .col(ColumnDef::new(Comments::Subject).string_len(100).null())
                    .col(
                        ColumnDef::new(Comments::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Comments::ModifiedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Comments::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Comments::AuthorName).string_len(50).not_null())
                    .col(ColumnDef::new(Comments::AuthorEmail).string_len(255).null())
                    .col(
                        ColumnDef::new(Comments::AuthorIp)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Comments::Body).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_comments_modified_on
                BEFORE UPDATE ON comments
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_comments_modified_on ON comments;")
            .await?;

        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    Type,
    Subject,
    CreatedOn,
    ModifiedOn,
    Status,
    AuthorName,
    AuthorEmail,
    AuthorIp,
    Body,
}
