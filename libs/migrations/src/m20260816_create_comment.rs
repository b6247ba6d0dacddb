use sea_orm_migration::prelude::*;

use super::m20260815_create_link::Link;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Comment {
    Id,
    Body,
    Table,
    LinkId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comment::Body).text().not_null())
                    .col(ColumnDef::new(Comment::LinkId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_link_id")
                            .from(Comment::Table, Comment::LinkId)
                            .to(Link::Table, Link::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_link_id")
                    .table(Comment::Table)
                    .col(Comment::LinkId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
