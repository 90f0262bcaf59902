use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ModEntries::ModListId).uuid().not_null())
                    .col(ColumnDef::new(ModEntries::ModSlug).string().not_null())
                    .col(ColumnDef::new(ModEntries::ModTitle).string().not_null())
                    .col(ColumnDef::new(ModEntries::ModIconUrl).string())
                    .col(ColumnDef::new(ModEntries::ModAuthor).string().not_null())
                    .col(
                        ColumnDef::new(ModEntries::AddedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ModEntries::Table, ModEntries::ModListId)
                            .to(ModLists::Table, ModLists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One slug per list; also serves the membership lookup.
        manager
            .create_index(
                Index::create()
                    .table(ModEntries::Table)
                    .col(ModEntries::ModListId)
                    .col(ModEntries::ModSlug)
                    .name("uq_mod_entries_list_slug")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ModEntries {
    Table,
    Id,
    ModListId,
    ModSlug,
    ModTitle,
    ModIconUrl,
    ModAuthor,
    AddedAt,
}

#[derive(Iden)]
enum ModLists {
    Table,
    Id,
}
