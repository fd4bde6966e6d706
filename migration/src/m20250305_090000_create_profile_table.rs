use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single-row table: the application always addresses the row with id = 1
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profile::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Profile::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Profile::Bio).text().not_null())
                    .col(ColumnDef::new(Profile::Phone).string_len(20).null())
                    .col(ColumnDef::new(Profile::Email).string_len(150).null())
                    .col(ColumnDef::new(Profile::Residence).string_len(100).null())
                    .col(
                        ColumnDef::new(Profile::ImageFile)
                            .string_len(150)
                            .not_null()
                            .default("profile.jpg"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Bio,
    Phone,
    Email,
    Residence,
    ImageFile,
}
