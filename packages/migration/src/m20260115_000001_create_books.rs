use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enum for the books table & columns -----
#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    Author,
    Publisher,
    Isbn,
    StockQuantity,
    Price,
    Location,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // books
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Books::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Books::Author).string_len(100).not_null())
                    .col(ColumnDef::new(Books::Publisher).string_len(100).null())
                    .col(ColumnDef::new(Books::Isbn).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Books::StockQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Books::Price).double().not_null())
                    .col(ColumnDef::new(Books::Location).string_len(40).not_null())
                    .to_owned(),
            )
            .await?;

        // Create unique index on books.isbn
        manager
            .create_index(
                Index::create()
                    .name("ux_books_isbn")
                    .table(Books::Table)
                    .col(Books::Isbn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).if_exists().to_owned())
            .await
    }
}
