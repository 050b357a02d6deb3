use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A book record in the inventory.
///
/// Column types, lengths, the `stock_quantity` default and the unique index
/// on `isbn` are declared by the migration crate; this entity is the mapped
/// view of that table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub isbn: String,
    #[sea_orm(column_name = "stock_quantity")]
    pub stock_quantity: i32,
    pub price: f64,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book \"{}\" by {}", self.title, self.author)
    }
}
