//! Book record helpers (generic over ConnectionTrait).
//!
//! Free functions usable against either the engine or an open session. Thin
//! wrappers over the mapper; no business logic lives here.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::books;
use crate::error::StoreError;
use crate::infra::db_errors::classify_db_err;

/// Fields for a book that has not been persisted yet.
///
/// The id is assigned by the store at insertion. A `stock_quantity` of `None`
/// is omitted from the insert and falls through to the store default of 0.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub isbn: String,
    pub stock_quantity: Option<i32>,
    pub price: f64,
    pub location: String,
}

pub async fn create_book<C: ConnectionTrait>(
    conn: &C,
    new: NewBook,
) -> Result<books::Model, StoreError> {
    let book_active = books::ActiveModel {
        id: NotSet,
        title: Set(new.title),
        author: Set(new.author),
        publisher: Set(new.publisher),
        isbn: Set(new.isbn),
        stock_quantity: new.stock_quantity.map_or(NotSet, Set),
        price: Set(new.price),
        location: Set(new.location),
    };

    book_active.insert(conn).await.map_err(classify_db_err)
}

pub async fn find_book_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<books::Model>, StoreError> {
    books::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(classify_db_err)
}

pub async fn find_book_by_isbn<C: ConnectionTrait>(
    conn: &C,
    isbn: &str,
) -> Result<Option<books::Model>, StoreError> {
    books::Entity::find()
        .filter(books::Column::Isbn.eq(isbn))
        .one(conn)
        .await
        .map_err(classify_db_err)
}

pub async fn list_books<C: ConnectionTrait>(conn: &C) -> Result<Vec<books::Model>, StoreError> {
    books::Entity::find()
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
        .map_err(classify_db_err)
}

/// Persist attribute changes made on an `ActiveModel` obtained from a fetched
/// record.
pub async fn update_book<C: ConnectionTrait>(
    conn: &C,
    book: books::ActiveModel,
) -> Result<books::Model, StoreError> {
    book.update(conn).await.map_err(classify_db_err)
}

/// Remove a book by id. Returns false when no such record existed.
pub async fn delete_book<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, StoreError> {
    let res = books::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(classify_db_err)?;
    Ok(res.rows_affected > 0)
}
