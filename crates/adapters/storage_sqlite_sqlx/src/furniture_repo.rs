//! `SQLite` implementation of [`FurnitureRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqlitePool};

use muebles_app::ports::FurnitureRepository;
use muebles_domain::code::FurnitureCode;
use muebles_domain::error::MueblesError;
use muebles_domain::filter::ListFilter;
use muebles_domain::furniture::{Furniture, FurnitureDraft};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Furniture`].
struct Wrapper(Furniture);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Furniture> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let code: i64 = row.try_get("codigo")?;
        let name: Option<String> = row.try_get("nombre")?;
        let price: Option<f64> = row.try_get("precio")?;
        let category: Option<String> = row.try_get("categoria")?;

        Ok(Self(Furniture {
            code: FurnitureCode::new(code),
            name,
            price,
            category,
        }))
    }
}

const SELECT_ALL: &str = "SELECT codigo, nombre, precio, categoria FROM muebles";
const SELECT_BY_CATEGORY: &str =
    "SELECT codigo, nombre, precio, categoria FROM muebles WHERE categoria = ? ORDER BY nombre ASC";
const SELECT_PRICE_AT_LEAST: &str =
    "SELECT codigo, nombre, precio, categoria FROM muebles WHERE precio >= ? ORDER BY precio ASC";
const SELECT_PRICE_AT_MOST: &str =
    "SELECT codigo, nombre, precio, categoria FROM muebles WHERE precio <= ? ORDER BY precio DESC";
const SELECT_BY_CODE: &str =
    "SELECT codigo, nombre, precio, categoria FROM muebles WHERE codigo = ?";
const SELECT_MAX_CODE: &str = "SELECT codigo FROM muebles ORDER BY codigo DESC LIMIT 1";
// Reading the maximum and inserting happen in one statement, so concurrent
// creates never observe the same maximum.
const INSERT_NEXT: &str = "INSERT INTO muebles (codigo, nombre, precio, categoria) \
     SELECT COALESCE(MAX(codigo), 0) + 1, ?, ?, ? FROM muebles \
     RETURNING codigo";
const UPDATE: &str = "UPDATE muebles SET nombre = ?, precio = ?, categoria = ? WHERE codigo = ?";
const DELETE_BY_CODE: &str = "DELETE FROM muebles WHERE codigo = ?";

/// `SQLite`-backed furniture repository.
#[derive(Clone)]
pub struct SqliteFurnitureRepository {
    pool: SqlitePool,
}

impl SqliteFurnitureRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FurnitureRepository for SqliteFurnitureRepository {
    fn find(
        &self,
        filter: ListFilter,
    ) -> impl Future<Output = Result<Vec<Furniture>, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = match filter {
                ListFilter::All => sqlx::query_as::<Sqlite, Wrapper>(SELECT_ALL),
                ListFilter::Category(category) => {
                    sqlx::query_as::<Sqlite, Wrapper>(SELECT_BY_CATEGORY).bind(category)
                }
                ListFilter::PriceAtLeast(bound) => {
                    sqlx::query_as::<Sqlite, Wrapper>(SELECT_PRICE_AT_LEAST).bind(bound)
                }
                ListFilter::PriceAtMost(bound) => {
                    sqlx::query_as::<Sqlite, Wrapper>(SELECT_PRICE_AT_MOST).bind(bound)
                }
            };

            let rows = query.fetch_all(&pool).await.map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_code(
        &self,
        code: FurnitureCode,
    ) -> impl Future<Output = Result<Option<Furniture>, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CODE)
                .bind(code.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn next_code(&self) -> impl Future<Output = Result<FurnitureCode, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let max: Option<i64> = sqlx::query_scalar(SELECT_MAX_CODE)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(FurnitureCode::after(max.map(FurnitureCode::new)))
        }
    }

    fn create(
        &self,
        draft: FurnitureDraft,
    ) -> impl Future<Output = Result<Furniture, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let code: i64 = sqlx::query_scalar(INSERT_NEXT)
                .bind(draft.name.as_deref())
                .bind(draft.price)
                .bind(draft.category.as_deref())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Furniture::from_draft(FurnitureCode::new(code), draft))
        }
    }

    fn update(
        &self,
        furniture: Furniture,
    ) -> impl Future<Output = Result<Furniture, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(furniture.name.as_deref())
                .bind(furniture.price)
                .bind(furniture.category.as_deref())
                .bind(furniture.code.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(furniture)
        }
    }

    fn delete(&self, code: FurnitureCode) -> impl Future<Output = Result<(), MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_CODE)
                .bind(code.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
