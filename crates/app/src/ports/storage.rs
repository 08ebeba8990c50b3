//! Storage port: repository trait for the `muebles` collection.

use std::future::Future;

use muebles_domain::code::FurnitureCode;
use muebles_domain::error::MueblesError;
use muebles_domain::filter::ListFilter;
use muebles_domain::furniture::{Furniture, FurnitureDraft};

/// Repository for persisting and querying [`Furniture`] items.
pub trait FurnitureRepository {
    /// List the items selected by `filter`, in the order the filter defines.
    fn find(
        &self,
        filter: ListFilter,
    ) -> impl Future<Output = Result<Vec<Furniture>, MueblesError>> + Send;

    /// Get an item by its code.
    fn get_by_code(
        &self,
        code: FurnitureCode,
    ) -> impl Future<Output = Result<Option<Furniture>, MueblesError>> + Send;

    /// Code the next created item would receive: highest stored code plus
    /// one, or [`FurnitureCode::FIRST`] when the collection is empty.
    ///
    /// Informational only. [`create`](Self::create) assigns codes on its own
    /// and never calls this, so the answer can be stale by the time a create
    /// runs.
    fn next_code(&self) -> impl Future<Output = Result<FurnitureCode, MueblesError>> + Send;

    /// Store a new item under the next code and return it.
    ///
    /// Code assignment and insertion must happen as one atomic step.
    fn create(
        &self,
        draft: FurnitureDraft,
    ) -> impl Future<Output = Result<Furniture, MueblesError>> + Send;

    /// Replace the stored fields of an existing item.
    fn update(
        &self,
        furniture: Furniture,
    ) -> impl Future<Output = Result<Furniture, MueblesError>> + Send;

    /// Delete an item by its code.
    fn delete(&self, code: FurnitureCode) -> impl Future<Output = Result<(), MueblesError>> + Send;
}
