//! Furniture service: use-cases for the `muebles` catalogue.

use muebles_domain::code::FurnitureCode;
use muebles_domain::error::{MueblesError, NotFoundError};
use muebles_domain::filter::ListFilter;
use muebles_domain::furniture::{Furniture, FurnitureDraft};

use crate::ports::FurnitureRepository;

/// Application service for furniture CRUD operations.
pub struct FurnitureService<R> {
    repo: R,
}

impl<R: FurnitureRepository> FurnitureService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List items matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_furniture(&self, filter: ListFilter) -> Result<Vec<Furniture>, MueblesError> {
        self.repo.find(filter).await
    }

    /// Look up an item by code, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::NotFound`] when no item with `code` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_furniture(&self, code: FurnitureCode) -> Result<Furniture, MueblesError> {
        self.repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Create a new item under the next sequential code.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] if every field is absent, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_furniture(&self, draft: FurnitureDraft) -> Result<Furniture, MueblesError> {
        draft.validate()?;
        let created = self.repo.create(draft).await?;
        tracing::debug!(code = %created.code, "furniture created");
        Ok(created)
    }

    /// Overwrite the supplied fields of an existing item.
    ///
    /// The draft is checked before the lookup, so an empty body is rejected
    /// even for an unknown code.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] if every field is absent,
    /// [`MueblesError::NotFound`] when no item with `code` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_furniture(
        &self,
        code: FurnitureCode,
        draft: FurnitureDraft,
    ) -> Result<Furniture, MueblesError> {
        draft.validate()?;
        let mut furniture = self.get_furniture(code).await?;
        furniture.apply(draft);
        self.repo.update(furniture).await
    }

    /// Delete an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::NotFound`] when no item with `code` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_furniture(&self, code: FurnitureCode) -> Result<(), MueblesError> {
        self.get_furniture(code).await?;
        self.repo.delete(code).await
    }
}

fn not_found(code: FurnitureCode) -> MueblesError {
    NotFoundError {
        entity: "Furniture",
        code: code.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use muebles_domain::error::ValidationError;
    use std::future::Future;
    use std::sync::Mutex;

    /// Keeps insertion order, like a document collection without a sort.
    #[derive(Default)]
    struct InMemoryFurnitureRepo {
        store: Mutex<Vec<Furniture>>,
    }

    impl InMemoryFurnitureRepo {
        fn max_code(store: &[Furniture]) -> Option<FurnitureCode> {
            store.iter().map(|item| item.code).max()
        }
    }

    impl FurnitureRepository for InMemoryFurnitureRepo {
        fn find(
            &self,
            filter: ListFilter,
        ) -> impl Future<Output = Result<Vec<Furniture>, MueblesError>> + Send {
            let store = self.store.lock().unwrap();
            let by_price = |a: &Furniture, b: &Furniture| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            };
            let result = match filter {
                ListFilter::All => store.clone(),
                ListFilter::Category(category) => {
                    let mut items: Vec<Furniture> = store
                        .iter()
                        .filter(|item| item.category.as_deref() == Some(category.as_str()))
                        .cloned()
                        .collect();
                    items.sort_by(|a, b| a.name.cmp(&b.name));
                    items
                }
                ListFilter::PriceAtLeast(bound) => {
                    let mut items: Vec<Furniture> = store
                        .iter()
                        .filter(|item| item.price.is_some_and(|price| price >= bound))
                        .cloned()
                        .collect();
                    items.sort_by(by_price);
                    items
                }
                ListFilter::PriceAtMost(bound) => {
                    let mut items: Vec<Furniture> = store
                        .iter()
                        .filter(|item| item.price.is_some_and(|price| price <= bound))
                        .cloned()
                        .collect();
                    items.sort_by(|a, b| by_price(b, a));
                    items
                }
            };
            async { Ok(result) }
        }

        fn get_by_code(
            &self,
            code: FurnitureCode,
        ) -> impl Future<Output = Result<Option<Furniture>, MueblesError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|item| item.code == code).cloned();
            async { Ok(result) }
        }

        fn next_code(&self) -> impl Future<Output = Result<FurnitureCode, MueblesError>> + Send {
            let store = self.store.lock().unwrap();
            let result = FurnitureCode::after(Self::max_code(&store));
            async move { Ok(result) }
        }

        fn create(
            &self,
            draft: FurnitureDraft,
        ) -> impl Future<Output = Result<Furniture, MueblesError>> + Send {
            let mut store = self.store.lock().unwrap();
            let code = FurnitureCode::after(Self::max_code(&store));
            let furniture = Furniture::from_draft(code, draft);
            store.push(furniture.clone());
            async { Ok(furniture) }
        }

        fn update(
            &self,
            furniture: Furniture,
        ) -> impl Future<Output = Result<Furniture, MueblesError>> + Send {
            let mut store = self.store.lock().unwrap();
            if let Some(slot) = store.iter_mut().find(|item| item.code == furniture.code) {
                *slot = furniture.clone();
            }
            async { Ok(furniture) }
        }

        fn delete(
            &self,
            code: FurnitureCode,
        ) -> impl Future<Output = Result<(), MueblesError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.retain(|item| item.code != code);
            async { Ok(()) }
        }
    }

    fn make_service() -> FurnitureService<InMemoryFurnitureRepo> {
        FurnitureService::new(InMemoryFurnitureRepo::default())
    }

    fn draft(name: &str, price: f64, category: &str) -> FurnitureDraft {
        FurnitureDraft {
            name: Some(name.to_string()),
            price: Some(price),
            category: Some(category.to_string()),
        }
    }

    async fn seed(svc: &FurnitureService<InMemoryFurnitureRepo>) {
        for item in [
            draft("Sofa", 300.0, "Sala"),
            draft("Banco", 40.0, "Cocina"),
            draft("Alfombra", 90.0, "Sala"),
            draft("Mesa", 120.0, "Comedor"),
        ] {
            svc.create_furniture(item).await.unwrap();
        }
    }

    #[tokio::test]
    async fn should_assign_first_code_when_collection_is_empty() {
        let svc = make_service();
        let created = svc
            .create_furniture(draft("Silla", 50.0, "Sala"))
            .await
            .unwrap();

        assert_eq!(created.code, FurnitureCode::FIRST);
        assert_eq!(created.name.as_deref(), Some("Silla"));
    }

    #[tokio::test]
    async fn should_assign_one_plus_current_maximum() {
        let svc = make_service();
        seed(&svc).await;
        svc.delete_furniture(FurnitureCode::new(2)).await.unwrap();

        let created = svc
            .create_furniture(draft("Lampara", 25.0, "Sala"))
            .await
            .unwrap();
        assert_eq!(created.code, FurnitureCode::new(5));
    }

    #[tokio::test]
    async fn should_reject_create_when_every_field_is_absent() {
        let svc = make_service();
        let result = svc.create_furniture(FurnitureDraft::default()).await;
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingData))
        ));
    }

    #[tokio::test]
    async fn should_accept_create_with_single_field() {
        let svc = make_service();
        let created = svc
            .create_furniture(FurnitureDraft {
                category: Some("Dormitorio".to_string()),
                ..FurnitureDraft::default()
            })
            .await
            .unwrap();
        assert!(created.name.is_none());
        assert_eq!(created.category.as_deref(), Some("Dormitorio"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_code_never_created() {
        let svc = make_service();
        let result = svc.get_furniture(FurnitureCode::new(99)).await;
        assert!(matches!(result, Err(MueblesError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_category_sorted_by_name() {
        let svc = make_service();
        seed(&svc).await;

        let items = svc
            .list_furniture(ListFilter::Category("Sala".to_string()))
            .await
            .unwrap();
        let names: Vec<_> = items.iter().filter_map(|i| i.name.as_deref()).collect();
        assert_eq!(names, ["Alfombra", "Sofa"]);
    }

    #[tokio::test]
    async fn should_list_upper_bound_sorted_by_price_descending() {
        let svc = make_service();
        seed(&svc).await;

        let items = svc
            .list_furniture(ListFilter::PriceAtMost(100.0))
            .await
            .unwrap();
        let prices: Vec<_> = items.iter().filter_map(|i| i.price).collect();
        assert_eq!(prices, [90.0, 40.0]);
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let svc = make_service();
        seed(&svc).await;

        let updated = svc
            .update_furniture(
                FurnitureCode::new(1),
                FurnitureDraft {
                    price: Some(280.0),
                    ..FurnitureDraft::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price, Some(280.0));
        assert_eq!(updated.name.as_deref(), Some("Sofa"));

        let fetched = svc.get_furniture(FurnitureCode::new(1)).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn should_reject_empty_update_before_lookup() {
        let svc = make_service();
        let result = svc
            .update_furniture(FurnitureCode::new(42), FurnitureDraft::default())
            .await;
        assert!(matches!(result, Err(MueblesError::Validation(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_code() {
        let svc = make_service();
        let result = svc
            .update_furniture(FurnitureCode::new(42), draft("Silla", 1.0, "Sala"))
            .await;
        assert!(matches!(result, Err(MueblesError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_make_item_unreachable_after_delete() {
        let svc = make_service();
        seed(&svc).await;
        let code = FurnitureCode::new(3);

        svc.delete_furniture(code).await.unwrap();

        let result = svc.get_furniture(code).await;
        assert!(matches!(result, Err(MueblesError::NotFound(_))));
        let again = svc.delete_furniture(code).await;
        assert!(matches!(again, Err(MueblesError::NotFound(_))));
    }
}
