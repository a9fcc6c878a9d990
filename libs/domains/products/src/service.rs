//! Product Service - sequences conversions and store calls per operation

use std::sync::Arc;
use tracing::instrument;

use crate::conversions::{to_external, to_internal};
use crate::error::ProductResult;
use crate::models::{PriceRange, ProductView};
use crate::repository::ProductRepository;

/// Operations behind the HTTP surface.
///
/// Store errors pass through untouched; absence is `None` or an empty list.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ProductResult<Vec<ProductView>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(to_external).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> ProductResult<Option<ProductView>> {
        Ok(self.repository.find_by_id(id).await?.map(to_external))
    }

    /// Inclusive on both ends. An inverted or NaN range yields no products
    /// without touching the store.
    #[instrument(skip(self))]
    pub async fn get_by_price_range(&self, min: f64, max: f64) -> ProductResult<Vec<ProductView>> {
        if !(PriceRange { min, max }).is_satisfiable() {
            tracing::debug!(min, max, "Unsatisfiable price range");
            return Ok(Vec::new());
        }

        let products = self.repository.find_by_price_range(min, max).await?;
        Ok(products.into_iter().map(to_external).collect())
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: ProductView) -> ProductResult<ProductView> {
        let saved = self.repository.save(to_internal(input)).await?;

        tracing::info!(product_id = %saved.id, "Product created");
        Ok(to_external(saved))
    }

    /// Replace every field of product `id` with `input`, keeping `id`.
    ///
    /// Returns `None` without writing when `id` does not exist. The existence
    /// check and the write are separate store calls; a concurrent change in
    /// between is overwritten.
    #[instrument(skip(self, input))]
    pub async fn update(&self, input: ProductView, id: &str) -> ProductResult<Option<ProductView>> {
        if self.repository.find_by_id(id).await?.is_none() {
            tracing::debug!(product_id = %id, "Update skipped, product not found");
            return Ok(None);
        }

        let mut replacement = to_internal(input);
        replacement.id = id.to_string();

        let saved = self.repository.save(replacement).await?;

        tracing::info!(product_id = %saved.id, "Product updated");
        Ok(Some(to_external(saved)))
    }

    /// Succeeds whether or not `id` existed
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
