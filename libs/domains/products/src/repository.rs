use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Storage contract for products.
///
/// Absence is never an error: lookups return `None` or an empty `Vec`, and
/// deleting a missing id succeeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in store order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Products with `min <= price <= max`; empty when `min > max` or a bound is NaN
    async fn find_by_price_range(&self, min: f64, max: f64) -> ProductResult<Vec<Product>>;

    /// Upsert keyed by id. An empty id is replaced with a freshly minted one,
    /// and the returned product carries it.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove the product if present
    async fn delete_by_id(&self, id: &str) -> ProductResult<()>;
}
