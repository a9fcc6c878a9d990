//! In-process ProductRepository backed by a sorted map

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{new_product_id, PriceRange, Product};
use crate::repository::ProductRepository;

/// Same contract as the MongoDB store, kept in memory. Iteration order is by id.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing products; ones with an empty id get a fresh id
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|mut product| {
                if product.id.is_empty() {
                    product.id = new_product_id();
                }
                (product.id.clone(), product)
            })
            .collect();

        Self {
            products: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_price_range(&self, min: f64, max: f64) -> ProductResult<Vec<Product>> {
        let range = PriceRange { min, max };
        if !range.is_satisfiable() {
            return Ok(Vec::new());
        }

        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| range.contains(product.price))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        if product.id.is_empty() {
            product.id = new_product_id();
        }

        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductResult<()> {
        self.products.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, quantity: i32, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
            price,
        }
    }

    fn catalog() -> InMemoryProductRepository {
        InMemoryProductRepository::with_products([
            product("101", "pencil", 15, 20000.0),
            product("102", "game", 7, 110000.0),
        ])
    }

    #[tokio::test]
    async fn test_save_mints_id_when_empty() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(product("", "eraser", 3, 500.0)).await.unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(repo.find_by_id(&saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_save_upserts_existing_id() {
        let repo = catalog();
        repo.save(product("101", "blue pencil", 20, 25000.0))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 2);
        let stored = repo.find_by_id("101").await.unwrap().unwrap();
        assert_eq!(stored.name, "blue pencil");
        assert_eq!(stored.quantity, 20);
    }

    #[tokio::test]
    async fn test_find_by_price_range_bounds_are_inclusive() {
        let repo = catalog();

        let hits = repo.find_by_price_range(20000.0, 110000.0).await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = repo.find_by_price_range(0.0, 50000.0).await.unwrap();
        assert_eq!(hits, vec![product("101", "pencil", 15, 20000.0)]);
    }

    #[tokio::test]
    async fn test_find_by_price_range_inverted_or_nan_is_empty() {
        let repo = catalog();
        assert!(repo
            .find_by_price_range(200000.0, 0.0)
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .find_by_price_range(f64::NAN, 200000.0)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_ok() {
        let repo = catalog();
        repo.delete_by_id("999").await.unwrap();
        repo.delete_by_id("101").await.unwrap();
        repo.delete_by_id("101").await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_id("101").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.is_empty().await);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.find_by_id("101").await.unwrap().is_none());
    }
}
