//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{new_product_id, PriceRange, Product};
use crate::repository::ProductRepository;

pub const DEFAULT_COLLECTION: &str = "products";

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Create the ascending `price` index used by range queries. Idempotent.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "price": 1 })
            .options(IndexOptions::builder().name("idx_price".to_string()).build())
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(
            collection = %self.collection.name(),
            "Product indexes created successfully"
        );
        Ok(())
    }

    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }

    fn price_range_filter(range: &PriceRange) -> Document {
        doc! { "price": { "$gte": range.min, "$lte": range.max } }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_price_range(&self, min: f64, max: f64) -> ProductResult<Vec<Product>> {
        let range = PriceRange { min, max };
        if !range.is_satisfiable() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(Self::price_range_filter(&range))
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(count = products.len(), "Listed products in price range");
        Ok(products)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        if product.id.is_empty() {
            product.id = new_product_id();
        }

        let result = self
            .collection
            .replace_one(Self::id_filter(&product.id), &product)
            .upsert(true)
            .await?;

        tracing::info!(
            product_id = %product.id,
            inserted = result.upserted_id.is_some(),
            "Product saved"
        );
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(
            product_id = %id,
            deleted = result.deleted_count,
            "Product delete processed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_targets_underscore_id() {
        let filter = MongoProductRepository::id_filter("101");
        assert_eq!(filter.get_str("_id").unwrap(), "101");
    }

    #[test]
    fn test_price_range_filter_is_inclusive() {
        let filter = MongoProductRepository::price_range_filter(&PriceRange {
            min: 0.0,
            max: 50000.0,
        });

        let price = filter.get_document("price").unwrap();
        assert_eq!(price.get_f64("$gte").unwrap(), 0.0);
        assert_eq!(price.get_f64("$lte").unwrap(), 50000.0);
        assert_eq!(price.len(), 2);
    }
}
