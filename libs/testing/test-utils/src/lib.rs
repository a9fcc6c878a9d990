//! Shared test utilities for domain testing
//!
//! - `TestMongo`: disposable MongoDB container (feature: "mongo", default)
//! - `TestDataBuilder`: deterministic, per-test data
//! - `assertions`: small assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!
//!     let db = mongo.database(&builder.database_name());
//!     let id = builder.product_id("pencil");
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Derives names and ids from a seed so reruns produce identical data
/// while different tests never collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test's name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// assert_eq!(builder.product_id("a"), builder.product_id("a"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Stable product id scoped to this builder, e.g. `"p-00000000000000ff-pencil"`
    pub fn product_id(&self, label: &str) -> String {
        format!("p-{:016x}-{}", self.seed, label)
    }

    /// e.g. `builder.name("product", "main")` → `"test-product-<seed>-main"`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Database name isolating this test's collections
    pub fn database_name(&self) -> String {
        format!("test_{:016x}", self.seed)
    }
}

pub mod assertions {
    /// Unwrap an `Option` with context in the panic message
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two slices hold the same elements, ignoring order
    pub fn assert_same_elements<T: PartialEq + std::fmt::Debug>(actual: &[T], expected: &[T]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "length mismatch: {:?} vs {:?}",
            actual,
            expected
        );
        for item in expected {
            assert!(actual.contains(item), "missing {:?} in {:?}", item, actual);
        }
    }
}
