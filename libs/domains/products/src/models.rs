use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Product as stored in the `products` collection.
///
/// The id is the document `_id`; an empty id means "not yet persisted".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Product as exchanged over HTTP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": "101", "name": "pencil", "quantity": 15, "price": 20000.0}))]
pub struct ProductView {
    /// Assigned by the store on create; may be omitted, `null` or empty in requests
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    pub name: String,
    /// Expected to be non-negative; not enforced
    pub quantity: i32,
    pub price: f64,
}

/// Treat an explicit `null` like a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inclusive price bounds for `GET /products/product-range`
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl PriceRange {
    /// `false` when `min > max` or either bound is NaN; such a range matches nothing
    pub fn is_satisfiable(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Fresh identifier for a product saved without one
pub fn new_product_id() -> String {
    Uuid::now_v7().to_string()
}
