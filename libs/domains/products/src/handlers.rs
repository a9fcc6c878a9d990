//! HTTP handlers for the products resource

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestJsonResponse, BadRequestQueryResponse, InternalServerErrorResponse},
    JsonBody, QueryParams,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{PriceRange, ProductView};
use crate::repository::ProductRepository;
use crate::service::ProductService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        get_products_in_price_range,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductView),
        responses(
            BadRequestJsonResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Routes relative to the mount point, typically `/products`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/product-range", get(get_products_in_price_range))
        .route("/update/{id}", put(update_product))
        .route("/delete/{id}", delete(delete_product))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// `200` with the JSON value, or `200` with an empty body when absent
fn json_or_empty(product: Option<ProductView>) -> Response {
    match product {
        Some(product) => Json(product).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, possibly none", body = Vec<ProductView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductView>>> {
    let products = service.list_all().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product, or an empty body when no product has this ID", body = ProductView),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Response> {
    let product = service.get_by_id(&id).await?;
    Ok(json_or_empty(product))
}

/// List products priced within `[min, max]`
#[utoipa::path(
    get,
    path = "/product-range",
    tag = "Products",
    params(PriceRange),
    responses(
        (status = 200, description = "Products with min <= price <= max", body = Vec<ProductView>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_in_price_range<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(range): QueryParams<PriceRange>,
) -> ProductResult<Json<Vec<ProductView>>> {
    let products = service.get_by_price_range(range.min, range.max).await?;
    Ok(Json(products))
}

/// Create a product
///
/// An omitted or empty `id` is assigned by the store.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductView,
    responses(
        (status = 200, description = "The stored product including its ID", body = ProductView),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductView>,
) -> ProductResult<Json<ProductView>> {
    let product = service.create(input).await?;
    Ok(Json(product))
}

/// Replace a product
///
/// Every field is overwritten except `id`, which always stays the path ID.
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductView,
    responses(
        (status = 200, description = "The updated product, or an empty body when no product has this ID", body = ProductView),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProductView>,
) -> ProductResult<Response> {
    let product = service.update(input, &id).await?;
    Ok(json_or_empty(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.remove(&id).await?;
    Ok(StatusCode::OK)
}
