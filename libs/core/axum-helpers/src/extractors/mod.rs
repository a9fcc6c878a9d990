//! Extractors whose rejections render as [`crate::AppError`] instead of
//! axum's plain-text bodies.

pub mod json_body;
pub mod query_params;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
