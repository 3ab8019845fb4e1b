//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "success": true, "data": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization. Error
//! responses carry `{ "success": false, "error": ..., "code": ... }`
//! via [`crate::error::AppError`].

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
