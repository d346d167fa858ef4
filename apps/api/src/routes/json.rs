use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` extractor whose rejections render as `{success: false, error}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
