//! Extractors whose rejections go through `AppError`, so malformed bodies,
//! query strings and path segments get the same 400 envelope as failed validation.

use axum::extract::{FromRequest, FromRequestParts};

use crate::common::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
