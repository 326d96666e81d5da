//! # ルートハンドラ
//!
//! `GET /` でサービス概要メッセージを返す。未定義ルートは 404 にする。

use axum::{Json, http::Uri};
use storefront_shared::MessageResponse;

use crate::error::BackendError;

/// `GET /` が返すメッセージ
pub const ROOT_MESSAGE: &str = "Welcome to the Storefront Backend API";

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// 未定義ルートのフォールバック
pub async fn not_found(uri: Uri) -> BackendError {
    BackendError::RouteNotFound(uri.path().to_string())
}
