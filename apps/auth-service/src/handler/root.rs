//! # ルートハンドラ
//!
//! `GET /` でサービス概要メッセージを返す。未定義ルートは 404 にする。

use axum::{Json, http::Uri};
use storefront_shared::MessageResponse;

use crate::error::AuthError;

/// `GET /` が返すメッセージ
pub const ROOT_MESSAGE: &str = "Auth Service is running";

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// 未定義ルートのフォールバック
pub async fn not_found(uri: Uri) -> AuthError {
    AuthError::RouteNotFound(uri.path().to_string())
}
