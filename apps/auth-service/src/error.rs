//! # Auth Service エラー定義
//!
//! Auth Service 固有のエラーと、HTTP レスポンスへの変換を定義する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storefront_shared::ErrorResponse;
use thiserror::Error;

/// Auth Service で発生するエラー
#[derive(Debug, Error)]
pub enum AuthError {
    /// ルートが存在しない
    #[error("ルートが見つかりません: {0}")]
    RouteNotFound(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AuthError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(format!("{path} は存在しません")),
            ),
        };

        (status, Json(body)).into_response()
    }
}
