//! # Backend エラー定義
//!
//! Backend 固有のエラーと、HTTP レスポンスへの変換を定義する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storefront_shared::ErrorResponse;
use thiserror::Error;

use crate::repository::RepositoryError;

/// Backend で発生するエラー
#[derive(Debug, Error)]
pub enum BackendError {
    /// ルートが存在しない
    #[error("ルートが見つかりません: {0}")]
    RouteNotFound(String),

    /// リポジトリエラー
    #[error("リポジトリエラー: {0}")]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            BackendError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(format!("{path} は存在しません")),
            ),
            BackendError::Repository(e) => {
                tracing::error!("リポジトリエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_foundは404になる() {
        let response = BackendError::RouteNotFound("/nope".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repositoryエラーは500になる() {
        let error = BackendError::from(RepositoryError::Unavailable("down".to_string()));

        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
