//! # ヘルスチェックハンドラ
//!
//! Backend の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（商品カタログが引けるかを確認）

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use storefront_shared::{CheckStatus, HealthResponse, ReadinessResponse};

use crate::{SERVICE_NAME, repository::ProductRepository};

/// 個別チェックのタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Backend のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub product_repository: Arc<dyn ProductRepository>,
}

/// Backend の Readiness Check エンドポイント
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let mut checks = BTreeMap::new();
    checks.insert(
        "catalog".to_string(),
        check_catalog(state.product_repository.as_ref()).await,
    );

    let response = ReadinessResponse::from_checks(checks);
    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

/// カタログが 1 件以上の商品を返すかを確認する
async fn check_catalog(repository: &dyn ProductRepository) -> CheckStatus {
    match tokio::time::timeout(CHECK_TIMEOUT, repository.find_all()).await {
        Ok(Ok(products)) if !products.is_empty() => CheckStatus::Ok,
        Ok(Ok(_)) => {
            tracing::warn!("readiness check: catalog is empty");
            CheckStatus::Error
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: catalog query failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: catalog check timed out");
            CheckStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{product::Product, repository::InMemoryProductRepository};

    #[tokio::test]
    async fn test_check_catalog_商品があればok() {
        let repository = InMemoryProductRepository::new(vec![Product::new(1, "a", "", 1)]);

        assert_eq!(check_catalog(&repository).await, CheckStatus::Ok);
    }

    #[tokio::test]
    async fn test_check_catalog_空ならerror() {
        let repository = InMemoryProductRepository::default();

        assert_eq!(check_catalog(&repository).await, CheckStatus::Error);
    }
}
