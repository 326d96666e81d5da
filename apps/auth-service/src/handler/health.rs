//! # ヘルスチェックハンドラ
//!
//! Auth Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（依存先がないため常に `ready`）
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "service": "auth-service",
//!   "version": "0.1.0"
//! }
//! ```

use std::collections::BTreeMap;

use axum::Json;
use storefront_shared::{HealthResponse, ReadinessResponse};

use crate::SERVICE_NAME;

/// Auth Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Auth Service の Readiness Check エンドポイント
///
/// 外部依存を持たないため、チェック項目は空で常に 200 を返す。
pub async fn readiness_check() -> Json<ReadinessResponse> {
    Json(ReadinessResponse::from_checks(BTreeMap::new()))
}
