//! # Auth Service アプリケーション構築
//!
//! ルーター定義とミドルウェアの積み上げを担当する。

use axum::{Router, routing::get};
use storefront_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{health_check, not_found, readiness_check, root};

/// Auth Service のルーターを構築する
///
/// レイヤーは後に追加したものほど外側になる:
///
/// ```text
/// SetRequestId → Trace → CanonicalLogLine → PropagateRequestId → handler
/// ```
pub fn build_app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .fallback(not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
