//! # Backend アプリケーション構築
//!
//! リポジトリを受け取り、ユースケース → State → Router の順に組み立てる。

use std::sync::Arc;

use axum::{Router, routing::get};
use storefront_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ProductState,
        ReadinessState,
        health_check,
        list_products,
        not_found,
        readiness_check,
        root,
    },
    repository::ProductRepository,
    usecase::ProductUseCaseImpl,
};

/// Backend のルーターを構築する
pub fn build_app(product_repository: Arc<dyn ProductRepository>) -> Router {
    let readiness_state = Arc::new(ReadinessState {
        product_repository: product_repository.clone(),
    });
    let product_state = Arc::new(ProductState {
        usecase: Arc::new(ProductUseCaseImpl::new(product_repository)),
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/products", get(list_products))
        .with_state(product_state)
        .fallback(not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
