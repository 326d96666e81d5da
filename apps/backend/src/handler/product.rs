//! # 商品ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/products` - 商品一覧（JSON 配列）

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{error::BackendError, product::Product, usecase::ProductUseCase};

/// 商品ハンドラの共有状態
pub struct ProductState {
    pub usecase: Arc<dyn ProductUseCase>,
}

/// GET /api/products
///
/// エンベロープなしの JSON 配列で返す。
#[tracing::instrument(skip_all)]
pub async fn list_products(
    State(state): State<Arc<ProductState>>,
) -> Result<Json<Vec<Product>>, BackendError> {
    let products = state.usecase.list_products().await?;
    Ok(Json(products))
}
