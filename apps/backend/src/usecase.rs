//! # ユースケース層
//!
//! Backend のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由でユースケースを呼ぶ
//! - **依存性注入**: リポジトリを外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod product;

use async_trait::async_trait;
pub use product::ProductUseCaseImpl;

use crate::{error::BackendError, product::Product};

/// 商品ユースケーストレイト
#[async_trait]
pub trait ProductUseCase: Send + Sync {
    /// 商品一覧を取得する
    ///
    /// カタログが空の場合は空の `Vec` を返す（エラーにはしない）。
    async fn list_products(&self) -> Result<Vec<Product>, BackendError>;
}

#[async_trait]
impl ProductUseCase for ProductUseCaseImpl {
    async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        self.list_products().await
    }
}
