//! # ProductRepository
//!
//! 商品の読み取りを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: ユースケースと readiness check はトレイト経由で参照する
//! - **読み取り専用**: 商品の作成・更新はスコープ外
//! - **インメモリ実装**: 起動時に投入したカタログを保持する

use async_trait::async_trait;
use thiserror::Error;

use crate::product::{Product, seed_catalog};

/// リポジトリで発生するエラー
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 保存先が利用できない
    #[error("商品ストアが利用できません: {0}")]
    Unavailable(String),
}

/// 商品リポジトリトレイト
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 全商品を ID 昇順で取得
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}

/// インメモリ実装の ProductRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    /// 指定した商品で作成する（ID 昇順に並べ替えて保持する）
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        Self { products }
    }

    /// 初期カタログで作成する
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }
}
