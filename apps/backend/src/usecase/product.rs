//! # 商品ユースケース

use std::sync::Arc;

use crate::{error::BackendError, product::Product, repository::ProductRepository};

/// 商品ユースケースの実装
pub struct ProductUseCaseImpl {
    product_repository: Arc<dyn ProductRepository>,
}

impl ProductUseCaseImpl {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// 商品一覧を取得する
    pub async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        let products = self.product_repository.find_all().await?;
        tracing::debug!(count = products.len(), "商品一覧を取得しました");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::repository::{InMemoryProductRepository, RepositoryError};

    struct UnavailableRepository;

    #[async_trait]
    impl ProductRepository for UnavailableRepository {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_list_productsがリポジトリの商品を返す() {
        let sut = ProductUseCaseImpl::new(Arc::new(InMemoryProductRepository::new(vec![
            Product::new(1, "a", "", 100),
        ])));

        let products = sut.list_products().await.unwrap();

        assert_eq!(products, vec![Product::new(1, "a", "", 100)]);
    }

    #[tokio::test]
    async fn test_list_products_空のカタログはエラーにしない() {
        let sut = ProductUseCaseImpl::new(Arc::new(InMemoryProductRepository::default()));

        let products = sut.list_products().await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_リポジトリエラーを伝播する() {
        let sut = ProductUseCaseImpl::new(Arc::new(UnavailableRepository));

        let result = sut.list_products().await;

        assert!(matches!(result, Err(BackendError::Repository(_))));
    }
}
