//! # 商品モデル
//!
//! `/api/products` が返す商品と、起動時に投入する初期カタログを定義する。

use serde::{Deserialize, Serialize};

/// 価格の通貨コード（ISO 4217）
pub const DEFAULT_CURRENCY: &str = "JPY";

/// 商品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id:          u64,
    pub name:        String,
    pub description: String,
    /// 税込価格（通貨の最小単位）
    pub price:       u64,
    pub currency:    String,
}

impl Product {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// 初期カタログ
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Mouse", "2.4GHz 無線の静音マウス", 2_980),
        Product::new(2, "Mechanical Keyboard", "テンキーレスのメカニカルキーボード", 12_800),
        Product::new(3, "USB-C Hub", "HDMI / USB-A x3 / PD 対応の 5 in 1 ハブ", 4_980),
        Product::new(4, "27-inch Monitor", "WQHD IPS パネルの 27 インチモニター", 32_800),
    ]
}
