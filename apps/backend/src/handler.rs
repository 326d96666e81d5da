//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック（liveness / readiness）
//! - `product`: 商品一覧
//! - `root`: サービス概要と未定義ルート

pub mod health;
pub mod product;
pub mod root;

pub use health::{ReadinessState, health_check, readiness_check};
pub use product::{ProductState, list_products};
pub use root::{not_found, root};
