//! # Backend ライブラリ
//!
//! 商品一覧 API を提供するサービスのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `product`: 商品モデルと初期カタログ
//! - `repository`: 商品の取得（インメモリ実装）
//! - `usecase`: ビジネスロジック
//! - `handler`: HTTP ハンドラ
//! - `app`: ルーター構築

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod product;
pub mod repository;
pub mod usecase;

pub use app::build_app;

/// サービス名（ヘルスチェックレスポンスとログの `service` フィールドに使用）
pub const SERVICE_NAME: &str = "backend";
