//! # Auth Service ライブラリ
//!
//! ルーター構築とハンドラを公開する。
//! `main.rs` は設定読み込みとサーバー起動のみを担い、
//! 結合テストは [`build_app`] で組み立てたルーターを直接呼び出す。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;

pub use app::build_app;

/// サービス名（ヘルスチェックレスポンスとログの `service` フィールドに使用）
pub const SERVICE_NAME: &str = "auth-service";
