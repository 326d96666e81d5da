//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - `health`: ヘルスチェック（liveness / readiness）
//! - `root`: サービス概要と未定義ルート

pub mod health;
pub mod root;

pub use health::{health_check, readiness_check};
pub use root::{not_found, root};
