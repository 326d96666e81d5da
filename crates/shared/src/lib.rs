//! # Storefront 共有ユーティリティ
//!
//! Auth Service と Backend の両サービスで使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 両サービス（auth-service, backend）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）
//! - tracing 関連は `observability` feature で有効化する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod config;
pub mod error_response;
pub mod health;
pub mod message;
pub mod observability;

pub use config::{ConfigError, ServerConfig};
pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use message::MessageResponse;
