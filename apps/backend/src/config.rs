//! # Backend 設定
//!
//! 環境変数から Backend サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `BACKEND_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `BACKEND_PORT` | No | `8000` | ポート番号 |

use std::env;

use storefront_shared::{ConfigError, ServerConfig};

/// `BACKEND_PORT` 未設定時のポート番号
pub const DEFAULT_PORT: u16 = 8000;

/// Backend サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub server: ServerConfig,
}

impl BackendConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(
                "BACKEND_HOST",
                "BACKEND_PORT",
                DEFAULT_PORT,
                lookup,
            )?,
        })
    }
}
