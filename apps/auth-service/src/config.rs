//! # Auth Service 設定
//!
//! 環境変数から Auth Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `AUTH_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `AUTH_PORT` | No | `8001` | ポート番号 |

use std::env;

use storefront_shared::{ConfigError, ServerConfig};

/// `AUTH_PORT` 未設定時のポート番号
pub const DEFAULT_PORT: u16 = 8001;

/// Auth Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub server: ServerConfig,
}

impl AuthConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の読み取り関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup("AUTH_HOST", "AUTH_PORT", DEFAULT_PORT, lookup)?,
        })
    }
}
