//! # サーバー設定の共通部分
//!
//! 各サービスはバインドアドレスとポート番号を環境変数から読み込む。
//! 変数名とデフォルト値はサービスごとに異なるため、読み込みロジックのみを共通化する。
//!
//! 環境変数の読み取りはクロージャ経由で注入する。テストでプロセス全体の
//! 環境変数を書き換えずに済む。

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("{name} は有効なポート番号である必要があります: {value:?}")]
    InvalidPort { name: &'static str, value: String },

    /// host を IP アドレスとしても名前解決でも解釈できない
    #[error("バインドアドレスが不正です: {0}")]
    InvalidAddress(String),
}

/// HTTP サーバーのバインド設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ServerConfig {
    /// デフォルトのバインドアドレス
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";

    /// `lookup` で環境変数を引き、未設定の項目はデフォルト値で補う
    ///
    /// ```
    /// use storefront_shared::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup("APP_HOST", "APP_PORT", 8080, |_| None).unwrap();
    /// assert_eq!(config.host, "0.0.0.0");
    /// assert_eq!(config.port, 8080);
    /// ```
    pub fn from_lookup(
        host_var: &'static str,
        port_var: &'static str,
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = lookup(host_var).unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = match lookup(port_var) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    name: port_var,
                    value,
                })?,
            None => default_port,
        };

        Ok(Self { host, port })
    }

    /// `host` と `port` から `SocketAddr` を求める
    ///
    /// IP アドレス（IPv6 は `::` / `[::1]` のどちらの表記も可）はそのまま使い、
    /// それ以外はホスト名として名前解決し、最初のアドレスを採用する。
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let invalid = || ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port));

        if host.is_empty() {
            return Err(invalid());
        }

        let unbracketed = host.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = unbracketed.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        (host, self.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = ServerConfig::from_lookup("X_HOST", "X_PORT", 9000, lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9000,
            }
        );
    }

    #[test]
    fn test_環境変数の値がデフォルトより優先される() {
        let config = ServerConfig::from_lookup(
            "X_HOST",
            "X_PORT",
            9000,
            lookup_from(&[("X_HOST", "127.0.0.1"), ("X_PORT", "18080")]),
        )
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 18080);
    }

    #[test]
    fn test_不正なポート番号でinvalid_portを返す() {
        let result = ServerConfig::from_lookup(
            "X_HOST",
            "X_PORT",
            9000,
            lookup_from(&[("X_PORT", "70000")]),
        );

        assert_eq!(
            result,
            Err(ConfigError::InvalidPort {
                name:  "X_PORT",
                value: "70000".to_string(),
            })
        );
    }

    #[test]
    fn test_socket_addrでipアドレスを解釈できる() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        };

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_socket_addrでipv6ワイルドカードを解釈できる() {
        let config = ServerConfig {
            host: "::".to_string(),
            port: 8000,
        };

        assert_eq!(config.socket_addr().unwrap().to_string(), "[::]:8000");
    }

    #[test]
    fn test_socket_addrで角括弧付きipv6を解釈できる() {
        let config = ServerConfig {
            host: "[::1]".to_string(),
            port: 8000,
        };

        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:8000");
    }

    #[test]
    fn test_socket_addrでlocalhostを名前解決できる() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 8000,
        };

        let addr = config.socket_addr().unwrap();

        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_socket_addrで空のホストはinvalid_addressになる() {
        let config = ServerConfig {
            host: "  ".to_string(),
            port: 8000,
        };

        assert_eq!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress("  :8000".to_string()))
        );
    }
}
