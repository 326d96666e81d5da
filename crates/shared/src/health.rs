//! # ヘルスチェック共通型
//!
//! 全サービス（Auth Service / Backend）のヘルスチェックエンドポイントで
//! 使用される共通レスポンス型を提供する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 稼働中を表す `status` の値
pub const STATUS_HEALTHY: &str = "healthy";

/// ヘルスチェックレスポンス
///
/// 各サービスの `/health` が返すレスポンス型。
/// `service` はサービス名、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use storefront_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("auth-service", "0.1.0");
/// assert_eq!(response.status, "healthy");
/// assert_eq!(response.service, "auth-service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（応答できる限り常に `"healthy"`）
    pub status:  String,
    /// サービス名
    pub service: String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

impl HealthResponse {
    /// 稼働中のレスポンスを作成する
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status:  STATUS_HEALTHY.to_string(),
            service: service.into(),
            version: version.into(),
        }
    }
}

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// チェック成功
    Ok,
    /// チェック失敗
    Error,
}

/// Readiness 全体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// 全依存先が利用可能
    Ready,
    /// 一部の依存先が利用不可
    NotReady,
}

/// Readiness Check レスポンス
///
/// `status` は全体のステータス、`checks` は個別チェック結果を示す。
/// キー順を安定させるため `BTreeMap` を使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// 全体のステータス
    pub status: ReadinessStatus,
    /// 個別チェック結果（キー: チェック名、値: ステータス）
    pub checks: BTreeMap<String, CheckStatus>,
}

impl ReadinessResponse {
    /// 個別チェック結果から全体ステータスを導出して作成する
    ///
    /// 全チェックが `Ok`（チェックなしを含む）なら `Ready`、それ以外は `NotReady`。
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use storefront_shared::{CheckStatus, ReadinessResponse, ReadinessStatus};
    ///
    /// let mut checks = BTreeMap::new();
    /// checks.insert("catalog".to_string(), CheckStatus::Error);
    /// let response = ReadinessResponse::from_checks(checks);
    /// assert_eq!(response.status, ReadinessStatus::NotReady);
    /// ```
    pub fn from_checks(checks: BTreeMap<String, CheckStatus>) -> Self {
        let status = if checks.values().all(|s| *s == CheckStatus::Ok) {
            ReadinessStatus::Ready
        } else {
            ReadinessStatus::NotReady
        };
        Self { status, checks }
    }

    /// 全体ステータスが `Ready` かどうか
    pub fn is_ready(&self) -> bool {
        self.status == ReadinessStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_health_responseのserializeで正しいjson形状にする() {
        let response = HealthResponse::healthy("auth-service", "0.1.0");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "service": "auth-service",
                "version": "0.1.0"
            })
        );
    }

    #[test]
    fn test_check_statusのserialize結果() {
        assert_eq!(
            serde_json::to_value(CheckStatus::Ok).unwrap(),
            serde_json::json!("ok")
        );
        assert_eq!(
            serde_json::to_value(CheckStatus::Error).unwrap(),
            serde_json::json!("error")
        );
    }

    #[test]
    fn test_readiness_status_not_readyのserialize結果() {
        let json = serde_json::to_value(ReadinessStatus::NotReady).unwrap();
        assert_eq!(json, serde_json::json!("not_ready"));
    }

    #[test]
    fn test_from_checks_チェックなしでreadyになる() {
        let response = ReadinessResponse::from_checks(BTreeMap::new());

        assert_eq!(response.status, ReadinessStatus::Ready);
        assert!(response.is_ready());
    }

    #[test]
    fn test_from_checks_一つでもerrorならnot_readyになる() {
        let mut checks = BTreeMap::new();
        checks.insert("catalog".to_string(), CheckStatus::Ok);
        checks.insert("cache".to_string(), CheckStatus::Error);

        let response = ReadinessResponse::from_checks(checks);

        assert_eq!(response.status, ReadinessStatus::NotReady);
        assert!(!response.is_ready());
    }

    #[test]
    fn test_readiness_responseのserialize結果() {
        let mut checks = BTreeMap::new();
        checks.insert("catalog".to_string(), CheckStatus::Ok);
        let json = serde_json::to_value(ReadinessResponse::from_checks(checks)).unwrap();

        assert_eq!(json["status"], "ready");
        assert_eq!(json["checks"]["catalog"], "ok");
    }
}
