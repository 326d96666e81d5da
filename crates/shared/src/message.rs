//! # メッセージレスポンス
//!
//! ルートエンドポイント等が返す `{ "message": "..." }` 形式のレスポンス。

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` 形式のレスポンス型
///
/// ```
/// use storefront_shared::MessageResponse;
///
/// let response = MessageResponse::new("hello");
/// assert_eq!(response.message, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
