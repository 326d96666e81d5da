//! # Auth Service サーバー
//!
//! 認証ドメインを担当するサービスのエントリーポイント。
//! 現時点で公開するのはヘルスチェックとサービス概要のみ。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `AUTH_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `AUTH_PORT` | No | ポート番号（デフォルト: `8001`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベルフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p storefront-auth-service
//!
//! AUTH_PORT=13002 LOG_FORMAT=json cargo run -p storefront-auth-service --release
//! ```

use anyhow::Context as _;
use storefront_auth_service::{SERVICE_NAME, build_app, config::AuthConfig};
use storefront_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let _tracing_guard = init_tracing(TracingConfig::from_env(SERVICE_NAME));

    let config = AuthConfig::from_env().context("設定の読み込みに失敗しました")?;
    let addr = config.server.socket_addr()?;

    tracing::info!("Auth Service サーバーを起動します: {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Auth Service サーバーが起動しました: {}", addr);

    axum::serve(listener, build_app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Auth Service サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
