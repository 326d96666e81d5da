//! # Backend サーバー
//!
//! 商品一覧 API を提供するサービスのエントリーポイント。
//!
//! ## エンドポイント
//!
//! | パス | 説明 |
//! |------|------|
//! | `GET /` | サービス概要 |
//! | `GET /health` | Liveness Check |
//! | `GET /health/ready` | Readiness Check |
//! | `GET /api/products` | 商品一覧 |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BACKEND_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BACKEND_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベルフィルタ |

use std::sync::Arc;

use anyhow::Context as _;
use storefront_backend::{
    SERVICE_NAME,
    build_app,
    config::BackendConfig,
    repository::{InMemoryProductRepository, ProductRepository},
};
use storefront_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let _tracing_guard = init_tracing(TracingConfig::from_env(SERVICE_NAME));

    let config = BackendConfig::from_env().context("設定の読み込みに失敗しました")?;
    let addr = config.server.socket_addr()?;

    tracing::info!("Backend サーバーを起動します: {}", addr);

    let product_repository: Arc<dyn ProductRepository> =
        Arc::new(InMemoryProductRepository::seeded());
    let app = build_app(product_repository);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Backend サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Backend サーバーを停止しました");
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
