use anyhow::Result;
use axum::{routing::get, Router};
use log::{error, info};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serving errors are logged; they never take the trading passes down.
pub(crate) fn spawn(port: u16) {
    tokio::spawn(async move {
        if let Err(e) = serve(port).await {
            error!("Status server failed: {e}");
        }
    });
}

async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Status endpoint listening on http://{addr}");
    axum::serve(listener, router()).await?;
    Ok(())
}

fn router() -> Router {
    Router::new().route("/", get(status))
}

async fn status() -> &'static str {
    "Sorare Bot is running!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"Sorare Bot is running!");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
