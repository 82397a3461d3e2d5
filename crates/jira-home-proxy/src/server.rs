use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::api::{self, ApiHandler};
use jira_home_core::models::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;

pub struct ProxyServer {
    config: ServerConfig,
    api_handler: Arc<ApiHandler>,
}

impl ProxyServer {
    pub fn new(config: ServerConfig, api_handler: Arc<ApiHandler>) -> Self {
        Self {
            config,
            api_handler,
        }
    }

    /// Routes mounted under the configured base path
    pub fn app(&self) -> Router {
        let routes = api::routes(self.api_handler.clone());
        match self.config.mount_path() {
            Some(path) => Router::new().nest(path, routes),
            None => routes,
        }
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr: SocketAddr = self
            .config
            .listen_addr
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.config.listen_addr.clone()))?;
        Ok(TcpListener::bind(addr).await?)
    }

    /// Serve on `listener` until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            "Proxy listening on http://{}{}",
            local_addr,
            self.config.mount_path().unwrap_or("")
        );

        axum::serve(listener, self.app())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Proxy stopped");
        Ok(())
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(&self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down...");
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jira_home_core::models::JiraConfig;

    fn server(config: ServerConfig) -> ProxyServer {
        ProxyServer::new(config, Arc::new(ApiHandler::new(JiraConfig::default())))
    }

    #[test]
    fn test_server_creation() {
        let server = server(ServerConfig::default());
        let _app = server.app();
    }

    #[test]
    fn test_root_mount() {
        let server = server(ServerConfig {
            base_path: "/".to_string(),
            ..ServerConfig::default()
        });
        let _app = server.app();
    }

    #[tokio::test]
    async fn test_bind_invalid_address() {
        let server = server(ServerConfig {
            listen_addr: "localhost".to_string(),
            ..ServerConfig::default()
        });
        assert!(matches!(
            server.bind().await,
            Err(ServerError::InvalidAddress(_))
        ));
    }
}
