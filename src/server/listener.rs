use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{Config, ContentConfig};
use crate::http::connection::Connection;

/// Bound listening socket plus the content settings handed to each
/// connection.
pub struct Listener {
    inner: TcpListener,
    content: ContentConfig,
}

impl Listener {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(&cfg.server.listen_addr).await?;
        info!("Listening on {}", cfg.server.listen_addr);

        Ok(Self {
            inner,
            content: cfg.content.clone(),
        })
    }

    /// The address actually bound (relevant when configured with port 0).
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    /// Sequential accept loop: each connection is fully served before the
    /// next one is accepted.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.inner.accept().await?;
            info!("Accepted connection from {}", peer);

            let mut conn = Connection::new(socket, self.content.clone());
            if let Err(e) = conn.run().await {
                warn!("Connection error from {}: {}", peer, e);
            }
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.run().await
}
