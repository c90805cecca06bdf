use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::access_log::AccessLog;
use crate::config::{Config, StaticFilesConfig};
use crate::http::connection::Connection;

pub struct Listener {
    inner: TcpListener,
    static_files: StaticFilesConfig,
    access_log: AccessLog,
}

/// Binds the listening socket described by the config.
pub async fn bind(cfg: &Config) -> anyhow::Result<Listener> {
    let inner = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    Ok(Listener {
        inner,
        static_files: cfg.static_files.clone(),
        access_log: AccessLog::new(cfg.access_log.dir.clone()),
    })
}

/// Binds and serves until the process is stopped.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    bind(cfg).await?.serve().await
}

impl Listener {
    /// The bound address, useful when the config asked for port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Accepts connections and serves each to completion before the next
    /// accept. One request per connection, then the socket is closed.
    pub async fn serve(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.inner.accept().await?;
            info!("Accepted connection from {}", peer);

            let mut conn = Connection::new(
                socket,
                self.static_files.clone(),
                self.access_log.clone(),
            );
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        }
    }
}
