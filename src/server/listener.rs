use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpStream};
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    // local_addr reports the real port when 0 was configured
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = listener.accept().await?;
        tracing::debug!("Accepted connection from {}", peer);

        let site = cfg.site.clone();
        if cfg.server.concurrent {
            tokio::spawn(async move {
                handle(socket, site, peer).await;
            });
        } else {
            // one connection at a time, run to completion before the next accept
            handle(socket, site, peer).await;
        }
    }
}

async fn handle(socket: TcpStream, site: SiteConfig, peer: SocketAddr) {
    let (reader, writer) = socket.into_split();
    let mut conn = Connection::new(reader, writer, site);
    if let Err(e) = conn.run().await {
        tracing::error!("Connection error from {}: {}", peer, e);
    }
}
