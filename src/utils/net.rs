use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Prefers the first IPv4 address, falling back to whatever resolved first.
fn pick_address<I>(host: &str, addrs: I) -> std::io::Result<SocketAddr>
where
    I: IntoIterator<Item = SocketAddr>,
{
    let addrs: Vec<SocketAddr> = addrs.into_iter().collect();
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no address found for {}", host),
            )
        })
}

/// Checks whether a TCP port accepts connections.
///
/// Connects with a one second timeout and shuts the connection down again.
/// Any failure along the way, name resolution included, reports `false`.
///
/// This blocks the calling thread for up to the connect timeout plus name
/// resolution. Inside a tokio runtime use [`tcp_port_status_async`].
pub fn tcp_port_status(host: &str, port: u16) -> bool {
    let attempt = || -> std::io::Result<()> {
        let addr = pick_address(host, (host, port).to_socket_addrs()?)?;
        let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)?;
        stream.shutdown(Shutdown::Both)
    };

    match attempt() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("TCP check of {}:{} failed: {}", host, port, e);
            false
        }
    }
}

/// Non-blocking variant of [`tcp_port_status`] for use on the runtime.
pub async fn tcp_port_status_async(host: &str, port: u16) -> bool {
    let attempt = async {
        let addr = pick_address(host, tokio::net::lookup_host((host, port)).await?)?;
        let connect = tokio::net::TcpStream::connect(addr);
        let mut stream = tokio::time::timeout(CONNECT_TIMEOUT, connect)
            .await
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::TimedOut, "connect timed out"))??;
        stream.shutdown().await
    };

    match attempt.await {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("TCP check of {}:{} failed: {}", host, port, e);
            false
        }
    }
}
