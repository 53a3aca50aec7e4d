use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::transport::Transport;

/// Transport over a TCP stream.
///
/// Operations block until complete by default; a per-operation timeout can be
/// set with [`TcpTransport::with_timeout`].
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Option<Duration>,
}

fn map_write_error(e: io::Error) -> anyhow::Error {
    if e.kind() == io::ErrorKind::BrokenPipe || e.kind() == io::ErrorKind::ConnectionReset {
        anyhow::anyhow!("Connection closed by peer")
    } else {
        anyhow::anyhow!("Write error: {}", e)
    }
}

fn map_read_error(e: io::Error) -> anyhow::Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        anyhow::anyhow!("Connection closed by peer")
    } else if e.kind() == io::ErrorKind::ConnectionReset {
        anyhow::anyhow!("Connection reset by peer")
    } else {
        anyhow::anyhow!("Read error: {}", e)
    }
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: None,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration: Some(timeout_duration),
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }

    pub fn peer_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let send_op = async move {
            stream.write_all(bytes).await.map_err(map_write_error)?;
            stream.flush().await.map_err(map_write_error)?;
            anyhow::Ok(())
        };
        match limit {
            Some(limit) => timeout(limit, send_op)
                .await
                .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", limit))?,
            None => send_op.await,
        }
    }

    async fn recv(&mut self, len: usize) -> anyhow::Result<Vec<u8>> {
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let recv_op = async move {
            let mut buf = vec![0u8; len];
            stream.read_exact(&mut buf).await.map_err(map_read_error)?;
            anyhow::Ok(buf)
        };
        match limit {
            Some(limit) => timeout(limit, recv_op)
                .await
                .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", limit))?,
            None => recv_op.await,
        }
    }
}
