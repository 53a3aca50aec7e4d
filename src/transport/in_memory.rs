use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::transport::Transport;

/// One end of an in-process byte pipe, for tests and local games.
pub struct InMemoryTransport {
    recv_queue: Arc<Mutex<VecDeque<u8>>>,
    send_queue: Arc<Mutex<VecDeque<u8>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
            },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        if Arc::strong_count(&self.send_queue) == 1 {
            return Err(anyhow::anyhow!("Connection closed by peer"));
        }
        let mut queue = self
            .send_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
        queue.extend(bytes.iter().copied());
        Ok(())
    }

    async fn recv(&mut self, len: usize) -> anyhow::Result<Vec<u8>> {
        loop {
            let ready = {
                let mut queue = self
                    .recv_queue
                    .lock()
                    .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
                if queue.len() >= len {
                    Some(queue.drain(..len).collect::<Vec<u8>>())
                } else {
                    None
                }
            };
            if let Some(bytes) = ready {
                return Ok(bytes);
            }
            if Arc::strong_count(&self.recv_queue) == 1 {
                return Err(anyhow::anyhow!("Connection closed by peer"));
            }
            yield_now().await;
        }
    }
}
