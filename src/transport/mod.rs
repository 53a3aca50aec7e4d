//! Byte-stream transports and the fixed-size message helpers built on them.

use crate::codec::{
    decode_coord, decode_grid, decode_outcome, encode_coord, encode_grid, encode_outcome,
    grid_message_size, COORD_MESSAGE_SIZE, OUTCOME_MESSAGE_SIZE,
};
use crate::common::Outcome;
use crate::grid::Grid;
use crate::protocol::HANDSHAKE_TOKEN_SIZE;

/// An ordered, bidirectional byte stream.
///
/// Message boundaries come from the fixed sizes of each message type, so `recv`
/// always asks for an exact byte count.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send all of `bytes`.
    async fn send(&mut self, bytes: &[u8]) -> anyhow::Result<()>;

    /// Receive exactly `len` bytes.
    async fn recv(&mut self, len: usize) -> anyhow::Result<Vec<u8>>;

    async fn send_coord(&mut self, x: usize, y: usize) -> anyhow::Result<()> {
        let msg = encode_coord(x, y)?;
        self.send(&msg).await
    }

    async fn recv_coord(&mut self) -> anyhow::Result<(usize, usize)> {
        let msg = self.recv(COORD_MESSAGE_SIZE).await?;
        Ok(decode_coord(&msg)?)
    }

    async fn send_outcome(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        let msg = encode_outcome(outcome);
        self.send(&msg).await
    }

    async fn recv_outcome(&mut self) -> anyhow::Result<Outcome> {
        let msg = self.recv(OUTCOME_MESSAGE_SIZE).await?;
        Ok(decode_outcome(&msg)?)
    }

    async fn send_grid(&mut self, grid: &Grid) -> anyhow::Result<()> {
        let msg = encode_grid(grid)?;
        self.send(&msg).await
    }

    /// Receive a grid whose dimensions both sides already agree on.
    async fn recv_grid(&mut self, width: usize, height: usize) -> anyhow::Result<Grid> {
        let msg = self.recv(grid_message_size(width, height)).await?;
        let grid = decode_grid(&msg)?;
        if (grid.width(), grid.height()) != (width, height) {
            return Err(anyhow::anyhow!(
                "Grid size mismatch: expected {}x{}, got {}x{}",
                width,
                height,
                grid.width(),
                grid.height()
            ));
        }
        Ok(grid)
    }

    async fn send_token(&mut self, token: &[u8; HANDSHAKE_TOKEN_SIZE]) -> anyhow::Result<()> {
        self.send(token).await
    }

    async fn recv_token(&mut self) -> anyhow::Result<Vec<u8>> {
        self.recv(HANDSHAKE_TOKEN_SIZE).await
    }
}

pub mod in_memory;
pub mod tcp;
