use rand::rngs::SmallRng;

use crate::{
    common::Outcome,
    game::{GameEngine, GameStatus},
    player::Player,
    protocol::Role,
    transport::Transport,
};

/// One side of a networked game: a move source, the engine and the link to the peer.
pub struct Session {
    player: Box<dyn Player>,
    engine: GameEngine,
    transport: Box<dyn Transport>,
}

impl Session {
    pub fn new(player: Box<dyn Player>, engine: GameEngine, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            engine,
            transport,
        }
    }

    /// Exchange confirmation tokens. The guest speaks first.
    async fn handshake(&mut self, role: Role) -> anyhow::Result<()> {
        if role == Role::Guest {
            self.transport.send_token(&role.own_token()).await?;
        }

        let token = self.transport.recv_token().await?;
        if token.as_slice() != role.peer_token().as_slice() {
            log::warn!("[Session] unexpected handshake token {:02x?} as {:?}", token, role);
            return Err(anyhow::anyhow!(
                "Peer did not confirm the connection (closing session)"
            ));
        }

        if role == Role::Host {
            self.transport.send_token(&role.own_token()).await?;
        }
        log::info!("[Session] handshake complete as {:?}", role);
        Ok(())
    }

    /// Fire one shot and record the reply. Returns the outcome reported by the peer.
    async fn take_shot(&mut self, rng: &mut SmallRng) -> anyhow::Result<Outcome> {
        let (x, y) = self.player.select_target(
            rng,
            self.engine.own_grid(),
            self.engine.enemy_grid(),
        )?;
        self.transport.send_coord(x, y).await?;
        let outcome = self.transport.recv_outcome().await?;
        self.engine
            .record_shot(x, y, outcome)
            .map_err(|e| anyhow::anyhow!(e))?;
        self.player.handle_shot_result((x, y), outcome);
        Ok(outcome)
    }

    /// Receive one shot from the peer and answer it.
    async fn answer_shot(&mut self) -> anyhow::Result<Outcome> {
        let (x, y) = self.transport.recv_coord().await?;
        let outcome = self.engine.opponent_shot(x, y).map_err(|e| {
            log::warn!("[Session] rejecting opponent shot at ({}, {}): {}", x, y, e);
            anyhow::anyhow!(e)
        })?;
        self.transport.send_outcome(outcome).await?;
        self.player.handle_opponent_shot((x, y), outcome);
        Ok(outcome)
    }

    /// Play until one fleet is gone.
    ///
    /// The shooter keeps the turn after a hit and passes it after a miss.
    pub async fn run(&mut self, rng: &mut SmallRng, role: Role) -> anyhow::Result<GameStatus> {
        self.handshake(role).await?;

        let mut my_turn = role.moves_first();
        while self.engine.status() == GameStatus::InProgress {
            let outcome = if my_turn {
                self.take_shot(rng).await?
            } else {
                self.answer_shot().await?
            };
            log::debug!(
                "[Session] {} shot: {}",
                if my_turn { "our" } else { "opponent" },
                outcome
            );
            if outcome.is_miss() {
                my_turn = !my_turn;
            } else if outcome.finishes_ship() {
                log::info!(
                    "[Session] {} ship sunk",
                    if my_turn { "opponent" } else { "our" }
                );
            }
        }
        log::info!("[Session] game over: {:?}", self.engine.status());
        Ok(self.engine.status())
    }

    /// Current status of the underlying game engine.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
