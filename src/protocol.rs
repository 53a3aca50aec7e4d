//! Handshake tokens exchanged before any gameplay bytes.
//!
//! The guest sends [`GUEST_TOKEN`] first; the host checks it and answers with
//! [`HOST_TOKEN`]. Either side aborts on a token it does not expect.

/// Size of each handshake token.
pub const HANDSHAKE_TOKEN_SIZE: usize = 8;

/// Token the host sends to confirm the connection.
pub const HOST_TOKEN: [u8; HANDSHAKE_TOKEN_SIZE] = *b"SEABTHST";

/// Token the guest sends to request the connection.
pub const GUEST_TOKEN: [u8; HANDSHAKE_TOKEN_SIZE] = *b"SEABTGST";

/// Which end of the connection we are. The host moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    /// Token this side sends.
    pub fn own_token(self) -> [u8; HANDSHAKE_TOKEN_SIZE] {
        match self {
            Role::Host => HOST_TOKEN,
            Role::Guest => GUEST_TOKEN,
        }
    }

    /// Token this side expects from the peer.
    pub fn peer_token(self) -> [u8; HANDSHAKE_TOKEN_SIZE] {
        match self {
            Role::Host => GUEST_TOKEN,
            Role::Guest => HOST_TOKEN,
        }
    }

    /// Whether this side takes the first shot.
    pub fn moves_first(self) -> bool {
        self == Role::Host
    }
}
