#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cell;
pub mod codec;
mod common;
mod config;
mod game;
mod grid;
mod placement;
pub mod protocol;
pub mod resolver;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod transport;

pub use cell::*;
pub use codec::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use placement::*;
pub use protocol::*;
pub use resolver::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{CliPlayer, Player, RandomPlayer};
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
