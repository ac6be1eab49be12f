//! Core types: seats, players, configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{JudgerConfig, Singles};
pub use error::{CatalogueError, JudgerError};
pub use player::{HandView, Player, PlayerId, Seats, PLAYER_COUNT};
pub use rng::GameRng;
