pub mod config;
pub mod db;
pub mod error;
pub mod finder;
pub mod handlers;
pub mod render;
pub mod router;
pub mod server;

pub use error::RoomsError;
pub use finder::{RoomQuery, find_suitable_rooms};
