//! Room search: exact-match lookup and the one-line text rendering of its results.

use crate::db::{Room, RoomsStorage};
use crate::error::RoomsError;
use tracing::info;

/// Returned instead of room segments when nothing matches.
pub const NOT_FOUND: &str = "Комнаты не найдены";

/// Placed between room segments.
pub const SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomQuery {
    pub sex: String,
    pub floor: i64,
    pub capacity: i64,
}

impl Default for RoomQuery {
    fn default() -> Self {
        Self {
            sex: "F".to_string(),
            floor: 1,
            capacity: 1,
        }
    }
}

pub fn format_room(room: &Room) -> String {
    format!(
        "ROOM:{}({};{}), SEX:{}, N_ROOMS:{}",
        room.room_num, room.geo_x, room.geo_y, room.sex, room.capacity
    )
}

pub fn format_rooms(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return NOT_FOUND.to_string();
    }
    rooms
        .iter()
        .map(format_room)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Run the search and render every match, or [`NOT_FOUND`].
pub async fn find_suitable_rooms(
    storage: &RoomsStorage,
    query: &RoomQuery,
) -> Result<String, RoomsError> {
    let rooms = storage
        .find_matching(&query.sex, query.floor, query.capacity)
        .await?;
    info!(
        sex = %query.sex,
        floor = query.floor,
        capacity = query.capacity,
        matches = rooms.len(),
        "room search finished"
    );
    Ok(format_rooms(&rooms))
}
