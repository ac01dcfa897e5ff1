use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `Rooms` table as selected by a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Room {
    pub room_num: String,
    pub geo_x: i64,
    pub geo_y: i64,
    pub sex: String,
    pub capacity: i64,
}

/// Full row for inserting, including the floor the search filters on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRoom {
    pub room_num: String,
    pub geo_x: i64,
    pub geo_y: i64,
    pub sex: String,
    pub floor: i64,
    pub capacity: i64,
}
