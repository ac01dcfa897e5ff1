//! SQL DDL for the rooms table.
//! Column names are referenced literally by the search query.

/// SQLite schema with:
/// - `ROOM_NUM` room identifier (not unique)
/// - `ROOM_GEO_X` / `ROOM_GEO_Y` descriptive coordinates
/// - `ROOM_SEX` single-letter code
/// - `ROOM_FLOOR`, `ROOM_AMMOUNT` (bed count)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Rooms (
    ROOM_NUM TEXT NOT NULL,
    ROOM_GEO_X INTEGER NOT NULL,
    ROOM_GEO_Y INTEGER NOT NULL,
    ROOM_SEX TEXT NOT NULL,
    ROOM_FLOOR INTEGER NOT NULL,
    ROOM_AMMOUNT INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_rooms_search ON Rooms(ROOM_SEX, ROOM_FLOOR, ROOM_AMMOUNT);
"#;
