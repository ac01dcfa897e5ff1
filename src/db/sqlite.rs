use crate::db::models::{NewRoom, Room};
use crate::db::schema::SQLITE_INIT;
use crate::error::RoomsError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct RoomsStorage {
    pool: SqlitePool,
}

impl RoomsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Build storage for `database_url` without touching the file yet;
    /// connections are opened on the first query.
    pub fn connect(database_url: &str) -> Result<Self, RoomsError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_lazy_with(options);
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RoomsError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn insert(&self, room: &NewRoom) -> Result<(), RoomsError> {
        sqlx::query(
            r#"
            INSERT INTO Rooms (
                ROOM_NUM, ROOM_GEO_X, ROOM_GEO_Y, ROOM_SEX, ROOM_FLOOR, ROOM_AMMOUNT
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&room.room_num)
        .bind(room.geo_x)
        .bind(room.geo_y)
        .bind(&room.sex)
        .bind(room.floor)
        .bind(room.capacity)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Rooms whose sex, floor and bed count all equal the given values,
    /// in whatever order SQLite returns them.
    pub async fn find_matching(
        &self,
        sex: &str,
        floor: i64,
        capacity: i64,
    ) -> Result<Vec<Room>, RoomsError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"SELECT CAST(ROOM_NUM AS TEXT) AS room_num,
                      ROOM_GEO_X AS geo_x,
                      ROOM_GEO_Y AS geo_y,
                      ROOM_SEX AS sex,
                      ROOM_AMMOUNT AS capacity
               FROM Rooms
               WHERE ROOM_SEX = ? AND ROOM_FLOOR = ? AND ROOM_AMMOUNT = ?"#,
        )
        .bind(sex)
        .bind(floor)
        .bind(capacity)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }
}
