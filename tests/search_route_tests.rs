use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use room_finder::{
    db::{NewRoom, RoomsStorage},
    error::CAPACITY_NOT_POSITIVE,
    finder::NOT_FOUND,
    router::{RoomsState, rooms_router},
};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

struct TestDb {
    path: PathBuf,
    storage: RoomsStorage,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

async fn seeded_db(name: &str, rooms: &[NewRoom]) -> TestDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "room-finder-{}-{}-{}.sqlite",
        name,
        std::process::id(),
        nanos
    ));

    let storage = RoomsStorage::connect(&format!("sqlite:{}", path.display()))
        .expect("failed to open storage");
    storage.init_schema().await.expect("failed to init schema");
    for room in rooms {
        storage.insert(room).await.expect("failed to insert room");
    }
    TestDb { path, storage }
}

fn room(num: &str, x: i64, y: i64, sex: &str, floor: i64, capacity: i64) -> NewRoom {
    NewRoom {
        room_num: num.to_string(),
        geo_x: x,
        geo_y: y,
        sex: sex.to_string(),
        floor,
        capacity,
    }
}

async fn post_form(app: &Router, body: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    read(resp).await
}

async fn read(resp: axum::response::Response) -> (StatusCode, String) {
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let text = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
    (status, text)
}

fn rooms_line(page: &str) -> Option<&str> {
    let start = page.find(r#"<p class="rooms">"#)? + r#"<p class="rooms">"#.len();
    let end = page[start..].find("</p>")? + start;
    Some(&page[start..end])
}

#[tokio::test]
async fn get_renders_empty_form() {
    let db = seeded_db("get", &[]).await;
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let (status, page) = read(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"<form method="post""#));
    assert!(rooms_line(&page).is_none());
    assert!(!page.contains(r#"class="error""#));
}

#[tokio::test]
async fn single_match_is_rendered_exactly() {
    let db = seeded_db("single", &[room("101", 1, 2, "F", 1, 2)]).await;
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let (status, page) = post_form(&app, "sex=F&floor=1&capacity=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms_line(&page), Some("ROOM:101(1;2), SEX:F, N_ROOMS:2"));
}

#[tokio::test]
async fn no_match_renders_sentinel() {
    let db = seeded_db("none", &[room("101", 1, 2, "F", 1, 2)]).await;
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let (status, page) = post_form(&app, "sex=M&floor=3&capacity=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms_line(&page), Some(NOT_FOUND));
}

#[tokio::test]
async fn negative_capacity_never_reaches_database() {
    // A path that cannot be opened: any query would fail with a 500.
    let storage = RoomsStorage::connect("sqlite:/nonexistent-room-finder-dir/rooms.sqlite")
        .expect("failed to build lazy storage");
    let app = rooms_router(RoomsState::new(storage));

    let (status, page) = post_form(&app, "sex=F&floor=1&capacity=-1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(CAPACITY_NOT_POSITIVE));
    assert!(rooms_line(&page).is_none());
}

#[tokio::test]
async fn two_matches_are_joined_without_trailing_separator() {
    let db = seeded_db(
        "two",
        &[
            room("101", 1, 2, "F", 1, 2),
            room("105", 7, 8, "F", 1, 2),
            room("106", 9, 9, "F", 1, 3),
        ],
    )
    .await;
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let (_, page) = post_form(&app, "sex=f&floor=1&capacity=2").await;
    let line = rooms_line(&page).expect("rooms line present");

    let mut segments: Vec<&str> = line.split(" / ").collect();
    segments.sort();
    assert_eq!(
        segments,
        vec![
            "ROOM:101(1;2), SEX:F, N_ROOMS:2",
            "ROOM:105(7;8), SEX:F, N_ROOMS:2"
        ]
    );
    assert!(!line.ends_with(" / "));
}

#[tokio::test]
async fn repeated_search_is_identical() {
    let db = seeded_db(
        "repeat",
        &[room("101", 1, 2, "M", 2, 1), room("102", 3, 4, "M", 2, 1)],
    )
    .await;
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let (_, first) = post_form(&app, "sex=M&floor=2&capacity=1").await;
    let (_, second) = post_form(&app, "sex=M&floor=2&capacity=1").await;

    assert_eq!(rooms_line(&first), rooms_line(&second));
}

#[tokio::test]
async fn non_numeric_floor_is_a_bad_request_with_message() {
    let db = seeded_db("badfloor", &[]).await;
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let (status, page) = post_form(&app, "sex=F&floor=first&capacity=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains(r#"class="error""#));
    assert!(page.contains("Этаж"));
}

#[tokio::test]
async fn missing_table_is_reported_as_server_error() {
    let db = seeded_db("notable", &[]).await;
    sqlx::query("DROP TABLE Rooms")
        .execute(db.storage.pool())
        .await
        .expect("failed to drop table");
    let app = rooms_router(RoomsState::new(db.storage.clone()));

    let (status, page) = post_form(&app, "sex=F&floor=1&capacity=1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(page.contains(r#"class="error""#));
}
