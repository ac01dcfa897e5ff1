use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::{error, warn};

use crate::error::{CAPACITY_NOT_POSITIVE, RoomsError};
use crate::finder::{RoomQuery, find_suitable_rooms};
use crate::render;
use crate::router::RoomsState;

/// Raw form fields; absent fields arrive as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub capacity: String,
}

impl SearchForm {
    /// Parse and validate the submitted values. Floor is not range-checked.
    pub fn into_query(self) -> Result<RoomQuery, RoomsError> {
        let floor = parse_number("floor", &self.floor)?;
        let capacity = parse_number("capacity", &self.capacity)?;
        if capacity <= 0 {
            return Err(RoomsError::Validation(CAPACITY_NOT_POSITIVE.to_string()));
        }
        Ok(RoomQuery {
            sex: self.sex.to_uppercase(),
            floor,
            capacity,
        })
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<i64, RoomsError> {
    raw.trim()
        .parse()
        .map_err(|source| RoomsError::InvalidNumber { field, source })
}

/// GET / -> empty search form.
pub async fn index_get() -> Html<String> {
    Html(render::index_page(None, None))
}

/// POST / -> validate the form, search, and render the result line.
pub async fn index_post(
    State(state): State<RoomsState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, RoomsError> {
    let query = form.into_query().inspect_err(|e| {
        warn!(error = %e, "rejected search form");
    })?;
    let rooms = find_suitable_rooms(&state.storage, &query)
        .await
        .inspect_err(|e| {
            error!(error = %e, "room search failed");
        })?;
    Ok(Html(render::index_page(Some(rooms.as_str()), None)))
}
