use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use std::num::ParseIntError;
use thiserror::Error as ThisError;

use crate::render;

/// Shown when capacity is zero or negative.
pub const CAPACITY_NOT_POSITIVE: &str = "Количество мест должно быть положительным числом.";

#[derive(Debug, ThisError)]
pub enum RoomsError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("field `{field}` is not an integer: {source}")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoomsError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Rejected input still renders the form normally.
            RoomsError::Validation(_) => StatusCode::OK,
            RoomsError::InvalidNumber { .. } => StatusCode::BAD_REQUEST,
            RoomsError::Database(_) | RoomsError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text rendered into the page in place of search results.
    pub fn user_message(&self) -> String {
        match self {
            RoomsError::Validation(msg) => msg.clone(),
            RoomsError::InvalidNumber { field, .. } => {
                format!("Поле «{}» должно быть целым числом.", field_label(field))
            }
            RoomsError::Database(_) => {
                "База данных комнат недоступна. Попробуйте позже.".to_string()
            }
            RoomsError::Io(_) => "Внутренняя ошибка сервера.".to_string(),
        }
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "floor" => "Этаж",
        "capacity" => "Количество мест",
        other => other,
    }
}

impl IntoResponse for RoomsError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let page = render::index_page(None, Some(self.user_message().as_str()));
        (status, Html(page)).into_response()
    }
}
