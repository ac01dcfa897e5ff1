pub mod search;

pub use search::{SearchForm, index_get, index_post};
