pub mod code;
pub mod forms;
pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Forms
        .route("/api/submit", post(forms::submit))
        .route("/api/data", get(forms::list_unchecked))
        .route("/api/updateChecked", put(forms::update_checked))
        // Code books
        .route("/api/submitCode", post(code::submit))
        .route(
            "/api/getCodeNamesAndLanguages",
            get(code::names_and_languages),
        )
        .route("/api/getFullCode", get(code::full_code))
        // Store connectivity
        .route("/api/checkDatabase", get(health::check_database))
}
