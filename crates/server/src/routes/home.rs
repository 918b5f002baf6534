//! The banner page endpoint

use axum::{extract::State, response::Html};

use crate::AppState;

/// GET / - Serve the version banner page.
///
/// `Html` sets `Content-Type: text/html; charset=utf-8`. Axum also answers
/// HEAD from this handler with an empty body, per HTTP convention.
pub async fn get(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_ref().clone())
}
