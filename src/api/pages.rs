//! Tracker page endpoints. Every POST answers with a redirect back to the page.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::errors::AppError;
use crate::models::Category;
use crate::AppState;

/// GET / - Render the active category.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;
    Html(session.render())
}

/// POST /category/{category} - Switch the active category.
pub async fn switch_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Redirect {
    let mut session = state.session.lock().await;
    match category.parse::<Category>() {
        Ok(category) => session.switch_category(category),
        Err(e) => session.report(&AppError::from(e)),
    }
    Redirect::to("/")
}

/// POST /items/{category} - Submit the add form for `category`.
pub async fn submit_item(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Form(raw): Form<HashMap<String, String>>,
) -> Redirect {
    let mut session = state.session.lock().await;
    match category.parse::<Category>() {
        // Failures are kept on the session as a notice for the next render.
        Ok(category) => {
            let _ = session.submit(&state.service, category, raw).await;
        }
        Err(e) => session.report(&AppError::from(e)),
    }
    Redirect::to("/")
}

/// POST /items/{category}/{id}/delete - Remove an item from `category`.
pub async fn delete_item(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> Redirect {
    let mut session = state.session.lock().await;
    match category.parse::<Category>() {
        Ok(category) => {
            let _ = session.remove_item(&state.service, category, &id).await;
        }
        Err(e) => session.report(&AppError::from(e)),
    }
    Redirect::to("/")
}
