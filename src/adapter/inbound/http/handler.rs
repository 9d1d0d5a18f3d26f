//! Route handlers.
//!
//! # Endpoints
//!
//! - `GET /` - Home list, seeded with default items on first visit
//! - `GET /{name}` - Named list, created on first visit
//! - `POST /` - Add an item (`newItem`, `list`)
//! - `POST /delete` - Delete an item (`checkbox`, `listName`)
//! - `GET /about` - Static about page
//! - `GET /css/styles.css` - Stylesheet

use axum::extract::{Form, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::error::ApiError;
use super::state::AppState;
use crate::adapter::outbound::view::STYLESHEET;
use crate::domain::ItemId;
use crate::port::inbound::todo::{ListOutcome, TodoService};
use crate::port::outbound::view::View;

/// Form posted by the "+" button.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(rename = "newItem", default)]
    pub new_item: String,
    #[serde(default)]
    pub list: String,
}

/// Form posted when an item's checkbox is ticked.
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    #[serde(default)]
    pub checkbox: String,
    #[serde(rename = "listName", default)]
    pub list_name: String,
}

/// 302 Found pointing at `path`.
pub fn found(path: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, path.to_string())]).into_response()
}

fn respond<T>(state: &AppState<T>, outcome: ListOutcome) -> Result<Response, ApiError> {
    match outcome {
        ListOutcome::Show(view) => {
            let markup = state.renderer.render(View::List {
                title: &view.title,
                items: &view.items,
            })?;
            Ok(Html(markup).into_response())
        }
        ListOutcome::Redirect(path) => Ok(found(&path)),
    }
}

pub async fn home<T: TodoService>(State(state): State<AppState<T>>) -> Result<Response, ApiError> {
    let outcome = state.service.home_list().await?;
    respond(&state, outcome)
}

pub async fn named_list<T: TodoService>(
    State(state): State<AppState<T>>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let outcome = state.service.named_list(&name).await?;
    respond(&state, outcome)
}

pub async fn add_item<T: TodoService>(
    State(state): State<AppState<T>>,
    Form(form): Form<AddItemForm>,
) -> Result<Response, ApiError> {
    let path = state.service.add_item(&form.list, &form.new_item).await?;
    Ok(found(&path))
}

pub async fn delete_item<T: TodoService>(
    State(state): State<AppState<T>>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Response, ApiError> {
    let id = ItemId::from(form.checkbox);
    let path = state.service.delete_item(&form.list_name, &id).await?;
    Ok(found(&path))
}

pub async fn about<T: TodoService>(
    State(state): State<AppState<T>>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(state.renderer.render(View::About)?))
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
