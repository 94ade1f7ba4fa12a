//! Entry handlers
//!
//! Endpoints for listing, creating and viewing journal entries.
//! Read endpoints render HTML unless the client asks for JSON.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::domain::entities::EntryId;
use crate::domain::ports::{EntryRepository, SentimentAnalyzer};
use crate::error::AppError;
use crate::views;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Form body for the quick-add form on the list page
#[derive(Debug, Deserialize)]
pub struct QuickEntryForm {
    pub title: String,
    pub content: String,
    /// Optional manual label; blank means "classify for me"
    #[serde(default)]
    pub sentiment: Option<String>,
}

/// Form body for the new-entry page
#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    pub title: String,
    pub content: String,
}

/// GET /
///
/// Lists every entry.
/// - Accept: application/json → JSON array
/// - Otherwise → HTML page
pub async fn list_entries<ER, SA>(
    State(state): State<AppState<ER, SA>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    ER: EntryRepository + 'static,
    SA: SentimentAnalyzer + 'static,
{
    let entries = state.entry_service.list_entries().await?;

    if wants_json(&headers) {
        Ok(Json(entries).into_response())
    } else {
        Ok(Html(views::render_home(&entries)).into_response())
    }
}

/// POST /
///
/// Creates an entry from the quick-add form. A submitted sentiment label is
/// stored as given; without one the content is classified.
pub async fn create_entry<ER, SA>(
    State(state): State<AppState<ER, SA>>,
    form: Result<Form<QuickEntryForm>, FormRejection>,
) -> Result<Redirect, AppError>
where
    ER: EntryRepository + 'static,
    SA: SentimentAnalyzer + 'static,
{
    let Form(form) = form?;

    state
        .entry_service
        .create_entry_with_label(&form.title, &form.content, form.sentiment.as_deref())
        .await?;

    Ok(Redirect::to("/"))
}

/// GET /new
pub async fn new_entry_form() -> Html<String> {
    Html(views::render_new_entry_form())
}

/// POST /new
///
/// Creates an entry whose sentiment is always computed from its content.
pub async fn submit_new_entry<ER, SA>(
    State(state): State<AppState<ER, SA>>,
    form: Result<Form<NewEntryForm>, FormRejection>,
) -> Result<Redirect, AppError>
where
    ER: EntryRepository + 'static,
    SA: SentimentAnalyzer + 'static,
{
    let Form(form) = form?;

    state
        .entry_service
        .create_entry(&form.title, &form.content)
        .await?;

    Ok(Redirect::to("/"))
}

/// GET /entry/:id
pub async fn get_entry<ER, SA>(
    State(state): State<AppState<ER, SA>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    ER: EntryRepository + 'static,
    SA: SentimentAnalyzer + 'static,
{
    // A malformed ID cannot match any stored entry
    let entry_id: EntryId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Entry {}", id)))?;

    let entry = state.entry_service.get_entry(&entry_id).await?;

    if wants_json(&headers) {
        Ok(Json(entry).into_response())
    } else {
        Ok(Html(views::render_entry(&entry)).into_response())
    }
}
