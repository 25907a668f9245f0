//! Public submission surface handlers.
//!
//! Everything here is keyed by share token and requires no identity. A
//! token that is unknown, or that belongs to a still-unpublished form,
//! answers the same 404; whether the form exists is not observable
//! from outside.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{Value, json};

use super::super::state::AppState;
use crate::element::escape_html;
use crate::error::FormError;
use crate::submission::SubmissionForm;

/// GET /submit/:token - the public form page. Counts a visit.
pub async fn page(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Html<String>, FormError> {
    let content = state.store.fetch_by_share_token(&token).await?;
    let form = SubmissionForm::from_layout(&content)?;
    Ok(Html(page_shell(
        &form.render_html(&format!("/submit/{}", escape_html(&token))),
    )))
}

/// GET /api/submit/:token - the published layout as JSON. Counts a
/// visit, exactly like the page fetch.
pub async fn layout(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<Value>, FormError> {
    let content = state.store.fetch_by_share_token(&token).await?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| FormError::Layout(e.to_string()))?;
    Ok(Json(json!({"content": value})))
}

/// POST /api/submit/:token - record a submission from JSON values.
///
/// Validation runs against the published layout before the store is
/// touched; an invalid submission answers 422 with the failing element
/// ids and records nothing.
pub async fn submit_api(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(values): Json<HashMap<String, String>>,
) -> Result<Response, FormError> {
    let content = state.store.published_content(&token).await?;
    let mut form = SubmissionForm::from_layout(&content)?;
    for (id, value) in entered_values(&form, values) {
        form.enter_value(id, value);
    }

    if !form.validate_all() {
        let body = Json(json!({"success": false, "errors": form.errors()}));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
    }

    let payload = form.payload()?;
    state.store.record_submission(&token, &payload).await?;
    tracing::info!(token = %token, "submission recorded");
    Ok(Json(json!({"success": true})).into_response())
}

/// POST /submit/:token - record a submission from the HTML form.
///
/// On validation failure the page re-renders whole: every field shows
/// its error state and the entered values survive.
pub async fn submit_page(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Response, FormError> {
    let content = state.store.published_content(&token).await?;
    let mut form = SubmissionForm::from_layout(&content)?;
    for (id, value) in entered_values(&form, values) {
        form.enter_value(id, value);
    }

    if !form.validate_all() {
        let html = page_shell(&form.render_html(&format!("/submit/{}", escape_html(&token))));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    let payload = form.payload()?;
    state.store.record_submission(&token, &payload).await?;
    tracing::info!(token = %token, "submission recorded");
    Ok(Html(page_shell(
        "<h1>Form submitted</h1>\
         <p>Thank you for submitting the form, you can close this page now.</p>",
    ))
    .into_response())
}

/// Keep only values whose key is an element id in the layout; stray
/// keys never reach the stored payload.
fn entered_values(
    form: &SubmissionForm,
    values: HashMap<String, String>,
) -> Vec<(String, String)> {
    values
        .into_iter()
        .filter(|(id, _)| form.content().iter().any(|e| &e.id == id))
        .collect()
}

fn page_shell(body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>encuesta</title></head><body>{body}</body></html>"
    )
}
