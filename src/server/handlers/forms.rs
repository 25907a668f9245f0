//! Owner-scoped form API handlers.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::OwnerId;
use super::super::state::AppState;
use crate::element::{ElementInstance, parse_layout};
use crate::error::FormError;
use crate::store::{Form, FormStats, FormSummary, SubmissionRecord};

/// Request body for POST /api/forms.
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedForm {
    pub id: u64,
}

/// Detail + submissions payload for the results view.
#[derive(Debug, Serialize)]
pub struct FormWithSubmissions {
    pub form: Form,
    pub submissions: Vec<SubmissionRecord>,
}

/// Handle POST /api/forms - create a draft form.
pub async fn create(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
    Json(req): Json<CreateForm>,
) -> Result<Json<CreatedForm>, FormError> {
    let id = state
        .store
        .create_form(&owner, &req.name, &req.description)
        .await?;
    tracing::info!(id, owner = %owner, "form created");
    Ok(Json(CreatedForm { id }))
}

/// Handle GET /api/forms - list the owner's forms, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
) -> Result<Json<Vec<FormSummary>>, FormError> {
    Ok(Json(state.store.forms_by_owner(&owner).await?))
}

/// Handle GET /api/forms/:id - one form's full record.
pub async fn detail(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
    Path(id): Path<u64>,
) -> Result<Json<Form>, FormError> {
    Ok(Json(state.store.form_by_id(id, &owner).await?))
}

/// Handle GET /api/forms/:id/submissions - form plus collected
/// submissions.
pub async fn submissions(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
    Path(id): Path<u64>,
) -> Result<Json<FormWithSubmissions>, FormError> {
    let (form, submissions) = state.store.form_with_submissions(id, &owner).await?;
    Ok(Json(FormWithSubmissions { form, submissions }))
}

/// Handle PUT /api/forms/:id/content - save the draft layout.
///
/// The body is the serialized element array; it is fully parsed before
/// anything is stored, so a layout with an unknown element type or a
/// duplicate id is refused loudly and the stored content is untouched.
/// The accepted bytes are stored verbatim.
pub async fn save_content(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
    Path(id): Path<u64>,
    body: String,
) -> Result<Json<Value>, FormError> {
    let parsed = parse_layout(&body)?;
    ensure_unique_ids(&parsed)?;
    state.store.update_content(id, &owner, &body).await?;
    tracing::info!(id, elements = parsed.len(), "layout saved");
    Ok(Json(json!({"success": true})))
}

/// Handle POST /api/forms/:id/publish - one-way publish.
pub async fn publish(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
    Path(id): Path<u64>,
) -> Result<Json<Value>, FormError> {
    state.store.publish(id, &owner).await?;
    let form = state.store.form_by_id(id, &owner).await?;
    tracing::info!(id, share_token = %form.share_token, "form published");
    Ok(Json(json!({"success": true, "shareToken": form.share_token})))
}

/// Handle GET /api/stats - the owner's aggregate dashboard numbers.
pub async fn stats(
    State(state): State<Arc<AppState>>,
    OwnerId(owner): OwnerId,
) -> Result<Json<FormStats>, FormError> {
    Ok(Json(state.store.stats_for_owner(&owner).await?))
}

fn ensure_unique_ids(elements: &[ElementInstance]) -> Result<(), FormError> {
    let mut seen = HashSet::new();
    for element in elements {
        if !seen.insert(element.id.as_str()) {
            return Err(FormError::Layout(format!(
                "duplicate element id: {}",
                element.id
            )));
        }
    }
    Ok(())
}
