//! Element palette API handlers.
//!
//! These back the builder sidebar: the palette listing, the registry
//! constructor a palette drop calls, and the property panel descriptors.

use axum::{Json, extract::Path, http::StatusCode, response::Html};

use crate::element::{self, ElementInstance, ElementTypeMeta, PropertyField, parse_layout};
use crate::error::FormError;

/// GET /api/elements - palette metadata for every element kind.
pub async fn list() -> Json<Vec<ElementTypeMeta>> {
    Json(element::element_types())
}

/// POST /api/elements/:kind - construct a fresh instance of a kind with
/// its palette defaults and a new id.
pub async fn construct_default(
    Path(kind): Path<String>,
) -> Result<Json<ElementInstance>, (StatusCode, String)> {
    element::construct(&kind, element::generate_id())
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("Element type '{}' not found", kind),
        ))
}

/// GET /api/elements/:kind/properties - property panel descriptors.
pub async fn properties(
    Path(kind): Path<String>,
) -> Result<Json<Vec<PropertyField>>, (StatusCode, String)> {
    element::property_fields_for(&kind).map(Json).ok_or((
        StatusCode::NOT_FOUND,
        format!("Element type '{}' not found", kind),
    ))
}

/// POST /api/preview - render a layout's disabled canvas preview.
///
/// The body is a serialized element array, the same shape the builder
/// saves; the response is the read-only representation of every element
/// in order.
pub async fn preview(body: String) -> Result<Html<String>, FormError> {
    let parsed = parse_layout(&body)?;
    let mut out = String::new();
    for instance in &parsed {
        out.push_str(&instance.element.preview_html());
    }
    Ok(Html(out))
}
