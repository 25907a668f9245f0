//! HTTP handler modules.

pub mod elements;
pub mod forms;
pub mod submit;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::FormError;

/// Authenticated owner identity, read from the `x-owner-id` header.
///
/// The identity service itself lives outside this crate; the header
/// carries its verdict. A missing or empty header means no
/// authenticated owner, and the owner-scoped operation aborts before
/// any effect.
pub struct OwnerId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = FormError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-owner-id")
            .and_then(|value| value.to_str().ok())
            .filter(|owner| !owner.is_empty())
            .map(|owner| OwnerId(owner.to_string()))
            .ok_or(FormError::Unauthorized)
    }
}
