//! # Persistence Seam
//!
//! The core never talks to a database directly. It talks to
//! [`FormStore`], a small async trait covering exactly the reads and
//! writes the builder and the public submission surface need. The
//! bundled [`MemoryStore`] implements it in memory; a persistent backend
//! slots in behind the same trait.
//!
//! Two operations carry atomicity requirements the trait makes explicit:
//! the share-token fetch increments the visit counter as part of the
//! read, and recording a submission appends the record and increments
//! the submission counter as one both-or-neither step.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::FormError;

/// A stored form document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: u64,
    /// Owner identity; owner-scoped reads never cross this boundary.
    pub owner: String,
    pub name: String,
    pub description: String,
    /// Serialized ordered element array (see `element::parse_layout`).
    pub content: String,
    pub published: bool,
    pub visits: u64,
    pub submissions: u64,
    /// Public lookup key for the submission page. Assigned at creation,
    /// constant for the form's life, never derived from the internal id.
    pub share_token: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row for the owner's dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub published: bool,
    pub visits: u64,
    pub submissions: u64,
    pub created_at: DateTime<Utc>,
}

/// One respondent's stored answers. The content is an independent copy;
/// later edits to the form never touch past submissions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Flat `{element id: entered value}` JSON object.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate dashboard numbers for one owner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStats {
    pub visits: u64,
    pub submissions: u64,
    /// Percentage of visits that submitted; 0 when there are no visits.
    pub submission_rate: f64,
    /// 100 minus the submission rate.
    pub bounce_rate: f64,
}

impl FormStats {
    pub fn from_totals(visits: u64, submissions: u64) -> Self {
        let submission_rate = if visits > 0 {
            submissions as f64 / visits as f64 * 100.0
        } else {
            0.0
        };
        Self {
            visits,
            submissions,
            submission_rate,
            bounce_rate: 100.0 - submission_rate,
        }
    }
}

/// The persistence operations the core needs.
///
/// Owner-scoped lookups answer `NotFound` both for ids that do not exist
/// and for ids owned by someone else; the two cases are
/// indistinguishable to the caller. The same holds for share tokens of
/// unpublished forms.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Create a draft form. The name must be at least 4 characters.
    async fn create_form(
        &self,
        owner: &str,
        name: &str,
        description: &str,
    ) -> Result<u64, FormError>;

    async fn forms_by_owner(&self, owner: &str) -> Result<Vec<FormSummary>, FormError>;

    async fn form_by_id(&self, id: u64, owner: &str) -> Result<Form, FormError>;

    async fn form_with_submissions(
        &self,
        id: u64,
        owner: &str,
    ) -> Result<(Form, Vec<SubmissionRecord>), FormError>;

    /// Replace the draft's serialized content. Rejected with
    /// [`FormError::Published`] once the form is published.
    async fn update_content(&self, id: u64, owner: &str, content: &str) -> Result<(), FormError>;

    /// One-way flip to published. Calling it again is a no-op success.
    async fn publish(&self, id: u64, owner: &str) -> Result<(), FormError>;

    /// Resolve a share token to the published content, atomically
    /// counting the visit.
    async fn fetch_by_share_token(&self, token: &str) -> Result<String, FormError>;

    /// Resolve a share token to the published content without the visit
    /// side effect. Used when validating an incoming submission
    /// server-side, where the respondent's visit was already counted by
    /// the page fetch.
    async fn published_content(&self, token: &str) -> Result<String, FormError>;

    /// Append a submission and bump the submission counter in one atomic
    /// step. Requires the form to be published.
    async fn record_submission(&self, token: &str, payload: &str) -> Result<(), FormError>;

    async fn stats_for_owner(&self, owner: &str) -> Result<FormStats, FormError>;
}
