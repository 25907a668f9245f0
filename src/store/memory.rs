//! In-memory `FormStore` implementation.
//!
//! All state lives behind one `RwLock`; every mutating operation holds
//! the write guard for its whole critical section, which is what makes
//! the visit/submission counter updates atomic with their companion
//! reads and appends. Concurrent anonymous visitors contend on the lock
//! instead of losing increments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Form, FormStats, FormStore, FormSummary, SubmissionRecord};
use crate::error::FormError;

/// Shortest accepted form name, matching the create-form schema.
const MIN_NAME_LEN: usize = 4;

struct StoredForm {
    form: Form,
    submissions: Vec<SubmissionRecord>,
}

#[derive(Default)]
struct Inner {
    forms: HashMap<u64, StoredForm>,
    /// Share token -> form id. Kept in the same lock as the forms so a
    /// token lookup and its counter bump are one critical section.
    tokens: HashMap<String, u64>,
}

/// In-memory store, suitable for tests and single-process serving.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn create_form(
        &self,
        owner: &str,
        name: &str,
        description: &str,
    ) -> Result<u64, FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(FormError::Invalid(format!(
                "form name must be at least {MIN_NAME_LEN} characters"
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let share_token = Uuid::new_v4().to_string();
        let form = Form {
            id,
            owner: owner.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            content: "[]".to_string(),
            published: false,
            visits: 0,
            submissions: 0,
            share_token: share_token.clone(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.tokens.insert(share_token, id);
        inner.forms.insert(id, StoredForm { form, submissions: Vec::new() });
        Ok(id)
    }

    async fn forms_by_owner(&self, owner: &str) -> Result<Vec<FormSummary>, FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        let inner = self.inner.read().await;
        let mut summaries: Vec<FormSummary> = inner
            .forms
            .values()
            .filter(|stored| stored.form.owner == owner)
            .map(|stored| FormSummary {
                id: stored.form.id,
                name: stored.form.name.clone(),
                description: stored.form.description.clone(),
                published: stored.form.published,
                visits: stored.form.visits,
                submissions: stored.form.submissions,
                created_at: stored.form.created_at,
            })
            .collect();
        // Newest first, like the dashboard lists them
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(summaries)
    }

    async fn form_by_id(&self, id: u64, owner: &str) -> Result<Form, FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        let inner = self.inner.read().await;
        inner
            .forms
            .get(&id)
            .filter(|stored| stored.form.owner == owner)
            .map(|stored| stored.form.clone())
            .ok_or(FormError::NotFound)
    }

    async fn form_with_submissions(
        &self,
        id: u64,
        owner: &str,
    ) -> Result<(Form, Vec<SubmissionRecord>), FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        let inner = self.inner.read().await;
        inner
            .forms
            .get(&id)
            .filter(|stored| stored.form.owner == owner)
            .map(|stored| (stored.form.clone(), stored.submissions.clone()))
            .ok_or(FormError::NotFound)
    }

    async fn update_content(&self, id: u64, owner: &str, content: &str) -> Result<(), FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        let mut inner = self.inner.write().await;
        let stored = inner
            .forms
            .get_mut(&id)
            .filter(|stored| stored.form.owner == owner)
            .ok_or(FormError::NotFound)?;
        if stored.form.published {
            return Err(FormError::Published);
        }
        stored.form.content = content.to_string();
        Ok(())
    }

    async fn publish(&self, id: u64, owner: &str) -> Result<(), FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        let mut inner = self.inner.write().await;
        let stored = inner
            .forms
            .get_mut(&id)
            .filter(|stored| stored.form.owner == owner)
            .ok_or(FormError::NotFound)?;
        // One-way and idempotent
        stored.form.published = true;
        Ok(())
    }

    async fn fetch_by_share_token(&self, token: &str) -> Result<String, FormError> {
        let mut inner = self.inner.write().await;
        let id = *inner.tokens.get(token).ok_or(FormError::NotFound)?;
        let stored = inner.forms.get_mut(&id).ok_or(FormError::NotFound)?;
        // A draft behind a leaked token reads exactly like a missing one
        if !stored.form.published {
            return Err(FormError::NotFound);
        }
        stored.form.visits += 1;
        Ok(stored.form.content.clone())
    }

    async fn published_content(&self, token: &str) -> Result<String, FormError> {
        let inner = self.inner.read().await;
        let id = *inner.tokens.get(token).ok_or(FormError::NotFound)?;
        let stored = inner.forms.get(&id).ok_or(FormError::NotFound)?;
        if !stored.form.published {
            return Err(FormError::NotFound);
        }
        Ok(stored.form.content.clone())
    }

    async fn record_submission(&self, token: &str, payload: &str) -> Result<(), FormError> {
        let mut inner = self.inner.write().await;
        let id = *inner.tokens.get(token).ok_or(FormError::NotFound)?;
        let stored = inner.forms.get_mut(&id).ok_or(FormError::NotFound)?;
        if !stored.form.published {
            return Err(FormError::NotFound);
        }
        // Counter and record move together; nothing above can fail once
        // either has been applied
        stored.form.submissions += 1;
        stored.submissions.push(SubmissionRecord {
            content: payload.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn stats_for_owner(&self, owner: &str) -> Result<FormStats, FormError> {
        if owner.is_empty() {
            return Err(FormError::Unauthorized);
        }
        let inner = self.inner.read().await;
        let (visits, submissions) = inner
            .forms
            .values()
            .filter(|stored| stored.form.owner == owner)
            .fold((0, 0), |(v, s), stored| {
                (v + stored.form.visits, s + stored.form.submissions)
            });
        Ok(FormStats::from_totals(visits, submissions))
    }
}
