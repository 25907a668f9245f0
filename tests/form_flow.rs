//! # End-to-End Form Flow Tests
//!
//! These walk a form through its whole life: design in a builder
//! session, save, publish, public fetch by share token, and submission
//! collection. First against the library API directly, then through
//! the HTTP router.

use std::sync::Arc;

use encuesta::FormError;
use encuesta::designer::{DesignerSession, DragSource, DropTarget, Half, handle_drop};
use encuesta::element::{construct, parse_layout, serialize_layout};
use encuesta::server::{AppState, router};
use encuesta::store::{FormStore, MemoryStore};
use encuesta::submission::SubmissionForm;

/// Build a session holding one required text field and return
/// (serialized layout, the field's id).
fn required_text_layout() -> (String, String) {
    let mut session = DesignerSession::new();
    handle_drop(
        &mut session,
        DragSource::PaletteButton { kind: "TextField" },
        DropTarget::Canvas,
    )
    .unwrap();

    let placed = session.elements()[0].clone();
    let required = placed
        .apply_attributes(serde_json::json!({
            "label": "Your answer",
            "helperText": "",
            "required": true,
            "placeHolder": ""
        }))
        .unwrap();
    assert!(session.update_element(&placed.id, required));

    let layout = serialize_layout(session.elements()).unwrap();
    (layout, placed.id)
}

#[tokio::test]
async fn test_survey_lifecycle() {
    let store = MemoryStore::new();

    // Author: create, design, save, publish
    let form_id = store.create_form("jojo", "Survey", "").await.unwrap();
    let (layout, field_id) = required_text_layout();
    store.update_content(form_id, "jojo", &layout).await.unwrap();
    store.publish(form_id, "jojo").await.unwrap();

    let token = store.form_by_id(form_id, "jojo").await.unwrap().share_token;

    // Respondent: fetch the published content; the visit is counted
    let content = store.fetch_by_share_token(&token).await.unwrap();
    assert_eq!(store.form_by_id(form_id, "jojo").await.unwrap().visits, 1);

    // First attempt: empty required field is rejected, nothing stored
    let mut form = SubmissionForm::from_layout(&content).unwrap();
    assert!(!form.validate_all());
    assert!(form.errors().contains(&field_id));
    assert!(form.payload().is_err());
    assert_eq!(
        store.form_by_id(form_id, "jojo").await.unwrap().submissions,
        0
    );

    // Second attempt: a value passes and the payload lands
    form.enter_value(&field_id, "hello");
    assert!(form.validate_all());
    let payload = form.payload().unwrap();
    store.record_submission(&token, &payload).await.unwrap();

    let (stored, submissions) = store.form_with_submissions(form_id, "jojo").await.unwrap();
    assert_eq!(stored.submissions, 1);
    assert_eq!(submissions.len(), 1);
    let record: serde_json::Value = serde_json::from_str(&submissions[0].content).unwrap();
    assert_eq!(record, serde_json::json!({ field_id.as_str(): "hello" }));
}

#[tokio::test]
async fn test_publish_is_one_way() {
    let store = MemoryStore::new();
    let form_id = store.create_form("jojo", "Survey", "").await.unwrap();
    store.publish(form_id, "jojo").await.unwrap();

    // Content is frozen
    let err = store.update_content(form_id, "jojo", "[]").await.unwrap_err();
    assert!(matches!(err, FormError::Published));

    // Publishing again is an idempotent success
    store.publish(form_id, "jojo").await.unwrap();
    assert!(store.form_by_id(form_id, "jojo").await.unwrap().published);
}

#[tokio::test]
async fn test_edits_never_touch_past_submissions() {
    let store = MemoryStore::new();
    let draft = store.create_form("jojo", "Draft copy", "").await.unwrap();
    let (layout, field_id) = required_text_layout();
    store.update_content(draft, "jojo", &layout).await.unwrap();
    store.publish(draft, "jojo").await.unwrap();
    let token = store.form_by_id(draft, "jojo").await.unwrap().share_token;

    store
        .record_submission(&token, &format!("{{\"{field_id}\":\"first\"}}"))
        .await
        .unwrap();

    // The stored submission is an independent copy of the values
    let (_, submissions) = store.form_with_submissions(draft, "jojo").await.unwrap();
    assert!(submissions[0].content.contains("first"));
}

#[test]
fn test_reorder_then_roundtrip() {
    let mut session = DesignerSession::new();
    for (i, kind) in ["TitleField", "TextField", "CheckboxField"].iter().enumerate() {
        session.add_element(i, construct(kind, format!("el-{i}")).unwrap());
    }

    // Drag the checkbox above the text field
    handle_drop(
        &mut session,
        DragSource::CanvasElement { id: "el-2" },
        DropTarget::ElementHalf { id: "el-1", half: Half::Top },
    )
    .unwrap();

    let layout = serialize_layout(session.elements()).unwrap();
    let parsed = parse_layout(&layout).unwrap();
    assert_eq!(
        parsed.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["el-0", "el-2", "el-1"],
    );
    assert_eq!(parsed, session.elements());
}

// ============================================================================
// HTTP ROUTER TESTS
// ============================================================================

mod http {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        router(Arc::new(AppState::new(Arc::new(MemoryStore::new()))))
    }

    fn json_request(method: &str, uri: &str, owner: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(owner) = owner {
            builder = builder.header("x-owner-id", owner);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_owner_header_required() {
        let response = app()
            .oneshot(json_request("GET", "/api/forms", None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_palette_lists_all_kinds() {
        let response = app()
            .oneshot(json_request("GET", "/api/elements", None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let tags: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["type"].as_str().unwrap())
            .collect();
        assert!(tags.contains(&"TextField"));
        assert!(tags.contains(&"CheckboxField"));
        assert_eq!(tags.len(), 11);
    }

    #[tokio::test]
    async fn test_canvas_preview_is_disabled_markup() {
        let (layout, _) = required_text_layout();
        let response = app()
            .oneshot(json_request("POST", "/api/preview", None, &layout))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("disabled"));
        assert!(!html.contains("name="));
    }

    #[tokio::test]
    async fn test_construct_unknown_kind_404() {
        let response = app()
            .oneshot(json_request("POST", "/api/elements/RatingField", None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_full_http_flow() {
        let app = app();

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/forms",
                Some("jojo"),
                r#"{"name":"Survey"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let id = body_json(response).await["id"].as_u64().unwrap();

        // Save a layout with one required text field
        let (layout, field_id) = required_text_layout();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/forms/{id}/content"),
                Some("jojo"),
                &layout,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The draft is not publicly reachable yet
        let response = app
            .clone()
            .oneshot(json_request("GET", &format!("/api/forms/{id}"), Some("jojo"), ""))
            .await
            .unwrap();
        let token = body_json(response).await["shareToken"]
            .as_str()
            .unwrap()
            .to_string();
        let response = app
            .clone()
            .oneshot(json_request("GET", &format!("/api/submit/{token}"), None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Publish, then the public fetch works
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/forms/{id}/publish"),
                Some("jojo"),
                "",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request("GET", &format!("/api/submit/{token}"), None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Empty submission is refused with the failing id
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/submit/{token}"),
                None,
                "{}",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["errors"][0].as_str().unwrap(), field_id);

        // A filled submission lands
        let values = serde_json::json!({ field_id.as_str(): "hello" }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/submit/{token}"),
                None,
                &values,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Stats: one visit, one submission
        let response = app
            .clone()
            .oneshot(json_request("GET", "/api/stats", Some("jojo"), ""))
            .await
            .unwrap();
        let stats = body_json(response).await;
        assert_eq!(stats["visits"].as_u64().unwrap(), 1);
        assert_eq!(stats["submissions"].as_u64().unwrap(), 1);
        assert_eq!(stats["submissionRate"].as_f64().unwrap(), 100.0);
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_element() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/forms",
                Some("jojo"),
                r#"{"name":"Survey"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_u64().unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/forms/{id}/content"),
                Some("jojo"),
                r#"[{"id":"x","type":"RatingField","extraAttributes":{}}]"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_other_owners_form_reads_like_missing() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/forms",
                Some("jojo"),
                r#"{"name":"Survey"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_u64().unwrap();

        let response = app
            .oneshot(json_request("GET", &format!("/api/forms/{id}"), Some("maria"), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
