//! # Encuesta - Form Builder Core
//!
//! Encuesta is a Rust library for building drag-and-drop forms: a
//! palette of typed field elements, an in-memory design session, form
//! documents persisted as serialized layouts, one-way publishing via
//! share tokens, and public submission collection. It provides:
//!
//! - **Element model**: a closed set of field kinds behind one enum,
//!   each with typed attributes, validation, and HTML rendering
//! - **Designer session**: ordered element mutation with selection and
//!   drop-position resolution
//! - **Submission runtime**: per-element validation and flat payload
//!   serialization
//! - **Persistence seam**: the `FormStore` trait plus an in-memory
//!   implementation
//! - **HTTP server**: the builder API and the public submission surface
//!
//! ## Quick Start
//!
//! ```
//! use encuesta::designer::{DesignerSession, DragSource, DropTarget, handle_drop};
//! use encuesta::element::serialize_layout;
//!
//! // An author drops a text field from the palette onto the canvas
//! let mut session = DesignerSession::new();
//! handle_drop(
//!     &mut session,
//!     DragSource::PaletteButton { kind: "TextField" },
//!     DropTarget::Canvas,
//! )?;
//!
//! // The whole ordered sequence persists as the form's layout
//! let layout = serialize_layout(session.elements())?;
//! assert!(layout.contains("TextField"));
//! # Ok::<(), encuesta::FormError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`element`] | Element kinds, registry, validation, rendering |
//! | [`designer`] | Builder session state and drop resolution |
//! | [`submission`] | Respondent-side validation and payloads |
//! | [`store`] | Persistence trait and in-memory backend |
//! | [`server`] | HTTP API and public submission pages |
//! | [`error`] | Error types |

pub mod designer;
pub mod element;
pub mod error;
pub mod server;
pub mod store;
pub mod submission;

// Re-exports for convenience
pub use designer::DesignerSession;
pub use element::{Element, ElementInstance};
pub use error::FormError;
pub use store::{FormStore, MemoryStore};
