//! Drop-position resolution for the builder canvas.
//!
//! The embedding UI captures the drag gesture; this module turns the
//! released drag into the single session mutation it implies. Two drag
//! sources (palette button, placed canvas element) times two target
//! shapes (bare canvas, an element's top/bottom half) cover every drop
//! the canvas recognizes; anything else is discarded without mutation.

use super::DesignerSession;
use crate::element::{construct, generate_id};
use crate::error::FormError;

/// Which half of a placed element a drop landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

/// What is being dragged.
#[derive(Debug, Clone, Copy)]
pub enum DragSource<'a> {
    /// A palette button carrying an element type tag.
    PaletteButton { kind: &'a str },
    /// An element already placed on the canvas.
    CanvasElement { id: &'a str },
}

/// Where the drag was released.
#[derive(Debug, Clone, Copy)]
pub enum DropTarget<'a> {
    /// The bare canvas background.
    Canvas,
    /// The top or bottom half of a placed element.
    ElementHalf { id: &'a str, half: Half },
}

/// What a drop did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// A fresh instance was constructed and inserted.
    Inserted { id: String, index: usize },
    /// An existing element moved to a new position.
    Moved { id: String, index: usize },
    /// The drop was recognized but implied no mutation.
    Ignored,
}

/// Resolve a released drag into a session mutation.
///
/// Unknown palette kinds are the one hard failure: a palette button
/// whose tag has no registry entry means the caller's palette and the
/// element set have drifted apart.
pub fn handle_drop(
    session: &mut DesignerSession,
    source: DragSource<'_>,
    target: DropTarget<'_>,
) -> Result<DropOutcome, FormError> {
    match source {
        DragSource::PaletteButton { kind } => {
            let instance = construct(kind, generate_id())
                .ok_or_else(|| FormError::UnknownElement(kind.to_string()))?;
            let index = match target {
                DropTarget::Canvas => 0,
                DropTarget::ElementHalf { id, half } => match neighbor_index(session, id, half) {
                    Some(index) => index,
                    // Stale target: treat like the bare canvas
                    None => 0,
                },
            };
            let id = instance.id.clone();
            session.add_element(index, instance);
            Ok(DropOutcome::Inserted { id, index })
        }
        DragSource::CanvasElement { id } => {
            let DropTarget::ElementHalf { id: target_id, half } = target else {
                // Repositioning is defined only through half-targets
                return Ok(DropOutcome::Ignored);
            };
            if id == target_id {
                // Dropped on its own half-target
                return Ok(DropOutcome::Ignored);
            }
            let Some(source_index) = session.index_of(id) else {
                return Ok(DropOutcome::Ignored);
            };
            if session.index_of(target_id).is_none() {
                return Ok(DropOutcome::Ignored);
            }

            // Remove first, then resolve the destination against the
            // shortened sequence. Resolving before removal is off by one
            // whenever the target sits below the source.
            let dragged = session.elements()[source_index].clone();
            session.remove_element(id);
            let index = match neighbor_index(session, target_id, half) {
                Some(index) => index,
                None => {
                    // Unreachable once both ids were checked above, but
                    // restore rather than lose the element
                    session.add_element(source_index, dragged);
                    return Ok(DropOutcome::Ignored);
                }
            };
            session.add_element(index, dragged);
            Ok(DropOutcome::Moved { id: id.to_string(), index })
        }
    }
}

/// Insertion index relative to a placed element: before it for a
/// top-half drop, after it for a bottom-half drop.
fn neighbor_index(session: &DesignerSession, id: &str, half: Half) -> Option<usize> {
    let index = session.index_of(id)?;
    Some(match half {
        Half::Top => index,
        Half::Bottom => index + 1,
    })
}
