//! The note input flow: the state machine between a drawn shape and a
//! committed annotation.
//!
//! One machine per session, re-entrant: `Idle` until a shape lands, then
//! `AwaitingText` until the note is submitted or the editor is closed. At
//! most one draft is pending at any time; a second shape drawn meanwhile is
//! rejected, not swapped in under the open editor.

use crate::store::AnnotationStore;
use terranote_core::types::{Annotation, AnnotationId, DraftRegion};
use tracing::{debug, warn};

/// Current position of the input flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// No draft pending
    Idle,
    /// A drawn region is waiting for its note text
    AwaitingText(DraftRegion),
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Idle
    }
}

/// Result of offering a new draft to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOutcome {
    /// The draft was accepted and the flow now awaits text
    Accepted,
    /// A draft is already pending; the new shape was rejected
    DraftInProgress,
}

impl DraftOutcome {
    /// Check if the draft was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, DraftOutcome::Accepted)
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was committed as an annotation with this id
    Committed(AnnotationId),
    /// Text was empty after trimming; the draft is still pending
    EmptyText,
    /// No draft was pending; nothing to commit
    NoDraft,
}

impl SubmitOutcome {
    /// Check if the submit produced an annotation.
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed(_))
    }
}

/// State machine gating text entry for a draft region.
#[derive(Debug, Default)]
pub struct NoteFlow {
    state: FlowState,
}

impl NoteFlow {
    /// Creates a flow in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Returns true while a draft is waiting for text.
    pub fn has_draft(&self) -> bool {
        matches!(self.state, FlowState::AwaitingText(_))
    }

    /// Returns the pending draft, if any.
    pub fn current_draft(&self) -> Option<&DraftRegion> {
        match &self.state {
            FlowState::AwaitingText(draft) => Some(draft),
            FlowState::Idle => None,
        }
    }

    /// Offers a freshly drawn region to the flow.
    ///
    /// Accepted only from `Idle`; while a draft is pending the new shape is
    /// rejected and the pending draft survives untouched.
    pub fn on_shape_created(&mut self, draft: DraftRegion) -> DraftOutcome {
        match self.state {
            FlowState::Idle => {
                debug!(id = %draft.id, vertices = draft.region.vertex_count(), "draft opened");
                self.state = FlowState::AwaitingText(draft);
                DraftOutcome::Accepted
            }
            FlowState::AwaitingText(_) => {
                warn!(id = %draft.id, "shape drawn while a draft is pending; rejected");
                DraftOutcome::DraftInProgress
            }
        }
    }

    /// Attempts to commit the pending draft with the given note text.
    ///
    /// Guard: the trimmed text must be non-empty and a draft must be
    /// pending. A failed guard leaves the flow (and the store) exactly as
    /// it was; nothing is surfaced as an error.
    pub fn submit(&mut self, text: &str, store: &mut AnnotationStore) -> SubmitOutcome {
        match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::Idle => SubmitOutcome::NoDraft,
            FlowState::AwaitingText(draft) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    self.state = FlowState::AwaitingText(draft);
                    return SubmitOutcome::EmptyText;
                }

                let annotation = Annotation::new(draft.id, trimmed, draft.region);
                let id = annotation.id.clone();
                store.append(annotation);
                debug!(%id, "draft committed");
                SubmitOutcome::Committed(id)
            }
        }
    }

    /// Closes the input without committing, discarding any pending draft.
    ///
    /// Returns true when a draft was actually discarded.
    pub fn cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::Idle => false,
            FlowState::AwaitingText(draft) => {
                debug!(id = %draft.id, "draft discarded");
                true
            }
        }
    }
}
