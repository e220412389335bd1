//! Single-threaded message router for one map session.
//!
//! Every external happening (a camera move, a resolved search, a completed
//! shape, a submit from the note editor) arrives as one message and is
//! routed to exactly one component handler. Messages are delivered one at a
//! time on one logical task, which is the only synchronization the session
//! state needs.

use flume::{Receiver, Sender};
use terranote_annotate::draw::ShapeFeature;
use terranote_annotate::flow::{DraftOutcome, NoteFlow, SubmitOutcome};
use terranote_annotate::focus::AnnotationFocus;
use terranote_annotate::store::AnnotationStore;
use terranote_core::config::AppConfig;
use terranote_core::types::{Annotation, AnnotationId, SearchHit, Viewport};
use terranote_map::camera::CameraLink;
use terranote_map::search::SearchBridge;
use terranote_map::viewport::ViewportTracker;
use tracing::{debug, warn};

/// Inbound events from the map engine and its widgets.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The engine camera moved
    CameraMoved(Viewport),
    /// The geocoder widget resolved a query
    SearchResolved(SearchHit),
    /// The draw tool completed a shape
    ShapeCreated(ShapeFeature),
}

/// Inbound commands from the presentation layer.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// Commit the pending draft with this note text
    SubmitNote(String),
    /// Close the note editor without committing
    CancelNote,
    /// Re-center the view on a stored annotation
    FocusAnnotation(AnnotationId),
}

/// Any inbound message, in the order it reached the session.
///
/// Engine events and presentation commands share one queue so that delivery
/// order is a property of the queue, not of which side sent what.
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// An event from the engine side
    Event(EngineEvent),
    /// A command from the presentation layer
    Command(UiCommand),
}

impl From<EngineEvent> for SessionMessage {
    fn from(event: EngineEvent) -> Self {
        SessionMessage::Event(event)
    }
}

impl From<UiCommand> for SessionMessage {
    fn from(command: UiCommand) -> Self {
        SessionMessage::Command(command)
    }
}

/// Outbound signals the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    /// The coordinate readout should re-render
    ViewportChanged(Viewport),
    /// A draft opened; show the note editor
    NoteEditorOpened,
    /// The draft was committed or discarded; hide the note editor
    NoteEditorClosed,
    /// A shape was drawn while a draft was already pending
    DraftRejected,
    /// An annotation landed in the store
    AnnotationCommitted(AnnotationId),
}

/// One user's map session: viewport mirror, search bridge, note flow,
/// annotation store, and focus command, wired to a camera link.
pub struct MapSession {
    viewport: ViewportTracker,
    search: SearchBridge,
    flow: NoteFlow,
    store: AnnotationStore,
    focus: AnnotationFocus,
    signals: Sender<SessionSignal>,
}

impl MapSession {
    /// Builds a session from configuration, steering the camera over
    /// `camera`. Returns the session plus the signal stream for the
    /// presentation layer.
    pub fn new(config: &AppConfig, camera: CameraLink) -> (Self, Receiver<SessionSignal>) {
        let (signals, signal_rx) = flume::unbounded();

        let session = Self {
            viewport: ViewportTracker::new(config.map.initial.viewport()),
            search: SearchBridge::new(camera.clone(), config.search.clone()),
            flow: NoteFlow::new(),
            store: AnnotationStore::new(),
            focus: AnnotationFocus::new(camera, config.focus.clone()),
            signals,
        };

        (session, signal_rx)
    }

    /// Returns the latest tracked camera position.
    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    /// Returns the committed annotations in display order.
    pub fn annotations(&self) -> &[Annotation] {
        self.store.list()
    }

    /// Returns true while a draft is waiting for its note.
    pub fn has_pending_draft(&self) -> bool {
        self.flow.has_draft()
    }

    /// Routes one inbound message to its handler.
    pub fn handle_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Event(event) => self.handle_event(event),
            SessionMessage::Command(command) => self.handle_command(command),
        }
    }

    /// Routes one engine event to its component handler.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::CameraMoved(position) => {
                self.viewport.on_camera_moved(position);
                self.emit(SessionSignal::ViewportChanged(position));
            }
            EngineEvent::SearchResolved(hit) => {
                self.search.on_search_result(&hit);
            }
            EngineEvent::ShapeCreated(feature) => match feature.into_draft() {
                Ok(draft) => match self.flow.on_shape_created(draft) {
                    DraftOutcome::Accepted => self.emit(SessionSignal::NoteEditorOpened),
                    DraftOutcome::DraftInProgress => self.emit(SessionSignal::DraftRejected),
                },
                Err(error) => {
                    warn!(%error, "draw payload refused at the ingestion boundary");
                }
            },
        }
    }

    /// Routes one presentation-layer command to its component handler.
    pub fn handle_command(&mut self, command: UiCommand) {
        match command {
            UiCommand::SubmitNote(text) => {
                match self.flow.submit(&text, &mut self.store) {
                    SubmitOutcome::Committed(id) => {
                        self.emit(SessionSignal::NoteEditorClosed);
                        self.emit(SessionSignal::AnnotationCommitted(id));
                    }
                    // Guard failures are silent no-ops; the editor stays up.
                    SubmitOutcome::EmptyText | SubmitOutcome::NoDraft => {}
                }
            }
            UiCommand::CancelNote => {
                if self.flow.cancel() {
                    self.emit(SessionSignal::NoteEditorClosed);
                }
            }
            UiCommand::FocusAnnotation(id) => match self.store.get(&id) {
                Some(annotation) => self.focus.focus(annotation),
                None => warn!(%id, "focus requested for unknown annotation"),
            },
        }
    }

    /// Drives the session until the inbound channel closes.
    ///
    /// One task drains one queue, so messages are handled strictly in
    /// arrival order. Returns the session so callers can inspect its final
    /// state.
    pub async fn run(mut self, messages: Receiver<SessionMessage>) -> Self {
        while let Ok(message) = messages.recv_async().await {
            self.handle_message(message);
        }
        debug!("session channel closed, stopping");
        self
    }

    fn emit(&self, signal: SessionSignal) {
        if self.signals.send(signal).is_err() {
            debug!("presentation signal dropped, receiver gone");
        }
    }
}
