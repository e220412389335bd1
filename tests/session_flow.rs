//! End-to-end session scenarios: events and commands in, camera commands
//! and signals out.

use anyhow::Result;
use std::time::Duration;
use terranote::session::{EngineEvent, MapSession, SessionSignal, UiCommand};
use terranote::{AnnotationId, AppConfig, CameraCommand, CameraLink, LngLat, SearchHit, Viewport};
use terranote_annotate::draw::ShapeFeature;

fn session() -> (
    MapSession,
    flume::Receiver<CameraCommand>,
    flume::Receiver<SessionSignal>,
) {
    let config = AppConfig::default();
    let (camera, camera_rx) = CameraLink::channel();
    let (session, signal_rx) = MapSession::new(&config, camera);
    (session, camera_rx, signal_rx)
}

fn triangle_feature(id: &str) -> ShapeFeature {
    ShapeFeature::from_value(serde_json::json!({
        "id": id,
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-106.5, 39.5],
                [-106.4, 39.5],
                [-106.4, 39.4],
                [-106.5, 39.5]
            ]]
        }
    }))
    .expect("feature payload deserializes")
}

#[test]
fn draw_then_submit_commits_one_annotation() {
    let (mut session, _camera_rx, signal_rx) = session();

    session.handle_event(EngineEvent::ShapeCreated(triangle_feature("draw-1")));
    assert_eq!(signal_rx.try_recv().unwrap(), SessionSignal::NoteEditorOpened);
    assert!(session.has_pending_draft());

    session.handle_command(UiCommand::SubmitNote("lunch spot".to_string()));

    let notes = session.annotations();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].text, "lunch spot");
    assert_eq!(notes[0].id, AnnotationId::new("draw-1"));
    assert_eq!(notes[0].region.vertex_count(), 3);
    assert!(!session.has_pending_draft());

    let signals: Vec<_> = signal_rx.drain().collect();
    assert_eq!(
        signals,
        vec![
            SessionSignal::NoteEditorClosed,
            SessionSignal::AnnotationCommitted(AnnotationId::new("draw-1")),
        ]
    );
}

#[test]
fn invalid_submits_never_change_the_store() {
    let (mut session, _camera_rx, signal_rx) = session();

    // No draft pending at all.
    session.handle_command(UiCommand::SubmitNote("orphan note".to_string()));
    assert!(session.annotations().is_empty());

    session.handle_event(EngineEvent::ShapeCreated(triangle_feature("draw-1")));
    signal_rx.drain().count();

    session.handle_command(UiCommand::SubmitNote(String::new()));
    session.handle_command(UiCommand::SubmitNote("   ".to_string()));

    assert!(session.annotations().is_empty());
    assert!(session.has_pending_draft());
    // Guard failures surface nothing.
    assert_eq!(signal_rx.drain().count(), 0);

    // The store only ever grows, by exactly one per successful submit.
    session.handle_command(UiCommand::SubmitNote("finally".to_string()));
    assert_eq!(session.annotations().len(), 1);
}

#[test]
fn camera_moves_are_last_write_wins() {
    let (mut session, _camera_rx, signal_rx) = session();

    let moves = [
        Viewport::new(LngLat::new(-106.5, 39.5), 12.5),
        Viewport::new(LngLat::new(-106.6, 39.6), 11.0),
        Viewport::new(LngLat::new(-106.7, 39.7), 9.75),
    ];
    for position in moves {
        session.handle_event(EngineEvent::CameraMoved(position));
    }

    assert_eq!(session.viewport(), moves[2]);
    // Every move re-renders the readout.
    let signals: Vec<_> = signal_rx.drain().collect();
    assert_eq!(signals.len(), 3);
    assert_eq!(signals[2], SessionSignal::ViewportChanged(moves[2]));
}

#[test]
fn resolved_search_issues_exactly_one_fly_to() {
    let (mut session, camera_rx, _signal_rx) = session();

    session.handle_event(EngineEvent::SearchResolved(SearchHit::named(
        "Aspen, CO",
        LngLat::new(-106.8175, 39.1911),
    )));

    let commands: Vec<_> = camera_rx.drain().collect();
    assert_eq!(
        commands,
        vec![CameraCommand::FlyTo {
            center: LngLat::new(-106.8175, 39.1911),
            zoom: 12.0,
            skippable: true,
        }]
    );
}

#[test]
fn focusing_a_note_frames_its_region() {
    let (mut session, camera_rx, _signal_rx) = session();

    session.handle_event(EngineEvent::ShapeCreated(triangle_feature("draw-1")));
    session.handle_command(UiCommand::SubmitNote("couloir entrance".to_string()));

    session.handle_command(UiCommand::FocusAnnotation(AnnotationId::new("draw-1")));

    match camera_rx.try_recv().unwrap() {
        CameraCommand::FitBounds { bounds, padding } => {
            assert_eq!(bounds.min, LngLat::new(-106.5, 39.4));
            assert_eq!(bounds.max, LngLat::new(-106.4, 39.5));
            assert_eq!(padding, 10.0);
        }
        other => panic!("expected a fit-bounds command, got {:?}", other),
    }
}

#[test]
fn focusing_a_degenerate_note_still_frames_something() {
    let (mut session, camera_rx, _signal_rx) = session();

    let feature = ShapeFeature::from_value(serde_json::json!({
        "id": "point-ish",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-106.5, 39.5],
                [-106.5, 39.5],
                [-106.5, 39.5]
            ]]
        }
    }))
    .unwrap();
    session.handle_event(EngineEvent::ShapeCreated(feature));
    session.handle_command(UiCommand::SubmitNote("summit cairn".to_string()));

    session.handle_command(UiCommand::FocusAnnotation(AnnotationId::new("point-ish")));

    match camera_rx.try_recv().unwrap() {
        CameraCommand::FitBounds { bounds, .. } => {
            assert!(bounds.width() > 0.0);
            assert!(bounds.height() > 0.0);
        }
        other => panic!("expected a fit-bounds command, got {:?}", other),
    }
}

#[test]
fn focusing_an_unknown_note_is_a_no_op() {
    let (mut session, camera_rx, _signal_rx) = session();
    session.handle_command(UiCommand::FocusAnnotation(AnnotationId::new("missing")));
    assert!(camera_rx.try_recv().is_err());
}

#[test]
fn second_shape_while_draft_pending_is_rejected() {
    let (mut session, _camera_rx, signal_rx) = session();

    session.handle_event(EngineEvent::ShapeCreated(triangle_feature("first")));
    session.handle_event(EngineEvent::ShapeCreated(triangle_feature("second")));

    let signals: Vec<_> = signal_rx.drain().collect();
    assert_eq!(
        signals,
        vec![SessionSignal::NoteEditorOpened, SessionSignal::DraftRejected]
    );

    // The surviving draft is the first one.
    session.handle_command(UiCommand::SubmitNote("kept".to_string()));
    assert_eq!(session.annotations()[0].id, AnnotationId::new("first"));
}

#[test]
fn malformed_draw_payloads_never_open_the_editor() {
    let (mut session, _camera_rx, signal_rx) = session();

    let feature = ShapeFeature::from_value(serde_json::json!({
        "id": "bad",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[-106.5, 39.5], [-106.4, 39.5]]]
        }
    }))
    .unwrap();
    session.handle_event(EngineEvent::ShapeCreated(feature));

    assert!(!session.has_pending_draft());
    assert_eq!(signal_rx.drain().count(), 0);
}

#[test]
fn cancel_discards_the_draft_and_closes_the_editor() {
    let (mut session, _camera_rx, signal_rx) = session();

    session.handle_event(EngineEvent::ShapeCreated(triangle_feature("draw-1")));
    signal_rx.drain().count();

    session.handle_command(UiCommand::CancelNote);

    assert!(!session.has_pending_draft());
    assert!(session.annotations().is_empty());
    assert_eq!(
        signal_rx.drain().collect::<Vec<_>>(),
        vec![SessionSignal::NoteEditorClosed]
    );

    // Cancelling again changes nothing.
    session.handle_command(UiCommand::CancelNote);
    assert_eq!(signal_rx.drain().count(), 0);
}

#[tokio::test]
async fn pumped_session_processes_messages_in_order() -> Result<()> {
    let config = AppConfig::default();
    let (camera, camera_rx) = CameraLink::channel();
    let (session, _signal_rx) = MapSession::new(&config, camera);

    let (message_tx, message_rx) = flume::unbounded();
    let handle = tokio::spawn(session.run(message_rx));

    message_tx.send(
        EngineEvent::CameraMoved(Viewport::new(LngLat::new(-106.8175, 39.1911), 12.0)).into(),
    )?;
    message_tx.send(EngineEvent::ShapeCreated(triangle_feature("draw-1")).into())?;
    message_tx.send(UiCommand::SubmitNote("pumped note".to_string()).into())?;
    message_tx.send(UiCommand::FocusAnnotation(AnnotationId::new("draw-1")).into())?;

    // Closing the inbound channel stops the pump.
    drop(message_tx);

    let session = tokio::time::timeout(Duration::from_secs(5), handle).await??;

    assert_eq!(session.annotations().len(), 1);
    assert_eq!(session.annotations()[0].text, "pumped note");
    assert_eq!(session.viewport().zoom, 12.0);
    assert!(camera_rx.drain().any(|c| c.is_fit_bounds()));
    Ok(())
}
