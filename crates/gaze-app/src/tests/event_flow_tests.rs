use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gaze_config::Config;
use gaze_translator::{TranslateError, Translation, Translator};
use gaze_types::{
    AppEvent, Modifiers, MouseButton, Point, PointerEvent, PointerKind, UiEvent,
};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::events::event_loop;
use crate::history::HistoryLog;
use crate::state::AppState;

struct StubTranslator;

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        Ok(Translation {
            text: format!("[{to}] {text}"),
            from: from.to_string(),
            to: to.to_string(),
            provider: "stub".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

struct Harness {
    pointer_tx: AsyncSender<PointerEvent>,
    app_tx: AsyncSender<AppEvent>,
    ui_rx: AsyncReceiver<UiEvent>,
    loop_task: JoinHandle<anyhow::Result<()>>,
    _history_dir: tempfile::TempDir,
}

fn start_event_loop() -> Harness {
    let state = Arc::new(AppState::new(Config::default()));
    let (pointer_tx, pointer_rx) = kanal::bounded_async::<PointerEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(16);
    let (ui_tx, ui_rx) = kanal::bounded_async::<UiEvent>(64);

    let history_dir = tempfile::tempdir().expect("tempdir");
    let history = Arc::new(HistoryLog::load(history_dir.path().join("history.json")));

    let loop_task = tokio::spawn(event_loop(
        state,
        pointer_rx,
        app_rx,
        app_tx.clone(),
        ui_tx,
        Arc::new(StubTranslator),
        history,
    ));

    Harness {
        pointer_tx,
        app_tx,
        ui_rx,
        loop_task,
        _history_dir: history_dir,
    }
}

fn button(kind: PointerKind, button: MouseButton, x: f64, y: f64) -> PointerEvent {
    PointerEvent {
        kind,
        point: Point::new(x, y),
        button,
        modifiers: Modifiers::NONE,
        wheel_delta: None,
    }
}

async fn next_ui(harness: &Harness) -> UiEvent {
    timeout(Duration::from_secs(2), harness.ui_rx.recv())
        .await
        .expect("timeout waiting for ui event")
        .expect("ui channel closed")
}

#[tokio::test]
async fn middle_drag_drives_selection_ui_events() {
    let harness = start_event_loop();

    harness
        .pointer_tx
        .send(button(PointerKind::ButtonDown, MouseButton::Middle, 100.0, 100.0))
        .await
        .unwrap();
    harness
        .pointer_tx
        .send(button(PointerKind::Move, MouseButton::None, 150.0, 160.0))
        .await
        .unwrap();
    harness
        .pointer_tx
        .send(button(PointerKind::ButtonUp, MouseButton::Middle, 150.0, 160.0))
        .await
        .unwrap();

    match next_ui(&harness).await {
        UiEvent::SelectionStarted(point) => assert_eq!(point, Point::new(100.0, 100.0)),
        other => panic!("expected SelectionStarted, got {other:?}"),
    }
    match next_ui(&harness).await {
        UiEvent::SelectionChanged(rect) => {
            assert_eq!((rect.x, rect.y), (100.0, 100.0));
            assert_eq!((rect.width, rect.height), (50.0, 60.0));
        }
        other => panic!("expected SelectionChanged, got {other:?}"),
    }
    assert!(matches!(next_ui(&harness).await, UiEvent::SelectionEnded));
}

#[tokio::test]
async fn non_trigger_clicks_produce_no_ui_traffic() {
    let harness = start_event_loop();

    harness
        .pointer_tx
        .send(button(PointerKind::ButtonDown, MouseButton::Left, 10.0, 10.0))
        .await
        .unwrap();
    harness
        .pointer_tx
        .send(button(PointerKind::Move, MouseButton::None, 80.0, 80.0))
        .await
        .unwrap();
    harness
        .pointer_tx
        .send(button(PointerKind::ButtonUp, MouseButton::Left, 80.0, 80.0))
        .await
        .unwrap();

    let quiet = timeout(Duration::from_millis(300), harness.ui_rx.recv()).await;
    assert!(quiet.is_err(), "unexpected ui event: {quiet:?}");
}

#[tokio::test]
async fn tiny_drag_is_cancelled_not_run() {
    let harness = start_event_loop();

    harness
        .pointer_tx
        .send(button(PointerKind::ButtonDown, MouseButton::Middle, 100.0, 100.0))
        .await
        .unwrap();
    harness
        .pointer_tx
        .send(button(PointerKind::ButtonUp, MouseButton::Middle, 105.0, 104.0))
        .await
        .unwrap();

    assert!(matches!(
        next_ui(&harness).await,
        UiEvent::SelectionStarted(_)
    ));
    // Cancellation closes the overlay without a result.
    assert!(matches!(next_ui(&harness).await, UiEvent::SelectionEnded));
    let quiet = timeout(Duration::from_millis(300), harness.ui_rx.recv()).await;
    assert!(quiet.is_err(), "unexpected ui event: {quiet:?}");
}

#[tokio::test]
async fn shutdown_event_stops_the_loop() {
    let harness = start_event_loop();

    harness.app_tx.send(AppEvent::Shutdown).await.unwrap();

    let result = timeout(Duration::from_secs(2), harness.loop_task)
        .await
        .expect("loop did not stop")
        .expect("loop panicked");
    assert!(result.is_ok());
}
