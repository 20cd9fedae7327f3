use std::sync::Arc;

use gaze_core::GestureController;
use gaze_translator::Translator;
use gaze_types::{AppEvent, GestureEvent, PointerEvent, Rect, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

use crate::history::HistoryLog;
use crate::state::AppState;

pub mod run_pipeline;

use run_pipeline::run_pipeline;

/// App's main loop: feeds pointer events through the gesture state machine
/// and turns completed selections into pipeline runs.
///
/// The controller's phase is the single in-flight guard: a completed
/// selection moves it to `RunningPipeline`, and only `PipelineFinished`
/// (sent on every terminal path of a run) clears it. Gestures arriving in
/// between die at the state machine.
pub async fn event_loop(
    state: Arc<AppState>,
    pointer_rx: AsyncReceiver<PointerEvent>,
    app_rx: AsyncReceiver<AppEvent>,
    app_tx: AsyncSender<AppEvent>,
    ui_tx: AsyncSender<UiEvent>,
    translator: Arc<dyn Translator>,
    history: Arc<HistoryLog>,
) -> anyhow::Result<()> {
    let trigger = { state.config.read().await.trigger };
    let mut gestures = GestureController::new(trigger);

    tracing::info!(?trigger, "event loop started");

    loop {
        tokio::select! {
            event = pointer_rx.recv() => {
                match gestures.handle(&event?) {
                    Some(GestureEvent::Started(point)) => {
                        let _ = ui_tx.send(UiEvent::SelectionStarted(point)).await;
                    }
                    Some(GestureEvent::Changed(rect)) => {
                        let _ = ui_tx.send(UiEvent::SelectionChanged(rect)).await;
                    }
                    Some(GestureEvent::Cancelled) => {
                        let _ = ui_tx.send(UiEvent::SelectionEnded).await;
                    }
                    Some(GestureEvent::Completed(rect)) => {
                        let _ = ui_tx.send(UiEvent::SelectionEnded).await;
                        spawn_pipeline(
                            state.clone(),
                            rect,
                            app_tx.clone(),
                            ui_tx.clone(),
                            translator.clone(),
                            history.clone(),
                        );
                    }
                    None => {}
                }
            }
            event = app_rx.recv() => {
                match event? {
                    AppEvent::PipelineFinished => gestures.finish_pipeline(),
                    AppEvent::Shutdown => return Ok(()),
                }
            }
        }
    }
}

/// Capture, OCR and translation run off the event loop so pointer events
/// keep flowing. Errors are absorbed here; nothing propagates past the run.
fn spawn_pipeline(
    state: Arc<AppState>,
    rect: Rect,
    app_tx: AsyncSender<AppEvent>,
    ui_tx: AsyncSender<UiEvent>,
    translator: Arc<dyn Translator>,
    history: Arc<HistoryLog>,
) {
    tokio::spawn(async move {
        if let Err(e) = run_pipeline(state, rect, &ui_tx, translator, history).await {
            tracing::error!("pipeline run failed: {e:#}");
        }
        let _ = app_tx.send(AppEvent::PipelineFinished).await;
    });
}
