use gaze_types::UiEvent;
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

/// Presentation endpoint. The selection overlay and result popup are
/// external collaborators; this task is the delivery seam and logs what
/// they would render.
pub async fn ui_loop(
    ui_rx: AsyncReceiver<UiEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("ui loop stopping");
                return Ok(());
            }
            event = ui_rx.recv() => {
                match event? {
                    UiEvent::SelectionStarted(point) => {
                        tracing::debug!(x = point.x, y = point.y, "selection started");
                    }
                    UiEvent::SelectionChanged(rect) => {
                        tracing::trace!(?rect, "selection changed");
                    }
                    UiEvent::SelectionEnded => {
                        tracing::debug!("selection ended");
                    }
                    UiEvent::ShowResult { text, anchor } => {
                        tracing::info!(x = anchor.x, y = anchor.y, "result: {text}");
                    }
                }
            }
        }
    }
}
