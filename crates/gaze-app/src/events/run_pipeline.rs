use std::sync::Arc;

use gaze_ocr::ComGuard;
use gaze_translator::Translator;
use gaze_types::{Rect, UiEvent};
use kanal::AsyncSender;

use crate::history::HistoryLog;
use crate::state::AppState;

/// One gesture-to-result run: capture, polarity fixup, OCR, translate,
/// deliver. Stages run strictly in order; the run ends silently when
/// capture or recognition produces nothing.
pub async fn run_pipeline(
    state: Arc<AppState>,
    rect: Rect,
    ui_tx: &AsyncSender<UiEvent>,
    translator: Arc<dyn Translator>,
    history: Arc<HistoryLog>,
) -> anyhow::Result<()> {
    let (ocr_language, from_lang, to_lang) = {
        let config = state.config.read().await;
        (
            config.ocr.language.clone(),
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        )
    };

    // Capture and OCR are CPU-bound and must stay off the async workers.
    let recognized = tokio::task::spawn_blocking(move || {
        let _com = ComGuard::initialize()?;

        let image = gaze_ocr::capture_region(rect)?;
        if image.is_empty() {
            return Ok::<_, anyhow::Error>(String::new());
        }

        let image = if gaze_ocr::should_invert(&image) {
            tracing::debug!("dark capture, inverting polarity before OCR");
            gaze_ocr::invert(&image)
        } else {
            image
        };

        let png = image.to_png()?;
        drop(image);
        gaze_ocr::recognize_png(&png, &ocr_language)
    })
    .await??;

    let recognized = recognized.trim().to_string();
    if recognized.is_empty() {
        tracing::debug!("nothing recognized, run ends silently");
        return Ok(());
    }

    tracing::debug!(chars = recognized.len(), "recognized text");

    let anchor = rect.top_right();
    match translator.translate(&recognized, &from_lang, &to_lang).await {
        Ok(translation) if !translation.text.trim().is_empty() => {
            let _ = ui_tx
                .send(UiEvent::ShowResult {
                    text: translation.text.clone(),
                    anchor,
                })
                .await;

            // Fire and forget; the history file is not on the hot path.
            tokio::task::spawn_blocking(move || {
                history.append(&recognized, &translation.text);
            });
        }
        Ok(_) => {
            tracing::debug!("empty translation, nothing to show");
        }
        Err(e) => {
            // Translation-stage failures surface their message in the popup.
            tracing::warn!("translation failed: {e}");
            let _ = ui_tx
                .send(UiEvent::ShowResult {
                    text: e.to_string(),
                    anchor,
                })
                .await;
        }
    }

    Ok(())
}
