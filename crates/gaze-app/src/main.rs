use std::sync::Arc;
use std::time::Duration;

use gaze_hook::MouseHook;
use gaze_translator::{BaiduTranslator, Translator};
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod history;
mod settings;
mod state;
mod ui;


use self::controller::AppController;
use self::history::HistoryLog;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = settings::load_config();
    let state = Arc::new(AppState::new(config));

    let translator: Arc<dyn Translator> = {
        let config = state.config.read().await;
        let t = &config.translator;
        Arc::new(BaiduTranslator::new(
            t.app_id.clone(),
            t.secret_key.clone(),
            t.to_lang.clone(),
            Duration::from_secs(t.timeout_seconds),
        ))
    };

    let history = Arc::new(HistoryLog::load(settings::history_path()));

    let controller = AppController::new(state);

    // The hook is fatal for the feature: surface the failure and stop.
    let mut hook = match MouseHook::install(controller.pointer_sender()) {
        Ok(hook) => hook,
        Err(e) => {
            tracing::error!("failed to install mouse hook: {e}");
            return Err(e.into());
        }
    };

    let mut tasks = controller.spawn_tasks(translator, history);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    hook.stop();
    tasks.shutdown().await;

    Ok(())
}
