use std::sync::Arc;

use gaze_translator::Translator;
use gaze_types::{AppEvent, PointerEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::history::HistoryLog;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    /// Hook thread to app; the send side is synchronous and non-blocking.
    pub pointer: (kanal::Sender<PointerEvent>, kanal::Receiver<PointerEvent>),
    pub app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui: (AsyncSender<UiEvent>, AsyncReceiver<UiEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            pointer: kanal::bounded(256), // mouse-move burst capacity
            app: kanal::bounded_async(64),
            ui: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender handed to the input hook at install time.
    pub fn pointer_sender(&self) -> kanal::Sender<PointerEvent> {
        self.channels.pointer.0.clone()
    }

    pub fn spawn_tasks(
        &self,
        translator: Arc<dyn Translator>,
        history: Arc<HistoryLog>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.pointer.1.clone().to_async(),
            self.channels.app.1.clone(),
            self.channels.app.0.clone(),
            self.channels.ui.0.clone(),
            translator,
            history,
        ));

        tasks.spawn(ui_loop(
            self.channels.ui.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
