use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use yidian_types::{AppEvent, OverlayCommand, PageEvent};
use yidian_ui::ui_loop;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub page_to_app: (AsyncSender<PageEvent>, AsyncReceiver<PageEvent>),
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_page: (AsyncSender<OverlayCommand>, AsyncReceiver<OverlayCommand>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            page_to_app: kanal::bounded_async(256), // pointer movement bursts
            app_to_ui: kanal::bounded_async(64),
            ui_to_page: kanal::bounded_async(128), // overlay command fan-out
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

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Backend event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.page_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // Overlay UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_page.0.clone(),
            self.state.config.clone(),
        ));

        // Page relay session
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.page_to_app.0.clone(),
            self.channels.ui_to_page.1.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
