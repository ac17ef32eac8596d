use std::sync::Arc;
use std::time::{Duration, Instant};

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use yidian_config::hover::HoverConfig;
use yidian_core::toggle::HoverToggle;
use yidian_translator::Translator;
use yidian_types::{AppEvent, PageEvent, PageSnapshot, PointerSample};

use crate::state::AppState;

pub mod key_press;
pub mod pointer_move;

use key_press::handle_key_press;
use pointer_move::handle_pointer_move;

/// Per-connection hover state. Everything that used to be ambient lives
/// here: the toggle machine, the latest page snapshot, and the pending
/// debounce cycle.
pub struct HoverSession {
    pub(crate) toggle: HoverToggle,
    pub(crate) toggle_key: String,
    pub(crate) snapshot: Arc<RwLock<Option<PageSnapshot>>>,
    pub(crate) settle_delay: Duration,
    pub(crate) min_word_chars: usize,
    debounce: Option<CancellationToken>,
    epoch: Instant,
}

impl HoverSession {
    pub fn new(config: &HoverConfig) -> Self {
        Self {
            toggle: HoverToggle::with_interval(config.double_press_interval_ms),
            toggle_key: config.toggle_key.clone(),
            snapshot: Arc::new(RwLock::new(None)),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            min_word_chars: config.min_word_chars,
            debounce: None,
            epoch: Instant::now(),
        }
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Cancel the pending cycle, if any. Also invalidates that cycle's
    /// in-flight translation.
    pub(crate) fn cancel_debounce(&mut self) {
        if let Some(token) = self.debounce.take() {
            token.cancel();
        }
    }

    /// Start a fresh debounce cycle, superseding the previous one.
    pub(crate) fn arm_debounce(&mut self) -> CancellationToken {
        self.cancel_debounce();
        let token = CancellationToken::new();
        self.debounce = Some(token.clone());
        token
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    page_rx: AsyncReceiver<PageEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Build the translation backend from config
    let (translator, mut session) = {
        let config = state.config.read().await;
        let translator: Arc<dyn Translator> =
            Arc::from(yidian_translator::from_config(&config.translator)?);
        tracing::info!(provider = %translator.metadata().name, "translator ready");

        (translator, HoverSession::new(&config.hover))
    };

    tracing::info!("event loop started, waiting for page events");
    loop {
        let event = page_rx.recv().await?;

        handle_page_event(&mut session, &translator, &app_to_ui_tx, event).await?;
    }
}

pub(crate) async fn handle_page_event(
    session: &mut HoverSession,
    translator: &Arc<dyn Translator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: PageEvent,
) -> anyhow::Result<()> {
    match event {
        PageEvent::Snapshot(snapshot) => {
            tracing::debug!(runs = snapshot.runs.len(), "page snapshot updated");
            *session.snapshot.write().await = Some(snapshot);
        }
        PageEvent::Scrolled { x, y } => {
            if let Some(snapshot) = session.snapshot.write().await.as_mut() {
                snapshot.viewport.scroll_x = x;
                snapshot.viewport.scroll_y = y;
            }
        }
        PageEvent::ViewportResized { width, height } => {
            if let Some(snapshot) = session.snapshot.write().await.as_mut() {
                snapshot.viewport.inner_width = width;
                snapshot.viewport.inner_height = height;
            }
        }
        PageEvent::PointerMoved { x, y } => {
            handle_pointer_move(session, translator, app_to_ui_tx, PointerSample { x, y })
                .await?;
        }
        PageEvent::KeyPressed { key } => {
            handle_key_press(session, app_to_ui_tx, &key).await?;
        }
    }

    Ok(())
}
