use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use yidian_types::{OverlayCommand, PageEvent};

use crate::state::AppState;

/// Bridge the WebSocket page relay into the app channels: incoming page
/// events are forwarded to the event loop, overlay commands are drained
/// out to the page.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    page_tx: AsyncSender<PageEvent>,
    commands_rx: AsyncReceiver<OverlayCommand>,
) -> anyhow::Result<()> {
    let ws_url = {
        let config = state.config.read().await;
        config.network.ws_url.clone()
    };

    tracing::info!("connecting to page relay at {ws_url}");

    yidian_io::ws::start_page_session(&ws_url, commands_rx, move |event| {
        let tx = page_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tx.send(event).await {
                tracing::error!("failed to forward page event: {e}");
            }
        });
    })
    .await?;

    cancel.cancelled().await;
    tracing::info!("page relay session stopping");

    Ok(())
}
