use futures_util::{SinkExt, StreamExt};
use kanal::AsyncReceiver;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use yidian_types::{OverlayCommand, PageEvent};

/// Connect to the page relay and run the session: incoming text frames
/// decode to `PageEvent`s handed to `on_event`, and overlay commands
/// drained from `commands_rx` go out as JSON text frames. Returns once
/// the connection is up; both halves run as background tasks.
pub async fn start_page_session<F>(
    url: &str,
    commands_rx: AsyncReceiver<OverlayCommand>,
    mut on_event: F,
) -> Result<(), anyhow::Error>
where
    F: FnMut(PageEvent) + Send + 'static,
{
    let (ws_stream, _) = connect_async(url).await?;
    let (mut write, mut read) = ws_stream.split();

    tokio::spawn(async move {
        while let Ok(command) = commands_rx.recv().await {
            let frame = match serde_json::to_string(&command) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("failed to encode overlay command: {e}");
                    continue;
                }
            };

            if write.send(Message::Text(frame.into())).await.is_err() {
                tracing::warn!("page relay write side closed");
                break;
            }
        }
    });

    tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            if let Ok(msg) = msg
                && msg.is_text()
            {
                match serde_json::from_str::<PageEvent>(msg.to_text().unwrap_or_default()) {
                    Ok(event) => on_event(event),
                    Err(e) => tracing::warn!("dropping malformed page frame: {e}"),
                }
            }
        }
        tracing::info!("page relay read side closed");
    });

    Ok(())
}
