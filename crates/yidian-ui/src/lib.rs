use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use yidian_config::Config;
use yidian_types::{AppEvent, OverlayCommand};

pub mod overlay;

use overlay::OverlayManager;

/// Consume backend events, keep overlay state, and stream commands to the
/// page relay. Runs until the event channel closes.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    commands_tx: AsyncSender<OverlayCommand>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (popup_max_width, toast_duration) = {
        let config = config.read().await;
        (
            config.ui.popup_max_width_px,
            Duration::from_millis(config.hover.toast_duration_ms),
        )
    };

    let mut overlay = OverlayManager::new(popup_max_width);
    let (dismiss_tx, dismiss_rx) = kanal::unbounded_async::<u64>();

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else { break };
                handle_event(&mut overlay, &commands_tx, &dismiss_tx, toast_duration, event)
                    .await?;
            }
            generation = dismiss_rx.recv() => {
                let Ok(generation) = generation else { break };
                if let Some(cmd) = overlay.dismiss_toast(generation) {
                    commands_tx.send(cmd).await?;
                }
            }
        }
    }

    Ok(())
}

async fn handle_event(
    overlay: &mut OverlayManager,
    commands_tx: &AsyncSender<OverlayCommand>,
    dismiss_tx: &AsyncSender<u64>,
    toast_duration: Duration,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {}
        AppEvent::HideOverlays => {
            for cmd in overlay.hide_transient() {
                commands_tx.send(cmd).await?;
            }
        }
        AppEvent::ShowHighlight { anchor, viewport } => {
            commands_tx
                .send(overlay.show_highlight(&anchor, &viewport))
                .await?;
        }
        AppEvent::ShowTranslation {
            word,
            text,
            anchor,
            viewport,
        } => {
            tracing::debug!(%word, "rendering translation popup");
            commands_tx
                .send(overlay.show_popup(&anchor, &viewport, &text))
                .await?;
        }
        AppEvent::ToggleChanged { enabled } => {
            if !enabled {
                for cmd in overlay.hide_transient() {
                    commands_tx.send(cmd).await?;
                }
            }

            let message = if enabled {
                "✓ hover translation on"
            } else {
                "✗ hover translation off (double-press to re-enable)"
            };
            let (cmd, generation) = overlay.show_toast(message);
            commands_tx.send(cmd).await?;

            let dismiss_tx = dismiss_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(toast_duration).await;
                let _ = dismiss_tx.send(generation).await;
            });
        }
    }

    Ok(())
}
