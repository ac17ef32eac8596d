use kanal::AsyncSender;
use yidian_types::AppEvent;

use crate::events::HoverSession;

pub async fn handle_key_press(
    session: &mut HoverSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    key: &str,
) -> anyhow::Result<()> {
    if key != session.toggle_key {
        return Ok(());
    }

    let now_ms = session.now_ms();
    let transition = session.toggle.press(now_ms);

    // A toggle in either direction abandons the pending cycle.
    session.cancel_debounce();

    tracing::info!(enabled = transition.enabled, "hover translation toggled");

    app_to_ui_tx
        .send(AppEvent::ToggleChanged {
            enabled: transition.enabled,
        })
        .await?;

    Ok(())
}
