use std::sync::Arc;

use kanal::AsyncSender;
use yidian_core::hover::resolve_word_at;
use yidian_core::snapshot::SnapshotHitTester;
use yidian_translator::Translator;
use yidian_types::{AppEvent, PointerSample};

use crate::events::HoverSession;

pub async fn handle_pointer_move(
    session: &mut HoverSession,
    translator: &Arc<dyn Translator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    sample: PointerSample,
) -> anyhow::Result<()> {
    if !session.toggle.is_enabled() {
        return Ok(());
    }

    // Movement supersedes whatever was pending or on screen.
    let token = session.arm_debounce();
    app_to_ui_tx.send(AppEvent::HideOverlays).await?;

    let snapshot = session.snapshot.clone();
    let translator = Arc::clone(translator);
    let tx = app_to_ui_tx.clone();
    let settle = session.settle_delay;
    let min_chars = session.min_word_chars;

    tokio::spawn(async move {
        // Wait out the settle delay; another movement cancels us here.
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(settle) => {}
        }

        let resolved = {
            let guard = snapshot.read().await;
            let Some(page) = guard.as_ref() else { return };
            resolve_word_at(&SnapshotHitTester::new(page), sample.x, sample.y)
                .map(|word| (word, page.viewport))
        };

        let Some((word, viewport)) = resolved else { return };
        if word.text.chars().count() < min_chars {
            return;
        }

        tracing::debug!(word = %word.text, "hover candidate resolved");

        if tx
            .send(AppEvent::ShowHighlight {
                anchor: word.anchor,
                viewport,
            })
            .await
            .is_err()
        {
            return;
        }

        // Race the lookup against the cycle token so a superseded
        // response is dropped instead of overwriting a newer popup.
        let result = tokio::select! {
            _ = token.cancelled() => return,
            result = translator.translate(&word.text) => result,
        };

        let text = match result {
            Ok(translation) => translation.text,
            Err(e) => {
                tracing::warn!("translation failed: {e}");
                format!("translation failed: {e}")
            }
        };

        if token.is_cancelled() {
            return;
        }

        let _ = tx
            .send(AppEvent::ShowTranslation {
                word: word.text,
                text,
                anchor: word.anchor,
                viewport,
            })
            .await;
    });

    Ok(())
}
