use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordtick_core::{Clock, VocabularyCycler, VocabularySource};
use wordtick_types::{ControlEvent, DisplayEvent};

/// Drive the cycler on a fixed period and publish the suffix whenever it changes.
///
/// Owns the cycler for its whole life; the cycler is shut down on exit.
pub async fn ticker_loop<S, C>(
    mut cycler: VocabularyCycler<S, C>,
    delta_time: Duration,
    capacity: usize,
    cancel: CancellationToken,
    control_rx: AsyncReceiver<ControlEvent>,
    display_tx: AsyncSender<DisplayEvent>,
) -> anyhow::Result<()>
where
    S: VocabularySource,
    C: Clock,
{
    let mut interval = tokio::time::interval(delta_time);
    let mut control_open = true;
    let mut last: Option<String> = None;

    tracing::info!("[TICKER] Starting, period {:?}", delta_time);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let now = cycler.clock().now_ms();
                cycler.tick(now);
            }
            event = control_rx.recv(), if control_open => match event {
                Ok(event) => handle_control(&mut cycler, event),
                Err(_) => {
                    tracing::debug!("[TICKER] Control channel closed");
                    control_open = false;
                }
            },
        }

        let suffix = cycler.format_suffix(capacity);
        if last.as_deref() != Some(suffix.as_str()) {
            display_tx.send(DisplayEvent::Suffix(suffix.clone())).await?;
            last = Some(suffix);
        }
    }

    cycler.shutdown();
    // The display side may already be gone
    let _ = display_tx.send(DisplayEvent::Shutdown).await;
    tracing::info!("[TICKER] Stopped");
    Ok(())
}

fn handle_control<S, C>(cycler: &mut VocabularyCycler<S, C>, event: ControlEvent)
where
    S: VocabularySource,
    C: Clock,
{
    match event {
        ControlEvent::NextWord => {
            if !cycler.next() {
                tracing::debug!("[TICKER] Next word requested, nothing changed");
            }
        }
        ControlEvent::ToggleDisplay => {
            let mut config = cycler.config().clone();
            config.display_enabled = !config.display_enabled;
            tracing::info!("Word display {}", if config.display_enabled { "on" } else { "off" });
            cycler.set_config(config);
        }
    }
}
