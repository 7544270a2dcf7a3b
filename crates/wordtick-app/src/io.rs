use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use wordtick_types::ControlEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Control(ControlEvent),
    Quit,
}

/// Map one line of terminal input to a command
pub fn parse_command(line: &str) -> Option<InputCommand> {
    match line.trim().to_lowercase().as_str() {
        "" | "n" | "next" => Some(InputCommand::Control(ControlEvent::NextWord)),
        "t" | "toggle" => Some(InputCommand::Control(ControlEvent::ToggleDisplay)),
        "q" | "quit" | "exit" => Some(InputCommand::Quit),
        _ => None,
    }
}

/// Read commands from stdin until quit, EOF or cancellation
pub async fn watcher_io(
    cancel: CancellationToken,
    control_tx: AsyncSender<ControlEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracing::info!("Commands: <enter>/n = next word, t = toggle display, q = quit");

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // Non-interactive run: keep going until shutdown
            tracing::debug!("stdin closed");
            cancel.cancelled().await;
            break;
        };

        match parse_command(&line) {
            Some(InputCommand::Control(event)) => control_tx.send(event).await?,
            Some(InputCommand::Quit) => {
                tracing::info!("Quit requested");
                cancel.cancel();
                break;
            }
            None => tracing::warn!("Unknown command: {}", line.trim()),
        }
    }

    Ok(())
}
