use std::fmt::Display;
use std::io::Write;

use chrono::{DateTime, Local, TimeZone};
use kanal::AsyncReceiver;
use wordtick_types::DisplayEvent;

/// `HH:MM:SS` in the time zone of `at`
pub fn clock_text<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%H:%M:%S").to_string()
}

/// Print one clock line per display event until shutdown
pub async fn render_loop<W: Write>(
    display_rx: AsyncReceiver<DisplayEvent>,
    mut out: W,
) -> anyhow::Result<()> {
    while let Ok(event) = display_rx.recv().await {
        match event {
            DisplayEvent::Suffix(suffix) => {
                writeln!(out, "{}{}", clock_text(&Local::now()), suffix)?;
                out.flush()?;
            }
            DisplayEvent::Shutdown => break,
        }
    }
    Ok(())
}
