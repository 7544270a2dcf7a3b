use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordtick_core::{Clock, VocabularyCycler, VocabularySource};
use wordtick_types::{ControlEvent, DisplayEvent};

use crate::io::watcher_io;
use crate::render::render_loop;
use crate::state::AppState;
use crate::ticker::ticker_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub display: (AsyncSender<DisplayEvent>, AsyncReceiver<DisplayEvent>),
    pub control: (AsyncSender<ControlEvent>, AsyncReceiver<ControlEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            display: kanal::bounded_async(16),
            control: kanal::bounded_async(16),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
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

    pub async fn spawn_tasks<S, C>(
        &self,
        cycler: VocabularyCycler<S, C>,
    ) -> JoinSet<anyhow::Result<()>>
    where
        S: VocabularySource + Send + 'static,
        C: Clock + Send + 'static,
    {
        let (delta_time, capacity) = {
            let config = self.state.config.read().await;
            (
                Duration::from_millis(config.delta_time.max(1)),
                config.ui.suffix_capacity,
            )
        };

        let mut tasks = JoinSet::new();

        tasks.spawn(ticker_loop(
            cycler,
            delta_time,
            capacity,
            self.cancel_token.child_token(),
            self.channels.control.1.clone(),
            self.channels.display.0.clone(),
        ));

        tasks.spawn(render_loop(
            self.channels.display.1.clone(),
            std::io::stdout(),
        ));

        // Input may cancel everything on quit, so it gets the root token
        tasks.spawn(watcher_io(
            self.cancel_token.clone(),
            self.channels.control.0.clone(),
        ));

        tasks
    }

    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.cancel_token.cancelled()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
