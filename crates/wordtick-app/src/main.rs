use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordtick_core::{MonotonicClock, VocabularyCycler};

pub mod cli;
pub mod controller;
pub mod io;
pub mod profile;
pub mod render;
pub mod state;
pub mod ticker;


use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = profile::load_config(&cli)?;
    let source = profile::vocabulary_source(&config.words);
    let mut cycler = VocabularyCycler::new(source, MonotonicClock::new(), config.words.clone());

    if cli.once {
        cycler.init()?;
        println!(
            "{}{}",
            render::clock_text(&chrono::Local::now()),
            cycler.format_suffix(config.ui.suffix_capacity)
        );
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(Arc::new(AppState::new(config)), cycler));

    // A pending stdin read would otherwise hold the runtime open
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

async fn run<S, C>(state: Arc<AppState>, cycler: VocabularyCycler<S, C>) -> anyhow::Result<()>
where
    S: wordtick_core::VocabularySource + Send + 'static,
    C: wordtick_core::Clock + Send + 'static,
{
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(cycler).await;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = controller.cancelled() => {}
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}
