use std::sync::Arc;

use clap::Parser;
use tokio::signal;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;


use controller::AppController;
use state::AppState;

#[derive(Parser)]
#[command(name = "yidian", about = "Hover word translation service")]
struct Args {
    /// Config profile to load
    #[arg(long, default_value = "main")]
    profile: String,

    /// Probe the configured backend with a test word and exit
    #[arg(long)]
    test_translation: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let args = Args::parse();

    profile::init_user_config()?;
    let config = profile::load_user_profile(&args.profile)?;

    if args.test_translation {
        return test_translation(&config).await;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
            controller.shutdown();
        }
    }

    Ok(())
}

/// Run one probe lookup through the configured backend, the same check
/// the settings surface offers.
async fn test_translation(config: &yidian_config::Config) -> anyhow::Result<()> {
    let translator = yidian_translator::from_config(&config.translator)?;
    let metadata = translator.metadata();

    match translator.translate("hello").await {
        Ok(translation) => {
            println!("ok [{}]: {}", metadata.name, translation.text);
            Ok(())
        }
        Err(e) => {
            eprintln!("translation test failed [{}]: {e}", metadata.name);
            std::process::exit(1);
        }
    }
}
