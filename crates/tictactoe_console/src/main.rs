//! Console tic-tac-toe for two players at one keyboard.

use anyhow::{Context, Result};
use std::io;
use tictactoe_console::{Session, SessionConfig, SessionEnd};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    tokio::select! {
        result = run() => match result {
            Ok(end) => info!(?end, "Exiting"),
            Err(e) => {
                error!(error = ?e, "Session failed");
                println!("\nAn error occurred: {e:#}");
            }
        },
        () = interrupted() => {
            info!("Interrupted");
            println!("\n\nGame interrupted. Goodbye!");
            // The blocking reader cannot be cancelled; leave without waiting on it.
            std::process::exit(0);
        }
    }
}

/// Plays the session on a blocking thread, since it waits on stdin.
async fn run() -> Result<SessionEnd> {
    let end = tokio::task::spawn_blocking(|| {
        let mut session = Session::new(io::stdin().lock(), io::stdout(), SessionConfig::default());
        session.run()
    })
    .await
    .context("Session task panicked")??;
    Ok(end)
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
