// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use miette::{IntoDiagnostic, miette};
use r3bl_rex::{CrosstermSurface,
               StyleSheet,
               Surface,
               TTYResult,
               is_fully_interactive_terminal,
               load_lines,
               run_event_loop,
               try_init_logging};

use crate::clap_config::CLIArgs;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_args = CLIArgs::parse();

    let _maybe_log_guard = if cli_args.enable_logging {
        let guard = try_init_logging()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_args = ?cli_args);
        Some(guard)
    } else {
        None
    };

    // The corpus loads (and can fail) before any screen state exists.
    let lines = load_lines(cli_args.file.as_deref()).into_diagnostic()?;
    tracing::debug!(message = "corpus loaded", line_count = %lines.len());

    if let TTYResult::IsNotInteractive = is_fully_interactive_terminal() {
        return Err(miette!(
            "rex needs an interactive terminal; run it without piping stdin"
        ));
    }

    let surface = CrosstermSurface::try_init().into_diagnostic()?;

    // The loop owns the surface and all mutable state on a blocking worker.
    // The oneshot is the shutdown handshake: fired once when the loop stops
    // running, awaited here; teardown happens after it, on every exit path.
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let worker = tokio::task::spawn_blocking(move || {
        let mut surface = surface;
        let loop_result = run_event_loop(&mut surface, &lines, &StyleSheet::default());
        let _ = shutdown_tx.send(());
        (loop_result, surface)
    });

    let _ = shutdown_rx.await;
    let (loop_result, mut surface) = worker.await.into_diagnostic()?;

    // Restore the terminal first, then report whatever the loop returned.
    surface.finish().into_diagnostic()?;
    loop_result.into_diagnostic()?;

    tracing::debug!(message = "Stop logging...");
    Ok(())
}

mod clap_config {
    use std::path::PathBuf;

    use clap::Parser;

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "rex")]
    #[command(about = "See which lines match a regular expression, live, as you type it")]
    #[command(version)]
    #[command(next_line_help = true)]
    /// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
    #[command(
        help_template = "{about}\nVersion: {bin} {version} 💻\n\nType a pattern; matching lines and their capture groups update on every keystroke.\nQuit with Esc or Ctrl+C.\nUSAGE 📓:\n  rex [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
    )]
    pub struct CLIArgs {
        #[arg(
            value_name = "path",
            long,
            short = 'f',
            help = "File to load the test text from; omit it to type a single test line instead"
        )]
        pub file: Option<PathBuf>,

        #[arg(
            long,
            short = 'l',
            help = "Log app output to a file named `log.txt` for debugging."
        )]
        pub enable_logging: bool,
    }
}
