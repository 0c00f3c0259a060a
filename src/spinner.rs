//! A terminal busy indicator shown while waiting on the collaborator.

use crate::constants::{INTERRUPTED_EXIT_CODE, SPINNER_FRAMES, SPINNER_TICK_MS};
use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use nu_ansi_term::Color;
use std::{
    future::Future,
    io::{self, IsTerminal, Write},
    time::Duration,
};
use tokio::{sync::oneshot, task::JoinHandle};

/// Awaits `fut`, animating a spinner with `message` on stderr until it resolves.
///
/// The spinner is skipped entirely when `enabled` is false or stderr is not a terminal. It never
/// touches the future's output. A Ctrl-C while spinning clears the spinner, restores the cursor
/// and exits with status 130.
pub async fn spin_while<F: Future>(message: &str, enabled: bool, fut: F) -> F::Output {
    if !enabled || !io::stderr().is_terminal() {
        return fut.await;
    }

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::debug!(error = %e, "Could not listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    match spin_until(message, fut, interrupt).await {
        Some(output) => output,
        None => std::process::exit(INTERRUPTED_EXIT_CODE),
    }
}

/// Awaits `fut` with a spinner running, unless `interrupt` resolves first.
///
/// ## Returns
/// - `Some(output)` - `fut` finished first.
/// - `None` - `interrupt` fired. `fut` is dropped and the spinner has already been cleared.
pub async fn spin_until<F, I>(message: &str, fut: F, interrupt: I) -> Option<F::Output>
where
    F: Future,
    I: Future<Output = ()>,
{
    let spinner = Spinner::start(message);
    let output = tokio::select! {
        output = fut => Some(output),
        _ = interrupt => None,
    };
    spinner.stop().await;
    output
}

/// A running spinner animation. Call [Spinner::stop] to clear it.
pub struct Spinner {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Starts animating `message` on stderr on a background task.
    pub fn start(message: &str) -> Self {
        let (stop, stopped) = oneshot::channel();
        let message = message.to_string();
        let handle = tokio::spawn(animate(message, stopped));
        Self { stop, handle }
    }

    /// Stops the animation and waits for the line to be cleared.
    pub async fn stop(self) {
        // The task may already have exited on a write error.
        let _ = self.stop.send(());
        if let Err(e) = self.handle.await {
            tracing::debug!(error = %e, "Spinner task failed");
        }
    }
}

async fn animate(message: String, mut stopped: oneshot::Receiver<()>) {
    let mut stderr = io::stderr();
    let mut interval = tokio::time::interval(Duration::from_millis(SPINNER_TICK_MS));
    let mut frames = SPINNER_FRAMES.iter().cycle();

    if execute!(stderr, Hide).is_err() {
        return;
    }

    loop {
        tokio::select! {
            _ = &mut stopped => break,
            _ = interval.tick() => {
                let Some(frame) = frames.next() else { break };
                if draw_frame(&mut stderr, *frame, &message).is_err() {
                    break;
                }
            }
        }
    }

    if let Err(e) = execute!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine), Show) {
        tracing::debug!(error = %e, "Failed to clear spinner");
    }
}

fn draw_frame<W: Write>(w: &mut W, frame: char, message: &str) -> io::Result<()> {
    execute!(
        w,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(format!("{} {}", Color::Purple.paint(frame.to_string()), message))
    )
}
