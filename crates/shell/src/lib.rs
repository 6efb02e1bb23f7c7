//! # Barberbook Shell
//!
//! A line-oriented terminal front end for the booking store. Each input line
//! is one event: it is parsed, handled, answered, and then the store's
//! deferred tasks run before the next line is read.

use chrono::NaiveDate;
use eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub mod commands;
pub mod handlers;
pub mod render;

use crate::{
    commands::Command,
    handlers::{Handler, Reply},
};

pub const GREETING: &str = "Barberbook is ready. Type 'help' for the list of commands.";

/// Reads commands from `input` until end of input or `quit`, writing each
/// reply to `output`.
///
/// `today` is asked for the current date once per line.
pub async fn run_shell<R, W>(
    handler: &mut Handler,
    input: R,
    mut output: W,
    today: impl Fn() -> NaiveDate,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Shell started");
    write_line(&mut output, GREETING).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match Command::parse(&line) {
            Ok(Some(command)) => handler.handle(command, today()).await,
            Ok(None) => continue,
            Err(e) => Reply::text(e.to_string()),
        };

        write_line(&mut output, &reply.text).await?;

        let ran = handler.store_mut().run_pending_tasks();
        if ran > 0 {
            debug!(ran, "Ran deferred tasks");
        }

        if reply.quit {
            break;
        }
    }

    info!("Shell stopped");
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
