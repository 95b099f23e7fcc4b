//! Terminal event loop
//!
//! One key event at a time: paint the frame, block for the next event, map it
//! to a message, update, run the resulting command. Saves complete before the
//! next event is read.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event},
    style::{self, Color},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::storage;
use crate::update::update;
use crate::view::{render_frame, Frame, RowKind};

/// Take over the terminal and run the editor until quit
pub fn run(model: AppModel) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    stdout
        .queue(EnterAlternateScreen)?
        .flush()
        .context("Failed to enter alternate screen")?;

    let result = event_loop(&mut stdout, model);

    // Restore the terminal even when the loop failed
    let restored = stdout
        .queue(LeaveAlternateScreen)
        .and_then(|out| out.queue(cursor::Show))
        .and_then(|out| out.flush())
        .and_then(|_| terminal::disable_raw_mode());
    if let Err(e) = restored {
        tracing::warn!("Failed to restore terminal: {}", e);
    }
    result
}

fn event_loop(stdout: &mut Stdout, mut model: AppModel) -> Result<()> {
    tracing::info!(
        "Editing {} ({}x{})",
        model.document().title,
        model.terminal_size.0,
        model.terminal_size.1
    );
    loop {
        paint(stdout, &render_frame(&model))?;

        let msg = match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => super::input::map_key(key),
            Event::Resize(width, height) => Some(Msg::App(AppMsg::Resize {
                width: width as usize,
                height: height as usize,
            })),
            _ => None,
        };
        let Some(msg) = msg else {
            continue;
        };

        let mut next = update(&mut model, msg);
        while let Some(cmd) = next {
            next = match cmd {
                Cmd::Redraw => None,
                Cmd::Quit => {
                    tracing::info!("Quit");
                    return Ok(());
                }
                Cmd::SaveFile {
                    title,
                    body,
                    dir,
                    overwrite,
                } => {
                    let result = storage::save_document(&title, &body, &dir, overwrite);
                    update(&mut model, Msg::App(AppMsg::SaveCompleted(result)))
                }
            };
        }
    }
}

/// Draw a frame: dark blue title bar, grey border, white page
fn paint(stdout: &mut Stdout, frame: &Frame) -> Result<()> {
    stdout.queue(cursor::Hide)?;

    for (y, row) in frame.rows.iter().enumerate() {
        stdout.queue(cursor::MoveTo(0, y as u16))?;
        match row.kind {
            RowKind::Title => {
                stdout
                    .queue(style::SetBackgroundColor(Color::DarkBlue))?
                    .queue(style::SetForegroundColor(Color::White))?
                    .queue(style::Print(&row.text))?;
            }
            RowKind::Border => {
                stdout
                    .queue(style::SetBackgroundColor(Color::DarkGrey))?
                    .queue(style::Print(&row.text))?;
            }
            RowKind::Body => paint_body_row(stdout, &row.text, frame.width)?,
            RowKind::Status => {
                stdout.queue(style::Print(&row.text))?;
            }
        }
        stdout.queue(style::ResetColor)?;
    }

    if let Some((x, y)) = frame.cursor {
        stdout
            .queue(cursor::MoveTo(x as u16, y as u16))?
            .queue(cursor::Show)?;
    }
    stdout.flush().context("Failed to flush frame")?;
    Ok(())
}

/// Body rows have a border cell at each edge
fn paint_body_row(stdout: &mut Stdout, text: &str, width: usize) -> Result<()> {
    let chars: Vec<char> = text.chars().collect();
    if width < 2 {
        stdout
            .queue(style::SetBackgroundColor(Color::DarkGrey))?
            .queue(style::Print(text))?;
        return Ok(());
    }

    let inner: String = chars[1..width - 1].iter().collect();
    stdout
        .queue(style::SetBackgroundColor(Color::DarkGrey))?
        .queue(style::Print(chars[0]))?
        .queue(style::SetBackgroundColor(Color::White))?
        .queue(style::SetForegroundColor(Color::Black))?
        .queue(style::Print(inner))?
        .queue(style::SetBackgroundColor(Color::DarkGrey))?
        .queue(style::Print(chars[width - 1]))?;
    Ok(())
}
