// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive terminal prompts.
//!
//! Prompts draw on stderr so stdout stays clean for command output.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor, event,
    style::{Print, Stylize},
    terminal, ExecutableCommand, QueueableCommand,
};

/// Blocking questions asked during a wizard.
pub trait Prompt: Send + Sync {
    /// Whether the user can be asked anything at all.
    fn is_interactive(&self) -> bool;

    /// Pick one of `items`; `None` when the user cancels.
    fn pick(&self, header: &str, items: &[String]) -> io::Result<Option<usize>>;

    /// Ask for a line of text. Empty input selects `default`; `None` on end of input.
    fn ask(&self, question: &str, default: Option<&str>) -> io::Result<Option<String>>;

    /// Yes/no question.
    fn confirm(&self, question: &str, default: bool) -> io::Result<bool>;
}

#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal() && io::stderr().is_terminal()
    }

    fn pick(&self, header: &str, items: &[String]) -> io::Result<Option<usize>> {
        run_picker(header, items)
    }

    fn ask(&self, question: &str, default: Option<&str>) -> io::Result<Option<String>> {
        let mut stderr = io::stderr();
        match default {
            Some(default) => write!(stderr, "{} [{}]: ", question, default)?,
            None => write!(stderr, "{}: ", question)?,
        }
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        Ok(Some(match (answer.is_empty(), default) {
            (true, Some(default)) => default.to_string(),
            _ => answer.to_string(),
        }))
    }

    fn confirm(&self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let Some(answer) = self.ask(&format!("{question} ({hint})"), None)? else {
            return Ok(false);
        };
        Ok(match answer.to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

fn draw_picker(out: &mut io::Stderr, header: &str, items: &[String], selected: usize) -> io::Result<()> {
    out.queue(Print(format!("{header}\r\n")))?;

    for (i, item) in items.iter().enumerate() {
        if i == selected {
            out.queue(Print(format!("  ● {item}\r\n").bold()))?;
        } else {
            out.queue(Print(format!("  ○ {item}\r\n")))?;
        }
    }

    out.queue(Print("\r\n"))?;
    out.queue(Print("↑/↓: Navigate  Enter: Select  q: Cancel".dark_grey()))?;
    out.flush()
}

/// Inline radio-button picker in raw mode.
fn run_picker(header: &str, items: &[String]) -> io::Result<Option<usize>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut out = io::stderr();
    let mut selected: usize = 0;

    terminal::enable_raw_mode()?;
    let _ = out.execute(cursor::Hide);

    if let Err(e) = draw_picker(&mut out, header, items, selected) {
        let _ = out.execute(cursor::Show);
        let _ = terminal::disable_raw_mode();
        return Err(e);
    }

    // header + items + blank; the hint line has no trailing newline
    let total_lines = u16::try_from(items.len() + 2).unwrap_or(u16::MAX);

    let result = loop {
        let evt = match event::read() {
            Ok(e) => e,
            Err(e) => {
                let _ = out.execute(cursor::Show);
                let _ = terminal::disable_raw_mode();
                return Err(e);
            }
        };

        if let event::Event::Key(key) = evt {
            match key.code {
                event::KeyCode::Up | event::KeyCode::Char('k') => {
                    selected = (selected + items.len() - 1) % items.len();
                }
                event::KeyCode::Down | event::KeyCode::Char('j') => {
                    selected = (selected + 1) % items.len();
                }
                event::KeyCode::Enter => break Some(selected),
                event::KeyCode::Char('q') | event::KeyCode::Esc => break None,
                event::KeyCode::Char('c')
                    if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                {
                    break None;
                }
                _ => continue,
            }

            let _ = out.execute(cursor::MoveToColumn(0));
            let _ = out.execute(cursor::MoveUp(total_lines));
            let _ = out.execute(terminal::Clear(terminal::ClearType::FromCursorDown));
            let _ = draw_picker(&mut out, header, items, selected);
        }
    };

    let _ = out.execute(cursor::MoveToColumn(0));
    let _ = out.execute(cursor::MoveUp(total_lines));
    let _ = out.execute(terminal::Clear(terminal::ClearType::FromCursorDown));
    let _ = out.execute(cursor::Show);
    let _ = terminal::disable_raw_mode();

    Ok(result)
}
