//! Interactive picker drawn on stderr with crossterm.

use std::io::{self, Stderr, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use super::state::{PickerState, Step, classify_key};
use super::{PickError, Picker};

/// Full-screen fuzzy picker on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPicker;

/// Raw mode and the alternate screen for as long as it lives.
struct TerminalGuard {
    out: Stderr,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stderr();
        if let Err(error) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Picker for TerminalPicker {
    fn pick(&mut self, prompt: &str, items: &[String]) -> Result<usize, PickError> {
        if items.is_empty() {
            return Err(PickError::NoCandidates);
        }

        let mut state = PickerState::new(items.to_vec());
        let mut guard = TerminalGuard::enter()?;
        loop {
            draw(&mut guard.out, prompt, &state)?;
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(action) = classify_key(key) else {
                continue;
            };
            match state.apply(action) {
                Step::Continue => {}
                Step::Selected(index) => return Ok(index),
                Step::Cancelled => return Err(PickError::Cancelled),
            }
        }
    }
}

fn draw(out: &mut Stderr, prompt: &str, state: &PickerState) -> io::Result<()> {
    let (_, rows) = terminal::size()?;
    let capacity = usize::from(rows).saturating_sub(2).max(1);
    let offset = state.cursor().saturating_sub(capacity - 1);

    queue!(
        out,
        MoveTo(0, 0),
        Clear(ClearType::All),
        Print(format!("{prompt}: {}", state.query())),
        MoveTo(0, 1),
        Print(format!("  {}/{}", state.match_count(), state.total())),
    )?;

    for (row, (position, (_, label))) in state
        .visible()
        .enumerate()
        .skip(offset)
        .take(capacity)
        .enumerate()
    {
        let y = u16::try_from(row + 2).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y))?;
        if position == state.cursor() {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(format!("> {label}")),
                SetAttribute(Attribute::Reset),
            )?;
        } else {
            queue!(out, Print(format!("  {label}")))?;
        }
    }
    out.flush()
}
