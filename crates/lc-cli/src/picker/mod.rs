//! Fuzzy selection over problem files.
//!
//! [`Picker`] is the seam commands use; [`TerminalPicker`] is the
//! interactive implementation and tests script their own.

mod filter;
mod state;
mod terminal;

pub use filter::rank;
pub use terminal::TerminalPicker;

/// Why a selection produced no item.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("selection cancelled")]
    Cancelled,

    #[error("no candidates to pick from")]
    NoCandidates,

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Choose one of `items`, returning its index.
pub trait Picker {
    /// # Errors
    /// [`PickError::Cancelled`] when the user backs out.
    fn pick(&mut self, prompt: &str, items: &[String]) -> Result<usize, PickError>;
}
